use glam::Vec2;
use speculoos::prelude::*;

use birthday_adventure::constants::Tuning;
use birthday_adventure::events::GameEvent;
use birthday_adventure::game::session::SessionState;
use birthday_adventure::systems::interact;
use birthday_adventure::world::{House, ObjectKind, RoomId};

mod common;

#[test]
fn test_nothing_nearby_at_spawn() {
    let mut game = common::new_game();
    game.take_events();

    common::interact(&mut game);

    let events = game.take_events();
    assert_that(&events.contains(&GameEvent::NothingNearby)).is_true();

    let session = common::session(&game);
    assert_that(&session.total_interactions).is_equal_to(0);
    assert_that(&session.discoveries.len()).is_equal_to(0);
}

#[test]
fn test_discovery_is_idempotent_but_counting_is_not() {
    let mut game = common::new_game();
    // Just right of the bed, inside the interaction radius.
    common::set_player_position(&mut game, Vec2::new(136.0, 150.0));
    game.take_events();

    for _ in 0..5 {
        common::interact(&mut game);
    }

    let session = common::session(&game);
    assert_that(&session.discoveries.len()).is_equal_to(1);
    assert_that(&session.discoveries.contains(&ObjectKind::Bed)).is_true();
    assert_that(&session.total_interactions).is_equal_to(5);
    assert_that(&session.last_interaction).is_equal_to(Some(ObjectKind::Bed));

    // Only the first interaction announces the discovery.
    let discovered = game
        .take_events()
        .into_iter()
        .filter(|event| matches!(event, GameEvent::ObjectDiscovered(_)))
        .count();
    assert_that(&discovered).is_equal_to(1);
}

#[test]
fn test_special_event_fires_exactly_once() {
    let mut game = common::new_game();
    common::set_current_room(&mut game, RoomId::LivingRoom);
    // Just above the gift box.
    common::set_player_position(&mut game, Vec2::new(342.0, 298.0));
    game.take_events();

    common::interact(&mut game);
    common::interact(&mut game);

    let session = common::session(&game);
    assert_that(&session.special_event_fired).is_true();
    // The reveal is not an ordinary discovery: no counters, no set entry.
    assert_that(&session.total_interactions).is_equal_to(0);
    assert_that(&session.discoveries.len()).is_equal_to(0);

    let fired = game
        .take_events()
        .into_iter()
        .filter(|event| matches!(event, GameEvent::SpecialTriggered))
        .count();
    assert_that(&fired).is_equal_to(1);

    let snapshot = game.snapshot();
    let gift = snapshot
        .objects
        .iter()
        .find(|object| object.kind == ObjectKind::Gift)
        .unwrap();
    assert_that(&gift.discovered).is_true();
    assert_that(&snapshot.special_event_fired).is_true();
}

#[test]
fn test_all_in_range_objects_are_processed() {
    let mut game = common::new_game();
    // Between the closet and the weights; both centers are within the radius.
    common::set_player_position(&mut game, Vec2::new(284.0, 70.0));
    game.take_events();

    common::interact(&mut game);

    let session = common::session(&game);
    assert_that(&session.total_interactions).is_equal_to(2);
    assert_that(&session.discoveries.contains(&ObjectKind::Closet)).is_true();
    assert_that(&session.discoveries.contains(&ObjectKind::Weights)).is_true();

    let discovered = game
        .take_events()
        .into_iter()
        .filter(|event| matches!(event, GameEvent::ObjectDiscovered(_)))
        .count();
    assert_that(&discovered).is_equal_to(2);
}

#[test]
fn test_discovery_progress_excludes_special() {
    let mut game = common::new_game();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.progress, (0, 9));

    common::set_player_position(&mut game, Vec2::new(136.0, 150.0));
    common::interact(&mut game);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.progress, (1, 9));
}

#[test]
fn test_interact_report_directly() {
    let mut house = House::furnished().unwrap();
    let mut session = SessionState::new(RoomId::Bedroom);
    let tuning = Tuning::default();

    let report = interact(Vec2::new(136.0, 150.0), &mut house, &mut session, &tuning).unwrap();
    assert_eq!(report.touched.as_slice(), &[ObjectKind::Bed]);
    assert_eq!(report.events.as_slice(), &[GameEvent::ObjectDiscovered(ObjectKind::Bed)]);
    assert_eq!(report.reacted.as_slice(), &[ObjectKind::Bed]);

    // A repeat touches and counts, but stays silent.
    let report = interact(Vec2::new(136.0, 150.0), &mut house, &mut session, &tuning).unwrap();
    assert_eq!(report.touched.as_slice(), &[ObjectKind::Bed]);
    assert!(report.events.is_empty());
    assert_eq!(session.total_interactions, 2);
}

#[test]
fn test_interact_far_from_everything_reports_nothing() {
    let mut house = House::furnished().unwrap();
    let mut session = SessionState::new(RoomId::Bedroom);
    let tuning = Tuning::default();

    let report = interact(Vec2::new(120.0, 280.0), &mut house, &mut session, &tuning).unwrap();
    assert!(report.touched.is_empty());
    assert_eq!(report.events.as_slice(), &[GameEvent::NothingNearby]);
    assert_eq!(session.total_interactions, 0);
}
