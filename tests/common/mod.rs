#![allow(dead_code)]

use bevy_ecs::query::With;
use glam::Vec2;

use birthday_adventure::constants;
use birthday_adventure::direction::Direction;
use birthday_adventure::events::GameCommand;
use birthday_adventure::game::session::SessionState;
use birthday_adventure::game::Game;
use birthday_adventure::geometry::Rect;
use birthday_adventure::systems::{Companion, Facing, PlayerControlled, Position};
use birthday_adventure::world::{House, RoomId};

pub fn new_game() -> Game {
    Game::with_seed(7).expect("game should build")
}

pub fn run_ticks(game: &mut Game, ticks: u32) {
    for _ in 0..ticks {
        game.tick();
    }
}

/// Queues one step and gives the debounce time to clear afterwards.
pub fn step(game: &mut Game, direction: Direction) {
    game.queue_command(GameCommand::Move(direction));
    run_ticks(game, 10);
}

pub fn interact(game: &mut Game) {
    game.queue_command(GameCommand::Interact);
    game.tick();
}

pub fn player_position(game: &mut Game) -> Vec2 {
    let mut query = game.world.query_filtered::<&Position, With<PlayerControlled>>();
    query.single(&game.world).expect("player exists").0
}

pub fn set_player_position(game: &mut Game, position: Vec2) {
    let mut query = game.world.query_filtered::<&mut Position, With<PlayerControlled>>();
    query.single_mut(&mut game.world).expect("player exists").0 = position;
}

pub fn player_facing(game: &mut Game) -> Direction {
    let mut query = game.world.query_filtered::<&Facing, With<PlayerControlled>>();
    query.single(&game.world).expect("player exists").0
}

pub fn companion_position(game: &mut Game) -> Vec2 {
    let mut query = game.world.query_filtered::<&Position, With<Companion>>();
    query.single(&game.world).expect("companion exists").0
}

pub fn set_companion_position(game: &mut Game, position: Vec2) {
    let mut query = game.world.query_filtered::<&mut Position, With<Companion>>();
    query.single_mut(&mut game.world).expect("companion exists").0 = position;
}

pub fn companion_facing(game: &mut Game) -> Direction {
    let mut query = game.world.query_filtered::<&Facing, With<Companion>>();
    query.single(&game.world).expect("companion exists").0
}

pub fn session(game: &Game) -> SessionState {
    game.world.resource::<SessionState>().clone()
}

pub fn set_current_room(game: &mut Game, room: RoomId) {
    game.world.resource_mut::<SessionState>().current_room = room;
}

pub fn assert_player_in_bounds(game: &mut Game) {
    let pos = player_position(game);
    assert!(
        pos.x >= constants::WALK_MARGIN
            && pos.x <= constants::CANVAS_SIZE.x as f32 - constants::WALK_MARGIN * 2.0
            && pos.y >= constants::WALK_MARGIN
            && pos.y <= constants::CANVAS_SIZE.y as f32 - constants::BOTTOM_MARGIN,
        "player out of bounds: {pos:?}"
    );
}

pub fn assert_player_clear_of_furniture(game: &mut Game) {
    let pos = player_position(game);
    let room_id = game.world.resource::<SessionState>().current_room;
    let house = game.world.resource::<House>();
    let room = house.room(room_id).expect("current room exists");
    let player = Rect::from_pos_size(pos, constants::PLAYER_SIZE);
    for object in &room.objects {
        assert!(
            !player.overlaps(&object.rect),
            "player at {pos:?} overlaps {:?} in {room_id}",
            object.kind
        );
    }
}
