use glam::Vec2;
use pretty_assertions::assert_eq;
use strum::EnumCount;

use birthday_adventure::error::{GameError, WorldError};
use birthday_adventure::geometry::Rect;
use birthday_adventure::world::{Exit, Furniture, House, ObjectKind, Room, RoomId};

fn bare_room(id: RoomId) -> Room {
    Room {
        id,
        title: "test room",
        wall_color: "#FFFFFF",
        floor_color: "#CCCCCC",
        spawn: Vec2::new(60.0, 280.0),
        objects: vec![],
        exits: vec![],
    }
}

fn furniture(kind: ObjectKind, special: bool) -> Furniture {
    Furniture {
        kind,
        rect: Rect::new(100.0, 100.0, 40.0, 40.0),
        message: "test message",
        discovered: false,
        special,
    }
}

#[test]
fn test_empty_house_is_rejected() {
    let result = House::new(vec![]);
    assert!(matches!(result, Err(GameError::World(WorldError::Empty))));
}

#[test]
fn test_duplicate_object_kind_is_rejected() {
    let mut room = bare_room(RoomId::Bedroom);
    room.objects.push(furniture(ObjectKind::Bed, false));
    room.objects.push(furniture(ObjectKind::Bed, false));

    let result = House::new(vec![room]);
    assert!(matches!(
        result,
        Err(GameError::World(WorldError::DuplicateObject {
            room: RoomId::Bedroom,
            kind: ObjectKind::Bed,
        }))
    ));
}

#[test]
fn test_second_special_object_is_rejected() {
    let mut bedroom = bare_room(RoomId::Bedroom);
    bedroom.objects.push(furniture(ObjectKind::Gift, true));
    let mut living_room = bare_room(RoomId::LivingRoom);
    living_room.objects.push(furniture(ObjectKind::Photo, true));

    let result = House::new(vec![bedroom, living_room]);
    assert!(matches!(
        result,
        Err(GameError::World(WorldError::ExtraSpecialObject))
    ));
}

#[test]
fn test_exit_to_unknown_room_is_rejected() {
    let mut room = bare_room(RoomId::Bedroom);
    room.exits.push(Exit {
        rect: Rect::new(400.0, 260.0, 20.0, 60.0),
        to: RoomId::LivingRoom,
    });

    let result = House::new(vec![room]);
    assert!(matches!(
        result,
        Err(GameError::World(WorldError::UnknownRoom(RoomId::LivingRoom)))
    ));
}

#[test]
fn test_furnished_house_layout() {
    let house = House::furnished().unwrap();

    let bedroom = house.room(RoomId::Bedroom).unwrap();
    assert_eq!(bedroom.objects.len(), 5);
    assert_eq!(bedroom.exits.len(), 1);
    assert_eq!(bedroom.exits[0].to, RoomId::LivingRoom);
    assert_eq!(bedroom.spawn, Vec2::new(360.0, 280.0));

    let living_room = house.room(RoomId::LivingRoom).unwrap();
    assert_eq!(living_room.objects.len(), 5);
    assert_eq!(living_room.exits.len(), 1);
    assert_eq!(living_room.exits[0].to, RoomId::Bedroom);
    assert_eq!(living_room.spawn, Vec2::new(60.0, 280.0));

    // Exactly one special object, and it lives in the living room.
    let specials: Vec<_> = house
        .rooms()
        .flat_map(|room| &room.objects)
        .filter(|object| object.special)
        .collect();
    assert_eq!(specials.len(), 1);
    assert_eq!(specials[0].kind, ObjectKind::Gift);

    assert_eq!(house.discoverable_total(), 9);
}

#[test]
fn test_every_kind_is_placed_exactly_once() {
    let house = House::furnished().unwrap();
    let placed: Vec<_> = house.rooms().flat_map(|room| &room.objects).collect();

    assert_eq!(placed.len(), ObjectKind::COUNT);

    let mut kinds: Vec<_> = placed.iter().map(|object| object.kind).collect();
    kinds.sort_by_key(|kind| kind.to_string());
    kinds.dedup();
    assert_eq!(kinds.len(), ObjectKind::COUNT);
}

#[test]
fn test_spawn_points_are_walkable() {
    use birthday_adventure::systems::movement::in_walkable_bounds;

    let house = House::furnished().unwrap();
    for room in house.rooms() {
        assert!(in_walkable_bounds(room.spawn), "spawn of {} blocked", room.id);

        let player = Rect::from_pos_size(room.spawn, birthday_adventure::constants::PLAYER_SIZE);
        for object in &room.objects {
            assert!(
                !player.overlaps(&object.rect),
                "spawn of {} overlaps {}",
                room.id,
                object.kind
            );
        }
        // Spawning inside an exit would immediately bounce the player back.
        for exit in &room.exits {
            assert!(!player.overlaps(&exit.rect), "spawn of {} overlaps an exit", room.id);
        }
    }
}

#[test]
fn test_message_lookup() {
    let house = House::furnished().unwrap();
    assert!(house.message_for(ObjectKind::Gift).unwrap().contains("HAPPY BIRTHDAY"));
    assert!(house.message_for(ObjectKind::Bed).is_some());
}
