//! Static description of the house: rooms, furniture, and the exits
//! connecting them.
//!
//! The world is built once at startup and validated up front; after that the
//! only mutable piece is each furniture item's `discovered` flag.

use std::collections::{HashMap, HashSet};

use bevy_ecs::resource::Resource;
use glam::Vec2;

use crate::error::{GameResult, WorldError};
use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RoomId {
    Bedroom,
    LivingRoom,
}

/// Every kind of furniture that exists in the house. The kind drives both
/// the companion reaction table and discovery bookkeeping, so it must be
/// unique within a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum ObjectKind {
    Bed,
    Closet,
    Weights,
    Vanity,
    Picnic,
    Couch,
    Plant,
    Tv,
    Photo,
    Gift,
}

/// A piece of furniture the player can bump into and interact with.
#[derive(Debug, Clone)]
pub struct Furniture {
    pub kind: ObjectKind,
    pub rect: Rect,
    pub message: &'static str,
    pub discovered: bool,
    /// Marks the one-time birthday reveal object.
    pub special: bool,
}

impl Furniture {
    fn new(kind: ObjectKind, rect: Rect, message: &'static str) -> Furniture {
        Furniture {
            kind,
            rect,
            message,
            discovered: false,
            special: false,
        }
    }

    fn special(kind: ObjectKind, rect: Rect, message: &'static str) -> Furniture {
        Furniture {
            special: true,
            ..Furniture::new(kind, rect, message)
        }
    }
}

/// Walking into an exit's rectangle carries the player to another room.
#[derive(Debug, Clone, Copy)]
pub struct Exit {
    pub rect: Rect,
    pub to: RoomId,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub title: &'static str,
    pub wall_color: &'static str,
    pub floor_color: &'static str,
    /// Where the player lands when entering this room through any exit.
    pub spawn: Vec2,
    pub objects: Vec<Furniture>,
    pub exits: Vec<Exit>,
}

/// The whole house, keyed by room id.
#[derive(Resource, Debug)]
pub struct House {
    rooms: HashMap<RoomId, Room>,
}

impl House {
    /// Validates and indexes a set of rooms: object kinds must be unique
    /// within a room, at most one special object may exist in the whole
    /// house, and every exit must lead to a room that exists.
    pub fn new(rooms: Vec<Room>) -> GameResult<House> {
        if rooms.is_empty() {
            return Err(WorldError::Empty.into());
        }

        let ids: HashSet<RoomId> = rooms.iter().map(|room| room.id).collect();
        let mut specials = 0;

        for room in &rooms {
            let mut kinds = HashSet::new();
            for object in &room.objects {
                if !kinds.insert(object.kind) {
                    return Err(WorldError::DuplicateObject {
                        room: room.id,
                        kind: object.kind,
                    }
                    .into());
                }
                if object.special {
                    specials += 1;
                    if specials > 1 {
                        return Err(WorldError::ExtraSpecialObject.into());
                    }
                }
            }
            for exit in &room.exits {
                if !ids.contains(&exit.to) {
                    return Err(WorldError::UnknownRoom(exit.to).into());
                }
            }
        }

        Ok(House {
            rooms: rooms.into_iter().map(|room| (room.id, room)).collect(),
        })
    }

    /// The built-in two-room layout the game ships with.
    pub fn furnished() -> GameResult<House> {
        House::new(vec![bedroom(), living_room()])
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Count of discoverable objects across all rooms, with the special
    /// reveal object excluded.
    pub fn discoverable_total(&self) -> usize {
        self.rooms
            .values()
            .flat_map(|room| &room.objects)
            .filter(|object| !object.special)
            .count()
    }

    /// Looks up the message for a kind anywhere in the house.
    pub fn message_for(&self, kind: ObjectKind) -> Option<&'static str> {
        self.rooms
            .values()
            .flat_map(|room| &room.objects)
            .find(|object| object.kind == kind)
            .map(|object| object.message)
    }
}

fn bedroom() -> Room {
    Room {
        id: RoomId::Bedroom,
        title: "The Birthday Bedroom",
        wall_color: "#F4E4A6",
        floor_color: "#E6D49A",
        spawn: Vec2::new(360.0, 280.0),
        objects: vec![
            Furniture::new(
                ObjectKind::Bed,
                Rect::new(40.0, 80.0, 90.0, 120.0),
                "A perfectly made bed with the softest pillows. Somebody slept like a champion before the big day!",
            ),
            Furniture::new(
                ObjectKind::Closet,
                Rect::new(200.0, 60.0, 80.0, 60.0),
                "A wardrobe of favorite workout clothes, folded with suspicious precision.",
            ),
            Furniture::new(
                ObjectKind::Weights,
                Rect::new(330.0, 80.0, 70.0, 50.0),
                "A trusty set of dumbbells, still warm from this morning's session.",
            ),
            Furniture::new(
                ObjectKind::Picnic,
                Rect::new(200.0, 170.0, 120.0, 80.0),
                "A cozy picnic spread with treats and lemonade, laid out just for today. 🧺",
            ),
            Furniture::new(
                ObjectKind::Vanity,
                Rect::new(40.0, 360.0, 70.0, 60.0),
                "The self-care station. Looking this good on a birthday takes preparation.",
            ),
        ],
        exits: vec![Exit {
            rect: Rect::new(400.0, 260.0, 20.0, 60.0),
            to: RoomId::LivingRoom,
        }],
    }
}

fn living_room() -> Room {
    Room {
        id: RoomId::LivingRoom,
        title: "The Cozy Living Room",
        wall_color: "#F4E4A6",
        floor_color: "#E6D49A",
        spawn: Vec2::new(60.0, 280.0),
        objects: vec![
            Furniture::new(
                ObjectKind::Couch,
                Rect::new(100.0, 100.0, 120.0, 60.0),
                "The movie couch. The cat has clearly already claimed the left cushion.",
            ),
            Furniture::new(
                ObjectKind::Tv,
                Rect::new(300.0, 80.0, 100.0, 50.0),
                "The entertainment center, queued up with birthday favorites.",
            ),
            Furniture::new(
                ObjectKind::Plant,
                Rect::new(400.0, 180.0, 40.0, 50.0),
                "A happy little plant. It got watered today, as a present.",
            ),
            Furniture::new(
                ObjectKind::Photo,
                Rect::new(160.0, 340.0, 40.0, 30.0),
                "A framed photo of the best day of last year. This year will top it.",
            ),
            Furniture::special(
                ObjectKind::Gift,
                Rect::new(320.0, 360.0, 100.0, 80.0),
                "🎂 HAPPY BIRTHDAY! 🎂\n\nToday we celebrate you: the dedication, the kindness, and the \
                 excellent taste in cats. May this new year bring endless adventures, crushed goals, and \
                 all the happiness you deserve. Your faithful companion and everyone who loves you wish \
                 you the most magical birthday ever! 🖤✨",
            ),
        ],
        exits: vec![Exit {
            rect: Rect::new(20.0, 260.0, 20.0, 60.0),
            to: RoomId::Bedroom,
        }],
    }
}
