//! Read-only view of the session for a renderer.
//!
//! The core never calls drawing routines; a presentation layer pulls one of
//! these after each tick and draws whatever it likes from it.

use glam::Vec2;

use crate::direction::Direction;
use crate::geometry::Rect;
use crate::world::{ObjectKind, RoomId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorSnapshot {
    pub position: Vec2,
    pub facing: Direction,
    pub frame: u32,
    pub moving: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectSnapshot {
    pub kind: ObjectKind,
    pub rect: Rect,
    pub discovered: bool,
    pub special: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub room: RoomId,
    pub title: &'static str,
    pub player: ActorSnapshot,
    pub companion: ActorSnapshot,
    /// The current room's furniture, in room order.
    pub objects: Vec<ObjectSnapshot>,
    pub special_event_fired: bool,
    /// (discovered, discoverable), special excluded.
    pub progress: (usize, usize),
}
