use bevy_ecs::event::Event;

use crate::direction::Direction;
use crate::world::{ObjectKind, RoomId};

/// An input intent from whatever the host wires up: keyboard, on-screen
/// d-pad, or swipe translation. The core does not care about the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Move(Direction),
    Interact,
    Exit,
}

/// Discrete notifications for the presentation layer.
///
/// Each variant fires exactly once per underlying state change, never once
/// per tick: a re-discovered object stays silent, the reveal fires once per
/// session. `NothingNearby` is the surfaced result of an interact request
/// that found no object in range.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    ObjectDiscovered(ObjectKind),
    SpecialTriggered,
    RoomChanged { from: RoomId, to: RoomId },
    NothingNearby,
}
