use std::collections::VecDeque;

use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;
use rand::rngs::SmallRng;
use smallvec::SmallVec;

use crate::direction::Direction;
use crate::events::GameCommand;

/// A tag component for the entity driven by player input.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// World-pixel position of an actor's top-left corner.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facing(pub Direction);

/// Shared animation and movement bookkeeping for an actor.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Animation {
    pub frame: u32,
    pub moving: bool,
    /// Ticks until `moving` self-clears after an accepted step.
    pub move_timer: u32,
}

/// Player-side movement state: buffered step intents plus the step debounce.
#[derive(Component, Debug, Default)]
pub struct Movable {
    /// Step intents drained from the command queue this tick, in arrival order.
    pub pending: SmallVec<[Direction; 2]>,
    /// Ticks until the next step may be accepted.
    pub cooldown: u32,
}

/// Companion-only state.
#[derive(Component, Debug, Default)]
pub struct Companion {
    /// Ticks until the next pursuit step is allowed.
    pub pacing: u32,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub facing: Facing,
    pub animation: Animation,
    pub movable: Movable,
}

#[derive(Bundle)]
pub struct CompanionBundle {
    pub companion: Companion,
    pub position: Position,
    pub facing: Facing,
    pub animation: Animation,
}

#[derive(Resource)]
pub struct GlobalState {
    pub exit: bool,
}

/// Input intents queued by the host, drained once at the start of each tick.
#[derive(Resource, Default)]
pub struct CommandQueue(pub VecDeque<GameCommand>);

/// Number of interact requests drained from the queue this tick.
#[derive(Resource, Default)]
pub struct InteractIntents(pub u32);

/// Monotonic tick counter; all pacing and scheduling compares against this.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct TickCount(pub u64);

/// Session-wide RNG. Seedable, so whole simulation runs are reproducible.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);
