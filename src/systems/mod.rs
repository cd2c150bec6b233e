//! Systems driving the fixed-order tick: intent drain, player movement,
//! companion behavior, interactions, and deferred effects.

pub mod companion;
pub mod components;
pub mod effects;
pub mod intent;
pub mod interact;
pub mod movement;

pub use companion::{apply_reaction, companion_system, follow_step, reaction_for, Reaction};
pub use components::{
    Animation, CommandQueue, Companion, CompanionBundle, Facing, GameRng, GlobalState, InteractIntents, Movable,
    PlayerBundle, PlayerControlled, Position, TickCount,
};
pub use effects::{effects_system, Effect, PendingEffects};
pub use intent::intent_system;
pub use interact::{interact, interaction_system, InteractReport};
pub use movement::{attempt_move, in_walkable_bounds, movement_system, tick_movement_timers, MoveOutcome};
