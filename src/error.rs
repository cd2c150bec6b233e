//! Centralized error types for the game.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach. `GameError` doubles as an
//! ECS event so systems can report recoverable faults without aborting the
//! tick they run in.

use bevy_ecs::event::Event;

use crate::world::{ObjectKind, RoomId};

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("World error: {0}")]
    World(#[from] WorldError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors related to the static world configuration.
#[derive(thiserror::Error, Debug)]
pub enum WorldError {
    #[error("Unknown room: {0}")]
    UnknownRoom(RoomId),

    #[error("Duplicate object kind {kind} in room {room}")]
    DuplicateObject { room: RoomId, kind: ObjectKind },

    #[error("More than one special object in the house")]
    ExtraSpecialObject,

    #[error("House has no rooms")]
    Empty,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
