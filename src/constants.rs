//! This module contains all the constants used in the game.

use std::time::Duration;

use bevy_ecs::resource::Resource;
use glam::{UVec2, Vec2};

/// The number of simulation ticks per second.
pub const TICK_RATE: u32 = 60;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / TICK_RATE as f64) as u64);

/// The size of the canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(480, 540);

/// The player's bounding box, in pixels.
pub const PLAYER_SIZE: Vec2 = Vec2::new(36.0, 60.0);
/// Offset from the player's top-left corner to the point interactions are measured from.
pub const PLAYER_CENTER_OFFSET: Vec2 = Vec2::new(18.0, 30.0);

/// Where the player stands when the session starts.
pub const PLAYER_START: Vec2 = Vec2::new(120.0, 280.0);
/// Where the companion starts, a little behind the player.
pub const COMPANION_START: Vec2 = Vec2::new(80.0, 240.0);

/// Distance covered by one accepted player step, in pixels.
pub const PLAYER_SPEED: f32 = 6.0;
/// Radius around the player's center within which objects can be interacted with.
pub const INTERACTION_RADIUS: f32 = 80.0;
/// Minimum delay between accepted player steps.
pub const MOVEMENT_COOLDOWN_MS: u64 = 100;
/// How long the moving/walk-animation state lingers after an accepted step.
pub const MOVE_DECAY_MS: u64 = 150;
/// Ticks until `moving` self-clears after an accepted step.
pub const MOVE_DECAY_TICKS: u32 = ms_to_ticks(MOVE_DECAY_MS);

/// Inset from the left/top/right canvas edges the player may not cross.
pub const WALK_MARGIN: f32 = 18.0;
/// Larger inset at the bottom, reserving space for the host's UI strip.
pub const BOTTOM_MARGIN: f32 = 80.0;

/// Distance at which the companion gives up idling and pursues the player.
pub const FOLLOW_THRESHOLD: f32 = 100.0;
/// Distance covered by one companion pursuit step, in pixels.
pub const FOLLOW_SPEED: f32 = 2.0;
/// Minimum delay between companion pursuit steps.
pub const FOLLOW_PACING_MS: u64 = 300;
/// How long the companion lags behind after a room transition.
pub const COMPANION_LAG_MS: u64 = 500;
pub const COMPANION_LAG_TICKS: u32 = ms_to_ticks(COMPANION_LAG_MS);
/// Where the companion lands relative to the player after catching up.
pub const COMPANION_OFFSET: Vec2 = Vec2::new(-40.0, 20.0);

/// Per-tick chance that an idle companion rerolls its facing.
pub const IDLE_TURN_CHANCE: f32 = 0.008;
/// Per-tick chance that an idle companion hops a short distance.
pub const IDLE_HOP_CHANCE: f32 = 0.003;
pub const IDLE_HOP_DISTANCE: f32 = 10.0;

/// Hard clamp applied to the companion every tick.
pub const COMPANION_MIN: Vec2 = Vec2::new(10.0, 10.0);
pub const COMPANION_MAX: Vec2 = Vec2::new(CANVAS_SIZE.x as f32 - 40.0, CANVAS_SIZE.y as f32 - 80.0);

/// Converts a wall-clock duration into whole simulation ticks.
pub const fn ms_to_ticks(ms: u64) -> u32 {
    (ms * TICK_RATE as u64 / 1000) as u32
}

/// The configurable subset of the tuning constants. Hosts may override any
/// field before handing the resource to the game; everything else above is
/// considered part of the game's feel and stays fixed.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Pixels per accepted player step.
    pub player_speed: f32,
    /// Interaction radius, in pixels.
    pub interaction_radius: f32,
    pub movement_cooldown_ms: u64,
    /// Pursuit trigger distance, in pixels.
    pub companion_follow_threshold: f32,
    /// Pixels per companion pursuit step.
    pub companion_follow_speed: f32,
    pub companion_follow_pacing_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            interaction_radius: INTERACTION_RADIUS,
            movement_cooldown_ms: MOVEMENT_COOLDOWN_MS,
            companion_follow_threshold: FOLLOW_THRESHOLD,
            companion_follow_speed: FOLLOW_SPEED,
            companion_follow_pacing_ms: FOLLOW_PACING_MS,
        }
    }
}

impl Tuning {
    pub fn movement_cooldown_ticks(&self) -> u32 {
        ms_to_ticks(self.movement_cooldown_ms)
    }

    pub fn follow_pacing_ticks(&self) -> u32 {
        ms_to_ticks(self.companion_follow_pacing_ms)
    }
}
