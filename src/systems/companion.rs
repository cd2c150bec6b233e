//! The cat: lagging pursuit when far from the player, low-key mischief when
//! close.
//!
//! There is no explicit state enum; follow vs. idle is re-derived every tick
//! from the current distance to the player, which keeps perturbations from
//! the reaction hook naturally bounded: whatever they set is re-evaluated
//! on the next tick.

use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;
use rand::Rng;

use crate::constants::{self, Tuning};
use crate::direction::Direction;
use crate::systems::components::{Animation, Companion, Facing, GameRng, PlayerControlled, Position};
use crate::world::ObjectKind;

/// How the cat reacts when the player pokes at a piece of furniture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Sleep,
    Curious,
    Excited,
    Follow,
    Watch,
    Avoid,
    Neutral,
}

/// The reaction table, exhaustive over furniture kinds. Anything without an
/// opinion of its own falls back to `Neutral`, which is a no-op.
pub fn reaction_for(kind: ObjectKind) -> Reaction {
    match kind {
        ObjectKind::Bed => Reaction::Sleep,
        ObjectKind::Plant => Reaction::Curious,
        ObjectKind::Gift => Reaction::Excited,
        ObjectKind::Couch => Reaction::Follow,
        ObjectKind::Tv => Reaction::Watch,
        ObjectKind::Weights => Reaction::Avoid,
        ObjectKind::Closet | ObjectKind::Vanity | ObjectKind::Picnic | ObjectKind::Photo => Reaction::Neutral,
    }
}

/// One pursuit step: move along whichever axis has the larger absolute
/// delta, never diagonally, and face that way. Ties go to the vertical axis.
pub fn follow_step(delta: Vec2, speed: f32) -> (Direction, Vec2) {
    if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            (Direction::Right, Vec2::new(speed, 0.0))
        } else {
            (Direction::Left, Vec2::new(-speed, 0.0))
        }
    } else if delta.y > 0.0 {
        (Direction::Down, Vec2::new(0.0, speed))
    } else {
        (Direction::Up, Vec2::new(0.0, -speed))
    }
}

/// Clamps a companion position into the hard safety bounds.
pub fn clamp_to_bounds(pos: Vec2) -> Vec2 {
    pos.clamp(constants::COMPANION_MIN, constants::COMPANION_MAX)
}

/// Whether an idle hop in `direction` from `pos` stays comfortably inside
/// the room.
fn idle_hop_allowed(direction: Direction, pos: Vec2) -> bool {
    match direction {
        Direction::Up => pos.y > 50.0,
        Direction::Down => pos.y < constants::CANVAS_SIZE.y as f32 - 100.0,
        Direction::Left => pos.x > 20.0,
        Direction::Right => pos.x < constants::CANVAS_SIZE.x as f32 - 50.0,
    }
}

/// Applies a one-shot reaction perturbation from the interaction subsystem.
///
/// Excited zeroes the pursuit pacing so the next follow step fires
/// immediately; the moving flag it raises decays on the next idle
/// evaluation, so none of these outlive more than a tick of disagreement
/// with the follow/idle logic.
pub fn apply_reaction(
    reaction: Reaction,
    player_facing: Direction,
    companion: &mut Companion,
    facing: &mut Facing,
    animation: &mut Animation,
) {
    match reaction {
        Reaction::Excited => {
            animation.moving = true;
            animation.frame = animation.frame.wrapping_add(10);
            companion.pacing = 0;
        }
        Reaction::Curious => facing.0 = player_facing,
        Reaction::Follow => companion.pacing = 0,
        Reaction::Sleep | Reaction::Watch | Reaction::Avoid | Reaction::Neutral => {}
    }
}

#[allow(clippy::type_complexity)]
pub fn companion_system(
    tuning: Res<Tuning>,
    mut rng: ResMut<GameRng>,
    player: Query<&Position, (With<PlayerControlled>, Without<Companion>)>,
    mut companions: Query<(&mut Companion, &mut Position, &mut Facing, &mut Animation), Without<PlayerControlled>>,
) {
    let Ok(player_position) = player.single() else {
        return;
    };
    let Ok((mut companion, mut position, mut facing, mut animation)) = companions.single_mut() else {
        return;
    };

    companion.pacing = companion.pacing.saturating_sub(1);

    let delta = player_position.0 - position.0;
    if delta.length() > tuning.companion_follow_threshold {
        animation.moving = true;
        if companion.pacing == 0 {
            let (direction, step) = follow_step(delta, tuning.companion_follow_speed);
            facing.0 = direction;
            position.0 += step;
            companion.pacing = tuning.follow_pacing_ticks();
        }
        animation.frame = animation.frame.wrapping_add(1);
    } else {
        animation.moving = false;

        if rng.0.random::<f32>() < constants::IDLE_TURN_CHANCE {
            facing.0 = Direction::DIRECTIONS[rng.0.random_range(0..4)];
        }

        if rng.0.random::<f32>() < constants::IDLE_HOP_CHANCE {
            let direction = Direction::DIRECTIONS[rng.0.random_range(0..4)];
            if idle_hop_allowed(direction, position.0) {
                position.0 += direction.as_vec2() * constants::IDLE_HOP_DISTANCE;
            }
            facing.0 = direction;
            animation.moving = true;
            animation.frame = animation.frame.wrapping_add(5);
        }
    }

    // Breathing and tail motion tick even when nothing else happens.
    animation.frame = animation.frame.wrapping_add(1);
    position.0 = clamp_to_bounds(position.0);
}
