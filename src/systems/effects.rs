//! Deferred side effects, keyed by the tick they should fire at.
//!
//! The only producer today is the room-transition path, which wants the
//! companion to catch up to the player half a second late instead of
//! teleporting alongside.

use bevy_ecs::query::{With, Without};
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Query, Res, ResMut};
use smallvec::SmallVec;
use tracing::trace;

use crate::constants;
use crate::systems::companion::clamp_to_bounds;
use crate::systems::components::{Companion, PlayerControlled, Position, TickCount};

/// A side effect scheduled for a future tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Catch the companion up to the player's new position.
    RepositionCompanion,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    fire_at: u64,
    effect: Effect,
}

/// The pending effect queue, drained once per tick.
#[derive(Resource, Default, Debug)]
pub struct PendingEffects(Vec<Scheduled>);

impl PendingEffects {
    pub fn schedule(&mut self, fire_at: u64, effect: Effect) {
        self.0.push(Scheduled { fire_at, effect });
    }

    /// Removes and returns every effect due at or before `now`.
    pub fn drain_due(&mut self, now: u64) -> SmallVec<[Effect; 2]> {
        let mut due = SmallVec::new();
        self.0.retain(|scheduled| {
            if scheduled.fire_at <= now {
                due.push(scheduled.effect);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[allow(clippy::type_complexity)]
pub fn effects_system(
    tick: Res<TickCount>,
    mut effects: ResMut<PendingEffects>,
    player: Query<&Position, (With<PlayerControlled>, Without<Companion>)>,
    mut companions: Query<&mut Position, (With<Companion>, Without<PlayerControlled>)>,
) {
    for effect in effects.drain_due(tick.0) {
        match effect {
            Effect::RepositionCompanion => {
                let Ok(player_position) = player.single() else {
                    continue;
                };
                let Ok(mut companion_position) = companions.single_mut() else {
                    continue;
                };
                companion_position.0 = clamp_to_bounds(player_position.0 + constants::COMPANION_OFFSET);
                trace!(position = ?companion_position.0, "companion caught up");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_due_keeps_future_effects() {
        let mut pending = PendingEffects::default();
        pending.schedule(10, Effect::RepositionCompanion);
        pending.schedule(20, Effect::RepositionCompanion);

        assert!(pending.drain_due(5).is_empty());
        assert_eq!(pending.drain_due(10).len(), 1);
        assert!(!pending.is_empty());
        assert_eq!(pending.drain_due(25).len(), 1);
        assert!(pending.is_empty());
    }
}
