//! Proximity interaction: discovery bookkeeping, the one-time reveal, and
//! the companion reaction hook.

use bevy_ecs::event::EventWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;
use smallvec::SmallVec;
use tracing::debug;

use crate::constants::{self, Tuning};
use crate::error::{GameError, WorldError};
use crate::events::GameEvent;
use crate::game::session::SessionState;
use crate::systems::companion::{apply_reaction, reaction_for};
use crate::systems::components::{Animation, Companion, Facing, InteractIntents, PlayerControlled, Position};
use crate::world::{House, ObjectKind};

/// What a single interact request touched and what should be announced.
#[derive(Debug, Default)]
pub struct InteractReport {
    /// Kinds that were in range and processed, in room order.
    pub touched: SmallVec<[ObjectKind; 4]>,
    /// Kinds whose companion reaction should fire.
    pub reacted: SmallVec<[ObjectKind; 4]>,
    /// Notifications to publish for this request.
    pub events: SmallVec<[GameEvent; 4]>,
}

/// Processes one interact request against every object in the current room.
///
/// All in-range objects are handled, not just the nearest; when two pieces
/// of furniture sit close together a single request counts against both.
/// Discovery flags and the discovery set are idempotent, the interaction
/// total is deliberately not. The special reveal object is latched: its
/// first interaction fires the reveal, later ones do nothing at all.
pub fn interact(
    player_position: Vec2,
    house: &mut House,
    session: &mut SessionState,
    tuning: &Tuning,
) -> Result<InteractReport, GameError> {
    let mut report = InteractReport::default();
    let room = house
        .room_mut(session.current_room)
        .ok_or(WorldError::UnknownRoom(session.current_room))?;

    let point = player_position + constants::PLAYER_CENTER_OFFSET;
    for object in room.objects.iter_mut() {
        if point.distance(object.rect.center()) >= tuning.interaction_radius {
            continue;
        }
        report.touched.push(object.kind);

        if object.special {
            if !session.special_event_fired {
                session.special_event_fired = true;
                object.discovered = true;
                report.events.push(GameEvent::SpecialTriggered);
                report.reacted.push(object.kind);
            }
        } else {
            object.discovered = true;
            if session.discoveries.insert(object.kind) {
                report.events.push(GameEvent::ObjectDiscovered(object.kind));
            }
            session.total_interactions += 1;
            session.last_interaction = Some(object.kind);
            report.reacted.push(object.kind);
        }
    }

    if report.touched.is_empty() {
        report.events.push(GameEvent::NothingNearby);
    }

    Ok(report)
}

#[allow(clippy::type_complexity)]
pub fn interaction_system(
    tuning: Res<Tuning>,
    mut intents: ResMut<InteractIntents>,
    mut house: ResMut<House>,
    mut session: ResMut<SessionState>,
    mut events: EventWriter<GameEvent>,
    mut errors: EventWriter<GameError>,
    player: Query<(&Position, &Facing), (With<PlayerControlled>, Without<Companion>)>,
    mut companions: Query<(&mut Companion, &mut Facing, &mut Animation), Without<PlayerControlled>>,
) {
    if intents.0 == 0 {
        return;
    }
    let requests = std::mem::take(&mut intents.0);

    let Ok((player_position, player_facing)) = player.single() else {
        return;
    };

    for _ in 0..requests {
        match interact(player_position.0, &mut house, &mut session, &tuning) {
            Ok(report) => {
                for event in &report.events {
                    events.write(*event);
                }
                if let Ok((mut companion, mut companion_facing, mut animation)) = companions.single_mut() {
                    for kind in &report.reacted {
                        apply_reaction(
                            reaction_for(*kind),
                            player_facing.0,
                            &mut companion,
                            &mut companion_facing,
                            &mut animation,
                        );
                    }
                }
                debug!(touched = report.touched.len(), "interact");
            }
            Err(error) => {
                errors.write(error);
            }
        }
    }
}
