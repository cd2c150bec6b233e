//! Player movement: debounced single steps, bounds and furniture collision,
//! and exit crossings that carry the player between rooms.

use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::constants::{self, Tuning};
use crate::direction::Direction;
use crate::error::{GameError, WorldError};
use crate::events::GameEvent;
use crate::game::session::SessionState;
use crate::geometry::Rect;
use crate::systems::components::{Animation, Facing, Movable, PlayerControlled, Position, TickCount};
use crate::systems::effects::{Effect, PendingEffects};
use crate::world::{House, Room, RoomId};

/// What happened to a single step request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The step was accepted and the actor advanced.
    Moved,
    /// The step was accepted and carried the actor through an exit.
    ChangedRoom { from: RoomId, to: RoomId },
    /// Rejected: a prior step is still in flight or cooling down. The actor
    /// does not even turn.
    TooSoon,
    /// Rejected: the candidate position left the walkable area. The actor
    /// turns in place.
    OutOfBounds,
    /// Rejected: the candidate box overlapped furniture. The actor turns in
    /// place.
    Blocked,
}

/// True when a player box at `pos` stays inside the walkable area: a margin
/// inset from the canvas edges, with extra room reserved at the bottom for
/// the host's UI strip.
pub fn in_walkable_bounds(pos: Vec2) -> bool {
    pos.x >= constants::WALK_MARGIN
        && pos.x <= constants::CANVAS_SIZE.x as f32 - constants::WALK_MARGIN * 2.0
        && pos.y >= constants::WALK_MARGIN
        && pos.y <= constants::CANVAS_SIZE.y as f32 - constants::BOTTOM_MARGIN
}

/// True when a player box at `pos` is clear of every furniture rect in `room`.
pub fn clear_of_furniture(pos: Vec2, room: &Room) -> bool {
    let player = Rect::from_pos_size(pos, constants::PLAYER_SIZE);
    room.objects.iter().all(|object| !player.overlaps(&object.rect))
}

/// Attempts one debounced step in `direction`.
///
/// The debounce gate rejects outright without turning the actor; bounds and
/// collision rejections still update facing, which reads as turning on the
/// spot. An accepted step that lands in an exit rectangle switches the
/// session to the exit's destination room: the player snaps to that room's
/// spawn point and the companion is scheduled to catch up a little later.
/// The first overlapping exit wins and at most one transition happens per
/// step.
#[allow(clippy::too_many_arguments)]
pub fn attempt_move(
    direction: Direction,
    position: &mut Position,
    facing: &mut Facing,
    animation: &mut Animation,
    movable: &mut Movable,
    house: &House,
    session: &mut SessionState,
    effects: &mut PendingEffects,
    now: TickCount,
    tuning: &Tuning,
) -> Result<MoveOutcome, GameError> {
    if animation.moving || movable.cooldown > 0 {
        return Ok(MoveOutcome::TooSoon);
    }

    let room = house
        .room(session.current_room)
        .ok_or(WorldError::UnknownRoom(session.current_room))?;

    facing.0 = direction;

    let candidate = position.0 + direction.as_vec2() * tuning.player_speed;
    if !in_walkable_bounds(candidate) {
        return Ok(MoveOutcome::OutOfBounds);
    }
    if !clear_of_furniture(candidate, room) {
        return Ok(MoveOutcome::Blocked);
    }

    position.0 = candidate;
    animation.moving = true;
    animation.move_timer = constants::MOVE_DECAY_TICKS;
    movable.cooldown = tuning.movement_cooldown_ticks();

    let player = Rect::from_pos_size(candidate, constants::PLAYER_SIZE);
    for exit in &room.exits {
        if !player.overlaps(&exit.rect) {
            continue;
        }
        let Some(destination) = house.room(exit.to) else {
            // Configuration defect: refuse the transition, stay in the room.
            return Err(WorldError::UnknownRoom(exit.to).into());
        };

        let from = session.current_room;
        session.current_room = exit.to;
        *session.room_visits.entry(exit.to).or_insert(0) += 1;
        position.0 = destination.spawn;
        effects.schedule(
            now.0 + constants::COMPANION_LAG_TICKS as u64,
            Effect::RepositionCompanion,
        );
        debug!(%from, to = %exit.to, "room transition");
        return Ok(MoveOutcome::ChangedRoom { from, to: exit.to });
    }

    Ok(MoveOutcome::Moved)
}

/// Per-tick timer upkeep: decay the moving flag, advance the walk animation
/// while it lasts, and count down the step debounce.
pub fn tick_movement_timers(animation: &mut Animation, movable: &mut Movable) {
    if animation.move_timer > 0 {
        animation.move_timer -= 1;
        if animation.move_timer == 0 {
            animation.moving = false;
        }
    }
    if animation.moving {
        animation.frame = animation.frame.wrapping_add(1);
    }
    movable.cooldown = movable.cooldown.saturating_sub(1);
}

#[allow(clippy::type_complexity)]
pub fn movement_system(
    house: Res<House>,
    tuning: Res<Tuning>,
    tick: Res<TickCount>,
    mut session: ResMut<SessionState>,
    mut effects: ResMut<PendingEffects>,
    mut player: Query<(&mut Position, &mut Facing, &mut Animation, &mut Movable), With<PlayerControlled>>,
    mut events: EventWriter<GameEvent>,
    mut errors: EventWriter<GameError>,
) {
    let Ok((mut position, mut facing, mut animation, mut movable)) = player.single_mut() else {
        return;
    };

    let pending: SmallVec<[Direction; 2]> = movable.pending.drain(..).collect();
    for direction in pending {
        match attempt_move(
            direction,
            &mut position,
            &mut facing,
            &mut animation,
            &mut movable,
            &house,
            &mut session,
            &mut effects,
            *tick,
            &tuning,
        ) {
            Ok(MoveOutcome::ChangedRoom { from, to }) => {
                events.write(GameEvent::RoomChanged { from, to });
            }
            Ok(outcome) => trace!(?direction, ?outcome, "step"),
            Err(error) => {
                errors.write(error);
            }
        }
    }

    tick_movement_timers(&mut animation, &mut movable);
}
