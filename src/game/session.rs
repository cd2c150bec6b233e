//! Per-run session bookkeeping: where we are, what has been found.

use std::collections::{HashMap, HashSet};

use bevy_ecs::resource::Resource;

use crate::world::{House, ObjectKind, RoomId};

/// The single mutable session aggregate. Owned by the tick loop as an ECS
/// resource and handed to each subsystem; nothing else holds a reference to
/// it, and it dies with the process.
#[derive(Resource, Debug, Clone)]
pub struct SessionState {
    pub current_room: RoomId,
    /// Kinds interacted with at least once. Set semantics: re-adding is a no-op.
    pub discoveries: HashSet<ObjectKind>,
    /// Latch for the one-time reveal.
    pub special_event_fired: bool,
    /// Counts every processed interaction, repeats included.
    pub total_interactions: u32,
    pub last_interaction: Option<ObjectKind>,
    pub room_visits: HashMap<RoomId, u32>,
    pub start_tick: u64,
}

impl SessionState {
    pub fn new(start_room: RoomId) -> SessionState {
        let mut room_visits = HashMap::new();
        // Starting in a room counts as visiting it.
        room_visits.insert(start_room, 1);

        SessionState {
            current_room: start_room,
            discoveries: HashSet::new(),
            special_event_fired: false,
            total_interactions: 0,
            last_interaction: None,
            room_visits,
            start_tick: 0,
        }
    }

    /// Discovered count vs. everything discoverable, with the special
    /// reveal object excluded from the denominator.
    pub fn discovery_progress(&self, house: &House) -> (usize, usize) {
        (self.discoveries.len(), house.discoverable_total())
    }

    /// A play-session summary for the host to display.
    pub fn stats(&self, now: u64) -> SessionStats {
        SessionStats {
            ticks_played: now.saturating_sub(self.start_tick),
            interactions: self.total_interactions,
            discoveries: self.discoveries.len(),
            room_visits: self.room_visits.values().sum(),
            special_found: self.special_event_fired,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks_played: u64,
    pub interactions: u32,
    pub discoveries: usize,
    pub room_visits: u32,
    pub special_found: bool,
}
