//! Drains the host-facing command queue into per-tick intents.
//!
//! Commands arrive asynchronously relative to the tick; this system is the
//! single point where they enter the simulation, so everything downstream
//! sees a stable view of the input for the current tick.

use bevy_ecs::query::With;
use bevy_ecs::system::{Query, ResMut};

use crate::events::GameCommand;
use crate::systems::components::{CommandQueue, GlobalState, InteractIntents, Movable, PlayerControlled};

pub fn intent_system(
    mut queue: ResMut<CommandQueue>,
    mut interacts: ResMut<InteractIntents>,
    mut state: ResMut<GlobalState>,
    mut player: Query<&mut Movable, With<PlayerControlled>>,
) {
    // No player means nothing can consume intents; leave the queue untouched
    // for a later tick that has one.
    let Ok(mut movable) = player.single_mut() else {
        return;
    };

    while let Some(command) = queue.0.pop_front() {
        match command {
            GameCommand::Move(direction) => movable.pending.push(direction),
            GameCommand::Interact => interacts.0 += 1,
            GameCommand::Exit => state.exit = true,
        }
    }
}
