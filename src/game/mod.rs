//! The game aggregate: an ECS world plus a fixed-order schedule.
//!
//! One call to [`Game::tick`] runs every system exactly once, in a fixed
//! order: drain input intents, move the player, update the companion,
//! resolve interactions, fire deferred effects, report errors. All session
//! state lives in resources and components owned by the world; the host
//! talks to it only through [`Game::queue_command`], [`Game::take_events`]
//! and [`Game::snapshot`].

pub mod session;
pub mod snapshot;

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::system::ResMut;
use bevy_ecs::world::World;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::constants::{self, Tuning};
use crate::direction::Direction;
use crate::error::{GameError, GameResult};
use crate::events::{GameCommand, GameEvent};
use crate::systems::companion::companion_system;
use crate::systems::components::{
    Animation, CommandQueue, Companion, CompanionBundle, Facing, GameRng, GlobalState, InteractIntents, Movable,
    PlayerBundle, PlayerControlled, Position, TickCount,
};
use crate::systems::effects::{effects_system, PendingEffects};
use crate::systems::intent::intent_system;
use crate::systems::interact::interaction_system;
use crate::systems::movement::movement_system;
use crate::world::{House, ObjectKind, RoomId};

use self::session::{SessionState, SessionStats};
use self::snapshot::{ActorSnapshot, ObjectSnapshot, Snapshot};

pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Builds the house, spawns both actors, and wires the fixed system order.
    pub fn new() -> GameResult<Game> {
        Game::with_rng(SmallRng::from_os_rng())
    }

    /// Same as [`Game::new`] but with a seeded RNG, making whole simulation
    /// runs reproducible.
    pub fn with_seed(seed: u64) -> GameResult<Game> {
        Game::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> GameResult<Game> {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameError>(&mut world);
        EventRegistry::register_event::<GameEvent>(&mut world);

        let house = House::furnished()?;
        let start_room = RoomId::Bedroom;

        world.insert_resource(house);
        world.insert_resource(Tuning::default());
        world.insert_resource(SessionState::new(start_room));
        world.insert_resource(GlobalState { exit: false });
        world.insert_resource(CommandQueue::default());
        world.insert_resource(InteractIntents::default());
        world.insert_resource(PendingEffects::default());
        world.insert_resource(TickCount::default());
        world.insert_resource(GameRng(rng));

        world.spawn(PlayerBundle {
            player: PlayerControlled,
            position: Position(constants::PLAYER_START),
            facing: Facing(Direction::Down),
            animation: Animation::default(),
            movable: Movable::default(),
        });
        world.spawn(CompanionBundle {
            companion: Companion::default(),
            position: Position(constants::COMPANION_START),
            facing: Facing(Direction::Right),
            animation: Animation::default(),
        });

        schedule.add_systems(
            (
                intent_system,
                movement_system,
                companion_system,
                interaction_system,
                effects_system,
                report_errors,
            )
                .chain(),
        );

        Ok(Game { world, schedule })
    }

    /// Queues an input intent. The next tick consumes it; queuing is safe at
    /// any time, including before the first tick.
    pub fn queue_command(&mut self, command: GameCommand) {
        self.world.resource_mut::<CommandQueue>().0.push_back(command);
    }

    /// Runs one fixed tick. Returns true once the session wants to exit.
    pub fn tick(&mut self) -> bool {
        self.world.resource_mut::<TickCount>().0 += 1;
        self.schedule.run(&mut self.world);
        self.world
            .get_resource::<GlobalState>()
            .expect("GlobalState could not be acquired")
            .exit
    }

    /// Drains the notifications produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.world.resource_mut::<Events<GameEvent>>().drain().collect()
    }

    /// The message text attached to a furniture kind, if it exists anywhere
    /// in the house.
    pub fn message_for(&self, kind: ObjectKind) -> Option<&'static str> {
        self.world.resource::<House>().message_for(kind)
    }

    /// A play-session summary as of the current tick.
    pub fn stats(&self) -> SessionStats {
        let now = self.world.resource::<TickCount>().0;
        self.world.resource::<SessionState>().stats(now)
    }

    /// A read-only view of the current state for a renderer.
    pub fn snapshot(&mut self) -> Snapshot {
        let player = {
            let mut query = self
                .world
                .query_filtered::<(&Position, &Facing, &Animation), With<PlayerControlled>>();
            let (position, facing, animation) = query.single(&self.world).expect("player is always spawned");
            ActorSnapshot {
                position: position.0,
                facing: facing.0,
                frame: animation.frame,
                moving: animation.moving,
            }
        };
        let companion = {
            let mut query = self
                .world
                .query_filtered::<(&Position, &Facing, &Animation), With<Companion>>();
            let (position, facing, animation) = query.single(&self.world).expect("companion is always spawned");
            ActorSnapshot {
                position: position.0,
                facing: facing.0,
                frame: animation.frame,
                moving: animation.moving,
            }
        };

        let session = self.world.resource::<SessionState>();
        let house = self.world.resource::<House>();
        let room = house
            .room(session.current_room)
            .expect("current room is always valid");

        Snapshot {
            room: room.id,
            title: room.title,
            player,
            companion,
            objects: room
                .objects
                .iter()
                .map(|object| ObjectSnapshot {
                    kind: object.kind,
                    rect: object.rect,
                    discovered: object.discovered,
                    special: object.special,
                })
                .collect(),
            special_event_fired: session.special_event_fired,
            progress: session.discovery_progress(house),
        }
    }
}

/// Logs recoverable faults reported by systems during the tick. A failed
/// operation degrades to a skipped step, never a dead loop.
fn report_errors(mut errors: ResMut<Events<GameError>>) {
    for error in errors.drain() {
        tracing::error!(%error, "tick error");
    }
}
