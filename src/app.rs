//! Headless loop driver: fixed 60 Hz ticks, scripted input, logged events.
//!
//! The library is presentation-agnostic; this driver stands in for a host.
//! It injects commands at scheduled ticks, runs the simulation at the fixed
//! tick rate, and forwards core notifications to the log.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{event, info};

use crate::constants::LOOP_TIME;
use crate::direction::Direction;
use crate::events::{GameCommand, GameEvent};
use crate::game::Game;

/// A command paired with the tick it should be injected at.
pub type ScriptedCommand = (u64, GameCommand);

pub struct App {
    game: Game,
    script: Vec<ScriptedCommand>,
    cursor: usize,
    tick: u64,
}

impl App {
    pub fn new(script: Vec<ScriptedCommand>) -> Result<App> {
        let game = Game::new()?;
        Ok(App {
            game,
            script,
            cursor: 0,
            tick: 0,
        })
    }

    /// One loop iteration: inject due commands, tick the simulation, publish
    /// events, and sleep off the frame remainder. Returns false once the
    /// session is over.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        while self.cursor < self.script.len() && self.script[self.cursor].0 <= self.tick {
            self.game.queue_command(self.script[self.cursor].1);
            self.cursor += 1;
        }

        let exit = self.game.tick();
        self.tick += 1;

        for game_event in self.game.take_events() {
            match game_event {
                GameEvent::ObjectDiscovered(kind) => {
                    let text = self.game.message_for(kind).unwrap_or_default();
                    info!(%kind, text, "discovered");
                }
                GameEvent::SpecialTriggered => {
                    let text = self.game.message_for(crate::world::ObjectKind::Gift).unwrap_or_default();
                    info!(text, "the birthday surprise!");
                }
                GameEvent::RoomChanged { from, to } => info!(%from, %to, "room changed"),
                GameEvent::NothingNearby => info!("nothing interesting here; walk closer to something"),
            }
        }

        if exit {
            let stats = self.game.stats();
            info!(?stats, "session over");
            return false;
        }

        if start.elapsed() < LOOP_TIME {
            let remaining = LOOP_TIME.saturating_sub(start.elapsed());
            if remaining != Duration::ZERO {
                spin_sleep::sleep(remaining);
            }
        } else {
            event!(
                tracing::Level::WARN,
                "Game loop behind schedule by: {:?}",
                start.elapsed() - LOOP_TIME
            );
        }

        true
    }
}

/// A short self-playing tour used by the headless binary: walk to the
/// living room, check out the couch, open the gift, and call it a day.
pub fn demo_script() -> Vec<ScriptedCommand> {
    // Step pacing: the moving flag lingers 9 ticks after an accepted step,
    // so anything queued closer than that is debounced away.
    const STEP: u64 = 10;

    fn walk(script: &mut Vec<ScriptedCommand>, at: &mut u64, steps: usize, direction: Direction) {
        for _ in 0..steps {
            script.push((*at, GameCommand::Move(direction)));
            *at += STEP;
        }
    }

    let mut script = Vec::new();
    let mut at = 0u64;

    // Bedroom: from the start position to the east exit.
    walk(&mut script, &mut at, 41, Direction::Right);
    // Living room: over to the couch.
    walk(&mut script, &mut at, 13, Direction::Right);
    walk(&mut script, &mut at, 20, Direction::Up);
    script.push((at, GameCommand::Interact));
    at += STEP;
    // Down to the gift in the corner.
    walk(&mut script, &mut at, 34, Direction::Right);
    walk(&mut script, &mut at, 23, Direction::Down);
    script.push((at, GameCommand::Interact));
    // Linger a moment, then leave.
    script.push((at + 120, GameCommand::Exit));

    script
}
