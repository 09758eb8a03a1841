//! Session: the presentation-side controller around an engine.
//!
//! The engine only queues events; it never clears lines or spawns on its own.
//! [`Session::pump`] drains those events and answers them: a landed shape is
//! followed by line removal and the next spawn, and a finished game empties the
//! grid. Anything that animates (renderers, tests) reads the returned [`Pump`].

use crate::core::{
    Block, ConfigError, EngineConfig, GameEvent, GameSnapshot, LineClear, Randomizer, SimpleRng,
    Swiftris,
};
use crate::types::{Command, GamePhase};

/// What one [`Session::pump`] call processed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pump {
    /// Every event handled, in emission order
    pub events: Vec<GameEvent>,
    /// Non-empty line clears triggered by landings
    pub line_clears: Vec<LineClear>,
    /// Blocks swept off the grid when the game ended, grouped by row
    pub swept: Vec<Vec<Block>>,
}

impl Pump {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn lines_cleared(&self) -> usize {
        self.line_clears.iter().map(LineClear::lines).sum()
    }

    fn append(&mut self, later: Pump) {
        self.events.extend(later.events);
        self.line_clears.extend(later.line_clears);
        self.swept.extend(later.swept);
    }
}

pub struct Session<R = SimpleRng> {
    engine: Swiftris<R>,
}

impl Session<SimpleRng> {
    pub fn new(seed: u32) -> Self {
        Self::with_engine(Swiftris::new(seed))
    }

    pub fn with_config(config: EngineConfig, seed: u32) -> Result<Self, ConfigError> {
        Ok(Self::with_engine(Swiftris::with_config(config, seed)?))
    }
}

impl<R: Randomizer> Session<R> {
    pub fn with_engine(engine: Swiftris<R>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Swiftris<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Swiftris<R> {
        &mut self.engine
    }

    /// Begin a game on an empty grid and spawn the first shape
    ///
    /// Also used to restart. Pending events are pumped and a game still in
    /// progress is ended, so the returned [`Pump`] carries its `GameDidEnd` and
    /// sweep. Events of the new game wait for the next pump.
    pub fn start(&mut self) -> Pump {
        let mut finished = self.pump();
        if self.engine.phase() == GamePhase::Playing {
            self.engine.end_game();
            finished.append(self.pump());
        }
        if !self.engine.grid().is_empty() {
            self.engine.remove_all_blocks();
        }
        self.engine.begin_game();
        self.engine.spawn_next();
        finished
    }

    /// Forward a command to the engine. Ignored unless a game is running.
    pub fn command(&mut self, command: Command) -> bool {
        if self.engine.phase() != GamePhase::Playing {
            return false;
        }
        self.engine.apply(command)
    }

    /// Drain engine events, reacting to landings and game over until the queue stays empty
    pub fn pump(&mut self) -> Pump {
        let mut pump = Pump::default();
        loop {
            let events = self.engine.take_events();
            if events.is_empty() {
                return pump;
            }
            for event in events {
                match event {
                    GameEvent::ShapeDidLand { .. } => {
                        let clear = self.engine.remove_completed_lines();
                        if !clear.is_empty() {
                            pump.line_clears.push(clear);
                        }
                        self.engine.spawn_next();
                    }
                    GameEvent::GameDidEnd { .. } => {
                        pump.swept.extend(self.engine.remove_all_blocks());
                    }
                    _ => {}
                }
                pump.events.push(event);
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
    }

    /// Milliseconds until the next gravity tick should run
    pub fn tick_interval_ms(&self) -> u32 {
        self.engine.tick_interval_ms()
    }

    pub fn is_over(&self) -> bool {
        self.engine.phase() == GamePhase::Ended
    }
}
