use swiftris::core::{Block, EngineConfig, GameEvent, Randomizer, Swiftris};
use swiftris::session::Session;
use swiftris::types::{BlockColor, Command};

/// Hands out a fixed sequence of numbers, repeating it when exhausted.
struct Script(Vec<u32>, usize);

impl Randomizer for Script {
    fn next_u32(&mut self) -> u32 {
        let value = self.0[self.1 % self.0.len()];
        self.1 += 1;
        value
    }
}

fn line_session() -> Session<Script> {
    let engine = Swiftris::with_rng(EngineConfig::default(), Script(vec![1, 0, 4], 0)).unwrap();
    let mut session = Session::with_engine(engine);
    session.start();
    session
}

fn put(session: &mut Session<Script>, column: i32, row: i32) {
    session
        .engine_mut()
        .grid_mut()
        .set(column, row, Some(Block::new(column, row, BlockColor::Red)));
}

#[test]
fn start_spawns_first_shape() {
    let mut session = Session::new(11);
    session.start();
    assert!(session.engine().falling_shape().is_some());
    assert!(session.engine().next_shape().is_some());

    let pump = session.pump();
    assert_eq!(pump.events, vec![GameEvent::GameDidBegin { level: 1, score: 0 }]);
    assert!(session.pump().is_empty());
}

#[test]
fn landing_clears_lines_and_spawns_next() {
    let mut session = line_session();
    session.pump();
    for column in 0..6 {
        put(&mut session, column, 19);
    }

    assert!(session.command(Command::MoveRight));
    assert!(session.command(Command::MoveRight));
    assert!(session.command(Command::Drop));

    let pump = session.pump();
    assert_eq!(pump.events.len(), 4);
    assert!(matches!(pump.events[2], GameEvent::ShapeDidDrop(_)));
    assert!(matches!(pump.events[3], GameEvent::ShapeDidLand { .. }));
    assert_eq!(pump.lines_cleared(), 1);
    assert!(pump.swept.is_empty());

    assert!(session.engine().grid().is_empty());
    assert!(session.engine().falling_shape().is_some());
    assert_eq!(session.engine().score(), 40);
}

#[test]
fn game_over_sweeps_grid_and_restart_recovers() {
    let mut session = line_session();
    session.pump();
    // A stack with a hole in the last column, reaching row 2.
    for row in 2..20 {
        for column in 0..9 {
            put(&mut session, column, row);
        }
    }

    assert!(session.command(Command::Drop));
    let pump = session.pump();
    assert_eq!(
        pump.events.last(),
        Some(&GameEvent::GameDidEnd { level: 1, score: 0 })
    );
    assert!(pump.line_clears.is_empty());
    let swept: usize = pump.swept.iter().map(Vec::len).sum();
    assert_eq!(swept, 18 * 9 + 4);
    assert!(session.is_over());
    assert!(session.engine().grid().is_empty());

    assert!(!session.command(Command::MoveLeft));

    session.start();
    assert!(!session.is_over());
    assert!(session.engine().falling_shape().is_some());
    assert_eq!(session.engine().score(), 0);
}

#[test]
fn restart_mid_game_ends_the_running_game_first() {
    let mut session = line_session();
    session.pump();
    put(&mut session, 0, 19);
    assert!(session.command(Command::MoveRight));
    let moved = *session.engine().falling_shape().unwrap();

    let finished = session.start();
    assert_eq!(
        finished.events,
        vec![
            GameEvent::ShapeDidMove(moved),
            GameEvent::GameDidEnd { level: 1, score: 0 },
        ]
    );
    assert_eq!(finished.swept, vec![vec![Block::new(0, 19, BlockColor::Red)]]);

    assert!(!session.is_over());
    assert!(session.engine().grid().is_empty());
    assert!(session.engine().falling_shape().is_some());
    assert_eq!(
        session.pump().events,
        vec![GameEvent::GameDidBegin { level: 1, score: 0 }]
    );
}

#[test]
fn tick_command_drives_gravity() {
    let mut session = line_session();
    session.pump();
    let row = session.engine().falling_shape().unwrap().row();
    assert!(session.command(Command::Tick));
    assert_eq!(session.engine().falling_shape().unwrap().row(), row + 1);
    assert_eq!(session.tick_interval_ms(), 600);
    assert_eq!(session.pump().events.len(), 1);
}
