use swiftris::core::{
    Block, ConfigError, EngineConfig, FallOutcome, GameEvent, Randomizer, Swiftris,
};
use swiftris::types::{BlockColor, Command, GamePhase, Orientation, ShapeKind};

/// Hands out a fixed sequence of numbers, repeating it when exhausted.
struct Script(Vec<u32>, usize);

impl Randomizer for Script {
    fn next_u32(&mut self) -> u32 {
        let value = self.0[self.1 % self.0.len()];
        self.1 += 1;
        value
    }
}

// Kind, orientation, color indices for `Shape::random`.
const SQUARE: [u32; 3] = [0, 0, 0];
const FLAT_LINE: [u32; 3] = [1, 0, 4];
const UPRIGHT_LINE: [u32; 3] = [1, 1, 4];

fn scripted(values: [u32; 3]) -> Swiftris<Script> {
    scripted_with(EngineConfig::default(), values)
}

fn scripted_with(config: EngineConfig, values: [u32; 3]) -> Swiftris<Script> {
    Swiftris::with_rng(config, Script(values.to_vec(), 0)).unwrap()
}

fn fill(game: &mut Swiftris<Script>, columns: impl IntoIterator<Item = i32>, row: i32) {
    for column in columns {
        game.grid_mut()
            .set(column, row, Some(Block::new(column, row, BlockColor::Red)));
    }
}

fn cells<R: Randomizer>(game: &Swiftris<R>) -> Vec<(i32, i32)> {
    game.falling_shape()
        .unwrap()
        .blocks()
        .iter()
        .map(|b| (b.column, b.row))
        .collect()
}

#[test]
fn begin_game_prepares_preview_and_emits_event() {
    let mut game = scripted(SQUARE);
    game.begin_game();

    assert_eq!(game.phase(), GamePhase::Playing);
    let next = game.next_shape().unwrap();
    assert_eq!(next.kind(), ShapeKind::Square);
    assert_eq!((next.column(), next.row()), (12, 1));
    assert!(game.falling_shape().is_none());
    assert_eq!(
        game.take_events(),
        vec![GameEvent::GameDidBegin { level: 1, score: 0 }]
    );
}

#[test]
fn spawn_collision_ends_game_and_restores_preview() {
    let mut game = scripted(SQUARE);
    game.begin_game();
    // The square spawns over (5,0) (6,0) (5,1) (6,1).
    fill(&mut game, [5], 1);

    assert!(game.spawn_next().is_none());
    assert_eq!(game.phase(), GamePhase::Ended);
    assert!(game.falling_shape().is_none());

    let next = game.next_shape().unwrap();
    assert_eq!(next.kind(), ShapeKind::Square);
    assert_eq!((next.column(), next.row()), (12, 1));
    let preview: Vec<(i32, i32)> = next.blocks().iter().map(|b| (b.column, b.row)).collect();
    assert_eq!(preview, vec![(13, 1), (14, 1), (13, 2), (14, 2)]);

    assert_eq!(
        game.take_events(),
        vec![
            GameEvent::GameDidBegin { level: 1, score: 0 },
            GameEvent::GameDidEnd { level: 1, score: 0 },
        ]
    );
}

#[test]
fn spawn_out_of_bounds_ends_game() {
    let config = EngineConfig {
        start_column: 8,
        ..EngineConfig::default()
    };
    let mut game = scripted_with(config, FLAT_LINE);
    game.begin_game();
    assert!(game.spawn_next().is_none());
    assert_eq!(game.phase(), GamePhase::Ended);
}

#[test]
fn walls_stop_horizontal_moves() {
    let mut game = scripted(FLAT_LINE);
    game.begin_game();
    game.spawn_next().unwrap();
    game.take_events();

    let mut moves = 0;
    while game.move_left() {
        moves += 1;
    }
    assert_eq!(moves, 4);
    assert_eq!(cells(&game), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);

    let mut right = 0;
    while game.move_right() {
        right += 1;
    }
    assert_eq!(right, 6);
    assert_eq!(cells(&game), vec![(6, 1), (7, 1), (8, 1), (9, 1)]);

    let moved = game
        .take_events()
        .iter()
        .filter(|e| matches!(e, GameEvent::ShapeDidMove(_)))
        .count();
    assert_eq!(moved, 10);
}

#[test]
fn rotation_into_wall_is_reverted_exactly() {
    let mut game = scripted(UPRIGHT_LINE);
    game.begin_game();
    game.spawn_next().unwrap();
    while game.move_right() {}
    game.take_events();

    let before = *game.falling_shape().unwrap();
    assert_eq!(before.orientation(), Orientation::Ninety);
    assert!(before.blocks().iter().all(|b| b.column == 9));

    assert!(!game.rotate_clockwise());
    assert_eq!(*game.falling_shape().unwrap(), before);
    assert!(game.events().is_empty());
}

#[test]
fn rotation_into_stack_is_reverted() {
    let mut game = scripted(UPRIGHT_LINE);
    game.begin_game();
    game.spawn_next().unwrap();
    // Clockwise from upright lays the line flat across row 2.
    fill(&mut game, [4], 2);

    let before = *game.falling_shape().unwrap();
    assert!(!game.rotate_clockwise());
    assert_eq!(*game.falling_shape().unwrap(), before);

    assert!(game.rotate_counter_clockwise());
    assert_eq!(game.falling_shape().unwrap().orientation(), Orientation::Zero);
}

#[test]
fn tick_moves_then_lands_on_floor() {
    let mut game = scripted(SQUARE);
    game.begin_game();
    game.spawn_next().unwrap();
    game.take_events();

    let mut moved = 0;
    let outcome = loop {
        match game.tick() {
            FallOutcome::Moved => moved += 1,
            other => break other,
        }
    };
    assert_eq!(outcome, FallOutcome::Landed);
    assert_eq!(moved, 18);
    assert!(game.falling_shape().is_none());
    for (column, row) in [(5, 18), (6, 18), (5, 19), (6, 19)] {
        assert!(game.grid().is_occupied(column, row));
    }

    let events = game.take_events();
    assert_eq!(events.len(), 19);
    assert_eq!(
        events.last(),
        Some(&GameEvent::ShapeDidLand { level: 1, score: 0 })
    );

    // Nothing falls until the caller spawns again.
    assert_eq!(game.tick(), FallOutcome::Idle);
}

#[test]
fn drop_emits_drop_then_land() {
    let mut game = scripted(SQUARE);
    game.begin_game();
    game.spawn_next().unwrap();
    fill(&mut game, 0..10, 19);
    game.take_events();

    assert!(game.drop_shape());
    let events = game.take_events();
    assert_eq!(events.len(), 2);
    match events[0] {
        GameEvent::ShapeDidDrop(shape) => assert_eq!(shape.row(), 17),
        other => panic!("expected drop, got {:?}", other),
    }
    assert_eq!(events[1], GameEvent::ShapeDidLand { level: 1, score: 0 });
    assert!(game.grid().is_occupied(5, 18));
    assert!(game.grid().is_occupied(6, 17));
}

#[test]
fn soft_drop_never_lands() {
    let mut game = scripted(SQUARE);
    game.begin_game();
    game.spawn_next().unwrap();

    let mut steps = 0;
    while game.lower_shape() {
        steps += 1;
    }
    assert_eq!(steps, 18);
    assert!(game.is_shape_resting());
    assert!(game.falling_shape().is_some());
    assert_eq!(game.grid().len(), 0);
}

#[test]
fn resting_reports_contact_with_stack() {
    let mut game = scripted(FLAT_LINE);
    game.begin_game();
    game.spawn_next().unwrap();
    assert!(!game.is_shape_resting());

    fill(&mut game, [7], 2);
    assert!(game.is_shape_resting());
}

#[test]
fn single_line_clear_levels_up_with_low_threshold() {
    let config = EngineConfig {
        level_threshold: 40,
        ..EngineConfig::default()
    };
    let mut game = scripted_with(config, FLAT_LINE);
    game.begin_game();
    game.spawn_next().unwrap();
    fill(&mut game, 0..6, 19);
    game.move_right();
    game.move_right();
    game.drop_shape();
    game.take_events();

    let cleared = game.remove_completed_lines();
    assert_eq!(cleared.lines(), 1);
    assert_eq!(game.score(), 40);
    assert_eq!(game.level(), 2);
    assert_eq!(game.tick_interval_ms(), 500);
    assert_eq!(
        game.take_events(),
        vec![GameEvent::GameDidLevelUp { level: 2 }]
    );
}

#[test]
fn commands_after_game_over_do_nothing() {
    let mut game = scripted(SQUARE);
    game.begin_game();
    game.spawn_next().unwrap();
    game.end_game();
    game.take_events();

    for command in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::RotateCw,
        Command::RotateCcw,
        Command::SoftDrop,
        Command::Drop,
        Command::Tick,
    ] {
        assert!(!game.apply(command), "{:?}", command);
    }
    assert!(game.spawn_next().is_none());
    assert!(game.events().is_empty());
}

#[test]
fn begin_game_again_starts_fresh() {
    let mut game = scripted(FLAT_LINE);
    game.begin_game();
    game.spawn_next().unwrap();
    fill(&mut game, 0..6, 19);
    game.move_right();
    game.move_right();
    game.drop_shape();
    game.remove_completed_lines();
    assert_eq!(game.score(), 40);

    game.end_game();
    game.remove_all_blocks();
    game.begin_game();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert!(game.falling_shape().is_none());
    assert!(game.spawn_next().is_some());
}

#[test]
fn same_seed_same_game() {
    let play = |seed| {
        let mut game = Swiftris::new(seed);
        game.begin_game();
        let mut kinds = Vec::new();
        for _ in 0..20 {
            let Some((falling, _)) = game.spawn_next() else { break };
            kinds.push((falling.kind(), falling.orientation(), falling.color()));
            game.drop_shape();
            game.remove_completed_lines();
        }
        (kinds, game.score())
    };
    assert_eq!(play(4242), play(4242));
}

#[test]
fn snapshot_mirrors_engine() {
    let mut game = scripted(SQUARE);
    game.begin_game();
    game.spawn_next().unwrap();
    fill(&mut game, [0], 19);

    let snap = game.snapshot();
    assert_eq!((snap.columns, snap.rows), (10, 20));
    assert_eq!(snap.cells.len(), 200);
    assert_eq!(snap.cell(0, 19), Some(BlockColor::Red));
    assert_eq!(snap.cell(1, 19), None);
    assert_eq!(snap.cell(-1, 0), None);
    assert_eq!(snap.falling, game.falling_shape().copied());
    assert_eq!(snap.next, game.next_shape().copied());
    assert!(snap.playable());
    assert_eq!(snap.tick_interval_ms, 600);

    let mut reused = snap.clone();
    game.end_game();
    game.snapshot_into(&mut reused);
    assert!(reused.game_over());
    assert!(reused.falling.is_none());
}

#[test]
fn set_next_shape_reanchors_at_preview() {
    let mut game = Swiftris::new(9);
    game.begin_game();
    let shape =
        swiftris::core::Shape::new(ShapeKind::T, Orientation::OneEighty, BlockColor::Blue, 0, 0);
    game.set_next_shape(shape);

    let next = game.next_shape().unwrap();
    assert_eq!((next.column(), next.row()), (12, 1));
    let (falling, _) = game.spawn_next().unwrap();
    assert_eq!(falling.kind(), ShapeKind::T);
    assert_eq!(falling.orientation(), Orientation::OneEighty);
    assert_eq!((falling.column(), falling.row()), (4, 0));
}

#[test]
fn invalid_config_is_rejected() {
    let config = EngineConfig {
        rows: 2,
        ..EngineConfig::default()
    };
    assert!(matches!(
        Swiftris::with_config(config, 1),
        Err(ConfigError::BoardTooSmall { columns: 10, rows: 2 })
    ));

    let huge = EngineConfig {
        columns: 70_000,
        rows: 70_000,
        ..EngineConfig::default()
    };
    assert!(matches!(
        Swiftris::with_config(huge, 1),
        Err(ConfigError::BoardTooLarge { .. })
    ));
}
