use grid_snake::{GameStatus, GridSnakeEngine, Position};

/// Text dump of the grid: `H` head, `o` body, `A` apple, `.` empty.
pub fn render_board(engine: &GridSnakeEngine) -> String {
    let (rows, columns) = (engine.rows(), engine.columns());
    let mut cells = vec![vec!['.'; columns]; rows];

    let apple = engine.apple_position();
    cells[apple.row][apple.col] = 'A';

    for Position { row, col } in engine.snake_segments().iter().skip(1) {
        cells[*row][*col] = 'o';
    }
    let head = engine.snake_segments()[0];
    cells[head.row][head.col] = 'H';

    cells
        .into_iter()
        .map(|line| line.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn describe_status(engine: &GridSnakeEngine) -> String {
    let status = match engine.status() {
        GameStatus::Playing => "playing",
        GameStatus::GameOver => "game over",
        GameStatus::BoardFull => "board full",
    };
    format!(
        "status: {}, score: {}, length: {}, moves: {}, seed: {}",
        status,
        engine.score(),
        engine.snake_segments().len(),
        engine.moves_made(),
        engine.seed()
    )
}
