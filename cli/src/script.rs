use grid_snake::Direction;

/// Parses a move list such as `"RRDDL"`, `"R R D"` or `"right,down"`.
pub fn parse_moves(input: &str) -> Result<Vec<Direction>, String> {
    let mut moves = Vec::new();

    for token in input.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty()) {
        if let Ok(direction) = token.parse::<Direction>() {
            moves.push(direction);
            continue;
        }

        for c in token.chars() {
            let direction = c
                .to_string()
                .parse::<Direction>()
                .map_err(|_| format!("Invalid move '{}' in token '{}'", c, token))?;
            moves.push(direction);
        }
    }

    Ok(moves)
}
