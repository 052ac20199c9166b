use super::types::{Direction, Position};

/// Ordered body, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Position>,
    direction: Direction,
}

impl Snake {
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            segments: vec![head],
            direction,
        }
    }

    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Result<Self, String> {
        if segments.is_empty() {
            return Err("Snake needs at least one segment".to_string());
        }
        Ok(Self { segments, direction })
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// True if `pos` is covered by any segment other than the head.
    pub fn body_contains(&self, pos: Position) -> bool {
        self.segments[1..].contains(&pos)
    }

    /// Shifts every segment one slot toward the tail and puts `new_head` in
    /// front. Returns the cell the tail just left.
    pub fn advance(&mut self, new_head: Position) -> Position {
        let vacated = self.tail();
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = new_head;
        vacated
    }

    pub fn grow(&mut self, at: Position) {
        self.segments.push(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_snake() -> Snake {
        Snake::from_segments(
            vec![Position::new(5, 5), Position::new(5, 4), Position::new(5, 3)],
            Direction::Right,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_segments_rejected() {
        assert!(Snake::from_segments(Vec::new(), Direction::Up).is_err());
    }

    #[test]
    fn test_advance_shifts_body() {
        let mut snake = line_snake();
        let vacated = snake.advance(Position::new(5, 6));
        assert_eq!(vacated, Position::new(5, 3));
        assert_eq!(
            snake.segments(),
            &[Position::new(5, 6), Position::new(5, 5), Position::new(5, 4)]
        );
    }

    #[test]
    fn test_advance_single_segment() {
        let mut snake = Snake::new(Position::new(1, 1), Direction::Down);
        let vacated = snake.advance(Position::new(2, 1));
        assert_eq!(vacated, Position::new(1, 1));
        assert_eq!(snake.segments(), &[Position::new(2, 1)]);
    }

    #[test]
    fn test_grow_appends_tail() {
        let mut snake = line_snake();
        let vacated = snake.advance(Position::new(5, 6));
        snake.grow(vacated);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Position::new(5, 3));
    }

    #[test]
    fn test_body_contains_excludes_head() {
        let snake = line_snake();
        assert!(!snake.body_contains(Position::new(5, 5)));
        assert!(snake.body_contains(Position::new(5, 4)));
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(!snake.occupies(Position::new(0, 0)));
    }
}
