use serde::{Deserialize, Serialize};
use crate::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Position { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse a compass letter: N, S, E or W (case-insensitive).
    pub fn from_compass(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'N' => Some(Direction::Up),
            'S' => Some(Direction::Down),
            'E' => Some(Direction::Right),
            'W' => Some(Direction::Left),
            _ => None,
        }
    }
}

/// What a body segment trails behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Head,
    Segment(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    head: Position,
    /// Index 0 is the segment right behind the head.
    body: Vec<Segment>,
    direction: Direction,
    last_position: Position,
    /// Cell the tail (or the head, with no body) left on the last step.
    vacated: Position,
}

impl Snake {
    pub fn new(head: Position, direction: Direction) -> Self {
        Snake {
            head,
            body: Vec::new(),
            direction,
            last_position: head,
            vacated: head,
        }
    }

    /// Build a snake with an explicit body, mostly useful for setting up collisions.
    pub fn with_body(head: Position, direction: Direction, body: &[Position]) -> Self {
        let mut snake = Snake::new(head, direction);
        snake.body = body.iter().map(|&position| Segment { position }).collect();
        snake
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn body(&self) -> &[Segment] {
        &self.body
    }

    pub fn segment_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().map(|s| s.position)
    }

    /// Number of body segments, head excluded.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Head position before the most recent step.
    pub fn last_position(&self) -> Position {
        self.last_position
    }

    pub fn predecessor(&self, index: usize) -> Option<Link> {
        match index {
            i if i >= self.body.len() => None,
            0 => Some(Link::Head),
            i => Some(Link::Segment(i - 1)),
        }
    }

    pub fn occupies(&self, position: Position) -> bool {
        self.head == position || self.segment_positions().any(|p| p == position)
    }

    /// Change facing. A reversal is refused unless `allow_reverse` is set.
    /// Returns whether the facing was accepted.
    pub fn turn(&mut self, direction: Direction, allow_reverse: bool) -> bool {
        if !allow_reverse && direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advance one cell in the facing direction, wrapping around the grid edges.
    pub fn step(&mut self, grid: &Grid) {
        self.last_position = self.head;

        let cols = grid.cols as i32;
        let rows = grid.rows as i32;
        let (mut x, mut y) = (self.head.x as i32, self.head.y as i32);
        match self.direction {
            Direction::Up => {
                y -= 1;
                if y < 0 {
                    y += rows;
                }
            }
            Direction::Down => y = (y + 1) % rows,
            Direction::Left => {
                x -= 1;
                if x < 0 {
                    x += cols;
                }
            }
            Direction::Right => x = (x + 1) % cols,
        }
        self.head = Position::new(x as i16, y as i16);

        self.update_body();
    }

    // Each segment takes the spot its predecessor held before this step
    fn update_body(&mut self) {
        let mut last = self.last_position;
        for segment in self.body.iter_mut() {
            let previous = segment.position;
            segment.position = last;
            last = previous;
        }
        self.vacated = last;
    }

    /// Append a segment on top of the head. It trails out on the next step.
    pub fn grow(&mut self) {
        self.body.push(Segment { position: self.head });
    }

    /// Append a segment on the cell the tail just left, so the snake is one
    /// longer without overlapping itself.
    pub fn extend_tail(&mut self) {
        self.body.push(Segment { position: self.vacated });
    }

    pub fn is_biting_itself(&self) -> bool {
        self.segment_positions().any(|p| p == self.head)
    }

    pub(crate) fn respawn(&mut self, head: Position) {
        self.head = head;
        self.body.clear();
        self.last_position = head;
        self.vacated = head;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub snake: Snake,
    pub score: u32,
    spawn: Position,
}

impl Player {
    pub fn new(spawn: Position, direction: Direction) -> Self {
        Player {
            snake: Snake::new(spawn, direction),
            score: 0,
            spawn,
        }
    }

    /// Clear score and body and put the head back on the spawn cell. Facing is kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.snake.respawn(self.spawn);
    }
}
