use log::{trace, warn};

use crate::config::MAX_SNAKE_SIZE;
use crate::position::Position;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// The segmented body. `body[0]` is the head and the body is never empty.
pub struct Snake {
    body: Vec<Position>,
    direction: Direction,
    pending_turn: Option<Direction>,
}

impl Snake {
    pub fn new(origin: Position, direction: Direction) -> Self {
        let mut body = Vec::with_capacity(MAX_SNAKE_SIZE);
        body.push(origin);
        Snake { body, direction, pending_turn: None }
    }

    #[cfg(test)]
    pub fn from_segments(segments: &[(i32, i32)], direction: Direction) -> Self {
        assert!(!segments.is_empty());
        let body = segments.iter().map(|&(x, y)| Position::new(x, y)).collect();
        Snake { body, direction, pending_turn: None }
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Buffers a turn for the next `advance`. A reversal of the heading in
    /// effect is refused and leaves any earlier buffered turn alone.
    pub fn turn(&mut self, requested: Direction) -> bool {
        if requested == self.direction.opposite() {
            trace!("Rejected turn {:?} while heading {:?}", requested, self.direction);
            return false;
        }

        self.pending_turn = Some(requested);
        true
    }

    pub fn advance(&mut self) {
        if let Some(dir) = self.pending_turn.take() {
            self.direction = dir;
        }

        // Tail first, so every follower reads its predecessor before it moves
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        self.body[0].step(self.direction);
    }

    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.body[1..].iter().any(|pos| *pos == head)
    }

    /// Appends a segment on top of the current tail; the follow rule spreads
    /// it out on the next `advance`. Returns false once the body is full.
    pub fn grow(&mut self) -> bool {
        if self.body.len() >= MAX_SNAKE_SIZE {
            warn!("Snake reached {} segments, growth capped", MAX_SNAKE_SIZE);
            return false;
        }

        let tail = self.tail();
        self.body.push(tail);
        true
    }

    pub fn reset(&mut self, origin: Position, direction: Direction) {
        self.body.truncate(1);
        self.body[0] = origin;
        self.direction = direction;
        self.pending_turn = None;
    }
}
