use rand::Rng;

use crate::config::{MAX_FRAME_X, MAX_FRAME_Y};
use crate::position::Position;

/// A single piece of food. Placement ignores the snake, so it may land on the body.
pub struct Food {
    position: Position,
}

impl Food {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut food = Food { position: Position::new(0, 0) };
        food.relocate(rng);
        food
    }

    #[cfg(test)]
    pub fn at(x: i32, y: i32) -> Self {
        Food { position: Position::new(x, y) }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn relocate<R: Rng>(&mut self, rng: &mut R) {
        let x = rng.gen_range(0..=MAX_FRAME_X);
        let y = rng.gen_range(0..=MAX_FRAME_Y);
        self.position.set(x, y);
    }

    /// Only the head eats; food lying under the rest of the body stays put.
    pub fn is_under(&self, head: Position) -> bool {
        self.position == head
    }
}
