use crate::config::{MAX_FRAME_X, MAX_FRAME_Y};
use crate::snake::Direction::{self, *};
use crate::Coords;

/// A cell of the toroidal field. Both coordinates always lie inside the frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x: wrap(x, MAX_FRAME_X), y: wrap(y, MAX_FRAME_Y) }
    }

    #[cfg(test)]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[cfg(test)]
    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn set(&mut self, x: i32, y: i32) {
        *self = Position::new(x, y);
    }

    /// Moves one cell towards `direction`, wrapping around the frame edges.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Up => self.y -= 1,
            Down => self.y += 1,
            Left => self.x -= 1,
            Right => self.x += 1,
        }

        if self.x < 0 {
            self.x = MAX_FRAME_X;
        } else if self.x > MAX_FRAME_X {
            self.x = 0;
        }

        if self.y < 0 {
            self.y = MAX_FRAME_Y;
        } else if self.y > MAX_FRAME_Y {
            self.y = 0;
        }
    }

    pub fn cell(&self) -> Coords {
        (self.x as u16, self.y as u16)
    }
}

fn wrap(value: i32, max: i32) -> i32 {
    value.rem_euclid(max + 1)
}
