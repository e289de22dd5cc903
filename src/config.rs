use std::{env, str::FromStr, time::Duration};

use log::LevelFilter;

use crate::position::Position;
use crate::snake::Direction;

/// Largest x coordinate of the playing field; x wraps within `0..=MAX_FRAME_X`.
pub const MAX_FRAME_X: i32 = 119;
/// Largest y coordinate of the playing field; y wraps within `0..=MAX_FRAME_Y`.
pub const MAX_FRAME_Y: i32 = 29;

/// Hard ceiling on the number of segments. Far above what a game reaches in practice.
pub const MAX_SNAKE_SIZE: usize = 100;

pub const ORIGIN: (i32, i32) = (20, 20);
pub const DEFAULT_DIRECTION: Direction = Direction::Left;

pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal row of the status line, just below the field.
pub const SCORE_ROW: u16 = MAX_FRAME_Y as u16 + 2;

pub const SNAKE_CHAR: char = 'O';
pub const FOOD_CHAR: char = '#';
pub const QUIT_KEY: char = 'e';

pub const LOG_FILE: &str = "snake.log";
pub const LOG_ENV_VAR: &str = "SNAKE_LOG";

pub fn origin() -> Position {
    Position::new(ORIGIN.0, ORIGIN.1)
}

/// Log level taken from `SNAKE_LOG`, `info` when unset or invalid.
pub fn log_level() -> LevelFilter {
    parse_log_level(env::var(LOG_ENV_VAR).ok().as_deref())
}

pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}
