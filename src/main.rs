mod config;
mod food;
mod game;
mod position;
mod session;
mod snake;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use log::{error, info, warn};
use simplelog::{Config, WriteLogger};

use crate::config::{LOG_FILE, MAX_FRAME_X, SCORE_ROW};
use crate::game::SnakeGame;
use crate::session::Session;
use crate::term::TermManager;

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

fn main() -> Result<()> {
    // stdout belongs to the game, so logs go to a file
    let log_file = File::create(LOG_FILE).with_context(|| format!("Error creating {}", LOG_FILE))?;
    WriteLogger::init(config::log_level(), Config::default(), log_file)
        .context("Error initializing logger")?;
    info!("Starting snake");

    let mut term = TermManager::new()?;
    let (width, height) = term.get_terminal_size();
    if width <= MAX_FRAME_X as TermInt || height <= SCORE_ROW {
        warn!("Terminal is {}x{}, the field needs {}x{}", width, height, MAX_FRAME_X + 1, SCORE_ROW + 1);
    }

    // Setup may fail halfway into the alternate screen, so restore regardless
    let outcome = term.setup().and_then(|()| SnakeGame::new(&mut term, Session::new()).run());
    let restored = term.restore();
    if let Err(err) = &restored {
        error!("{:#}", err);
    }

    let score = outcome?;
    restored?;
    info!("Exiting with final score {}", score);
    Ok(())
}
