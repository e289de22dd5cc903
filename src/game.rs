use std::thread::sleep;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;

use crate::config::{FOOD_CHAR, QUIT_KEY, SCORE_ROW, SNAKE_CHAR, TICK_INTERVAL};
use crate::position::Position;
use crate::session::{GameState, Session, Step};
use crate::snake::Direction::{self, *};
use crate::term::{ColorPair, Screen};

const WELCOME: &[&str] = &[
    "S N A K E",
    "",
    "To play the game use:",
    " 'a' to move left.",
    " 'd' to move right.",
    " 'w' to move up.",
    " 's' to move down.",
    " 'e' to quit.",
    "",
    "Press any key to start",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

pub struct SnakeGame<'a, S: Screen> {
    screen: &'a mut S,
    session: Session,
}

impl<'a, S: Screen> SnakeGame<'a, S> {
    pub fn new(screen: &'a mut S, session: Session) -> Self {
        SnakeGame { screen, session }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Plays until the quit key and returns the final score.
    pub fn run(&mut self) -> Result<u32> {
        'game: loop {
            while let Some(key_ev) = self.screen.poll_key()? {
                match command_for(&key_ev) {
                    Some(Command::Quit) => break 'game,
                    Some(Command::Turn(dir)) => {
                        self.session.turn(dir);
                    }
                    None => {}
                }
            }

            if self.tick()?.is_none() {
                break;
            }
            sleep(TICK_INTERVAL);
        }

        let score = self.session.score();
        info!("Quit with final score {}", score);

        let final_score = format!("Your Final Score: {}", score);
        self.show_message(&[&final_score, "Press any key to exit"])?;
        self.screen.wait_for_any_key()?;
        Ok(score)
    }

    /// One frame: acknowledges the welcome or game-over screen when needed,
    /// then advances the simulation and draws it. `None` when the player
    /// quit from one of those screens.
    pub fn tick(&mut self) -> Result<Option<Step>> {
        match self.session.state() {
            GameState::NotStarted => {
                self.show_message(WELCOME)?;
                if !self.acknowledge()? {
                    return Ok(None);
                }
                self.session.start();
                self.screen.clear_screen()?;
            }
            GameState::GameOver => {
                let score = format!("Your Score: {}", self.session.score());
                self.show_message(&["Game Over", &score, "Press any key to start"])?;
                if !self.acknowledge()? {
                    return Ok(None);
                }
                self.session.restart();
                self.screen.clear_screen()?;
            }
            GameState::Running => {}
        }

        let old_tail = self.session.snake().tail();
        let step = self.session.step();
        self.render(old_tail)?;
        Ok(Some(step))
    }

    ///////////////////////////////////////////////////////////////////////////

    fn render(&mut self, old_tail: Position) -> Result<()> {
        let food_visible = self.session.flash_food();
        let body = self.session.snake().body();

        if !body.contains(&old_tail) {
            self.screen.clear_cell(old_tail.cell())?;
        }

        self.screen.set_color(ColorPair::Snake, true)?;
        for pos in body {
            self.screen.draw_glyph(pos.cell(), SNAKE_CHAR)?;
        }
        self.screen.set_color(ColorPair::Snake, false)?;

        let food = self.session.food().position();
        if food_visible {
            self.screen.set_color(ColorPair::Food, true)?;
            self.screen.draw_glyph(food.cell(), FOOD_CHAR)?;
            self.screen.set_color(ColorPair::Food, false)?;
        } else if !body.contains(&food) {
            self.screen.clear_cell(food.cell())?;
        }

        let status = format!("Score: {}", self.session.score());
        self.screen.print_text((0, SCORE_ROW), &status)?;
        self.screen.refresh()
    }

    /// Blocks for one key. False when that key asks to quit.
    fn acknowledge(&mut self) -> Result<bool> {
        let key_ev = self.screen.wait_for_any_key()?;
        Ok(command_for(&key_ev) != Some(Command::Quit))
    }

    fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        self.screen.clear_screen()?;
        for (i, line) in lines.iter().enumerate() {
            self.screen.print_text((0, i as u16), line)?;
        }
        self.screen.refresh()
    }
}

/// Turn keys ignore case; the quit key does not.
pub fn command_for(ev: &KeyEvent) -> Option<Command> {
    match ev {
        KeyEvent { code: KeyCode::Char('c'), modifiers } if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyEvent { code: KeyCode::Char(ch), modifiers: _ } => match *ch {
            QUIT_KEY => Some(Command::Quit),
            'w' | 'W' => Some(Command::Turn(Up)),
            's' | 'S' => Some(Command::Turn(Down)),
            'a' | 'A' => Some(Command::Turn(Left)),
            'd' | 'D' => Some(Command::Turn(Right)),
            _ => None,
        },
        _ => None,
    }
}
