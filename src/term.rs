use crate::{Coords, TermInt};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

/// Foreground/background pairs used by the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorPair {
    Snake,
    Food,
}

impl ColorPair {
    fn colors(self) -> (Color, Color) {
        match self {
            ColorPair::Snake => (Color::Green, Color::Black),
            ColorPair::Food => (Color::Red, Color::Black),
        }
    }
}

/// What the game needs from a display. Writes may be buffered until `refresh`.
pub trait Screen {
    fn draw_glyph(&mut self, pos: Coords, ch: char) -> Result<()>;
    fn clear_cell(&mut self, pos: Coords) -> Result<()>;
    fn clear_screen(&mut self) -> Result<()>;
    fn refresh(&mut self) -> Result<()>;
    fn print_text(&mut self, pos: Coords, text: &str) -> Result<()>;
    fn set_color(&mut self, pair: ColorPair, on: bool) -> Result<()>;

    /// Returns a pending key press, if any, without waiting.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;
    fn wait_for_any_key(&mut self) -> Result<KeyEvent>;
}

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        Ok(TermManager { width, height, stdout: stdout() })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
            .context("Error hiding cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error disabling raw mode")?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking)
            .context("Error showing cursor")?;
        execute!(self.stdout, LeaveAlternateScreen).context("Error leaving alt screen")?;
        Ok(())
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }
}

impl Screen for TermManager {
    fn draw_glyph(&mut self, pos: Coords, ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }

    fn clear_cell(&mut self, pos: Coords) -> Result<()> {
        self.draw_glyph(pos, ' ')
    }

    fn clear_screen(&mut self) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
            .context("Error clearing")?;
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }

    fn print_text(&mut self, pos: Coords, text: &str) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(text))?;
        Ok(())
    }

    fn set_color(&mut self, pair: ColorPair, on: bool) -> Result<()> {
        if on {
            let (fg, bg) = pair.colors();
            queue!(self.stdout, style::SetForegroundColor(fg), style::SetBackgroundColor(bg))?;
        } else {
            queue!(self.stdout, style::ResetColor)?;
        }
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                return Ok(Some(ev));
            }
        }

        Ok(None)
    }

    fn wait_for_any_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read().context("Error reading key")? {
                return Ok(ev);
            }
        }
    }
}
