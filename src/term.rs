use std::io::{self, stdout, Stdout, Write};

use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};

use crate::render::{Paint, Screen};
use crate::{Cell, TermInt};

/// The real terminal, driven through crossterm.
pub struct TermManager {
    stdout: Stdout,
    raw: bool,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), raw: false }
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.raw = true;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if !self.raw {
            return Ok(());
        }

        terminal::disable_raw_mode()?;
        self.raw = false;
        execute!(
            self.stdout,
            ResetColor,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )
    }

    /// `(columns, rows)` of the terminal right now.
    pub fn size(&self) -> io::Result<(TermInt, TermInt)> {
        terminal::size()
    }
}

impl Default for TermManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

impl Screen for TermManager {
    fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    fn print_at(&mut self, pos: Cell, text: &str, paint: Paint) -> io::Result<()> {
        // Cells are 1-based, crossterm counts from 0. Column 0 is treated as 1.
        let (x, y) = (pos.0.saturating_sub(1), pos.1.saturating_sub(1));
        queue!(self.stdout, cursor::MoveTo(x, y))?;

        match paint {
            Paint::Plain => queue!(self.stdout, Print(text)),
            Paint::Food => queue!(
                self.stdout,
                SetForegroundColor(Color::Green),
                Print(text),
                ResetColor
            ),
            Paint::Score => queue!(
                self.stdout,
                SetAttribute(Attribute::Reverse),
                SetAttribute(Attribute::Underlined),
                Print(text),
                terminal::Clear(ClearType::UntilNewLine),
                SetAttribute(Attribute::Reset)
            ),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}
