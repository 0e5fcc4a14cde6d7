use std::{
    error::Error,
    fmt::Display,
    io::{self, stdout, Stdout, Write},
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use game::screen::Screen;

/// Full-screen crossterm terminal. Cells are buffered and only written out on `show`.
pub struct TerminalScreen {
    stdout: Stdout,
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl TerminalScreen {
    /// Switches the terminal to raw mode on the alternate screen.
    pub fn init() -> Result<Self, TerminalError> {
        let (width, height) = terminal::size().map_err(TerminalError::Init)?;
        enable_raw_mode().map_err(TerminalError::Init)?;
        let mut stdout = stdout();
        if let Err(err) = execute!(
            stdout,
            EnterAlternateScreen,
            Hide,
            SetBackgroundColor(Color::Black),
            SetForegroundColor(Color::White),
            Clear(ClearType::All),
        ) {
            let _ = disable_raw_mode();
            return Err(TerminalError::Init(err));
        }
        Ok(Self {
            stdout,
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
        })
    }

    /// Restores the terminal to the state it was in before `init`.
    pub fn release(mut self) -> Result<(), TerminalError> {
        execute!(self.stdout, ResetColor, Show, LeaveAlternateScreen)
            .map_err(TerminalError::Release)?;
        disable_raw_mode().map_err(TerminalError::Release)
    }
}

impl Screen for TerminalScreen {
    fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((self.width, self.height))
    }

    fn set_cell(&mut self, row: u16, col: u16, symbol: char) {
        if row < self.height && col < self.width {
            self.cells[row as usize * self.width as usize + col as usize] = symbol;
        }
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.cells = vec![' '; width as usize * height as usize];
        } else {
            self.cells.fill(' ');
        }
    }

    fn show(&mut self) -> io::Result<()> {
        if self.width == 0 {
            return Ok(());
        }
        for (row, line) in self.cells.chunks(self.width as usize).enumerate() {
            let line: String = line.iter().collect();
            queue!(self.stdout, MoveTo(0, row as u16), Print(line))?;
        }
        self.stdout.flush()
    }
}

#[derive(Debug)]
pub enum TerminalError {
    Init(io::Error),
    Draw(io::Error),
    Release(io::Error),
}

impl Display for TerminalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalError::Init(err) => write!(f, "failed to initialise terminal: {err}"),
            TerminalError::Draw(err) => write!(f, "failed to draw to terminal: {err}"),
            TerminalError::Release(err) => write!(f, "failed to restore terminal: {err}"),
        }
    }
}

impl Error for TerminalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TerminalError::Init(err) | TerminalError::Draw(err) | TerminalError::Release(err) => {
                Some(err)
            }
        }
    }
}
