use std::io::Write;
use term::color::Color;
use term::{StderrTerminal, Terminal};

/// Writes to stderr, coloring labels when stderr is a terminal that supports it.
/// Without one (such as on CI), labels are written plain.
pub struct StderrWriter {
    terminal: Option<Box<StderrTerminal>>,
}

impl Default for StderrWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StderrWriter {
    pub fn new() -> Self {
        Self {
            terminal: term::stderr(),
        }
    }

    /// Writes `label` in `color`, leaving the cursor on the same line.
    pub fn label(&mut self, color: Color, label: &str) -> std::io::Result<()> {
        match self.terminal.as_mut() {
            Some(terminal) => {
                // Coloring is cosmetic; a terminal that refuses it still gets the text.
                let _ = terminal.fg(color);
                write!(terminal, "{label}")?;
                let _ = terminal.reset();
                Ok(())
            }
            None => write!(std::io::stderr(), "{label}"),
        }
    }

    pub fn line(&mut self, text: &str) -> std::io::Result<()> {
        match self.terminal.as_mut() {
            Some(terminal) => writeln!(terminal, "{text}"),
            None => writeln!(std::io::stderr(), "{text}"),
        }
    }
}
