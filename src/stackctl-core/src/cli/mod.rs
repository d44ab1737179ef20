use dialoguer::Confirm;
use slog::{debug, Logger};

/// Asks the user a yes/no question.
pub trait Confirmer {
    /// Shown before a destructive prompt. Must reach the user before `ask`
    /// renders, regardless of log level.
    fn warn(&self, message: &str);

    /// `true` only on an affirmative answer. A prompt that cannot be
    /// answered (closed stdin, no terminal) counts as "no".
    fn ask(&self, prompt: &str) -> bool;
}

/// Prompts on the terminal, defaulting to "no".
pub struct TerminalConfirmer {
    logger: Logger,
}

impl TerminalConfirmer {
    pub fn new(logger: &Logger) -> Self {
        Self {
            logger: logger.clone(),
        }
    }
}

impl Confirmer for TerminalConfirmer {
    fn warn(&self, message: &str) {
        eprintln!("WARNING!");
        eprintln!("{message}");
    }

    fn ask(&self, prompt: &str) -> bool {
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(err) => {
                debug!(self.logger, "Failed to read confirmation: {}", err);
                false
            }
        }
    }
}
