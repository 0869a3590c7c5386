use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use std::io::{self, BufRead};

use crate::logger::Logger;

/// Interactive prompts.
pub trait Console {
    /// True only for a `y`/`Y` answer.
    fn ask_yes_no(&mut self, prompt: &str) -> anyhow::Result<bool>;
    /// Repeats the prompt until the answer is one of `options`.
    fn ask_choice(&mut self, prompt: &str, options: &[&str]) -> anyhow::Result<String>;
    fn print(&mut self, line: &str);
    /// Block until any key is pressed.
    fn wait_for_key(&mut self) -> anyhow::Result<()>;
}

/// The process's own stdin, with prompts written through the logger so JSON
/// output stays one object per line.
pub struct Terminal {
    logger: Logger,
}

impl Terminal {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    fn read_line(&self, prompt: &str) -> anyhow::Result<String> {
        self.logger.prompt(prompt);
        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .context("reading from stdin")?;
        anyhow::ensure!(read > 0, "stdin closed");
        Ok(input.trim().to_string())
    }
}

impl Console for Terminal {
    fn ask_yes_no(&mut self, prompt: &str) -> anyhow::Result<bool> {
        let answer = self.read_line(prompt)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    fn ask_choice(&mut self, prompt: &str, options: &[&str]) -> anyhow::Result<String> {
        loop {
            let answer = self.read_line(prompt)?;
            if options.contains(&answer.as_str()) {
                return Ok(answer);
            }
            self.logger
                .warn(&format!("Invalid choice. Please enter {}.", options.join(" or ")));
        }
    }

    fn print(&mut self, line: &str) {
        self.logger.notice(line);
    }

    fn wait_for_key(&mut self) -> anyhow::Result<()> {
        self.logger.notice("Press any key to exit...");
        if terminal::enable_raw_mode().is_err() {
            // not a tty: fall back to a line read
            let mut input = String::new();
            io::stdin().lock().read_line(&mut input)?;
            return Ok(());
        }
        let result = wait_for_key_press();
        terminal::disable_raw_mode().context("restoring terminal mode")?;
        result
    }
}

fn wait_for_key_press() -> anyhow::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
