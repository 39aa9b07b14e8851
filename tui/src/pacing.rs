//! Presentational delays for the terminal shells

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use std::thread;
use std::time::Duration;

use referee_core::config::PacingSettings;

use crate::Result;

/// Applies the configured delays while writing to a terminal
#[derive(Debug, Clone)]
pub struct Pacer {
    settings: PacingSettings,
}

impl Pacer {
    pub fn new(settings: PacingSettings) -> Self {
        Self { settings }
    }

    /// A pacer that never sleeps and never clears the screen
    pub fn instant() -> Self {
        Self::new(PacingSettings::instant())
    }

    pub fn settings(&self) -> &PacingSettings {
        &self.settings
    }

    fn sleep_ms(&self, ms: u64) {
        if ms > 0 {
            thread::sleep(Duration::from_millis(ms));
        }
    }

    /// Write `text` one character at a time, then a newline
    pub fn type_line<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        if self.settings.typing_delay_ms == 0 {
            writeln!(out, "{text}")?;
            return Ok(());
        }

        for c in text.chars() {
            write!(out, "{c}")?;
            out.flush()?;
            self.sleep_ms(self.settings.typing_delay_ms);
        }
        writeln!(out)?;
        Ok(())
    }

    /// Three dots, one per thinking step
    pub fn thinking_dots<W: Write>(&self, out: &mut W) -> Result<()> {
        for _ in 0..3 {
            self.sleep_ms(self.settings.thinking_step_ms);
            write!(out, ".")?;
            out.flush()?;
        }
        Ok(())
    }

    /// Pause after a recommendation banner
    pub fn result_pause(&self) {
        self.sleep_ms(self.settings.result_pause_ms);
    }

    /// Pause before the next scenario
    pub fn scenario_pause(&self) {
        self.sleep_ms(self.settings.scenario_pause_ms);
    }

    /// Pause used by the demo intro
    pub fn intro_pause(&self) {
        self.sleep_ms(self.settings.thinking_step_ms * 2);
    }

    /// Clear the screen when enabled
    pub fn clear_screen<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.settings.clear_screen {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}
