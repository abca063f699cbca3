use anyhow::{Context, Result};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::game::buzz::BuzzType;
use crate::output::{GameOutput, Message};

const BELL: &str = "\x07";

/// Terminal output. Buzzes ring the terminal bell, once per pulse.
#[derive(Debug)]
pub struct ConsoleOutput {
    buzz_enabled: bool,
}

impl ConsoleOutput {
    pub fn new(buzz_enabled: bool) -> Self {
        ConsoleOutput { buzz_enabled }
    }
}

// Patterns alternate off and on, so pulses sit at odd indices
fn pulse_count(buzz: BuzzType) -> usize {
    buzz.pattern()
        .iter()
        .skip(1)
        .step_by(2)
        .filter(|ms| **ms > 0)
        .count()
}

impl GameOutput for ConsoleOutput {
    fn say(&self, message: &Message) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", message).context("Could not write to stdout")?;
        handle.flush().context("Could not flush stdout")
    }

    fn buzz(&self, buzz: BuzzType) -> Result<()> {
        if !self.buzz_enabled {
            return Ok(());
        }
        let pulses = pulse_count(buzz);
        if pulses == 0 {
            return Ok(());
        }
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for pulse in 0..pulses {
            if pulse > 0 {
                thread::sleep(Duration::from_millis(50));
            }
            write!(handle, "{}", BELL).context("Could not write to stdout")?;
        }
        writeln!(handle, "*bzzz* ({})", buzz).context("Could not write to stdout")?;
        handle.flush().context("Could not flush stdout")
    }
}
