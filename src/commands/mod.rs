use anyhow::{anyhow, Error, Result};
use log::error;
use parking_lot::Mutex;
use std::str::FromStr;

use crate::game::Game;
use crate::output::{GameOutput, Message};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Correct,
    Skip,
    PlayAgain,
    Help,
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(input: &str) -> Result<Command> {
        match input.trim().to_lowercase().as_str() {
            "c" | "correct" => Ok(Command::Correct),
            "s" | "skip" => Ok(Command::Skip),
            "a" | "again" => Ok(Command::PlayAgain),
            "h" | "help" => Ok(Command::Help),
            "q" | "quit" => Ok(Command::Quit),
            other => Err(anyhow!("Unknown command `{}`, type `h` for help", other)),
        }
    }
}

pub fn execute<O: GameOutput>(game: &mut Game<O>, command: Command) -> Result<Flow> {
    match command {
        Command::Correct => game.correct()?,
        Command::Skip => game.skip()?,
        Command::PlayAgain => game.play_again()?,
        Command::Help => game.help(),
        Command::Quit => return Ok(Flow::Quit),
    };
    Ok(Flow::Continue)
}

/// Runs one line of player input. Failures are shown to the player.
pub fn run<O: GameOutput>(game_lock: &Mutex<Game<O>>, line: &str) -> Flow {
    let mut game = game_lock.lock();
    let result = || -> Result<Flow> {
        let command: Command = line.parse()?;
        execute(&mut game, command)
    }();

    match result {
        Ok(flow) => flow,
        Err(e) => {
            error!("{:#}", e);
            game.say(&Message::CommandError(format!("{}", e)));
            Flow::Continue
        }
    }
}
