use anyhow::Result;
use std::fmt;
use std::time::Duration;

use crate::game::buzz::BuzzType;
use crate::game::RoundStatus;

pub mod console;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    CommandError(String),
    FinalScore(i32),
    Help,
    RoundBegins(Duration),
    Rules,
    Status(RoundStatus),
    TimeUp,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::CommandError(e) => write!(f, "{}", e),
            Message::FinalScore(score) => write!(
                f,
                "Final score: {}. Type `a` to play again or `q` to quit.",
                score
            ),
            Message::Help => write!(
                f,
                "Commands:\n  c, correct  the word was guessed\n  s, skip     skip this word\n  a, again    play another round\n  h, help     show this help\n  q, quit     leave the game"
            ),
            Message::RoundBegins(duration) => write!(
                f,
                "A new round begins! You have {} seconds.",
                duration.as_secs()
            ),
            Message::Rules => write!(
                f,
                "Guess the word! Type `c` when it was guessed or `s` to skip it. Type `h` for help."
            ),
            Message::Status(status) => write!(
                f,
                "[{}] {} (score: {})",
                status.time, status.word, status.score
            ),
            Message::TimeUp => write!(f, "Time's up!"),
        }
    }
}

pub trait GameOutput {
    fn say(&self, message: &Message) -> Result<()>;

    fn buzz(&self, buzz: BuzzType) -> Result<()>;
}
