use log::{debug, info, warn};
use std::time::Duration;

use crate::game::buzz::BuzzType;
use crate::game::countdown::{format_elapsed_time, Countdown};
use crate::game::settings::Settings;
use crate::game::signal::Signal;
use crate::game::words::WordQueue;
use crate::game::State;

#[cfg(test)]
mod tests;

/// Remaining time once a round is over.
pub const DONE: Duration = Duration::from_secs(0);

/// What the player sees while a round is in progress.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundStatus {
    pub word: String,
    pub score: i32,
    pub time: String,
}

/// Mutable state of one timed round: current word, score, countdown and
/// the two signals the screen has to acknowledge.
#[derive(Debug)]
pub struct RoundState {
    duration: Duration,
    panic_threshold: Duration,
    words: WordQueue,
    word: &'static str,
    score: i32,
    countdown: Countdown,
    finished: bool,
    finish: Signal<i32>,
    buzz: Signal<BuzzType>,
}

impl RoundState {
    pub fn new(settings: &Settings) -> Self {
        RoundState {
            duration: settings.round_duration,
            panic_threshold: settings.panic_threshold,
            words: WordQueue::new(settings.seed),
            word: "",
            score: 0,
            countdown: Countdown::new(),
            finished: false,
            finish: Signal::new(),
            buzz: Signal::new(),
        }
    }

    pub fn start_round(&mut self) {
        self.words.reset();
        self.score = 0;
        self.finished = false;
        self.finish.acknowledge();
        self.buzz.acknowledge();
        self.countdown.start(self.duration);
        self.advance_word();
        self.buzz.raise(BuzzType::Start);
        info!("Round started, {} on the clock", self.remaining_time_string());
        if !self.countdown.is_running() {
            self.finish_round();
        }
    }

    pub fn on_correct(&mut self) {
        if self.finished {
            warn!("Ignoring correct answer, the round is over");
            return;
        }
        self.score += 1;
        self.buzz.raise(BuzzType::Correct);
        self.advance_word();
    }

    pub fn on_skip(&mut self) {
        if self.finished {
            warn!("Ignoring skip, the round is over");
            return;
        }
        self.score -= 1;
        self.advance_word();
    }

    pub fn advance_word(&mut self) {
        self.word = self.words.next_word();
        debug!("Next word: {} ({} left)", self.word, self.words.len());
    }

    pub fn countdown_tick(&mut self) {
        if !self.countdown.is_running() {
            return;
        }
        let remaining = Duration::from_secs(self.countdown.tick());
        debug!("Countdown: {}", format_elapsed_time(remaining));
        if remaining == DONE {
            self.finish_round();
        } else if remaining <= self.panic_threshold {
            self.buzz.raise(BuzzType::CountdownPanic);
        }
    }

    fn finish_round(&mut self) {
        self.countdown.cancel();
        self.finished = true;
        info!("Round over, final score: {}", self.score);
        self.finish.raise(self.score);
        self.buzz.raise(BuzzType::GameOver);
    }

    pub fn acknowledge_finish(&mut self) -> Option<i32> {
        if self.finish.is_active() {
            debug!("Finish signal acknowledged");
        }
        self.finish.acknowledge()
    }

    pub fn acknowledge_buzz(&mut self) -> Option<BuzzType> {
        let buzz = self.buzz.acknowledge();
        if let Some(buzz) = buzz {
            debug!("Buzz acknowledged: {}", buzz);
        }
        buzz
    }

    pub fn word(&self) -> &str {
        self.word
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn remaining_time(&self) -> Duration {
        self.countdown.remaining()
    }

    pub fn remaining_time_string(&self) -> String {
        format_elapsed_time(self.remaining_time())
    }

    pub fn status(&self) -> RoundStatus {
        RoundStatus {
            word: self.word().to_owned(),
            score: self.score(),
            time: self.remaining_time_string(),
        }
    }

    /// Final score of a round that ended and has not been acknowledged yet.
    pub fn finish_signal(&self) -> Option<i32> {
        self.finish.peek().copied()
    }

    pub fn buzz_signal(&self) -> BuzzType {
        self.buzz.peek().copied().unwrap_or(BuzzType::NoBuzz)
    }
}

impl State for RoundState {
    fn on_begin(&mut self) {
        self.start_round();
    }

    fn on_tick(&mut self, dt: Duration) {
        for _ in 0..self.countdown.elapse(dt) {
            self.countdown_tick();
        }
    }

    fn on_end(&mut self) {
        self.countdown.cancel();
    }

    fn is_over(&self) -> bool {
        self.finished
    }
}

impl Drop for RoundState {
    fn drop(&mut self) {
        self.countdown.cancel();
        debug!("Round state dropped");
    }
}
