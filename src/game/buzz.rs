use std::fmt;

const START_PATTERN: &[u64] = &[0, 100, 100, 100];
const CORRECT_PATTERN: &[u64] = &[100, 100, 100, 100, 100, 100];
const PANIC_PATTERN: &[u64] = &[0, 200];
const GAME_OVER_PATTERN: &[u64] = &[0, 2000];
const NO_BUZZ_PATTERN: &[u64] = &[0];

/// Haptic feedback requested by a round.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BuzzType {
    Start,
    Correct,
    CountdownPanic,
    GameOver,
    NoBuzz,
}

impl BuzzType {
    /// Vibration waveform in milliseconds, alternating between off and on.
    pub fn pattern(&self) -> &'static [u64] {
        match self {
            BuzzType::Start => START_PATTERN,
            BuzzType::Correct => CORRECT_PATTERN,
            BuzzType::CountdownPanic => PANIC_PATTERN,
            BuzzType::GameOver => GAME_OVER_PATTERN,
            BuzzType::NoBuzz => NO_BUZZ_PATTERN,
        }
    }
}

impl fmt::Display for BuzzType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuzzType::Start => "start",
            BuzzType::Correct => "correct",
            BuzzType::CountdownPanic => "panic",
            BuzzType::GameOver => "game over",
            BuzzType::NoBuzz => "none",
        };
        write!(f, "{}", name)
    }
}
