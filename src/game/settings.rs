use std::time::Duration;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub round_duration: Duration,
    pub panic_threshold: Duration,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            round_duration: Duration::from_secs(10),
            panic_threshold: Duration::from_secs(3),
            seed: None,
        }
    }
}
