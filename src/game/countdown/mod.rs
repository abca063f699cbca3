use std::time::Duration;


const ONE_SECOND: Duration = Duration::from_secs(1);

/// Whole-second countdown driven by the caller's clock.
#[derive(Clone, Debug, Default)]
pub struct Countdown {
    remaining_seconds: u64,
    time_since_tick: Duration,
    running: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn start(&mut self, duration: Duration) {
        self.remaining_seconds = duration.as_secs();
        self.time_since_tick = Duration::default();
        self.running = self.remaining_seconds > 0;
    }

    pub fn cancel(&mut self) {
        self.running = false;
        self.time_since_tick = Duration::default();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> Duration {
        Duration::from_secs(self.remaining_seconds)
    }

    /// Accumulates `dt` and returns how many one-second ticks are due.
    pub fn elapse(&mut self, dt: Duration) -> u64 {
        if !self.running {
            return 0;
        }
        self.time_since_tick += dt;
        let mut due = 0;
        while self.time_since_tick >= ONE_SECOND && due < self.remaining_seconds {
            self.time_since_tick -= ONE_SECOND;
            due += 1;
        }
        due
    }

    /// Consumes one second and returns the seconds left. Stops at zero.
    pub fn tick(&mut self) -> u64 {
        if self.running {
            self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
            if self.remaining_seconds == 0 {
                self.cancel();
            }
        }
        self.remaining_seconds
    }
}

/// Formats seconds as `mm:ss`, or `h:mm:ss` from one hour up.
pub fn format_elapsed_time(time: Duration) -> String {
    let seconds = time.as_secs();
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
