use std::time::Duration;

use crate::game::State;


#[derive(Debug)]
pub struct ScoreState {
    final_score: i32,
}

impl ScoreState {
    pub fn new(final_score: i32) -> Self {
        ScoreState { final_score }
    }

    pub fn final_score(&self) -> i32 {
        self.final_score
    }
}

impl State for ScoreState {
    fn on_begin(&mut self) {}

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
