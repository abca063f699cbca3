use anyhow::{anyhow, Result};
use log::{info, warn};
use std::time::Duration;

use self::buzz::BuzzType;
use self::phase::*;
use crate::output::{GameOutput, Message};

pub mod buzz;
pub mod countdown;
mod phase;
pub mod settings;
pub mod signal;
pub mod words;


pub use self::phase::RoundStatus;
pub use self::settings::Settings;

trait State {
    fn on_begin(&mut self);
    fn on_tick(&mut self, dt: Duration);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

enum Phase {
    Startup,
    Round(RoundState),
    Score(ScoreState),
}

impl Phase {
    fn get_state(&mut self) -> Option<&mut dyn State> {
        match self {
            Phase::Startup => None,
            Phase::Round(s) => Some(s),
            Phase::Score(s) => Some(s),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Phase::Startup => "startup",
            Phase::Round(_) => "round",
            Phase::Score(_) => "score",
        }
    }
}

/// The game screen. Forwards player intents to the round, relays its
/// signals to the output and acknowledges them once handled.
pub struct Game<O: GameOutput> {
    settings: Settings,
    current_phase: Phase,
    last_status: Option<RoundStatus>,
    output: O,
}

impl<O: GameOutput> Game<O> {
    pub fn new(settings: Settings, output: O) -> Self {
        let mut game = Game {
            settings,
            current_phase: Phase::Startup,
            last_status: None,
            output,
        };
        game.say(&Message::Rules);
        game.begin_round();
        game
    }

    fn set_current_phase(&mut self, phase: Phase) {
        if let Some(state) = self.current_phase.get_state() {
            state.on_end();
        }

        info!("Entering game phase: {}", phase.name());
        self.current_phase = phase;
        self.last_status = None;

        if let Some(state) = self.current_phase.get_state() {
            state.on_begin();
        }

        match &self.current_phase {
            Phase::Round(_) => self.say(&Message::RoundBegins(self.settings.round_duration)),
            Phase::Score(state) => self.say(&Message::FinalScore(state.final_score())),
            Phase::Startup => (),
        }

        self.observe();
    }

    fn begin_round(&mut self) {
        let state = RoundState::new(&self.settings);
        self.set_current_phase(Phase::Round(state));
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Some(state) = self.current_phase.get_state() {
            state.on_tick(dt);
        }
        self.observe();
    }

    pub fn correct(&mut self) -> Result<()> {
        match &mut self.current_phase {
            Phase::Round(round) => round.on_correct(),
            _ => return Err(anyhow!("There is no round in progress")),
        }
        self.observe();
        Ok(())
    }

    pub fn skip(&mut self) -> Result<()> {
        match &mut self.current_phase {
            Phase::Round(round) => round.on_skip(),
            _ => return Err(anyhow!("There is no round in progress")),
        }
        self.observe();
        Ok(())
    }

    pub fn play_again(&mut self) -> Result<()> {
        match &self.current_phase {
            Phase::Score(_) => {
                self.begin_round();
                Ok(())
            }
            _ => Err(anyhow!("A round is already in progress")),
        }
    }

    pub fn help(&self) {
        self.say(&Message::Help);
    }

    pub fn say(&self, message: &Message) {
        if let Err(e) = self.output.say(message) {
            warn!("Could not display message: {:#}", e);
        }
    }

    pub fn is_round_in_progress(&self) -> bool {
        match &self.current_phase {
            Phase::Round(round) => !round.is_over(),
            _ => false,
        }
    }

    pub fn final_score(&self) -> Option<i32> {
        match &self.current_phase {
            Phase::Score(state) => Some(state.final_score()),
            _ => None,
        }
    }

    // Renders what changed, then handles each pending signal exactly once
    fn observe(&mut self) {
        let round = match &mut self.current_phase {
            Phase::Round(round) => round,
            _ => return,
        };

        let status = round.status();
        if self.last_status.as_ref() != Some(&status) {
            match self.output.say(&Message::Status(status.clone())) {
                Ok(()) => self.last_status = Some(status),
                Err(e) => warn!("Could not display round status: {:#}", e),
            }
        }

        let buzz = round.buzz_signal();
        if buzz != BuzzType::NoBuzz {
            if let Err(e) = self.output.buzz(buzz) {
                warn!("Could not buzz: {:#}", e);
            }
            round.acknowledge_buzz();
        }

        let final_score = match round.finish_signal() {
            Some(_) => round.acknowledge_finish(),
            None => None,
        };
        if let Some(final_score) = final_score {
            self.say(&Message::TimeUp);
            self.set_current_phase(Phase::Score(ScoreState::new(final_score)));
        }
    }
}
