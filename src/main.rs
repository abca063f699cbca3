use anyhow::{Context, Result};
use log::{info, LevelFilter};
use parking_lot::Mutex;
use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

mod commands;
mod config;
mod game;
mod output;

use crate::commands::Flow;
use crate::config::Config;
use crate::game::Game;
use crate::output::console::ConsoleOutput;

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config_path = config::default_path()?;
    let config = Config::load(&config_path)?;
    let tick_rate = config.tick_rate;

    let output = ConsoleOutput::new(config.buzz);
    let game = Arc::new(Mutex::new(Game::new(config.settings, output)));

    {
        let game = Arc::clone(&game);
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                thread::sleep(tick_rate);
                let now = Instant::now();
                game.lock().tick(now.duration_since(last_tick));
                last_tick = now;
            }
        });
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Could not read player input")?;
        if line.trim().is_empty() {
            continue;
        }
        if commands::run(&game, &line) == Flow::Quit {
            break;
        }
    }

    let game = game.lock();
    if let Some(score) = game.final_score() {
        info!("Leaving the game, final score: {}", score);
    } else if game.is_round_in_progress() {
        info!("Leaving the game in the middle of a round");
    }
    Ok(())
}
