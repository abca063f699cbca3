use anyhow::{anyhow, Context, Result};
use directories_next::BaseDirs;
use log::info;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::game::Settings;

const CONFIG_PATH_VARIABLE: &str = "GUESS_THE_WORD_CONFIG";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub settings: Settings,
    pub tick_rate: Duration,
    pub buzz: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            settings: Default::default(),
            tick_rate: Duration::from_millis(default_tick_rate()),
            buzz: default_buzz(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    round: TomlRound,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct TomlRound {
    #[serde(default = "default_duration")]
    duration_seconds: u64,
    #[serde(default = "default_panic")]
    panic_seconds: u64,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct TomlGeneral {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
    #[serde(default = "default_buzz")]
    buzz: bool,
    #[serde(default)]
    seed: Option<u64>,
}

fn default_duration() -> u64 {
    10
}

fn default_panic() -> u64 {
    3
}

fn default_tick_rate() -> u64 {
    100
}

fn default_buzz() -> bool {
    true
}

impl Default for TomlRound {
    fn default() -> Self {
        TomlRound {
            duration_seconds: default_duration(),
            panic_seconds: default_panic(),
        }
    }
}

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral {
            tick_rate_ms: default_tick_rate(),
            buzz: default_buzz(),
            seed: None,
        }
    }
}

pub fn default_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_VARIABLE) {
        return Ok(PathBuf::from(path));
    }
    let mut path = BaseDirs::new()
        .context("Could not locate system directories")?
        .config_dir()
        .to_path_buf();
    path.push("guess-the-word");
    path.push("config.toml");
    Ok(path)
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Default::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let config = Config::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Config> {
        let raw: TomlConfig = toml::from_str(content)?;
        if raw.round.duration_seconds == 0 {
            return Err(anyhow!("Round duration must be at least one second"));
        }
        if raw.general.tick_rate_ms == 0 {
            return Err(anyhow!("Tick rate must be at least one millisecond"));
        }
        Ok(Config {
            settings: Settings {
                round_duration: Duration::from_secs(raw.round.duration_seconds),
                panic_threshold: Duration::from_secs(raw.round.panic_seconds),
                seed: raw.general.seed,
            },
            tick_rate: Duration::from_millis(raw.general.tick_rate_ms),
            buzz: raw.general.buzz,
        })
    }
}
