//! Runner configuration from the environment and the command line.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::DROP_INTERVAL_MS;

pub const ENV_SEED: &str = "TETRINO_SEED";
pub const ENV_DROP_MS: &str = "TETRINO_DROP_MS";
pub const ENV_EVENT_LOG_PATH: &str = "TETRINO_EVENT_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the spawn RNG
    pub seed: u32,
    /// Gravity interval, at least 1ms
    pub drop_interval_ms: u32,
    /// JSONL event log destination; `None` disables the log
    pub event_log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            drop_interval_ms: DROP_INTERVAL_MS,
            event_log_path: None,
        }
    }
}

impl GameConfig {
    /// Read `TETRINO_*` variables. Unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(ENV_SEED)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let drop_interval_ms = lookup(ENV_DROP_MS)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(DROP_INTERVAL_MS)
            .max(1);

        let event_log_path = lookup(ENV_EVENT_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            drop_interval_ms,
            event_log_path,
        }
    }

    /// Apply command-line overrides (`--seed`, `--drop-ms`, `--event-log`).
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    let v = value_for(args, &mut i, "--seed")?;
                    self.seed = v
                        .parse()
                        .map_err(|_| anyhow!("tetrino: invalid --seed value: {}", v))?;
                }
                "--drop-ms" => {
                    let v = value_for(args, &mut i, "--drop-ms")?;
                    let ms: u32 = v
                        .parse()
                        .map_err(|_| anyhow!("tetrino: invalid --drop-ms value: {}", v))?;
                    if ms == 0 {
                        return Err(anyhow!("tetrino: --drop-ms must be at least 1"));
                    }
                    self.drop_interval_ms = ms;
                }
                "--event-log" => {
                    let v = value_for(args, &mut i, "--event-log")?;
                    self.event_log_path = Some(v.to_string());
                }
                other => {
                    return Err(anyhow!("tetrino: unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(self)
    }
}

fn value_for<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("tetrino: missing value for {}", flag))
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
