use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use rand::Rng;
use serde::Deserialize;

/// Optional `runner.toml` contents. Every field has an environment override.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub runner_addr: Option<String>,
    pub token: Option<String>,
    pub nickname: Option<String>,
    pub warmup_ms: Option<u64>,
    pub tick_ms: Option<u64>,
}

/// Fully resolved settings the runner starts with.
#[derive(Debug, Clone)]
pub struct Settings {
    pub runner_addr: String,
    pub token: String,
    pub nickname: String,
    pub warmup: Duration,
    pub cadence: Duration,
}

const CONFIG_FILE: &str = "runner.toml";
const DEFAULT_RUNNER_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_NICKNAME: &str = "ArenaBot";
const DEFAULT_WARMUP_MS: u64 = 1_000;
const DEFAULT_TICK_MS: u64 = 20;

impl Settings {
    /// Resolution order per field: environment variable, then config file,
    /// then default. A missing config file is fine; a malformed one is not.
    pub fn load() -> anyhow::Result<Self> {
        let file = match resolve_config_path(CONFIG_FILE) {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config at {}", path.display()))?;
                toml::from_str(&text).with_context(|| "Failed to parse TOML")?
            }
            None => RunnerConfig::default(),
        };
        Ok(Self::resolve(file))
    }

    fn resolve(file: RunnerConfig) -> Self {
        let token = env_string("ARENA_BOT_TOKEN")
            .or(file.token)
            .unwrap_or_else(random_token);
        Self {
            runner_addr: env_string("ARENA_BOT_RUNNER_ADDR")
                .or(file.runner_addr)
                .unwrap_or_else(|| DEFAULT_RUNNER_ADDR.to_string()),
            token,
            nickname: env_string("ARENA_BOT_NICKNAME")
                .or(file.nickname)
                .unwrap_or_else(|| DEFAULT_NICKNAME.to_string()),
            warmup: Duration::from_millis(
                env_millis("ARENA_BOT_WARMUP_MS")
                    .or(file.warmup_ms)
                    .unwrap_or(DEFAULT_WARMUP_MS),
            ),
            cadence: Duration::from_millis(
                env_millis("ARENA_BOT_TICK_MS")
                    .or(file.tick_ms)
                    .unwrap_or(DEFAULT_TICK_MS),
            ),
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn env_millis(key: &str) -> Option<u64> {
    env_string(key).and_then(|v| v.parse().ok())
}

/// Registration token fallback for local runs, where the runner accepts any
/// unique value.
fn random_token() -> String {
    format!("{:032x}", rand::rng().random::<u128>())
}

/// Search order: `ARENA_BOT_CONFIG_DIR/<name>`, `./<name>`, then the
/// repo-local `config/<name>` next to the workspace root.
fn resolve_config_path(name: &str) -> Option<PathBuf> {
    let rel = Path::new(name);

    if let Some(root) = env::var_os("ARENA_BOT_CONFIG_DIR") {
        let candidate = PathBuf::from(root).join(rel);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        let candidate = cwd.join(rel);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    // This crate lives at <repo_root>/crates/runner.
    let candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)?
        .join("config")
        .join(rel);
    if candidate.is_file() {
        return Some(candidate);
    }

    None
}
