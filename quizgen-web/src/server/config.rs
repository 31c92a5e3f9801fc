//! Shared configuration for server modules

use quizgen_core::Config;
use std::sync::OnceLock;

/// Cached config to avoid re-parsing environment on every request
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get or initialize cached config
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}
