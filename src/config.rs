//! Session settings for the terminal front end, read from the environment.

use std::env;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::utils::render_game_state::RenderStyle;

pub const LOG_ENV: &str = "TESSERACT_LOG";
pub const RENDER_ENV: &str = "TESSERACT_RENDER";
pub const SHOW_HISTORY_ENV: &str = "TESSERACT_SHOW_HISTORY";

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    pub render_style: RenderStyle,
    /// Print the move list after every move.
    pub show_history: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            render_style: RenderStyle::Unicode,
            show_history: false,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> ChessResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`, which maps a variable name to its value.
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> ChessResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        if let Some(filter) = read(LOG_ENV) {
            config.log_filter = filter;
        }
        if let Some(style) = read(RENDER_ENV) {
            config.render_style = parse_render_style(&style)?;
        }
        if let Some(flag) = read(SHOW_HISTORY_ENV) {
            config.show_history = parse_flag(SHOW_HISTORY_ENV, &flag)?;
        }

        Ok(config)
    }
}

fn parse_render_style(value: &str) -> ChessResult<RenderStyle> {
    match value.to_ascii_lowercase().as_str() {
        "unicode" => Ok(RenderStyle::Unicode),
        "ascii" => Ok(RenderStyle::Ascii),
        _ => Err(invalid(RENDER_ENV, value)),
    }
}

fn parse_flag(key: &str, value: &str) -> ChessResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> ChessErrors {
    ChessErrors::InvalidConfigValue {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}
