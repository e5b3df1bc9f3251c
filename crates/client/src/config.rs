//! Client configuration loaded from the environment.

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `units.ron`, `map.ron` and
    /// `scenario.ron`.
    pub content_dir: PathBuf,
    pub ticks: u64,
    /// Overrides the tick length from `config.toml`.
    pub tick_seconds: Option<f64>,
    /// Log a progress line every this many ticks. Zero disables it.
    pub report_every: u64,
    /// Print the final map to stdout.
    pub show_map: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(Self::DEFAULT_CONTENT_DIR),
            ticks: Self::DEFAULT_TICKS,
            tick_seconds: None,
            report_every: Self::DEFAULT_REPORT_EVERY,
            show_map: false,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_CONTENT_DIR: &'static str = "content";
    pub const DEFAULT_TICKS: u64 = 400;
    pub const DEFAULT_REPORT_EVERY: u64 = 100;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_CONTENT_DIR` - Content directory (default: `content`)
    /// - `SKIRMISH_TICKS` - Number of ticks to simulate (default: 400)
    /// - `SKIRMISH_TICK_SECONDS` - Tick length override (default: from `config.toml`)
    /// - `SKIRMISH_REPORT_EVERY` - Progress log interval in ticks (default: 100)
    /// - `SKIRMISH_SHOW_MAP` - Print the final map (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("SKIRMISH_CONTENT_DIR").filter(|dir| !dir.is_empty()) {
            config.content_dir = PathBuf::from(dir);
        }
        if let Some(ticks) = parse(&lookup, "SKIRMISH_TICKS") {
            config.ticks = ticks;
        }
        config.tick_seconds =
            parse::<f64>(&lookup, "SKIRMISH_TICK_SECONDS").filter(|seconds| *seconds > 0.0);
        if let Some(every) = parse(&lookup, "SKIRMISH_REPORT_EVERY") {
            config.report_every = every;
        }
        if let Some(show) = lookup("SKIRMISH_SHOW_MAP").as_deref().and_then(parse_bool) {
            config.show_map = show;
        }

        config
    }
}

fn parse<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key)?.trim().parse().ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
