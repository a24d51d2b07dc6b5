use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Window sizes and neutral-prior constants shared by the calculators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Recent matches considered for team form
    pub form_window: usize,
    /// Recent toss wins considered for toss impact
    pub toss_window: usize,
    /// Recent matches whose deliveries feed player impact
    pub player_window: usize,
    /// Runs-equivalent of one wicket when averaging win margins (approximation)
    pub wicket_margin_factor: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            form_window: 5,
            toss_window: 20,
            player_window: 20,
            wicket_margin_factor: 3.0,
        }
    }
}

impl StatsConfig {
    /// Build a config from `CRICKET_STATS_*` variables, falling back to defaults.
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            form_window: read_var("CRICKET_STATS_FORM_WINDOW", defaults.form_window)?,
            toss_window: read_var("CRICKET_STATS_TOSS_WINDOW", defaults.toss_window)?,
            player_window: read_var("CRICKET_STATS_PLAYER_WINDOW", defaults.player_window)?,
            wicket_margin_factor: read_var(
                "CRICKET_STATS_WICKET_MARGIN_FACTOR",
                defaults.wicket_margin_factor,
            )?,
        };

        tracing::debug!("Loaded stats config: {:?}", config);
        Ok(config)
    }
}

fn read_var<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}
