//! Descriptive statistics and pre-match features from historical cricket
//! match and ball-by-ball delivery records.
//!
//! Every calculator is a pure read-only projection over in-memory tables and
//! is total: missing history yields a documented neutral value instead of an
//! error. Only malformed input fails, when a [`MatchTable`] or
//! [`DeliveryTable`] is built.

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod tables;
pub mod teams;
pub mod utils;

pub use config::StatsConfig;
pub use error::{Result, StatsError};
pub use export::{export_features, DatasetFormat};
pub use models::*;
pub use services::*;
pub use tables::{DeliveryTable, MatchTable};
pub use teams::{abbreviation_for, color_for};

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honouring `RUST_LOG` (default `info`).
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok();
}
