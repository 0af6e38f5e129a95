//! Run configuration loaded from TOML.

use serde::Deserialize;
use std::path::Path;

use rust_decimal::Decimal;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use crate::domain::Ship;
use crate::error::ConfigError;
use crate::search::SearchOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    pub ship: ShipConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bounds and filters for the route search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Origin post, matched by the partial-name rule.
    pub origin: String,

    /// Optional destination post; only paths ending there are reported.
    pub destination: Option<String>,

    /// Maximum number of trade hops. Must be non-negative.
    pub max_hops: i64,

    /// Hard cap on surviving children per expanded node.
    pub max_children: Option<usize>,

    /// Generations between best-of-generation pruning cuts.
    pub split_depth: Option<u32>,

    /// Commodity names never to buy.
    #[serde(default)]
    pub exclude_commodities: Vec<String>,

    /// Include posts whose location path marks them hidden.
    #[serde(default)]
    pub allow_hidden: bool,
}

/// Starting capital and cargo space.
#[derive(Debug, Clone, Deserialize)]
pub struct ShipConfig {
    pub credits: Decimal,
    pub cargo_capacity: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.origin.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "search.origin",
            });
        }
        if self.search.max_hops < 0 {
            return Err(ConfigError::InvalidValue {
                field: "search.max_hops",
                reason: format!("may not be negative, got {}", self.search.max_hops),
            });
        }
        if self.search.max_hops > i64::from(u32::MAX) {
            return Err(ConfigError::InvalidValue {
                field: "search.max_hops",
                reason: format!("out of range, got {}", self.search.max_hops),
            });
        }
        if self.ship.cargo_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ship.cargo_capacity",
                reason: "must be positive".into(),
            });
        }
        if self.ship.credits < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "ship.credits",
                reason: "may not be negative".into(),
            });
        }

        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }

    /// Engine options derived from the `[search]` section.
    ///
    /// `max_hops` has been validated non-negative by this point.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_hops: self.search.max_hops as u32,
            max_children: self.search.max_children,
            split_depth: self.search.split_depth,
            exclude_commodities: self.search.exclude_commodities.iter().cloned().collect(),
        }
    }

    /// A fresh ship funded from the `[ship]` section.
    pub fn ship(&self) -> Ship {
        Ship::new(self.ship.credits, self.ship.cargo_capacity)
    }
}
