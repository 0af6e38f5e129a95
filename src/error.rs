use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Graph construction and lookup errors.
///
/// All of these indicate an ingestion or ordering bug upstream and abort the
/// run; there is no recovery path.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("port '{port}' not registered; add ports before linking routes")]
    UnknownPort { port: String },

    #[error("no port matches '{query}'")]
    PortNotFound { query: String },

    #[error("commodity '{commodity}' not listed on the {side} side of '{port}'")]
    CommodityNotListed {
        commodity: String,
        side: &'static str,
        port: String,
    },
}

/// Ship simulation invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("cannot sell with an empty cargo hold; buy before selling within a hop")]
    EmptyCargo,
}

/// Route-tree search invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("cannot merge legs: sell side '{sell}' does not chain with buy side '{buy}'")]
    MergeMismatch { sell: String, buy: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
