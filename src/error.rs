use thiserror::Error;

/// Errors raised while fitting a trajectory between two endpoints.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParabolaError {
    #[error("endpoint ({x}, {y}) is not a finite screen position")]
    NonFiniteEndpoint { x: f32, y: f32 },
    #[error("span of {span} pixels exceeds the {limit} pixel sampling limit")]
    SpanTooLarge { span: f32, limit: usize },
}

/// Errors that can occur while loading or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A point given as `X,Y` could not be parsed.
    #[error("Invalid point '{0}', expected X,Y")]
    InvalidPoint(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Validation(String),
}
