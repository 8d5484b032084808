use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Missing stage group: no parts tagged '{0}'")]
    MissingStageGroup(String),

    #[error("Invalid reading: {field} = {value} on {source_name}")]
    InvalidReading {
        source_name: String,
        field: &'static str,
        value: f64,
    },

    #[error("Malformed telemetry frame: {0}")]
    MalformedFrame(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
