use std::path::Path;

use serde::Deserialize;

use crate::constants::{FIRST_STAGE_GROUP, PAYLOAD_GROUP, SECOND_STAGE_GROUP, STANDARD_GRAVITY};
use crate::errors::TelemetryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackingRule {
    #[default]
    Cumulative,
    PayloadPlusPrefix,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub reference_gravity: f64,
    pub payload_group: String,
    pub stage_groups: Vec<String>, // ignition order
    pub stacking: StackingRule,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        TelemetryConfig {
            reference_gravity: STANDARD_GRAVITY,
            payload_group: PAYLOAD_GROUP.to_string(),
            stage_groups: vec![FIRST_STAGE_GROUP.to_string(), SECOND_STAGE_GROUP.to_string()],
            stacking: StackingRule::Cumulative,
        }
    }
}

impl TelemetryConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, TelemetryError> {
        let config: TelemetryConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TelemetryError> {
        if !self.reference_gravity.is_finite() || self.reference_gravity <= 0.0 {
            return Err(TelemetryError::Config(format!(
                "reference_gravity must be positive, got {}",
                self.reference_gravity
            )));
        }
        if self.stage_groups.is_empty() {
            return Err(TelemetryError::Config(
                "at least one stage group is required".to_string(),
            ));
        }
        if self.stage_groups.iter().any(|tag| *tag == self.payload_group) {
            return Err(TelemetryError::Config(format!(
                "payload group '{}' is also listed as a stage",
                self.payload_group
            )));
        }
        Ok(())
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TelemetryConfig, TelemetryError> {
    let contents = std::fs::read_to_string(path)?;
    TelemetryConfig::from_toml_str(&contents)
}
