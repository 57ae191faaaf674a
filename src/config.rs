use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_NAME: &str = "Next Journey";

/// How much of the trip snapshot is exposed as display attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Brief,
    #[default]
    Medium,
    Verbose,
}

/// Sensor configuration, supplied once at construction.
///
/// Deserializable so hosts can hand over a parsed JSON/YAML block directly;
/// optional fields fall back to the same defaults either way.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorConfig {
    /// Opaque stop id of the trip origin.
    pub origin_id: String,
    /// Opaque stop id of the trip destination.
    pub destination_id: String,
    /// Trip-planner API credential. Never logged.
    pub api_key: String,
    /// Display label for the sensor.
    #[serde(default = "default_name")]
    pub name: String,
    /// Skip trips departing within this many minutes.
    #[serde(default)]
    pub trip_wait_time: u32,
    /// Attribute tier exposed to the host.
    #[serde(default)]
    pub return_info: Verbosity,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl SensorConfig {
    pub fn new(
        origin_id: impl Into<String>,
        destination_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            origin_id: origin_id.into(),
            destination_id: destination_id.into(),
            api_key: api_key.into(),
            name: default_name(),
            trip_wait_time: 0,
            return_info: Verbosity::default(),
        }
    }

    // Required fields must be present and non-empty before the first
    // refresh is ever attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.origin_id.is_empty() {
            return Err(ConfigError::MissingField("origin_id"));
        }
        if self.destination_id.is_empty() {
            return Err(ConfigError::MissingField("destination_id"));
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingField("api_key"));
        }
        Ok(())
    }
}
