pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod sensor;
pub mod trip;

pub use client::{CannedTripClient, TripClient, sample_trip};
pub use config::{DEFAULT_NAME, SensorConfig, Verbosity};
pub use data::TripData;
pub use error::{ClientError, ConfigError, RefreshError};
pub use sensor::{ATTRIBUTION, JourneySensor, SCAN_INTERVAL, UNIT_OF_MEASUREMENT, icon_for};
pub use trip::{TripDetails, TripInfo, convert_with_offset, to_local_wall_clock};
