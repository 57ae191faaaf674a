use std::time::Duration;

use serde_json::{Map, Value};
use tracing::debug;

use crate::client::TripClient;
use crate::config::{SensorConfig, Verbosity};
use crate::data::TripData;
use crate::error::{ConfigError, RefreshError};

pub const ATTRIBUTION: &str = "Data provided by Transport NSW";
pub const UNIT_OF_MEASUREMENT: &str = "min";

/// How often the host is expected to call [`JourneySensor::update`].
pub const SCAN_INTERVAL: Duration = Duration::from_secs(60);

// Attribute keys, kept byte-for-byte as host dashboards expect them.
const ATTR_DUE_IN: &str = "due in";
const ATTR_ORIGIN_STOP_ID: &str = "origin_stop_id";
const ATTR_ORIGIN_NAME: &str = "origin_name";
const ATTR_DEPARTURE_TIME: &str = "departure_time";
const ATTR_DESTINATION_STOP_ID: &str = "destination_stop_id";
const ATTR_DESTINATION_NAME: &str = "destination_name";
const ATTR_ARRIVAL_TIME: &str = "arrival_time";
const ATTR_ORIGIN_TRANSPORT_TYPE: &str = "origin_transport_type";
const ATTR_ORIGIN_TRANSPORT_NAME: &str = "origin_transport_name";
const ATTR_ORIGIN_LINE_NAME: &str = "origin_line_name";
const ATTR_ORIGIN_LINE_NAME_SHORT: &str = "short_origin_line_name";
const ATTR_OCCUPANCY: &str = "occupancy";
const ATTR_CHANGES: &str = "changes";
const ATTR_REAL_TIME_TRIP_ID: &str = "real_time_trip_id";
const ATTR_LATITUDE: &str = "latitude";
const ATTR_LONGITUDE: &str = "longitude";

// Frontend icon for a transport mode, with a clock for anything the
// planner reports as unknown.
pub fn icon_for(transport_type: Option<&str>) -> &'static str {
    match transport_type {
        Some("Train") => "mdi:train",
        Some("Lightrail") | Some("Light rail") => "mdi:tram",
        Some("Bus") | Some("Coach") | Some("Schoolbus") | Some("School bus") => "mdi:bus",
        Some("Ferry") => "mdi:ferry",
        _ => "mdi:clock",
    }
}

/// Next-departure sensor between two fixed stops.
///
/// The host drives it: call [`update`](Self::update) on a periodic tick
/// (see [`SCAN_INTERVAL`]), then read [`state`](Self::state),
/// [`icon`](Self::icon) and [`attributes`](Self::attributes) for display.
pub struct JourneySensor<C: TripClient> {
    data: TripData<C>,
    name: String,
    verbosity: Verbosity,
    state: Option<i64>,
    icon: &'static str,
}

impl<C: TripClient> JourneySensor<C> {
    /// Build a sensor from a validated config and a trip client. Rejects
    /// incomplete configuration before any refresh is attempted.
    pub fn new(config: SensorConfig, client: C) -> Result<Self, ConfigError> {
        let data = TripData::new(&config, client)?;
        Ok(Self {
            data,
            name: config.name,
            verbosity: config.return_info,
            state: None,
            icon: icon_for(None),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minutes until the next departure, `None` before the first
    /// successful refresh.
    pub fn state(&self) -> Option<i64> {
        self.state
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn unit_of_measurement(&self) -> &'static str {
        UNIT_OF_MEASUREMENT
    }

    pub fn attribution(&self) -> &'static str {
        ATTRIBUTION
    }

    /// Fetch the latest trip and update the headline value and icon.
    /// On failure both keep their previous values and the error is
    /// returned for the host to handle.
    pub fn update(&mut self) -> Result<(), RefreshError> {
        self.data.refresh()?;
        if let Some(info) = self.data.snapshot() {
            self.state = Some(info.due_in);
            self.icon = icon_for(Some(&info.transport_type));
            debug!(due_in = info.due_in, icon = self.icon, "Sensor state updated");
        }
        Ok(())
    }

    /// Verbosity-tiered view of the snapshot, `None` before the first
    /// successful refresh. Each tier extends the previous one.
    pub fn attributes(&self) -> Option<Map<String, Value>> {
        let info = self.data.snapshot()?;
        let mut attrs = Map::new();

        attrs.insert(ATTR_DUE_IN.to_string(), Value::from(info.due_in));
        attrs.insert(ATTR_ORIGIN_NAME.to_string(), Value::from(info.origin_name.clone()));
        attrs.insert(
            ATTR_DEPARTURE_TIME.to_string(),
            Value::from(info.departure_time.clone()),
        );
        attrs.insert(
            ATTR_DESTINATION_NAME.to_string(),
            Value::from(info.destination_name.clone()),
        );
        attrs.insert(
            ATTR_ARRIVAL_TIME.to_string(),
            Value::from(info.arrival_time.clone()),
        );
        attrs.insert(ATTR_LATITUDE.to_string(), Value::from(info.latitude));
        attrs.insert(ATTR_LONGITUDE.to_string(), Value::from(info.longitude));

        if self.verbosity != Verbosity::Brief {
            attrs.insert(ATTR_CHANGES.to_string(), Value::from(info.changes));
            attrs.insert(ATTR_OCCUPANCY.to_string(), Value::from(info.occupancy.clone()));
            attrs.insert(
                ATTR_ORIGIN_LINE_NAME.to_string(),
                Value::from(info.line_name.clone()),
            );
            attrs.insert(
                ATTR_ORIGIN_LINE_NAME_SHORT.to_string(),
                Value::from(info.line_name_short.clone()),
            );
        }

        if self.verbosity == Verbosity::Verbose {
            attrs.insert(
                ATTR_ORIGIN_STOP_ID.to_string(),
                Value::from(info.origin_stop_id.clone()),
            );
            attrs.insert(
                ATTR_DESTINATION_STOP_ID.to_string(),
                Value::from(info.destination_stop_id.clone()),
            );
            attrs.insert(
                ATTR_ORIGIN_TRANSPORT_TYPE.to_string(),
                Value::from(info.transport_type.clone()),
            );
            attrs.insert(
                ATTR_ORIGIN_TRANSPORT_NAME.to_string(),
                Value::from(info.transport_name.clone()),
            );
            attrs.insert(
                ATTR_REAL_TIME_TRIP_ID.to_string(),
                Value::from(info.real_time_trip_id.clone()),
            );
        }

        Some(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_lookup_known_modes() {
        assert_eq!(icon_for(Some("Train")), "mdi:train");
        assert_eq!(icon_for(Some("Lightrail")), "mdi:tram");
        assert_eq!(icon_for(Some("Light rail")), "mdi:tram");
        assert_eq!(icon_for(Some("Bus")), "mdi:bus");
        assert_eq!(icon_for(Some("Coach")), "mdi:bus");
        assert_eq!(icon_for(Some("Schoolbus")), "mdi:bus");
        assert_eq!(icon_for(Some("School bus")), "mdi:bus");
        assert_eq!(icon_for(Some("Ferry")), "mdi:ferry");
    }

    #[test]
    fn test_icon_lookup_falls_back_to_clock() {
        assert_eq!(icon_for(None), "mdi:clock");
        assert_eq!(icon_for(Some("n/a")), "mdi:clock");
        assert_eq!(icon_for(Some("Zeppelin")), "mdi:clock");
        assert_eq!(icon_for(Some("train")), "mdi:clock");
    }
}
