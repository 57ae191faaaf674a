use chrono::{Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::RefreshError;

// Timestamp patterns used by the trip planner: UTC in, local wall-clock out.
const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Raw result of one trip query, exactly as the client reports it.
// Timestamps are UTC strings, occupancy keeps the upstream casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDetails {
    pub due: i64,
    pub origin_stop_id: String,
    pub origin_name: String,
    pub departure_time: String,
    pub destination_stop_id: String,
    pub destination_name: String,
    pub arrival_time: String,
    pub origin_transport_type: String,
    pub origin_transport_name: String,
    pub origin_line_name: String,
    pub origin_line_name_short: String,
    pub occupancy: String,
    pub changes: u32,
    pub real_time_trip_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Normalized snapshot of the next trip: timestamps in local wall-clock
/// form, occupancy lower-cased. Built whole from a [`TripDetails`]; a
/// conversion error aborts the build, so callers never see a half-converted
/// snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TripInfo {
    pub due_in: i64,
    pub origin_stop_id: String,
    pub origin_name: String,
    pub departure_time: String,
    pub destination_stop_id: String,
    pub destination_name: String,
    pub arrival_time: String,
    pub transport_type: String,
    pub transport_name: String,
    pub line_name: String,
    pub line_name_short: String,
    pub occupancy: String,
    pub changes: u32,
    pub real_time_trip_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl TripInfo {
    pub fn from_details(details: TripDetails) -> Result<Self, RefreshError> {
        let departure_time = to_local_wall_clock(&details.departure_time)
            .map_err(|source| RefreshError::InvalidTimestamp {
                value: details.departure_time.clone(),
                source,
            })?;
        let arrival_time = to_local_wall_clock(&details.arrival_time)
            .map_err(|source| RefreshError::InvalidTimestamp {
                value: details.arrival_time.clone(),
                source,
            })?;

        Ok(Self {
            due_in: details.due,
            origin_stop_id: details.origin_stop_id,
            origin_name: details.origin_name,
            departure_time,
            destination_stop_id: details.destination_stop_id,
            destination_name: details.destination_name,
            arrival_time,
            transport_type: details.origin_transport_type,
            transport_name: details.origin_transport_name,
            line_name: details.origin_line_name,
            line_name_short: details.origin_line_name_short,
            occupancy: details.occupancy.to_lowercase(),
            changes: details.changes,
            real_time_trip_id: details.real_time_trip_id,
            latitude: details.latitude,
            longitude: details.longitude,
        })
    }

    // Format as "T1 to Central in 4 min"
    pub fn format(&self) -> String {
        format!(
            "{} to {} in {} min",
            self.line_name_short, self.destination_name, self.due_in
        )
    }
}

// Offset between local wall-clock and UTC, sampled from a single instant.
// Note this is the offset in effect right now, not at the converted
// timestamp's own instant.
pub fn local_utc_offset() -> Duration {
    let now = Local::now();
    now.naive_local() - now.naive_utc()
}

// Parse a UTC trip-planner timestamp and shift it by the given offset.
pub fn convert_with_offset(
    utc_string: &str,
    offset: Duration,
) -> Result<String, chrono::ParseError> {
    let parsed = NaiveDateTime::parse_from_str(utc_string, UTC_FORMAT)?;
    Ok((parsed + offset).format(LOCAL_FORMAT).to_string())
}

/// Convert a UTC timestamp string into the equivalent local wall-clock
/// string, without a zone suffix.
pub fn to_local_wall_clock(utc_string: &str) -> Result<String, chrono::ParseError> {
    convert_with_offset(utc_string, local_utc_offset())
}
