use crate::error::ClientError;
use crate::trip::TripDetails;

/// The trip-planner seam. One call answers "what is the next trip from
/// origin to destination, skipping anything that departs within
/// `trip_wait_time` minutes".
///
/// Implementations are expected to be blocking; the poll loop that drives
/// the sensor is synchronous by design.
pub trait TripClient {
    fn get_trip(
        &self,
        origin_id: &str,
        destination_id: &str,
        api_key: &str,
        trip_wait_time: u32,
    ) -> Result<TripDetails, ClientError>;
}

// A shared reference queries like the client it points to, so callers can
// keep hold of a client they lend to the sensor.
impl<C: TripClient + ?Sized> TripClient for &C {
    fn get_trip(
        &self,
        origin_id: &str,
        destination_id: &str,
        api_key: &str,
        trip_wait_time: u32,
    ) -> Result<TripDetails, ClientError> {
        (**self).get_trip(origin_id, destination_id, api_key, trip_wait_time)
    }
}

/// Client that answers every query with a fixed trip. Used by the demo
/// binary and tests; swap in a real planner-backed client for live data.
#[derive(Debug, Clone)]
pub struct CannedTripClient {
    trip: TripDetails,
}

impl CannedTripClient {
    pub fn new(trip: TripDetails) -> Self {
        Self { trip }
    }
}

impl TripClient for CannedTripClient {
    fn get_trip(
        &self,
        _origin_id: &str,
        _destination_id: &str,
        api_key: &str,
        _trip_wait_time: u32,
    ) -> Result<TripDetails, ClientError> {
        if api_key.is_empty() {
            return Err(ClientError::Request("API key rejected".to_string()));
        }
        Ok(self.trip.clone())
    }
}

/// Canned trip data for the demo binary and static tests.
pub fn sample_trip() -> TripDetails {
    TripDetails {
        due: 12,
        origin_stop_id: "10101100".to_string(),
        origin_name: "Wynyard Station".to_string(),
        departure_time: "2023-06-15T08:30:00Z".to_string(),
        destination_stop_id: "10102050".to_string(),
        destination_name: "Gosford Station".to_string(),
        arrival_time: "2023-06-15T09:45:00Z".to_string(),
        origin_transport_type: "Train".to_string(),
        origin_transport_name: "Sydney Trains Network".to_string(),
        origin_line_name: "Central Coast & Newcastle Line".to_string(),
        origin_line_name_short: "CCN".to_string(),
        occupancy: "MANY_SEATS".to_string(),
        changes: 0,
        real_time_trip_id: "151K.1915.100.12.A.8.79575".to_string(),
        latitude: -33.8966,
        longitude: 151.2067,
    }
}
