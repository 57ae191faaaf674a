use std::time::Instant;

use tracing::{error, info, instrument};

use crate::client::TripClient;
use crate::config::SensorConfig;
use crate::error::{ConfigError, RefreshError};
use crate::trip::TripInfo;

/// Owns the query parameters and the most recent trip snapshot.
///
/// `refresh` issues exactly one client call. The snapshot is only replaced
/// once a complete [`TripInfo`] has been built, so a failed poll leaves the
/// previous data fully intact.
pub struct TripData<C: TripClient> {
    origin_id: String,
    destination_id: String,
    api_key: String,
    trip_wait_time: u32,
    client: C,
    snapshot: Option<TripInfo>,
}

impl<C: TripClient> TripData<C> {
    pub fn new(config: &SensorConfig, client: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            origin_id: config.origin_id.clone(),
            destination_id: config.destination_id.clone(),
            api_key: config.api_key.clone(),
            trip_wait_time: config.trip_wait_time,
            client,
            snapshot: None,
        })
    }

    /// Latest trip snapshot, `None` until the first successful refresh.
    pub fn snapshot(&self) -> Option<&TripInfo> {
        self.snapshot.as_ref()
    }

    // Ask the planner for the next trip and swap in the result.
    #[instrument(
        skip(self),
        fields(origin = %self.origin_id, destination = %self.destination_id)
    )]
    pub fn refresh(&mut self) -> Result<(), RefreshError> {
        info!("Requesting next trip");
        let start_time = Instant::now();

        let details = match self.client.get_trip(
            &self.origin_id,
            &self.destination_id,
            &self.api_key,
            self.trip_wait_time,
        ) {
            Ok(d) => d,
            Err(e) => {
                let elapsed = start_time.elapsed();
                error!(elapsed_ms = elapsed.as_millis(), "Trip request failed: {}", e);
                return Err(e.into());
            }
        };

        let info = match TripInfo::from_details(details) {
            Ok(i) => i,
            Err(e) => {
                let elapsed = start_time.elapsed();
                error!(
                    elapsed_ms = elapsed.as_millis(),
                    "Trip response unusable: {}", e
                );
                return Err(e);
            }
        };

        let elapsed = start_time.elapsed();
        info!(
            elapsed_ms = elapsed.as_millis(),
            due_in = info.due_in,
            "Trip request successful, next departure in {} min",
            info.due_in
        );
        self.snapshot = Some(info);

        Ok(())
    }
}
