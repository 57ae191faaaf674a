use next_journey::{CannedTripClient, JourneySensor, SCAN_INTERVAL, SensorConfig, sample_trip};
use std::thread;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Next Journey - Demo Mode");
    println!("========================");
    println!("(Canned trip data - wire a real TripClient for live departures)\n");

    let mut config = SensorConfig::new("10101100", "10102050", "demo-api-key");
    config.trip_wait_time = 5;

    let mut sensor = match JourneySensor::new(config, CannedTripClient::new(sample_trip())) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("✗ Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("✓ Sensor ready: {}", sensor.name());
    println!("Polling every {} seconds...", SCAN_INTERVAL.as_secs());
    println!("Press Ctrl+C to exit\n");

    loop {
        match sensor.update() {
            Ok(()) => {
                println!(
                    "\n[{}] {}: {} {} ({})",
                    chrono::Local::now().format("%H:%M:%S"),
                    sensor.name(),
                    sensor.state().unwrap_or_default(),
                    sensor.unit_of_measurement(),
                    sensor.icon()
                );
                if let Some(attrs) = sensor.attributes() {
                    for (key, value) in &attrs {
                        println!("  {}: {}", key, value);
                    }
                }
            }
            Err(e) => {
                eprintln!(
                    "\n[{}] ✗ Update failed: {}",
                    chrono::Local::now().format("%H:%M:%S"),
                    e
                );
                if sensor.state().is_some() {
                    println!("  (Keeping last known departure)");
                }
            }
        }

        thread::sleep(SCAN_INTERVAL);
    }
}
