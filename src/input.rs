//! Measurement input
//!
//! Probing and download benchmarking happen elsewhere; this module only
//! turns their finished output into [`RankedResult`]s, either from a JSON
//! document or from generated demo data.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    path::PathBuf,
};

use rand::Rng;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::{utils, ProbeResult, RankedResult};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed measurement document")]
    Parse(#[from] serde_json::Error),
    #[error("record {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// One measurement as it appears in the input document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeasurementRecord {
    pub address: IpAddr,
    pub sent: usize,
    pub received: usize,
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default)]
    pub colo: String,
    #[serde(default)]
    pub download_speed: f64,
}

impl MeasurementRecord {
    fn into_result(self, index: usize) -> Result<RankedResult, InputError> {
        let invalid = |reason: String| InputError::InvalidRecord { index, reason };

        if self.received > self.sent {
            return Err(invalid(format!(
                "received {} exceeds sent {}",
                self.received, self.sent
            )));
        }
        let delay = utils::time::duration_from_ms_f64(self.delay_ms)
            .ok_or_else(|| invalid(format!("invalid delay {}ms", self.delay_ms)))?;
        if !self.download_speed.is_finite() || self.download_speed < 0.0 {
            return Err(invalid(format!(
                "invalid download speed {}",
                self.download_speed
            )));
        }

        let probe = ProbeResult::new(self.address, self.sent, self.received, delay, self.colo);
        Ok(RankedResult::new(probe).with_download_speed(self.download_speed))
    }
}

/// Parse a JSON array of measurement records.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RankedResult>, InputError> {
    let records: Vec<MeasurementRecord> = serde_json::from_reader(reader)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_result(index))
        .collect()
}

pub fn parse_records(json: &str) -> Result<Vec<RankedResult>, InputError> {
    read_records(json.as_bytes())
}

/// Load measurements from a file, or from stdin when `path` is `-`.
pub fn load(path: &str) -> Result<Vec<RankedResult>, InputError> {
    let results = if path == "-" {
        debug!("Reading measurements from stdin");
        read_records(io::stdin().lock())?
    } else {
        let file = File::open(path).map_err(|source| InputError::Read {
            path: PathBuf::from(path),
            source,
        })?;
        read_records(BufReader::new(file))?
    };
    info!("Loaded {} measurements from {}", results.len(), path);
    Ok(results)
}

const SIMULATED_COLOS: [(&str, u64); 8] = [
    ("LAX", 150),
    ("SJC", 160),
    ("NRT", 60),
    ("HKG", 40),
    ("SIN", 80),
    ("FRA", 220),
    ("AMS", 230),
    ("EWR", 190), // Not in the city table, shows up under its code
];

/// Generate `count` plausible measurements for demos and testing.
pub fn simulate(count: usize) -> Vec<RankedResult> {
    info!("Generating {} simulated measurements", count);
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| {
            let (colo, base_latency) = SIMULATED_COLOS[rng.gen_range(0..SIMULATED_COLOS.len())];

            let addr = if rng.gen_bool(0.2) {
                IpAddr::V6(Ipv6Addr::new(
                    0x2606,
                    0x4700,
                    0,
                    0,
                    0,
                    0,
                    rng.gen(),
                    rng.gen(),
                ))
            } else {
                IpAddr::V4(Ipv4Addr::new(104, rng.gen_range(16..32), rng.gen(), rng.gen()))
            };

            let sent = 4;
            // Mostly clean, with the occasional lossy address
            let lost = if rng.gen_bool(0.15) { rng.gen_range(1..=sent) } else { 0 };
            let received = sent - lost;

            let delay_ms = if received == 0 {
                0.0
            } else {
                (base_latency + rng.gen_range(0..60)) as f64 + rng.gen::<f64>()
            };
            let download_speed = if received == 0 {
                0.0
            } else {
                rng.gen_range(0.0..20.0) * 1024.0 * 1024.0
            };

            let probe = ProbeResult::new(
                addr,
                sent,
                received,
                utils::time::duration_from_ms_f64(delay_ms).unwrap_or_default(),
                colo,
            );
            RankedResult::new(probe).with_download_speed(download_speed)
        })
        .collect()
}
