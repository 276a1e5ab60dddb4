use std::{net::IpAddr, time::Duration};

use crate::utils;

/// A finished per-address measurement as handed over by the prober.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub addr: IpAddr,
    pub sent: usize,
    pub received: usize,
    pub delay: Duration,  // Average round-trip delay, zero if unmeasured
    pub colo: String,     // Colocation / region code, may be empty
}

impl ProbeResult {
    pub fn new(
        addr: IpAddr,
        sent: usize,
        received: usize,
        delay: Duration,
        colo: impl Into<String>,
    ) -> Self {
        Self {
            addr,
            sent,
            received,
            delay,
            colo: colo.into(),
        }
    }
}

/// A probe result annotated with its loss rate and download benchmark.
///
/// The loss rate is derived once when the record is built. The underlying
/// probe data is only reachable through shared references so that ranking,
/// filtering and grouping can reorder records but never rewrite them.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    probe: ProbeResult,
    loss_rate: f64,
    pub download_speed: f64, // bytes/second, zero if unmeasured
}

impl RankedResult {
    pub fn new(probe: ProbeResult) -> Self {
        let loss_rate = calculate_loss_rate(probe.sent, probe.received);
        Self {
            probe,
            loss_rate,
            download_speed: 0.0,
        }
    }

    pub fn with_download_speed(mut self, bytes_per_sec: f64) -> Self {
        self.download_speed = bytes_per_sec;
        self
    }

    pub fn probe(&self) -> &ProbeResult {
        &self.probe
    }

    pub fn addr(&self) -> IpAddr {
        self.probe.addr
    }

    pub fn delay(&self) -> Duration {
        self.probe.delay
    }

    pub fn colo(&self) -> &str {
        &self.probe.colo
    }

    /// Fraction of sent probes that went unanswered, in `[0, 1]`.
    pub fn loss_rate(&self) -> f64 {
        self.loss_rate
    }

    /// `address#colo`, the label used by every output format.
    pub fn address_label(&self) -> String {
        utils::network::format_addr_with_colo(self.probe.addr, &self.probe.colo)
    }

    /// Row representation shared by the CSV export and the console table.
    pub fn to_row(&self) -> [String; 7] {
        [
            self.address_label(),
            self.probe.sent.to_string(),
            self.probe.received.to_string(),
            utils::format::format_fixed2(self.loss_rate),
            utils::format::format_fixed2(utils::time::duration_to_ms_f64(self.probe.delay)),
            utils::format::format_fixed2(utils::math::bytes_to_mib(self.download_speed)),
            self.probe.colo.clone(),
        ]
    }
}

impl From<ProbeResult> for RankedResult {
    fn from(probe: ProbeResult) -> Self {
        Self::new(probe)
    }
}

/// Loss ratio for a probe. Nothing sent counts as nothing answered, and
/// `received` is clamped to `sent`.
pub fn calculate_loss_rate(sent: usize, received: usize) -> f64 {
    if sent == 0 {
        return 1.0;
    }
    let actual_received = received.min(sent);
    (sent - actual_received) as f64 / sent as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(addr: &str, sent: usize, received: usize, delay_ms: u64, colo: &str) -> RankedResult {
        RankedResult::new(ProbeResult::new(
            addr.parse().unwrap(),
            sent,
            received,
            Duration::from_millis(delay_ms),
            colo,
        ))
    }

    #[test]
    fn test_loss_rate_calculation() {
        assert_eq!(calculate_loss_rate(10, 10), 0.0);
        assert_eq!(calculate_loss_rate(10, 5), 0.5);
        assert_eq!(calculate_loss_rate(4, 0), 1.0);
        assert_eq!(calculate_loss_rate(4, 3), 0.25);
    }

    #[test]
    fn test_loss_rate_edge_cases() {
        // Nothing sent is reported as total loss rather than NaN
        assert_eq!(calculate_loss_rate(0, 0), 1.0);
        assert!(calculate_loss_rate(0, 0).is_finite());

        // More replies than probes never goes negative
        assert_eq!(calculate_loss_rate(3, 5), 0.0);
    }

    #[test]
    fn test_loss_rate_within_unit_interval() {
        for sent in 0..20 {
            for received in 0..=sent {
                let rate = calculate_loss_rate(sent, received);
                assert!((0.0..=1.0).contains(&rate), "sent={sent} received={received}");
            }
        }
    }

    #[test]
    fn test_ranked_result_caches_zero_loss() {
        let r = result("1.1.1.1", 10, 10, 20, "LAX");
        assert_eq!(r.loss_rate(), 0.0);
        assert_eq!(r.loss_rate(), 0.0);
        assert_eq!(r.download_speed, 0.0);
    }

    #[test]
    fn test_to_row_matches_export_layout() {
        let r = result("1.1.1.1", 10, 10, 20, "LAX");
        assert_eq!(
            r.to_row(),
            ["1.1.1.1#LAX", "10", "10", "0.00", "20.00", "0.00", "LAX"].map(String::from)
        );

        let r = result("2.2.2.2", 10, 5, 50, "LAX").with_download_speed(15.5 * 1024.0 * 1024.0);
        assert_eq!(
            r.to_row(),
            ["2.2.2.2#LAX", "10", "5", "0.50", "50.00", "15.50", "LAX"].map(String::from)
        );
    }

    #[test]
    fn test_to_row_ipv6_and_empty_colo() {
        let r = result("2606:4700::1111", 3, 2, 0, "");
        let row = r.to_row();
        assert_eq!(row[0], "2606:4700::1111#");
        assert_eq!(row[3], "0.33");
        assert_eq!(row[4], "0.00");
        assert_eq!(row[6], "");
    }

    #[test]
    fn test_sub_millisecond_delay_formatting() {
        let r = RankedResult::new(ProbeResult::new(
            "8.8.8.8".parse().unwrap(),
            1,
            1,
            Duration::from_micros(1_250),
            "FRA",
        ));
        assert_eq!(r.to_row()[4], "1.25");
    }

    #[test]
    fn test_accessors_reflect_probe() {
        let r = result("9.9.9.9", 4, 3, 120, "NRT");
        assert_eq!(r.addr().to_string(), "9.9.9.9");
        assert_eq!(r.delay(), Duration::from_millis(120));
        assert_eq!(r.colo(), "NRT");
        assert_eq!(r.probe().sent, 4);
        assert_eq!(r.probe().received, 3);
        assert_eq!(r.address_label(), "9.9.9.9#NRT");
    }
}
