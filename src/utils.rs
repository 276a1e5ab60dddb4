// Individual modules import what they need

/// Time conversion utilities
pub mod time {
    use std::time::Duration;

    /// Convert Duration to milliseconds as f64
    pub fn duration_to_ms_f64(duration: Duration) -> f64 {
        duration.as_secs_f64() * 1000.0
    }

    /// Convert a millisecond count back into a Duration, rounded to the
    /// nearest nanosecond. Returns None for negative or non-finite input.
    pub fn duration_from_ms_f64(ms: f64) -> Option<Duration> {
        let nanos = (ms * 1_000_000.0).round();
        if nanos.is_finite() && nanos >= 0.0 && nanos < u64::MAX as f64 {
            Some(Duration::from_nanos(nanos as u64))
        } else {
            None
        }
    }
}

/// Mathematical utilities
pub mod math {
    /// Bytes per second to MiB per second
    pub fn bytes_to_mib(bytes: f64) -> f64 {
        bytes / 1024.0 / 1024.0
    }
}

/// Network address utilities
pub mod network {
    use std::net::IpAddr;

    /// Format an address with its colocation code as `addr#colo`
    pub fn format_addr_with_colo(addr: IpAddr, colo: &str) -> String {
        format!("{}#{}", addr, colo)
    }
}

/// Formatting utilities
pub mod format {
    use unicode_width::UnicodeWidthStr;

    /// Fixed-point with two decimal places
    pub fn format_fixed2(value: f64) -> String {
        format!("{:.2}", value)
    }

    /// Left-align `text` in a column of `width` terminal cells.
    /// Text that is already wider is returned unchanged.
    pub fn pad_display(text: &str, width: usize) -> String {
        let used = text.width();
        let mut padded = String::with_capacity(text.len() + width.saturating_sub(used));
        padded.push_str(text);
        for _ in used..width {
            padded.push(' ');
        }
        padded
    }
}
