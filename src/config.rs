//! Pipeline configuration
//!
//! A single value built once from the command line and passed by reference
//! into every stage.

use std::time::Duration;

use crate::args::{Args, SortOrder};

pub const DEFAULT_OUTPUT: &str = "./dist/result.csv";
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(9999);
pub const DEFAULT_MIN_DELAY: Duration = Duration::ZERO;
pub const DEFAULT_MAX_LOSS_RATE: f64 = 1.0;
pub const DEFAULT_PRINT_NUM: usize = 10;
pub const DEFAULT_COLO_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub max_delay: Duration,
    pub min_delay: Duration,
    pub max_loss_rate: f64,
    pub output: String,
    pub print_num: usize,
    pub colo_limit: usize,
    pub sort: SortOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_delay: DEFAULT_MAX_DELAY,
            min_delay: DEFAULT_MIN_DELAY,
            max_loss_rate: DEFAULT_MAX_LOSS_RATE,
            output: DEFAULT_OUTPUT.to_string(),
            print_num: DEFAULT_PRINT_NUM,
            colo_limit: DEFAULT_COLO_LIMIT,
            sort: SortOrder::default(),
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            max_delay: Duration::from_millis(args.max_delay),
            min_delay: Duration::from_millis(args.min_delay),
            max_loss_rate: args.max_loss_rate,
            output: args.output.clone(),
            print_num: args.print_num,
            colo_limit: args.colo_limit,
            sort: args.sort,
        }
    }
}

impl Config {
    /// File export is disabled by an empty or blank output path
    pub fn no_output(&self) -> bool {
        self.output.trim().is_empty()
    }

    pub fn no_print(&self) -> bool {
        self.print_num == 0
    }

    /// The delay window only applies when it lies inside the default
    /// `[0, 9999ms]` window and differs from it.
    pub fn delay_filter_enabled(&self) -> bool {
        if self.max_delay > DEFAULT_MAX_DELAY || self.min_delay < DEFAULT_MIN_DELAY {
            return false;
        }
        !(self.max_delay == DEFAULT_MAX_DELAY && self.min_delay == DEFAULT_MIN_DELAY)
    }

    pub fn loss_filter_enabled(&self) -> bool {
        self.max_loss_rate < DEFAULT_MAX_LOSS_RATE
    }

    /// Path of the simplified export: the CSV path with `.csv` swapped for `.txt`
    pub fn txt_output(&self) -> String {
        let base = self.output.strip_suffix(".csv").unwrap_or(&self.output);
        format!("{base}.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.max_delay, Duration::from_millis(9999));
        assert_eq!(config.min_delay, Duration::ZERO);
        assert_eq!(config.max_loss_rate, 1.0);
        assert_eq!(config.output, "./dist/result.csv");
        assert_eq!(config.print_num, 10);
        assert_eq!(config.colo_limit, 8);
        assert_eq!(config.sort, SortOrder::Speed);
        assert!(!config.no_output());
        assert!(!config.no_print());
        assert!(!config.delay_filter_enabled());
        assert!(!config.loss_filter_enabled());
    }

    #[test]
    fn test_config_from_args_matches_default() {
        let args = Args::try_parse_from(["iprank", "--simulate"]).unwrap();
        assert_eq!(Config::from(&args), Config::default());
    }

    #[test]
    fn test_config_from_custom_args() {
        let args = Args::try_parse_from([
            "iprank", "--simulate", "--tl", "200", "--tll", "10", "--tlr", "0.2", "--sort", "latency",
        ])
        .unwrap();
        let config = Config::from(&args);
        assert_eq!(config.max_delay, Duration::from_millis(200));
        assert_eq!(config.min_delay, Duration::from_millis(10));
        assert_eq!(config.max_loss_rate, 0.2);
        assert_eq!(config.sort, SortOrder::Latency);
        assert!(config.delay_filter_enabled());
        assert!(config.loss_filter_enabled());
    }

    #[test]
    fn test_no_output_on_blank_path() {
        let mut config = Config::default();
        config.output = String::new();
        assert!(config.no_output());
        config.output = " ".to_string();
        assert!(config.no_output());
        config.output = "result.csv".to_string();
        assert!(!config.no_output());
    }

    #[test]
    fn test_delay_filter_enablement() {
        let mut config = Config::default();

        config.max_delay = Duration::from_millis(500);
        assert!(config.delay_filter_enabled());

        config.max_delay = DEFAULT_MAX_DELAY;
        config.min_delay = Duration::from_millis(50);
        assert!(config.delay_filter_enabled());

        // Widening past the default window disables filtering
        config.max_delay = Duration::from_millis(10_000);
        assert!(!config.delay_filter_enabled());
    }

    #[test]
    fn test_loss_filter_enablement() {
        let mut config = Config::default();
        config.max_loss_rate = 0.99;
        assert!(config.loss_filter_enabled());
        config.max_loss_rate = 1.5;
        assert!(!config.loss_filter_enabled());
        config.max_loss_rate = 0.0;
        assert!(config.loss_filter_enabled());
    }

    #[test]
    fn test_txt_output_path() {
        let mut config = Config::default();
        assert_eq!(config.txt_output(), "./dist/result.txt");
        config.output = "best".to_string();
        assert_eq!(config.txt_output(), "best.txt");
        config.output = "out/data.CSV".to_string();
        assert_eq!(config.txt_output(), "out/data.CSV.txt");
    }
}
