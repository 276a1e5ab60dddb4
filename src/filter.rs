//! Delay window and loss ceiling filters.
//!
//! Both scans stop at the first record past the upper bound, which is only
//! correct on ranked input; they are therefore defined on [`LatencyRanked`].

use tracing::debug;

use crate::{rank::LatencyRanked, Config};

impl LatencyRanked {
    /// Keep records whose delay lies in `[min_delay, max_delay]`.
    ///
    /// Returns the input untouched when the configured window is the default
    /// one or reaches past it.
    pub fn filter_delay(self, config: &Config) -> Self {
        if !config.delay_filter_enabled() {
            debug!("Delay filter disabled, keeping {} results", self.len());
            return self;
        }

        let before = self.len();
        let mut kept = Vec::with_capacity(before);
        for result in self {
            // Everything after the first slow record is slower still
            if result.delay() > config.max_delay {
                break;
            }
            if result.delay() < config.min_delay {
                continue;
            }
            kept.push(result);
        }

        debug!(
            "Delay filter [{:?}, {:?}] kept {}/{} results",
            config.min_delay,
            config.max_delay,
            kept.len(),
            before
        );
        Self::from_sorted(kept)
    }

    /// Keep records up to the first one whose loss rate exceeds `max_loss_rate`.
    pub fn filter_loss_rate(self, config: &Config) -> Self {
        if !config.loss_filter_enabled() {
            debug!("Loss rate filter disabled, keeping {} results", self.len());
            return self;
        }

        let before = self.len();
        let kept: Vec<_> = self
            .into_iter()
            .take_while(|result| result.loss_rate() <= config.max_loss_rate)
            .collect();

        debug!(
            "Loss rate filter <= {:.2} kept {}/{} results",
            config.max_loss_rate,
            kept.len(),
            before
        );
        Self::from_sorted(kept)
    }
}
