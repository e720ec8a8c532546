use rand::Rng;

use crate::config::WalkConfig;
use crate::model::history::PriceHistory;

/// Bounded two-regime random walk over an asset's price history.
///
/// At or above the pivot threshold the price drifts multiplicatively inside
/// the configured band. Below it the walk steps additively by one step unit
/// (down, hold, or up) and reflects negatives, so a price can always recover
/// from zero.
pub struct RandomWalk {
    cfg: WalkConfig,
}

impl RandomWalk {
    pub fn new(cfg: WalkConfig) -> Self {
        Self { cfg }
    }

    /// Generate the next day's price from the latest entry and prepend it.
    pub fn next<R: Rng>(&self, rng: &mut R, history: &mut PriceHistory) -> f64 {
        let latest = history.latest();
        let next = if latest >= self.cfg.pivot_threshold {
            latest * rng.gen_range(self.cfg.drift_low..self.cfg.drift_high)
        } else {
            // Near-zero regime: multiplicative noise would pin the walk, so
            // step additively and reflect away from negative prices.
            let step = match rng.gen_range(0..3u8) {
                0 => -self.cfg.pivot_step,
                1 => 0.0,
                _ => self.cfg.pivot_step,
            };
            (latest + step).abs()
        };
        history.push_latest(next);
        next
    }
}
