use serde::{Deserialize, Serialize};

/// Per-asset price series, most recent first, one entry per simulated day.
///
/// Always non-empty: a freshly seeded history holds exactly the default
/// price. The series only ever grows, by one prepended entry per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceHistory {
    prices: Vec<f64>,
}

impl PriceHistory {
    /// A brand-new history holding a single seed price.
    pub fn seeded(price: f64) -> Self {
        Self {
            prices: vec![price],
        }
    }

    /// Build from raw prices, most recent first.
    pub fn from_prices(prices: Vec<f64>) -> Self {
        assert!(!prices.is_empty(), "price history must be non-empty");
        Self { prices }
    }

    /// The latest (today's) price.
    pub fn latest(&self) -> f64 {
        self.prices[0]
    }

    /// Days since the asset opened; 0 means only the seed value exists.
    pub fn days_open(&self) -> usize {
        self.prices.len() - 1
    }

    /// Prepend today's freshly generated price.
    pub fn push_latest(&mut self, price: f64) {
        self.prices.insert(0, price);
    }

    /// The most recent `days + 1` entries, fewer when the series is shorter.
    pub fn window(&self, days: usize) -> &[f64] {
        let take = days.saturating_add(1).min(self.prices.len());
        &self.prices[..take]
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }
}
