use crate::model::history::PriceHistory;

/// Decimal places used for every user-facing price.
pub const PRICE_DP: usize = 4;

/// Derived buy/sell pair for an asset's latest price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub buy: f64,
    pub sell: f64,
    pub days_open: usize,
}

impl Quote {
    /// Quote off the latest price: buy carries the margin, sell is raw.
    pub fn from_history(history: &PriceHistory, margin: f64) -> Self {
        let latest = history.latest();
        Self {
            buy: latest + margin,
            sell: latest,
            days_open: history.days_open(),
        }
    }
}
