use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StocksimError;
use crate::model::history::PriceHistory;

/// Durable per-asset price history, one binary record per asset.
///
/// Records live at a deterministic path derived from the asset display name.
/// Saves replace the whole record via a sibling temp file and rename, so a
/// concurrent or subsequent load never observes a truncated record.
pub struct HistoryStore {
    data_dir: PathBuf,
    default_price: f64,
}

impl HistoryStore {
    pub fn new(data_dir: impl Into<PathBuf>, default_price: f64) -> Self {
        Self {
            data_dir: data_dir.into(),
            default_price,
        }
    }

    /// Path of the durable record for `asset`.
    pub fn data_path(&self, asset: &str) -> PathBuf {
        self.data_dir.join(format!("{asset}.data"))
    }

    /// Load the history for `asset`. A missing record is the normal first-run
    /// case and yields a fresh single-entry history at the default price.
    pub fn load(&self, asset: &str) -> Result<PriceHistory, StocksimError> {
        let path = self.data_path(asset);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(PriceHistory::seeded(self.default_price));
            }
            Err(e) => {
                return Err(StocksimError::HistoryRead {
                    asset: asset.to_string(),
                    path,
                    source: e,
                });
            }
        };

        let prices: Vec<f64> =
            bincode::deserialize(&bytes).map_err(|e| StocksimError::HistoryDecode {
                asset: asset.to_string(),
                path,
                source: e,
            })?;
        if prices.is_empty() {
            return Err(StocksimError::HistoryInvalid {
                asset: asset.to_string(),
                reason: "record holds an empty price series".to_string(),
            });
        }
        if let Some(bad) = prices.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(StocksimError::HistoryInvalid {
                asset: asset.to_string(),
                reason: format!("record holds invalid price {bad}"),
            });
        }
        Ok(PriceHistory::from_prices(prices))
    }

    /// Durably replace the record for `asset` with `history`.
    pub fn save(&self, asset: &str, history: &PriceHistory) -> Result<(), StocksimError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StocksimError::HistoryWrite {
            asset: asset.to_string(),
            path: self.data_dir.clone(),
            source: e,
        })?;

        let bytes = bincode::serialize(history).map_err(|e| StocksimError::HistoryEncode {
            asset: asset.to_string(),
            source: e,
        })?;

        let path = self.data_path(asset);
        let tmp = self.data_dir.join(format!("{asset}.data.tmp"));
        fs::write(&tmp, &bytes).map_err(|e| StocksimError::HistoryWrite {
            asset: asset.to_string(),
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &path).map_err(|e| StocksimError::HistoryWrite {
            asset: asset.to_string(),
            path,
            source: e,
        })?;
        Ok(())
    }
}
