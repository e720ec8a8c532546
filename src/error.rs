use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for stocksim.
///
/// Every variant names the asset and the operation that failed, so a caller
/// can report a failure without guessing which record broke. A missing
/// history record is not an error anywhere; the store seeds a default.
#[derive(Debug, Error)]
pub enum StocksimError {
    #[error("failed to read history for '{asset}' at {}: {source}", .path.display())]
    HistoryRead {
        asset: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode history for '{asset}' at {}: {source}", .path.display())]
    HistoryDecode {
        asset: String,
        path: PathBuf,
        source: bincode::Error,
    },

    #[error("corrupt history for '{asset}': {reason}")]
    HistoryInvalid { asset: String, reason: String },

    #[error("failed to encode history for '{asset}': {source}")]
    HistoryEncode {
        asset: String,
        source: bincode::Error,
    },

    #[error("failed to write history for '{asset}' at {}: {source}", .path.display())]
    HistoryWrite {
        asset: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render chart for '{asset}': {reason}")]
    ChartRender { asset: String, reason: String },

    #[error("failed to publish chart for '{asset}' at {}: {source}", .path.display())]
    ChartWrite {
        asset: String,
        path: PathBuf,
        source: std::io::Error,
    },
}
