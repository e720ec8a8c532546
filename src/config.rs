use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub market: MarketConfig,
    pub walk: WalkConfig,
    pub chart: ChartConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Ordered asset registry; order fixes table rows and chart batches.
    pub assets: Vec<String>,
    /// Seed price for an asset with no persisted history yet.
    pub default_price: f64,
    /// Fixed spread added to the latest price to form the buy quote.
    pub margin: f64,
    pub data_dir: PathBuf,
    pub graphs_dir: PathBuf,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            assets: vec![
                "League of Legends".to_string(),
                "Rust".to_string(),
                "Hearthstone".to_string(),
            ],
            default_price: 0.5,
            margin: 0.02,
            data_dir: PathBuf::from("data"),
            graphs_dir: PathBuf::from("graphs"),
        }
    }
}

/// Tuning constants for the price walk. The defaults are inherited ad hoc
/// values, not fitted to any statistical target.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub drift_low: f64,
    pub drift_high: f64,
    /// Below this price the walk switches to additive steps.
    pub pivot_threshold: f64,
    pub pivot_step: f64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            drift_low: 0.9,
            drift_high: 1.1,
            pivot_threshold: 0.05,
            pivot_step: 0.01,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Fixed top of the y axis; the walk rarely leaves [0, 1.5].
    pub y_max: f64,
    pub default_window_days: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            y_max: 1.5,
            default_window_days: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: PathBuf::from("stocksim.log"),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// With an explicit `path` the file must exist. Otherwise the path comes
    /// from `STOCKSIM_CONFIG` or falls back to `config/default.toml`, and a
    /// missing file just means built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => {
                let p = std::env::var("STOCKSIM_CONFIG")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("config/default.toml"));
                (p, false)
            }
        };

        let config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))?
        } else if required {
            bail!("config file {} does not exist", path.display());
        } else {
            Config::default()
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.market.assets.is_empty() {
            bail!("market.assets must list at least one asset");
        }
        for (i, asset) in self.market.assets.iter().enumerate() {
            if asset.trim().is_empty() {
                bail!("market.assets[{i}] is blank");
            }
            if self.market.assets[..i].contains(asset) {
                bail!("market.assets contains duplicate entry '{asset}'");
            }
        }
        if !(self.market.default_price > 0.0) {
            bail!("market.default_price must be > 0");
        }
        if self.market.margin < 0.0 {
            bail!("market.margin must be >= 0");
        }
        if !(self.walk.drift_low > 0.0) {
            bail!("walk.drift_low must be > 0");
        }
        if self.walk.drift_high <= self.walk.drift_low {
            bail!("walk.drift_high must be greater than walk.drift_low");
        }
        if self.walk.pivot_threshold < 0.0 {
            bail!("walk.pivot_threshold must be >= 0");
        }
        if !(self.walk.pivot_step > 0.0) {
            bail!("walk.pivot_step must be > 0");
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            bail!("chart.width and chart.height must be > 0");
        }
        if !(self.chart.y_max > 0.0) {
            bail!("chart.y_max must be > 0");
        }
        Ok(())
    }
}
