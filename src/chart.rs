use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::config::ChartConfig;
use crate::error::StocksimError;
use crate::history_store::HistoryStore;
use crate::model::history::PriceHistory;
use crate::model::quote::PRICE_DP;

/// Renders one PNG line chart per asset: a sell line at the raw price and a
/// buy line shifted up by the margin, over the most recent window of days.
///
/// Day 0 (most recent) sits at the left edge, the oldest plotted day at the
/// right. The y axis is pinned to [0, y_max] so consecutive charts compare
/// directly. Charts are drawn to a temp file and renamed into place, so no
/// partial artifact is ever published.
pub struct ChartRenderer {
    graphs_dir: PathBuf,
    margin: f64,
    width: u32,
    height: u32,
    y_max: f64,
}

impl ChartRenderer {
    pub fn new(graphs_dir: impl Into<PathBuf>, margin: f64, chart: &ChartConfig) -> Self {
        Self {
            graphs_dir: graphs_dir.into(),
            margin,
            width: chart.width,
            height: chart.height,
            y_max: chart.y_max,
        }
    }

    /// Path of the rendered artifact for `asset`.
    pub fn chart_path(&self, asset: &str) -> PathBuf {
        self.graphs_dir.join(format!("{asset}.png"))
    }

    /// Render the most recent `window_days` of `history` for `asset`,
    /// overwriting any prior artifact. Returns the artifact path.
    pub fn render(
        &self,
        asset: &str,
        history: &PriceHistory,
        window_days: usize,
    ) -> Result<PathBuf, StocksimError> {
        let sell = history.window(window_days);
        let buy: Vec<f64> = sell.iter().map(|v| v + self.margin).collect();

        fs::create_dir_all(&self.graphs_dir).map_err(|e| StocksimError::ChartWrite {
            asset: asset.to_string(),
            path: self.graphs_dir.clone(),
            source: e,
        })?;

        let path = self.chart_path(asset);
        let tmp = self.graphs_dir.join(format!("{asset}.tmp.png"));
        self.draw(asset, &buy, sell, window_days, &tmp)
            .map_err(|reason| StocksimError::ChartRender {
                asset: asset.to_string(),
                reason,
            })?;
        fs::rename(&tmp, &path).map_err(|e| StocksimError::ChartWrite {
            asset: asset.to_string(),
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }

    /// Render every asset in registry order; returns the artifact paths.
    pub fn render_all(
        &self,
        store: &HistoryStore,
        assets: &[String],
        window_days: usize,
    ) -> Result<Vec<PathBuf>, StocksimError> {
        let mut paths = Vec::with_capacity(assets.len());
        for asset in assets {
            let history = store.load(asset)?;
            paths.push(self.render(asset, &history, window_days)?);
        }
        Ok(paths)
    }

    fn draw(
        &self,
        asset: &str,
        buy: &[f64],
        sell: &[f64],
        window_days: usize,
        out: &Path,
    ) -> Result<(), String> {
        let x_max = window_days.max(1) as i32;
        let root = BitMapBackend::new(out, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let mut chart = ChartBuilder::on(&root)
            .caption(asset, ("sans-serif", 28))
            .margin(8)
            .x_label_area_size(36)
            .y_label_area_size(48)
            .build_cartesian_2d(0..x_max, 0.0..self.y_max)
            .map_err(|e| e.to_string())?;

        chart
            .configure_mesh()
            .x_desc("Days ago")
            .y_desc("Price per stock (£)")
            .draw()
            .map_err(|e| e.to_string())?;

        chart
            .draw_series(LineSeries::new(
                buy.iter().enumerate().map(|(i, v)| (i as i32, *v)),
                &RED,
            ))
            .map_err(|e| e.to_string())?
            .label(format!("£{:.*}", PRICE_DP, buy[0]))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &RED));

        chart
            .draw_series(LineSeries::new(
                sell.iter().enumerate().map(|(i, v)| (i as i32, *v)),
                &GREEN,
            ))
            .map_err(|e| e.to_string())?
            .label(format!("£{:.*}", PRICE_DP, sell[0]))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &GREEN));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| e.to_string())?;

        root.present().map_err(|e| e.to_string())?;
        Ok(())
    }
}
