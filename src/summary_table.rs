use crate::error::StocksimError;
use crate::history_store::HistoryStore;
use crate::model::quote::{Quote, PRICE_DP};

const HEADERS: [&str; 4] = ["Stock", "Buy(£)", "Sell(£)", "Days open"];

/// Box-drawn summary of the latest quote for every asset.
///
/// Column widths stretch to the widest cell or header; headers are centered,
/// data cells left-aligned. Pure presentation over loaded state.
pub struct SummaryTable {
    margin: f64,
}

impl SummaryTable {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    /// Load every asset and lay its latest quote out as one table row,
    /// in registry order.
    pub fn render(&self, store: &HistoryStore, assets: &[String]) -> Result<String, StocksimError> {
        let mut columns: [Vec<String>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
        for asset in assets {
            let history = store.load(asset)?;
            let quote = Quote::from_history(&history, self.margin);
            columns[0].push(asset.clone());
            columns[1].push(format!("{:.*}", PRICE_DP, quote.buy));
            columns[2].push(format!("{:.*}", PRICE_DP, quote.sell));
            columns[3].push(quote.days_open.to_string());
        }
        Ok(draw_table(&columns, &HEADERS))
    }
}

fn draw_table(columns: &[Vec<String>; 4], headers: &[&str; 4]) -> String {
    let widths: Vec<usize> = columns
        .iter()
        .zip(headers.iter())
        .map(|(column, header)| {
            column
                .iter()
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        let joint = format!("─{mid}─");
        format!("{left}─{}─{right}", segments.join(joint.as_str()))
    };

    let mut lines = Vec::new();
    lines.push(rule("┌", "┬", "┐"));

    let header_cells: Vec<String> = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, w)| center(header, *w))
        .collect();
    lines.push(format!("| {} |", header_cells.join(" | ")));

    lines.push(rule("├", "┼", "┤"));

    for row in 0..columns[0].len() {
        let cells: Vec<String> = columns
            .iter()
            .zip(widths.iter())
            .map(|(column, w)| pad_right(&column[row], *w))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}

/// Center `s` in `width` characters, extra padding going to the right.
fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

fn pad_right(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - len))
}
