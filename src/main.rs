use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use stocksim::chart::ChartRenderer;
use stocksim::config::Config;
use stocksim::history_store::HistoryStore;
use stocksim::random_walk::RandomWalk;
use stocksim::simulation::SimulationEngine;
use stocksim::summary_table::SummaryTable;

#[derive(Parser, Debug)]
#[command(name = "stocksim", about = "Fictional stock market bot")]
struct Cli {
    /// Path to the TOML config file (default: config/default.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Advance every asset by one simulated day
    Update,
    /// Print the buy/sell summary table
    Table,
    /// Render a price chart per asset
    Graph {
        /// How many past days to plot
        days: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config)?;

    let store = HistoryStore::new(&config.market.data_dir, config.market.default_price);
    match cli.command {
        Command::Update => {
            let engine = SimulationEngine::new(
                config.market.assets.clone(),
                store,
                RandomWalk::new(config.walk.clone()),
            );
            engine.tick()?;
            tracing::info!(assets = engine.assets().len(), "market advanced one day");
        }
        Command::Table => {
            let table = SummaryTable::new(config.market.margin);
            println!("{}", table.render(&store, &config.market.assets)?);
        }
        Command::Graph { days } => {
            let days = days.unwrap_or(config.chart.default_window_days);
            let renderer = ChartRenderer::new(
                &config.market.graphs_dir,
                config.market.margin,
                &config.chart,
            );
            let paths = renderer.render_all(&store, &config.market.assets, days)?;
            tracing::info!(charts = paths.len(), days, "charts rendered");
            for path in paths {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}

// Log to a file so stdout stays clean for table output and artifact paths.
fn init_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(&config.logging.file)
        .with_context(|| format!("failed to create {}", config.logging.file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .json()
        .init();
    Ok(())
}
