use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "findash", about = "Portfolio, economic calendar and strategy dashboard engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show holdings with valuations and the portfolio summary
    Portfolio {
        /// Use this externally reported total value instead of deriving it
        #[arg(long)]
        reported_total: Option<f64>,
    },
    /// Show the economic calendar for one day
    Calendar {
        /// Day to show (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
        /// Minimum importance tier (high, medium, low)
        #[arg(long)]
        min_tier: Option<String>,
    },
    /// List the dates that have calendar events
    CalendarDates,
    /// Show calendar counts by date, importance and category
    CalendarStats,
    /// List strategies with performance tiers
    Strategies,
    /// Create a strategy
    StrategyAdd {
        /// JSON with name, description, assetClass
        json: String,
    },
}
