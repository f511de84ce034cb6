use clap::Parser;
use findash::cli::commands::{Cli, Commands};
use findash::domain::entities::strategy::NewStrategy;
use findash::domain::values::importance::ImportanceTier;
use findash::FinDash;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let dash = match FinDash::new() {
        Ok(dash) => dash,
        Err(e) => {
            eprintln!("Error initializing findash: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&dash, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(dash: &FinDash, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Portfolio { reported_total } => {
            let overview = match reported_total {
                Some(total) => dash.portfolio_with_reported_total(total)?,
                None => dash.portfolio()?,
            };
            println!("{}", serde_json::to_string_pretty(&overview)?);
        }
        Commands::Calendar { date, min_tier } => {
            let date = parse_date(date.as_deref())?;
            let tier = min_tier.map(|t| t.parse::<ImportanceTier>()).transpose()?;
            let day = dash.calendar_day(date, tier)?;
            println!("{}", serde_json::to_string_pretty(&day)?);
        }
        Commands::CalendarDates => {
            for date in dash.calendar_dates()? {
                println!("{date}");
            }
        }
        Commands::CalendarStats => {
            let stats = dash.calendar_stats()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Strategies => {
            let rows = dash.strategies()?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Commands::StrategyAdd { json } => {
            let input: NewStrategy = serde_json::from_str(&json)?;
            match dash.create_strategy(input)? {
                Some(strategy) => println!("{}", serde_json::to_string_pretty(&strategy)?),
                None => return Err("Strategy name is required".into()),
            }
        }
    }
    Ok(())
}

fn parse_date(s: Option<&str>) -> Result<chrono::NaiveDate, String> {
    match s {
        None => Ok(chrono::Local::now().date_naive()),
        Some(s) => chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date format: {s}. Use YYYY-MM-DD")),
    }
}
