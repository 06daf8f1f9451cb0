use clap::Parser;
use coliving_match::batch::run_batch;
use coliving_match::config::{LoggingSettings, Settings};
use coliving_match::models::MatchInput;
use coliving_match::services::RecordIntake;
use coliving_match::AppError;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Rank co-living listings for the seekers in a JSON batch
#[derive(Debug, Parser)]
#[command(name = "coliving-match", version, about)]
struct Cli {
    /// JSON file with `seekers` and `listings` arrays
    #[arg(short, long)]
    input: PathBuf,

    /// Configuration file (defaults to config/default.toml + config/local.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only match this seeker id
    #[arg(short, long)]
    seeker: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn init_logging(settings: &LoggingSettings) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    let result = match settings.format.as_str() {
        "pretty" => subscriber.pretty().try_init(),
        "compact" => subscriber.compact().try_init(),
        _ => subscriber.json().try_init(),
    };

    result.map_err(|e| AppError::Logging(e.to_string()))
}

fn main() -> Result<(), AppError> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    init_logging(&settings.logging)?;

    let matcher = settings.matcher();
    info!(
        "Matcher initialized with weights: {:?} (today: {})",
        matcher.weights(),
        matcher.today()
    );

    let intake = RecordIntake::new(settings.debt_registry());

    let raw = std::fs::read_to_string(&cli.input)?;
    let input: MatchInput = serde_json::from_str(&raw)?;

    info!(
        "Loaded {} seekers and {} listings from {}",
        input.seekers.len(),
        input.listings.len(),
        cli.input.display()
    );

    let report = run_batch(input, &intake, &matcher, cli.seeker.as_deref())?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    Ok(())
}
