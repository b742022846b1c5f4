use anyhow::Result;
use clap::{Parser, Subcommand};
use snapmood_core::preset::PresetFamily;
use snapmood_infrastructure::ConfigService;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod report;

#[derive(Parser)]
#[command(name = "snapmood")]
#[command(about = "snapmood CLI - browse generation presets and build requests", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the preset catalog
    Presets {
        #[command(subcommand)]
        action: PresetsAction,
    },
    /// Print the generation request payload for a preset
    Request {
        #[arg(value_parser = parse_family)]
        family: PresetFamily,
        id: String,
        /// Source image URI
        #[arg(long)]
        source: Option<String>,
    },
    /// Print the user-facing text for a notice key
    Notice { key: String },
    /// Development test accounts
    Dev {
        #[command(subcommand)]
        action: DevAction,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum PresetsAction {
    /// List presets of the configured default family
    List {
        #[arg(long, value_parser = parse_family, conflicts_with = "all")]
        family: Option<PresetFamily>,
        /// List every family
        #[arg(long)]
        all: bool,
        /// Only presets carrying this feature tag
        #[arg(long)]
        feature: Option<String>,
    },
    /// Show one preset
    Show {
        #[arg(value_parser = parse_family)]
        family: PresetFamily,
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Print whether a preset exists
    Check {
        #[arg(value_parser = parse_family)]
        family: PresetFamily,
        id: String,
    },
}

#[derive(Subcommand)]
enum DevAction {
    /// Seed a local session for a test account
    Seed {
        #[arg(long, default_value = "tester@snapmood.dev")]
        email: String,
    },
    /// Show the seeded session
    Show,
    /// Remove the seeded session
    Clear,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Check fallback entries against the catalog
    Validate,
}

fn parse_family(name: &str) -> std::result::Result<PresetFamily, String> {
    PresetFamily::parse(name).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", report::render_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };

    match cli.command {
        Commands::Presets { action } => match action {
            PresetsAction::List {
                family,
                all,
                feature,
            } => commands::presets::list(&config_service, family, all, feature.as_deref())?,
            PresetsAction::Show { family, id, json } => commands::presets::show(family, &id, json)?,
            PresetsAction::Check { family, id } => commands::presets::check(family, &id),
        },
        Commands::Request { family, id, source } => {
            commands::request::run(config_service, family, &id, source)?
        }
        Commands::Notice { key } => commands::notice::run(&key),
        Commands::Dev { action } => match action {
            DevAction::Seed { email } => commands::dev::seed(&config_service, &email)?,
            DevAction::Show => commands::dev::show(&config_service)?,
            DevAction::Clear => commands::dev::clear(&config_service)?,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config_service)?,
            ConfigAction::Validate => commands::config::validate(&config_service)?,
        },
    }

    Ok(())
}
