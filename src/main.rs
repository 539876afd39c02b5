use buildforge::api::{BuildForge, DataPaths};
use buildforge::config::Config;
use buildforge::error::BfResult;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Item recommendations from ability text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data Dragon champion JSON (champion.json or championFull.json).
    #[arg(global = true, long, default_value = "data/champions.json")]
    champions: String,

    /// Data Dragon item JSON.
    #[arg(global = true, long, default_value = "data/items.json")]
    items: String,

    /// Character/item pairing table (CSV).
    #[arg(global = true, long = "synergy", default_value = "data/synergy.csv")]
    synergy_file: String,

    /// JSON settings file. Explicit command line flags still win.
    #[arg(global = true, long)]
    settings: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommend items for one character.
    Recommend(cmd::recommend::RecommendArgs),
    /// Show raw scores and priorities for one character.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Check how a query resolves against the roster.
    Lookup(cmd::lookup::LookupArgs),
    /// Run every character through the pipeline.
    Audit(cmd::audit::AuditArgs),
}

impl Cli {
    fn data_paths(&self) -> DataPaths {
        DataPaths {
            champions: PathBuf::from(&self.champions),
            items: PathBuf::from(&self.items),
            synergy: Some(PathBuf::from(&self.synergy_file)),
        }
    }
}

/// Settings file first, then whatever the user typed on the command line.
fn resolve_config(settings: Option<&str>, cli_config: &Config, matches: &ArgMatches) -> BfResult<Config> {
    match settings {
        Some(path) => {
            info!("Loading settings from {}", path);
            let mut config = Config::load_from_file(path)?;
            config.merge_from_cli(cli_config, matches);
            config.validate()?;
            Ok(config)
        }
        None => {
            cli_config.validate()?;
            Ok(cli_config.clone())
        }
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> BfResult<()> {
    let sub_matches = matches.subcommand().map(|(_, m)| m).unwrap_or(matches);
    let settings = cli.settings.as_deref();
    let paths = cli.data_paths();

    match &cli.command {
        Commands::Recommend(args) => {
            let mut config = resolve_config(settings, &args.config, sub_matches)?;
            cmd::recommend::prepare_config(args, &mut config);
            let forge = BuildForge::load(config, &paths)?;
            cmd::recommend::run(args, &forge)
        }
        Commands::Analyze(args) => {
            let config = resolve_config(settings, &args.config, sub_matches)?;
            let forge = BuildForge::load(config, &paths)?;
            cmd::analyze::run(args, &forge)
        }
        Commands::Lookup(args) => cmd::lookup::run(args, &paths),
        Commands::Audit(args) => {
            let config = resolve_config(settings, &args.config, sub_matches)?;
            let forge = BuildForge::load(config, &paths)?;
            cmd::audit::run(args, &forge)
        }
    }
}

fn main() {
    // Raw matches tell explicit flags apart from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("{}", e);
        process::exit(1);
    }
}
