//! Todo Presets CLI
//!
//! Lists preset templates and materializes them into a user's tag groups,
//! tags and todos.

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use todo_presets::cli::init::InitArgs;
use todo_presets::cli::list::ListArgs;
use todo_presets::cli::show::ShowArgs;
use todo_presets::cli::{Cli, Command};
use todo_presets::config::Config;
use todo_presets::db::Database;
use todo_presets::error::PresetResult;
use todo_presets::format::{
    OutputFormat, format_dry_run_markdown, format_init_result_markdown,
    format_preset_list_markdown, format_preset_markdown, to_json,
};
use todo_presets::preset::{PresetInfo, PresetRepository};
use todo_presets::service::PresetService;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    let (mut config, config_path) = Config::discover(cli.config.as_deref())?;
    if let Some(path) = &config_path {
        debug!(path = %path.display(), "Using config file");
    }

    // Override config from CLI arguments
    if let Some(db_path) = &cli.database {
        config.database.path = db_path.clone();
    }
    if let Some(dir) = &cli.presets_dir {
        config.presets.dir = Some(dir.clone());
    }
    if let Some(user) = &cli.user {
        config.user.id = user.clone();
    }

    match cli.command {
        Command::List(args) => run_list(&config, args),
        Command::Show(args) => run_show(&config, args),
        Command::Init(args) => run_init(&config, args),
    }
}

/// Initialize logging based on the --log option.
fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" if cli.logs_to_stdout() => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "1" | "stdout" | "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}

/// Print a result in the requested format. JSON errors are also written to
/// stdout so scripts can read the error code.
fn emit<T, F>(format: OutputFormat, result: PresetResult<T>, markdown: F) -> Result<()>
where
    T: serde::Serialize,
    F: FnOnce(&T) -> String,
{
    match result {
        Ok(value) => {
            match format {
                OutputFormat::Json => println!("{}", to_json(&value)?),
                OutputFormat::Markdown => print!("{}", markdown(&value)),
            }
            Ok(())
        }
        Err(err) => {
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&err.to_json())?);
            }
            Err(err.into())
        }
    }
}

fn repository(config: &Config) -> PresetRepository {
    let repo = PresetRepository::new(config.presets.resolve_dir());
    debug!(dir = %repo.dir().display(), "Using preset directory");
    repo
}

fn run_list(config: &Config, args: ListArgs) -> Result<()> {
    let presets = repository(config).list_available();
    emit(args.format, presets, |p| format_preset_list_markdown(p))
}

fn run_show(config: &Config, args: ShowArgs) -> Result<()> {
    let preset = repository(config).load(&args.name);
    emit(args.format, preset, format_preset_markdown)
}

fn run_init(config: &Config, args: InitArgs) -> Result<()> {
    let repo = repository(config);
    info!(preset = %args.name, mode = args.init_mode(), "Running init");

    if args.dry_run {
        let info = repo.load(&args.name).map(|p| PresetInfo::from(&p));
        return emit(args.format, info, format_dry_run_markdown);
    }

    let db = Database::open(&config.database.path)?;
    let service = PresetService::new(repo, db, config.user.id.clone());
    let result = service.initialize_from_preset(&args.name);
    emit(args.format, result, format_init_result_markdown)
}
