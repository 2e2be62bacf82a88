//! vex-triage: interactive browser for vulnerability scan matches
//!
//! Loads a Grype JSON report and opens a scrollable, searchable table of
//! every (package, vulnerability) match.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vex_triage::{cli, config::TriageConfig};

/// Exit code for any failure
const EXIT_ERROR: i32 = 3;

#[derive(Parser)]
#[command(name = "vex-triage")]
#[command(version)]
#[command(about = "Interactive terminal browser for vulnerability scan matches", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Browser closed normally
    3  Error occurred

KEYS:
    q / ctrl-c          quit
    up, k / down, j     move selection
    g, Home / G, End    first / last match
    w, PgUp / z, PgDn   page up / page down
    /                   search package names and vulnerability ids
    n / N               repeat search forward / backward
    d, Tab, Enter       toggle detail pane

EXAMPLES:
    # Scan an image and browse the results
    grype alpine:3.16 -o json > report.json
    vex-triage triage report.json

    # Start with the detail pane open and print the last selection as JSON
    vex-triage triage report.json --details --print-selection")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "VEX_TRIAGE_LOG_FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `triage` subcommand
#[derive(Parser)]
struct TriageArgs {
    /// Path to a Grype JSON report (`grype -o json`)
    report: PathBuf,

    /// Color theme (dark, light, high-contrast)
    #[arg(long)]
    theme: Option<String>,

    /// Open with the detail pane shown
    #[arg(short, long)]
    details: bool,

    /// Print the match selected on exit to stdout as JSON
    #[arg(long)]
    print_selection: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the matches of a scan report
    Triage(TriageArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or discover configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print the discovered config file, if any
    Path,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(EXIT_ERROR);
    }

    match run(cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::debug!("{err:?}");
            eprintln!("Error: {err:#}");
            std::process::exit(EXIT_ERROR);
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
    );

    let (stderr_layer, file_layer) = match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (None, Some(layer))
        }
        None => {
            let layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr);
            (Some(layer), None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Triage(args) => {
            let (file_config, loaded_from) =
                vex_triage::config::load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                tracing::debug!("using config {}", path.display());
            }

            let app_config = file_config.with_cli_overrides(args.theme, args.details);
            let config = TriageConfig {
                report_path: args.report,
                tui: app_config.tui,
                print_selection: args.print_selection,
            };

            cli::run_triage(config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "vex-triage", &mut io::stdout());
            Ok(0)
        }

        Commands::ConfigSchema { output } => {
            let schema = vex_triage::config::generate_json_schema()
                .context("failed to generate schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(0)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    vex_triage::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(0)
            }
            ConfigAction::Path => {
                match vex_triage::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(0)
            }
        },
    }
}
