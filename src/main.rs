//! secreport: security analysis report viewer
//!
//! Renders the JSON reports produced by configuration security scanners as
//! an interactive TUI or as summary, Markdown, HTML and JSON documents.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use secreport::{
    cli,
    config::{AppConfig, OutputConfig, TuiConfig, Validatable, ViewConfig, ViewPreferences},
    model::Severity,
    pipeline::exit_codes,
    reports::ReportFormat,
    viewmodel::SeverityFilter,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput:",
        "\n  Security analysis JSON ({ filename, analysisTime, analysis })",
        "\n\nOutput Formats:",
        "\n  tui, summary, markdown, html, json"
    )
}

#[derive(Parser)]
#[command(name = "secreport")]
#[command(version, long_version = build_long_version())]
#[command(about = "Security analysis report viewer", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Report rendered (or nothing to render)
    2  An issue at or above --fail-on severity was found
    3  Error occurred

EXAMPLES:
    # Browse a report interactively
    secreport view scan.json

    # CI check: fail when a HIGH or CRITICAL finding exists
    secreport view scan.json -o summary --fail-on high

    # Export only critical findings as Markdown
    secreport view scan.json -o markdown --filter critical -O report.md")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "SECREPORT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    /// Path to the analysis report (`-` reads stdin)
    report: PathBuf,

    /// Output format (auto detects TTY: tui if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Initial severity filter
    #[arg(short, long, default_value = "all", ignore_case = true)]
    filter: SeverityFilter,

    /// Show at most this many issues in document outputs
    #[arg(long, value_parser = clap::value_parser!(usize))]
    max_issues: Option<usize>,

    /// Document title for Markdown/HTML output
    #[arg(long)]
    title: Option<String>,

    /// TUI theme (dark, light, high-contrast)
    #[arg(long)]
    theme: Option<String>,

    /// Exit with code 2 if an issue at or above this severity exists
    #[arg(long, value_parser = parse_severity)]
    fail_on: Option<Severity>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a security analysis report
    View(ViewArgs),

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

    /// Show, discover, or initialize configuration
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
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .secreport.yaml in the current directory
    Init,
}

fn parse_severity(value: &str) -> Result<Severity, String> {
    Severity::parse_loose(value).ok_or_else(|| {
        format!("unknown severity '{value}' (expected critical, high, medium or low)")
    })
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::View(args) => {
            let overrides = AppConfig {
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                view: ViewPreferences {
                    default_filter: args.filter,
                    max_issues: args.max_issues,
                    title: args.title,
                },
                tui: TuiConfig {
                    theme: args.theme.unwrap_or_else(|| TuiConfig::default().theme),
                },
            };
            let (app_config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            let errors = app_config.validate();
            if !errors.is_empty() {
                let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
                anyhow::bail!("invalid configuration:\n  {}", joined.join("\n  "));
            }

            let mut config = ViewConfig::from_app_config(args.report, &app_config);
            config.fail_on = args.fail_on;
            config.quiet = cli.quiet;
            cli::run_view(config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "secreport", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = secreport::config::generate_json_schema()
                .context("failed to serialize config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    secreport::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    ::dirs::config_dir().map(|p| p.join("secreport").display().to_string()),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in secreport::config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match secreport::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".secreport.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = secreport::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
