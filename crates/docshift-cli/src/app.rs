//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::convert::{describe, output_path};
use crate::worker::{spawn_conversion, ConversionEvent};

/// Output format for conversion progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per event, for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "docshift")]
#[command(author, version, about = "Convert between Markdown, Word and Excel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a .md, .docx or .xlsx file
    Convert {
        /// Input file
        input: PathBuf,

        /// Output directory (defaults to the configured one, then Downloads)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show which conversion applies to a file
    Info {
        /// Input file
        input: PathBuf,

        /// Output directory (defaults to the configured one, then Downloads)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments, loads settings and dispatches to the appropriate
/// command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    init_tracing(&settings.log.level);

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
        } => {
            let output_dir = settings.output_dir(output.as_deref());
            convert_command(&input, &output_dir, format)?;
        }
        Commands::Info { input, output } => {
            let output_dir = settings.output_dir(output.as_deref());
            info_command(&input, &output_dir)?;
        }
    }

    Ok(())
}

/// Load settings before the global subscriber exists
///
/// Config warnings are written to stderr at `warn` level.
fn load_settings(config: Option<&Path>) -> Result<Settings> {
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::with_default(bootstrap, || Settings::load(config))
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins over `default_level`. Calling this twice is harmless.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the convert command
///
/// Runs the conversion on a background worker and prints its events as they
/// arrive. Returns the written path.
pub fn convert_command(input: &Path, output_dir: &Path, format: OutputFormat) -> Result<PathBuf> {
    if format == OutputFormat::Text {
        println!("docshift v{}", docshift_core::VERSION);
        println!("Converting: {}", input.display());
        println!("  Conversion: {}", describe(input));
    }

    let events = spawn_conversion(input.to_path_buf(), output_dir.to_path_buf());

    for event in events.iter() {
        if format == OutputFormat::Json {
            println!(
                "{}",
                serde_json::to_string(&event).context("Failed to serialize event")?
            );
        }

        match event {
            ConversionEvent::Started { .. } => {}
            ConversionEvent::Progress { percent } => {
                if format == OutputFormat::Text {
                    println!("  Progress: {}%", percent);
                }
            }
            ConversionEvent::Done { output } => {
                if format == OutputFormat::Text {
                    println!("  Created: {}", output.display());
                    println!();
                    println!("Conversion complete!");
                }
                return Ok(output);
            }
            ConversionEvent::Failed { error } => {
                return Err(error)
                    .with_context(|| format!("Failed to convert {}", input.display()));
            }
        }
    }

    anyhow::bail!("Conversion worker stopped without a result")
}

/// Execute the info command
pub fn info_command(input: &Path, output_dir: &Path) -> Result<()> {
    println!("Conversion: {}", describe(input));
    if let Some(output) = output_path(input, output_dir) {
        println!("Output: {}", output.display());
    }
    Ok(())
}
