//! pommel CLI - Dagger-Hilt module generator
//!
//! Commands:
//! - `pommel generate` - Generate `_SoloModule` sources from a host manifest
//! - `pommel check` - Validate a host manifest without writing anything
//! - `pommel scopes` - Print the recognized scope table

use clap::{Parser, Subcommand};
use pommel_core::{LogLevel, PommelConfig};
use std::path::PathBuf;

mod check;
mod generate;
mod scopes;

#[derive(Parser)]
#[command(name = "pommel")]
#[command(author, version, about = "Generates Dagger-Hilt modules for @SoloModule declarations", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error, off); overrides pommel.toml
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Path to pommel.toml (default: ./pommel.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate module sources
    Generate {
        /// Host manifest (JSON) listing the discovered constructs
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output root for generated sources (default: output.directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of worker threads (default: one per core)
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// Validate a host manifest without writing
    Check {
        /// Host manifest (JSON) listing the discovered constructs
        #[arg(short, long)]
        manifest: PathBuf,
    },

    /// Print the scope to install-target table
    Scopes,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = PommelConfig::discover(cli.config.as_deref(), &cwd)?;
    pommel_logging::init_logging(cli.log_level.unwrap_or(config.logging.level));

    match cli.command {
        Commands::Generate {
            manifest,
            output,
            jobs,
        } => {
            generate::run(&manifest, output, jobs, &config)?;
        }
        Commands::Check { manifest } => {
            check::run(&manifest, &config)?;
        }
        Commands::Scopes => {
            scopes::run(&config);
        }
    }

    Ok(())
}
