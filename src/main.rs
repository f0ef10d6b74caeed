use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use briefwiki::cli::commands;
use briefwiki::cli::commands::summarize::SummarizeOptions;
use briefwiki::{Config, ConfigLoader};

#[derive(Parser)]
#[command(name = "briefwiki")]
#[command(
    version,
    about = "Summarize Figma design documents and Confluence pages with an LLM"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, help = "Load configuration from this file only")]
    config: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a Figma or Confluence document into a structured brief
    Summarize {
        /// Source document URL
        url: String,
        #[arg(long, help = "Publish the brief to Confluence after summarizing")]
        publish: bool,
        #[arg(long, help = "Skip target-section scoping, aggregate the full document")]
        full_document: bool,
        #[arg(long, help = "Model override")]
        model: Option<String>,
        #[arg(long, help = "Decoding temperature override")]
        temperature: Option<f32>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show,
    /// Show configuration file paths
    Path,
    /// Write a default project config file
    Init {
        #[arg(long, short, help = "Overwrite existing config")]
        force: bool,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "briefwiki=error"
    } else if verbose {
        "briefwiki=debug"
    } else {
        "briefwiki=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_config(cli: &Cli) -> briefwiki::Result<Config> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

async fn run(cli: Cli) -> briefwiki::Result<()> {
    match &cli.command {
        Commands::Summarize {
            url,
            publish,
            full_document,
            model,
            temperature,
        } => {
            let config = load_config(&cli)?;
            let options = SummarizeOptions {
                url: url.clone(),
                publish: *publish,
                full_document: *full_document,
                model: model.clone(),
                temperature: *temperature,
            };
            commands::summarize::run(&config, &options).await
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = load_config(&cli)?;
                commands::config::show(&config)
            }
            ConfigAction::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigAction::Init { force } => commands::config::init(*force),
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let runtime = match Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
