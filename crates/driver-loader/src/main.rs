mod cli;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::{error, info};

use driver_loader_core::config::LoaderSettings;
use driver_loader_core::kernel::Application;
use driver_loader_core::registry::{DescriptorStore, FileDescriptorStore, InMemoryDescriptorStore};
use driver_loader_core::runtime::DryRunRuntime;

/// driver-loader: resolve and activate versioned driver plugins
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Loader settings file (.json, .yaml, .toml)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Descriptor registry document (.json, .yaml, .toml)
    #[arg(long, short)]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show which drivers a directive selects
    Plan {
        /// Directive such as '*', 'mysql' or 'mysql@8.0.21,hive'
        directive: String,
    },
    /// Plan and dispatch a directive against a dry-run runtime
    Load {
        /// Directive to load; defaults to the configured init_load
        directive: Option<String>,
        /// Plugin id the runtime should report as already loaded
        #[arg(long = "loaded")]
        loaded: Vec<String>,
    },
    /// Run the gated startup pass exactly as the service would
    Startup {
        /// Plugin id the runtime should report as already loaded
        #[arg(long = "loaded")]
        loaded: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = env_logger::try_init() {
        eprintln!("Failed to initialize env_logger: {}", e);
    }
    let args = CliArgs::parse();

    let mut settings = match &args.config {
        Some(path) => match LoaderSettings::from_file(path).await {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Failed to load settings from {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => LoaderSettings::default(),
    };
    if let Err(e) = settings.apply_env_overrides() {
        eprintln!("Invalid environment override: {}", e);
        return ExitCode::FAILURE;
    }

    let store: Arc<dyn DescriptorStore> = match &args.registry {
        Some(path) => match FileDescriptorStore::load(path).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                eprintln!("Failed to load registry: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            info!("No registry document given, using an empty registry");
            Arc::new(InMemoryDescriptorStore::new())
        }
    };

    match args.command {
        Commands::Plan { directive } => {
            let app = Application::new(settings, store, Arc::new(DryRunRuntime::default()));
            match app.plan(&directive).await {
                Ok(plan) => {
                    cli::print_plan(&plan);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error planning '{}': {}", directive, e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Load { directive, loaded } => {
            let directive = directive.unwrap_or_else(|| settings.init_load_directive().to_string());
            let app = Application::new(settings, store, Arc::new(DryRunRuntime::new(loaded)));
            match app.load(&directive).await {
                Ok(report) => {
                    cli::print_report(&report);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!("Load of '{}' failed: {}", directive, e);
                    eprintln!("Error loading '{}': {}", directive, e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Startup { loaded } => {
            let app = Application::new(settings, store, Arc::new(DryRunRuntime::new(loaded)));
            match app.run_init_load().await {
                Ok(report) => {
                    cli::print_report(&report);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Startup pass failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
