use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use descriptor_context::{
    ArtifactReference, ContextConfig, ContextMode, LogLevel, ModuleCoordinate, TimestampMode,
    describe_self,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "descriptor-context")]
#[command(about = "Answer descriptor parse-context queries", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Status stamped onto synthesized descriptors
    #[arg(long, global = true)]
    status: Option<String>,

    /// Repository index; switches to connected mode
    #[arg(long, global = true)]
    index: Option<PathBuf>,

    /// Module being resolved (group:name:version), connected mode only
    #[arg(long, global = true)]
    module: Option<ModuleCoordinate>,

    /// Freeze the publication timestamp when the context is built
    #[arg(long, global = true)]
    frozen: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the descriptor of a parent module as JSON
    Parent {
        /// Parent coordinate (group:name:version)
        coordinate: ModuleCoordinate,
    },
    /// Check whether a module publishes an artifact
    Exists {
        /// Module publishing the artifact (group:name:version)
        coordinate: ModuleCoordinate,
        /// Artifact name
        name: String,
        #[arg(long = "type", default_value = "jar")]
        kind: String,
        #[arg(long = "ext", default_value = "jar")]
        extension: String,
        #[arg(long)]
        classifier: Option<String>,
    },
    /// Print the coordinate of the module being resolved
    Current,
}

fn resolve_config(cli: &Cli) -> Result<ContextConfig> {
    let mut config = match &cli.config {
        Some(path) => ContextConfig::load(path)?,
        None => ContextConfig::default(),
    };

    if let Some(status) = &cli.status {
        config.default_status = status.clone();
    }
    if let Some(index) = &cli.index {
        config.index = Some(index.clone());
        config.mode = ContextMode::Connected;
    }
    if let Some(module) = &cli.module {
        config.module = Some(module.clone());
    }
    if cli.frozen {
        config.timestamps = TimestampMode::Frozen;
    }
    if cli.verbose {
        config.log_level = LogLevel::Debug;
    }
    // The queried module is the session module in connected mode
    if let Commands::Exists { coordinate, .. } = &cli.command {
        config.module = Some(coordinate.clone());
    }

    Ok(config)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level.to_level_filter())
        .with_writer(std::io::stderr)
        .init();

    let ctx = config.build().context("Failed to build parse context")?;
    tracing::debug!(mode = %ctx.mode(), status = ctx.default_status(), "parse context ready");

    match cli.command {
        Commands::Parent { coordinate } => {
            let descriptor = ctx.resolve_parent_descriptor(&coordinate)?;
            println!("{}", serde_json::to_string_pretty(&descriptor)?);
        }
        Commands::Exists {
            coordinate: _,
            name,
            kind,
            extension,
            classifier,
        } => {
            let mut artifact = ArtifactReference::new(name, kind, extension);
            if let Some(classifier) = classifier {
                artifact = artifact.with_classifier(classifier);
            }
            println!("{}", ctx.artifact_exists(&artifact));
        }
        Commands::Current => match describe_self(ctx.as_ref())? {
            Some(coordinate) => println!("{}", coordinate),
            None => {
                eprintln!("No current module in {} mode", ctx.mode());
                return Ok(ExitCode::from(2));
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
