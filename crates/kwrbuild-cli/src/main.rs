//! kwrbuild CLI - compile the sources listed in a manifest.

mod build;
mod colors;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kwrbuild")]
#[command(about = "Compile the C++ sources listed in a manifest against SDL")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sources listed in a manifest into a binary under bin/
    Build {
        /// Manifest file listing one source path per line
        manifest: String,

        /// Name of the output binary (default: test)
        output: Option<String>,

        /// Print the compiler command without running it
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Render kwrbuild-core errors with their recovery hints
    let format_error = |err: anyhow::Error| -> anyhow::Error {
        if let Some(core_err) = err.downcast_ref::<kwrbuild_core::Error>() {
            anyhow::anyhow!("{}", core_err.with_hint())
        } else {
            err
        }
    };

    match cli.command {
        Commands::Build {
            manifest,
            output,
            dry_run,
        } => {
            build::execute(&manifest, output.as_deref(), dry_run).map_err(format_error)?;
        }
    }

    Ok(())
}
