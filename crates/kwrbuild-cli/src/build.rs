//! Build command implementation for the kwrbuild CLI.

use std::path::Path;

use kwrbuild_core::{BuildConfig, Builder, Manifest};

use crate::colors;

/// Result type for CLI operations.
pub type CliResult = anyhow::Result<()>;

/// Build the sources listed in `manifest_path`.
pub fn execute(manifest_path: &str, output: Option<&str>, dry_run: bool) -> CliResult {
    // Read the manifest before anything is spawned
    let manifest = Manifest::load(Path::new(manifest_path))?;
    let builder = Builder::new(BuildConfig::from_env());

    if dry_run {
        let command = builder.plan(&manifest, output)?;
        println!("{}", command);
        return Ok(());
    }

    println!(
        "\n{}kwrbuild{} - Building {}{}{}\n",
        colors::BOLD,
        colors::RESET,
        colors::CYAN,
        manifest
            .path()
            .and_then(Path::file_name)
            .unwrap_or_default()
            .to_string_lossy(),
        colors::RESET
    );

    if manifest.is_empty() {
        println!(
            "{}  ! Manifest lists no sources{}",
            colors::YELLOW,
            colors::RESET
        );
    }

    println!(
        "{}  ◆ Compiling {} sources{} ...",
        colors::BLUE,
        manifest.len(),
        colors::RESET
    );
    colors::flush_stdout();

    let report = builder.build(&manifest, output)?;

    println!();
    println!(
        "{}Built:{} {}",
        colors::GREEN,
        colors::RESET,
        report.output.display()
    );
    println!(
        "{}Time:{} {:.2}s",
        colors::DIM,
        colors::RESET,
        report.duration.as_secs_f64()
    );

    Ok(())
}
