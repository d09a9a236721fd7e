//! # vmgpack CLI
//!
//! Command-line interface for vmgpack library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use vmgpack::VmgError;
use vmgpack::cli::Args;
use vmgpack::core::{CollectionStats, convert};
use vmgpack::format::OutputFormat;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Per-file diagnostics go to stderr; `RUST_LOG` overrides the default level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), VmgError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let config = args.to_config();

    // Print header
    println!("📦 vmgpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", config.input_dir.display());
    println!();

    // Each format gets its own collection
    let mut summary: Vec<(OutputFormat, CollectionStats)> = Vec::new();
    for &format in OutputFormat::all() {
        let output = config.output_path(format);
        println!("💾 Writing {} to {}...", format, output.display());
        let write_start = Instant::now();
        let stats = convert(&config, format)?;
        println!(
            "   {} entries ({:.2}s)",
            stats.written,
            write_start.elapsed().as_secs_f64()
        );
        summary.push((format, stats));
    }

    println!();
    println!(
        "✅ Done! Output saved to {}, {}, and {}",
        config.output_path(OutputFormat::Xml).display(),
        config.output_path(OutputFormat::Csv).display(),
        config.output_path(OutputFormat::Text).display()
    );

    // Summary
    if let Some((_, stats)) = summary.first() {
        println!();
        println!("📊 Summary:");
        println!("   Messages:      {}", stats.total);
        println!("   No number:     {}", stats.without_telno);
        println!("   No valid date: {}", stats.epoch_dated);
    }
    for (format, stats) in &summary {
        if stats.skipped() > 0 {
            println!(
                "   {} skipped {} without a number",
                format,
                stats.skipped()
            );
        }
    }

    println!();
    println!(
        "⚡ Total time:  {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
