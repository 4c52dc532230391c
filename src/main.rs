//! maxcheck CLI - static verifier for 3ds Max plugin directories
//!
//! Usage: maxcheck <PLUGIN_DIR>
//!
//! Runs four levels of checks over the directory, prints a scored
//! report, writes `verification-report.json` into the directory, and
//! exits 0 when the rating is Excellent/Good/Pass, 1 on Fail.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use maxcheck::{run_verification_with_callback, save_report, LevelKey, VerificationResult};

/// maxcheck - static verifier for 3ds Max plugin directories
#[derive(Parser, Debug)]
#[command(name = "maxcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Plugin directory to verify
    plugin_dir: PathBuf,

    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,
}

fn level_icon(level: LevelKey) -> &'static str {
    match level {
        LevelKey::Level1 => "📋",
        LevelKey::Level2 => "⚙️",
        LevelKey::Level3 => "🔌",
        LevelKey::Level4 => "⚡",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cmd_verify(&cli.plugin_dir, cli.json)
}

fn cmd_verify(plugin_dir: &Path, json: bool) -> Result<()> {
    if !json {
        println!("🔍 Verifying plugin: {}", plugin_dir.display());
        println!("{}", "=".repeat(60));
    }

    let mut current_level: Option<LevelKey> = None;
    let result = run_verification_with_callback(plugin_dir, |level, check| {
        if json {
            let event = serde_json::json!({
                "event": "check",
                "level": level,
                "name": check.name,
                "passed": check.passed,
                "details": check.details,
            });
            println!("{}", event);
        } else {
            if current_level != Some(level) {
                println!("\n{} {}", level_icon(level), level.display_name());
                current_level = Some(level);
            }
            let icon = if check.passed { "✓" } else { "✗" };
            println!("  {} {}: {}", icon, check.name, check.details);
        }
    });

    let result = match result {
        Ok(r) => r,
        Err(e) => {
            eprintln!("✗ Error: {}", e);
            std::process::exit(1);
        }
    };

    let report_path = save_report(plugin_dir, &result)?;

    if json {
        let summary = serde_json::json!({
            "event": "summary",
            "plugin_name": result.plugin_name,
            "version": result.version,
            "overall_score": result.overall_score,
            "rating": result.rating,
            "report": report_path.display().to_string(),
        });
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        print_report(&result);
        println!("\n📄 Report saved to: {}", report_path.display());
    }

    if !result.rating.is_passing() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report(result: &VerificationResult) {
    println!("\n{}", "=".repeat(60));
    println!("📊 Verification Report");
    println!("{}", "=".repeat(60));

    if !result.plugin_name.is_empty() {
        println!("Plugin: {}", result.plugin_name);
    }
    if !result.version.is_empty() {
        println!("Version: {}", result.version);
    }

    println!("\nOverall score: {:.1}/100", result.overall_score);
    println!("Rating: {}", result.rating);

    println!("\nLevel scores:");
    for (_, level) in result.levels.iter() {
        println!("  {}: {:.1}%", level.name, level.score);
    }

    println!("\nRecommendations:");
    for (i, rec) in result.recommendations.iter().enumerate() {
        println!("  {}. {}", i + 1, rec);
    }
}
