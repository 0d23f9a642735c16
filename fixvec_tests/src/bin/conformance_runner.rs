//! Conformance runner with JSON report output.
//!
//! Usage:
//!   cargo run -p fixvec_tests --bin conformance_runner -- \
//!     [--config conformance.json] [--seed 42] [--samples 10000] [--out test-reports]
//!
//! Exits with status 1 when any check fails.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use fixvec_tests::config::ConformanceConfig;
use fixvec_tests::properties::run_all;
use tracing::info;

fn parse_args() -> anyhow::Result<ConformanceConfig> {
    let args: Vec<String> = env::args().collect();

    let mut cfg = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).context("--config needs a path")?;
            ConformanceConfig::load(Path::new(path))?
        }
        None => ConformanceConfig::default(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" if i + 1 < args.len() => {
                cfg.seed = args[i + 1].parse().context("parse --seed")?;
                i += 2;
            }
            "--samples" if i + 1 < args.len() => {
                cfg.samples = args[i + 1].parse().context("parse --samples")?;
                i += 2;
            }
            "--out" if i + 1 < args.len() => {
                cfg.report_dir = args[i + 1].clone();
                i += 2;
            }
            _ => i += 1,
        }
    }
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cfg = parse_args()?;
    info!(seed = cfg.seed, samples = cfg.samples, out = %cfg.report_dir, "Starting conformance run");

    let report = run_all(&cfg);
    let stats = report.overall_stats();

    println!("Fixed-point vector conformance");
    println!("==============================");
    for result in &report.results {
        println!(
            "{} {:<7} {:<10} {}",
            result.status.icon(),
            result.id,
            result.category,
            result.name
        );
        if let Some(err) = &result.error_message {
            println!("          {err}");
        }
    }
    println!();
    println!("Total:   {}", stats.total);
    println!("Passed:  {}", stats.passed);
    println!("Failed:  {}", stats.failed);
    println!("Pass Rate: {:.1}%", stats.pass_rate());
    println!("Duration: {:.3}s", stats.total_duration.as_secs_f64());

    let out_dir = PathBuf::from(&cfg.report_dir);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create report dir {}", out_dir.display()))?;
    let json_path = out_dir.join("conformance.json");
    report
        .save_json(&json_path)
        .with_context(|| format!("write {}", json_path.display()))?;
    info!(path = %json_path.display(), "Report saved");

    if stats.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
