//! End-to-end conformance run: config file in, JSON report out.

use std::path::PathBuf;

use fixvec_tests::config::ConformanceConfig;
use fixvec_tests::properties::run_all;
use fixvec_tests::report::{CheckStatus, ConformanceReport};

fn scratch_dir(name: &str) -> anyhow::Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("fixvec-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[test]
fn run_from_config_file_writes_report() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();

    let dir = scratch_dir("report")?;
    let cfg_path = dir.join("conformance.json");
    std::fs::write(
        &cfg_path,
        format!(
            r#"{{"seed": 99, "samples": 500, "report_dir": "{}"}}"#,
            dir.display().to_string().replace('\\', "\\\\")
        ),
    )?;

    let cfg = ConformanceConfig::load(&cfg_path)?;
    assert_eq!(cfg.seed, 99);

    let report = run_all(&cfg);
    assert!(report.all_passed(), "failures: {:?}", report.failures().collect::<Vec<_>>());

    let out = PathBuf::from(&cfg.report_dir).join("out.json");
    report.save_json(&out)?;
    let back: ConformanceReport = serde_json::from_str(&std::fs::read_to_string(&out)?)?;
    assert_eq!(back.seed, 99);
    assert_eq!(back.results.len(), report.results.len());
    assert!(back.results.iter().all(|r| r.status == CheckStatus::Passed));

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn missing_config_file_is_an_error() {
    let err = ConformanceConfig::load(std::path::Path::new("/nonexistent/fixvec.json"))
        .unwrap_err();
    assert!(err.to_string().contains("read config"));
}

#[test]
fn same_seed_same_report_outcome() {
    let cfg = ConformanceConfig {
        samples: 100,
        ..ConformanceConfig::default()
    };
    let a = run_all(&cfg);
    let b = run_all(&cfg);
    let ids = |r: &ConformanceReport| {
        r.results
            .iter()
            .map(|x| (x.id.clone(), x.status))
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&a), ids(&b));
}
