//! Conformance report collection and JSON output.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Property check status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    Passed,
    Failed,
    Skipped,
}

impl CheckStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            CheckStatus::Passed => "✓",
            CheckStatus::Failed => "✗",
            CheckStatus::Skipped => "○",
        }
    }
}

/// Outcome of one property check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyResult {
    /// Check ID (e.g., "V2-005").
    pub id: String,
    pub name: String,
    pub description: String,
    /// Vector family or conversion group.
    pub category: String,
    pub status: CheckStatus,
    pub duration: Duration,
    /// Inputs exercised; 1 for fixed-table checks.
    pub samples: usize,
    /// First counterexample if failed.
    pub error_message: Option<String>,
}

impl PropertyResult {
    pub fn new(id: &str, name: &str, category: &str) -> Self {
        PropertyResult {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            status: CheckStatus::Skipped,
            duration: Duration::ZERO,
            samples: 0,
            error_message: None,
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn pass(mut self, duration: Duration) -> Self {
        self.status = CheckStatus::Passed;
        self.duration = duration;
        self
    }

    pub fn fail(mut self, duration: Duration, error: &str) -> Self {
        self.status = CheckStatus::Failed;
        self.duration = duration;
        self.error_message = Some(error.to_string());
        self
    }

    pub fn skip(mut self, reason: &str) -> Self {
        self.status = CheckStatus::Skipped;
        self.error_message = Some(reason.to_string());
        self
    }
}

/// Summary counts for a group of results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub total_duration: Duration,
}

impl CategoryStats {
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.passed as f64 / self.total as f64) * 100.0
    }

    pub fn add_result(&mut self, result: &PropertyResult) {
        self.total += 1;
        self.total_duration += result.duration;
        match result.status {
            CheckStatus::Passed => self.passed += 1,
            CheckStatus::Failed => self.failed += 1,
            CheckStatus::Skipped => self.skipped += 1,
        }
    }
}

/// Full conformance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    /// Seed the random samples were drawn from.
    pub seed: u64,
    pub results: Vec<PropertyResult>,
    pub metadata: BTreeMap<String, String>,
}

impl ConformanceReport {
    pub fn new(title: &str, seed: u64) -> Self {
        ConformanceReport {
            title: title.to_string(),
            generated_at: Utc::now(),
            seed,
            results: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn add_result(&mut self, result: PropertyResult) {
        self.results.push(result);
    }

    pub fn overall_stats(&self) -> CategoryStats {
        let mut stats = CategoryStats::default();
        for result in &self.results {
            stats.add_result(result);
        }
        stats
    }

    pub fn stats_by_category(&self) -> BTreeMap<String, CategoryStats> {
        let mut map: BTreeMap<String, CategoryStats> = BTreeMap::new();
        for result in &self.results {
            map.entry(result.category.clone())
                .or_default()
                .add_result(result);
        }
        map
    }

    pub fn failures(&self) -> impl Iterator<Item = &PropertyResult> {
        self.results
            .iter()
            .filter(|r| r.status == CheckStatus::Failed)
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.status == CheckStatus::Passed)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Save report as pretty JSON.
    pub fn save_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Report builder with fluent API.
pub struct ReportBuilder {
    report: ConformanceReport,
}

impl ReportBuilder {
    pub fn new(title: &str, seed: u64) -> Self {
        ReportBuilder {
            report: ConformanceReport::new(title, seed),
        }
    }

    pub fn metadata(mut self, key: &str, value: &str) -> Self {
        self.report
            .metadata
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn add_result(mut self, result: PropertyResult) -> Self {
        self.report.add_result(result);
        self
    }

    pub fn build(self) -> ConformanceReport {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_each_status() {
        let report = ReportBuilder::new("Suite", 1)
            .add_result(PropertyResult::new("A-001", "One", "A").pass(Duration::from_millis(2)))
            .add_result(PropertyResult::new("A-002", "Two", "A").fail(Duration::ZERO, "boom"))
            .add_result(PropertyResult::new("B-001", "Three", "B").skip("not run"))
            .build();

        assert!(!report.all_passed());
        let stats = report.overall_stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.passed, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.total_duration, Duration::from_millis(2));

        let by_cat = report.stats_by_category();
        assert_eq!(by_cat["A"].total, 2);
        assert_eq!(by_cat["B"].skipped, 1);
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn pass_rate_handles_empty() {
        assert_eq!(CategoryStats::default().pass_rate(), 0.0);
    }

    #[test]
    fn json_carries_seed_and_results() {
        let report = ReportBuilder::new("Suite", 42)
            .metadata("crate", "fixvec_core")
            .add_result(
                PropertyResult::new("FX-001", "Roundtrip", "Conversion")
                    .with_samples(10)
                    .pass(Duration::ZERO),
            )
            .build();
        let json = report.to_json().unwrap();
        let back: ConformanceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, 42);
        assert_eq!(back.results[0].id, "FX-001");
        assert_eq!(back.results[0].samples, 10);
        assert_eq!(back.metadata["crate"], "fixvec_core");
    }
}
