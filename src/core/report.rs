//! Report assembly and serialization.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{
    coverage::{Coverage, CoverageSummary, DiffOptions, MissingEntry, compute_coverage},
    resources::ResourceSet,
    usage::UsageRecord,
};

/// The translations report handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
    pub total_keys: usize,
    pub dynamic_keys: Vec<UsageRecord>,
    pub extracted_keys: Vec<UsageRecord>,
    pub languages: Vec<String>,
    pub missing: BTreeMap<String, Vec<MissingEntry>>,
    pub unused: BTreeMap<String, Vec<String>>,
    pub summary: CoverageSummary,
}

impl Report {
    /// Wrap coverage output, stamped with the current time.
    pub fn new(coverage: Coverage) -> Self {
        Self::with_timestamp(coverage, Utc::now())
    }

    pub fn with_timestamp(coverage: Coverage, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            total_keys: coverage.total_keys,
            dynamic_keys: coverage.dynamic_keys,
            extracted_keys: coverage.extracted_keys,
            languages: coverage.languages,
            missing: coverage.missing,
            unused: coverage.unused,
            summary: coverage.summary,
        }
    }

    pub fn has_missing(&self) -> bool {
        self.summary.total_missing > 0
    }
}

/// Diff `records` against `resources` and wrap the result in a [`Report`].
pub fn compute_report(
    records: &[UsageRecord],
    resources: &ResourceSet,
    languages: &[String],
    options: &DiffOptions,
) -> Report {
    Report::new(compute_coverage(records, resources, languages, options))
}

/// Write the report as pretty-printed JSON, creating parent directories.
pub fn write_report(report: &Report, output_path: &Path) -> Result<()> {
    if let Some(dir) = output_path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(output_path, json)
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;

    Ok(())
}
