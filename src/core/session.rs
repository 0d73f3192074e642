//! Scan session: one registry, one matcher set, one default namespace.
//!
//! A [`ScanSession`] is what a host (the CLI, a bundler plugin, a test)
//! holds for the lifetime of one analysis. Source files are parsed and
//! analyzed in parallel; their records land in the session's registry, and
//! a report can be taken at any point from whatever has been scanned so far.

use std::{fs, path::Path};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    config::DEFAULT_NAMESPACE,
    core::{
        coverage::{DiffOptions, UnusedMatching, resolve_languages},
        extract::FileAnalyzer,
        matchers::MatcherSet,
        parsers::source::parse_source,
        registry::UsageRegistry,
        report::{Report, compute_report},
        resources::ResourceSet,
        usage::UsageRecord,
    },
    error::ScanError,
};

/// Outcome of [`ScanSession::scan_files`].
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Files that were read and parsed successfully.
    pub files_scanned: usize,
    /// Usage records added across all scanned files.
    pub records: usize,
    /// Files that could not be read or parsed. The scan continues past them.
    pub errors: Vec<ScanError>,
}

pub struct ScanSession {
    registry: UsageRegistry,
    matchers: MatcherSet,
    default_namespace: String,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl ScanSession {
    /// New session with the built-in `t(...)` and `<Trans>` matchers.
    pub fn new(default_namespace: impl Into<String>) -> Self {
        Self {
            registry: UsageRegistry::new(),
            matchers: MatcherSet::default(),
            default_namespace: default_namespace.into(),
        }
    }

    /// Replace the matcher set (e.g. to add a custom usage pattern).
    pub fn with_matchers(mut self, matchers: MatcherSet) -> Self {
        self.matchers = matchers;
        self
    }

    pub fn registry(&self) -> &UsageRegistry {
        &self.registry
    }

    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    fn extract(&self, file_path: &str, code: String) -> Result<Vec<UsageRecord>, ScanError> {
        let parsed = parse_source(code, file_path)?;
        let analyzer = FileAnalyzer::new(
            file_path,
            &parsed.source_map,
            &self.matchers,
            &self.default_namespace,
        );
        Ok(analyzer.analyze(&parsed.module))
    }

    /// Scan one file's source text and record its usages.
    ///
    /// Records from an earlier scan of the same `file_path` are replaced, so
    /// scanning a file twice never double-counts it. Returns the number of
    /// records found.
    pub fn scan_source(&self, file_path: &str, code: impl Into<String>) -> Result<usize, ScanError> {
        let records = self.extract(file_path, code.into())?;
        let count = records.len();
        self.registry.replace_file(file_path, records);
        debug!("Scanned {}: {} usage(s)", file_path, count);
        Ok(count)
    }

    /// Read and scan one file from disk.
    pub fn scan_file(&self, path: &Path) -> Result<usize, ScanError> {
        let file_path = path.to_string_lossy().to_string();
        let code = fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: file_path.clone(),
            source,
        })?;
        self.scan_source(&file_path, code)
    }

    /// Read, parse and analyze `files` in parallel.
    ///
    /// Records are registered in the order of `files`, so the registry
    /// contents do not depend on thread scheduling.
    pub fn scan_files(&self, files: &[String]) -> ScanSummary {
        let results: Vec<(&String, Result<Vec<UsageRecord>, ScanError>)> = files
            .par_iter()
            .map(|file_path| {
                let result = fs::read_to_string(file_path)
                    .map_err(|source| ScanError::Read {
                        path: file_path.clone(),
                        source,
                    })
                    .and_then(|code| self.extract(file_path, code));
                (file_path, result)
            })
            .collect();

        let mut summary = ScanSummary::default();
        for (file_path, result) in results {
            match result {
                Ok(records) => {
                    summary.files_scanned += 1;
                    summary.records += records.len();
                    self.registry.replace_file(file_path, records);
                }
                Err(err) => {
                    debug!("{}", err);
                    summary.errors.push(err);
                }
            }
        }

        debug!(
            "Scanned {} file(s), {} usage(s), {} error(s)",
            summary.files_scanned,
            summary.records,
            summary.errors.len()
        );
        summary
    }

    /// Build a report from the current registry snapshot.
    ///
    /// `languages` defaults to every language present in `resources`.
    pub fn report(
        &self,
        resources: &ResourceSet,
        languages: Option<&[String]>,
        unused_matching: UnusedMatching,
    ) -> Report {
        let languages = resolve_languages(languages, resources);
        let options = DiffOptions {
            default_namespace: self.default_namespace.clone(),
            unused_matching,
        };
        compute_report(&self.registry.all_records(), resources, &languages, &options)
    }

    /// Forget every recorded usage.
    pub fn clear(&self) {
        self.registry.clear();
    }
}
