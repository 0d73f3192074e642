//! Issue types for translation coverage results.
//!
//! A [`crate::core::Report`] is data; issues are the user-facing view of it.
//! Each issue is self-contained with everything the CLI reporter needs to
//! print it.

use enum_dispatch::enum_dispatch;

use crate::{
    core::{MissingEntry, Report, UsageLocation, UsageRecord, usage::DYNAMIC_KEY},
    error::{ResourceError, ScanError},
};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingTranslation,
    UnusedTranslation,
    DynamicKey,
    ParseError,
    ResourceError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::UnusedTranslation => write!(f, "unused-translation"),
            Rule::DynamicKey => write!(f, "dynamic-key"),
            Rule::ParseError => write!(f, "parse-error"),
            Rule::ResourceError => write!(f, "resource-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Static key used in code with no entry for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    pub language: String,
    pub entry: MissingEntry,
}

/// Resource entry that no static key in code refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedTranslationIssue {
    pub language: String,
    /// Flattened `namespace.path` of the entry.
    pub key: String,
}

/// Usage whose key cannot be determined statically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicKeyIssue {
    pub location: UsageLocation,
}

impl From<&UsageRecord> for DynamicKeyIssue {
    fn from(record: &UsageRecord) -> Self {
        Self {
            location: record.location(),
        }
    }
}

/// Source file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

/// Translation file or pattern that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceErrorIssue {
    pub path: String,
    pub error: String,
}

impl From<&ScanError> for ParseErrorIssue {
    fn from(err: &ScanError) -> Self {
        Self {
            file_path: err.path().to_string(),
            error: err.to_string(),
        }
    }
}

impl From<&ResourceError> for ResourceErrorIssue {
    fn from(err: &ResourceError) -> Self {
        let path = match err {
            ResourceError::Pattern { pattern, .. } => pattern,
            ResourceError::Read { path, .. } | ResourceError::Json { path, .. } => path,
        };
        Self {
            path: path.clone(),
            error: err.to_string(),
        }
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Reportable)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingTranslation(MissingTranslationIssue),
    UnusedTranslation(UnusedTranslationIssue),
    DynamicKey(DynamicKeyIssue),
    ParseError(ParseErrorIssue),
    ResourceError(ResourceErrorIssue),
}

// ============================================================
// Reportable Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Position in a source file.
    Source(&'a UsageLocation),
    /// A language's translation resources as a whole.
    Language(&'a str),
    /// File-level only (no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to the CLI.
#[enum_dispatch]
pub trait Reportable {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, error, etc.).
    fn message(&self) -> String;

    fn severity(&self) -> Severity;

    fn rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Further usage sites beyond the primary location.
    fn usages(&self) -> &[UsageLocation] {
        &[]
    }
}

// ============================================================
// Reportable Implementations
// ============================================================

impl Reportable for MissingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        match self.entry.used_in.first() {
            Some(usage) => ReportLocation::Source(usage),
            None => ReportLocation::Language(&self.language),
        }
    }

    fn message(&self) -> String {
        self.entry.key.clone()
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::MissingTranslation
    }

    fn details(&self) -> Option<String> {
        let mut details = format!(
            "missing in '{}' (namespace '{}')",
            self.language, self.entry.namespace
        );
        if let Some(default_value) = &self.entry.default_value {
            details.push_str(&format!(", default value \"{}\"", default_value));
        }
        Some(details)
    }

    fn usages(&self) -> &[UsageLocation] {
        self.entry.used_in.get(1..).unwrap_or_default()
    }
}

impl Reportable for UnusedTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Language(&self.language)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::UnusedTranslation
    }

    fn details(&self) -> Option<String> {
        Some(format!("defined in '{}' but not used in code", self.language))
    }
}

impl Reportable for DynamicKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.location)
    }

    fn message(&self) -> String {
        DYNAMIC_KEY.to_string()
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::DynamicKey
    }

    fn hint(&self) -> Option<&str> {
        Some("use a string literal key so it can be checked")
    }
}

impl Reportable for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::ParseError
    }
}

impl Reportable for ResourceErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File { path: &self.path }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::ResourceError
    }
}

// ============================================================
// Conversion from a coverage report
// ============================================================

/// One issue per (language, missing key), in report order.
pub fn missing_translation_issues(report: &Report) -> Vec<Issue> {
    report
        .missing
        .iter()
        .flat_map(|(language, entries)| {
            entries.iter().map(|entry| {
                Issue::from(MissingTranslationIssue {
                    language: language.clone(),
                    entry: entry.clone(),
                })
            })
        })
        .collect()
}

/// One issue per (language, unused resource key), in report order.
pub fn unused_translation_issues(report: &Report) -> Vec<Issue> {
    report
        .unused
        .iter()
        .flat_map(|(language, keys)| {
            keys.iter().map(|key| {
                Issue::from(UnusedTranslationIssue {
                    language: language.clone(),
                    key: key.clone(),
                })
            })
        })
        .collect()
}

/// One issue per dynamic usage.
pub fn dynamic_key_issues(report: &Report) -> Vec<Issue> {
    report
        .dynamic_keys
        .iter()
        .map(|record| Issue::from(DynamicKeyIssue::from(record)))
        .collect()
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_key(&self) -> (Option<&str>, &str, usize, usize) {
        match self.location() {
            ReportLocation::Source(loc) => (Some(loc.file.as_str()), "", loc.line, loc.column),
            ReportLocation::File { path } => (Some(path), "", 0, 0),
            ReportLocation::Language(language) => (None, language, 0, 0),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        let (a_file, a_lang, a_line, a_col) = self.sort_key();
        let (b_file, b_lang, b_line, b_col) = other.sort_key();

        // Source locations first, then language-level issues
        let by_location = match (a_file, b_file) {
            (Some(a), Some(b)) => a.cmp(b).then(a_line.cmp(&b_line)).then(a_col.cmp(&b_col)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a_lang.cmp(b_lang),
        };

        by_location
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
            .then_with(|| self.details().cmp(&other.details()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
