use std::path::PathBuf;

use crate::{
    core::Report,
    issues::{Issue, Reportable, Severity},
};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub report: Report,
    /// Where the JSON report was written, if it was.
    pub report_path: Option<PathBuf>,
    /// Number of source files that were parsed.
    pub source_files_checked: usize,
    /// Number of translation files that were loaded.
    pub translation_files_loaded: usize,
    pub fail_on_missing: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False when a config file already existed and was left alone.
    pub created: bool,
}

/// Result of running a transcov command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Issues to print, sorted.
    pub issues: Vec<Issue>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, mut issues: Vec<Issue>) -> Self {
        issues.sort();

        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();
        let warning_count = issues.len() - error_count;

        Self {
            summary,
            issues,
            error_count,
            warning_count,
        }
    }

    /// Whether the command's own success criterion failed.
    pub fn is_failure(&self) -> bool {
        match &self.summary {
            CommandSummary::Check(check) => check.fail_on_missing && check.report.has_missing(),
            CommandSummary::Init(init) => !init.created,
        }
    }
}
