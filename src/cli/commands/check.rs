use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use super::{CheckSummary, CommandResult, CommandSummary};
use crate::{
    cli::args::CheckCommand,
    config::{CONFIG_FILE_NAME, load_config},
    core::{
        ScanSession, file_scanner::scan_files, parsers::json::load_resources, write_report,
    },
    issues::{
        Issue, ParseErrorIssue, ResourceErrorIssue, dynamic_key_issues,
        missing_translation_issues, unused_translation_issues,
    },
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let verbose = cmd.common.verbose;

    // Priority: CLI --source-root arg > current directory
    let root_dir = cmd
        .common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let config_result = load_config(&root_dir)?;
    if !config_result.from_file {
        info!("No {} found, using default configuration", CONFIG_FILE_NAME);
    }

    // CLI > config file > defaults
    let mut config = config_result.config;
    if let Some(namespace) = cmd.default_namespace {
        config.default_namespace = namespace;
    }
    if !cmd.languages.is_empty() {
        config.languages = Some(cmd.languages);
    }
    if cmd.fail_on_missing {
        config.fail_on_missing = true;
    }
    config.validate()?;

    let (scan_result, loaded) = rayon::join(
        || {
            scan_files(
                &root_dir,
                &config.includes,
                &config.ignores,
                config.ignore_test_files,
            )
        },
        || load_resources(&config.translation_files, &root_dir),
    );

    if scan_result.skipped_count > 0 {
        warn!(
            "{} path(s) skipped due to access errors",
            scan_result.skipped_count
        );
    }
    if loaded.files_loaded == 0 {
        warn!(
            "No translation files matched {:?}",
            config.translation_files
        );
    }

    let session = ScanSession::new(config.default_namespace.clone());
    let scan_summary = session.scan_files(&scan_result.files);
    let report = session.report(
        &loaded.resources,
        config.languages.as_deref(),
        config.unused_matching,
    );

    let report_path = if cmd.no_report {
        None
    } else {
        Some(
            cmd.report_path
                .unwrap_or_else(|| root_dir.join(&config.report_path)),
        )
    };
    if let Some(path) = &report_path {
        write_report(&report, path)?;
        info!("Report written to {}", path.display());
    }

    let mut issues: Vec<Issue> = Vec::new();
    if config.emit_warnings {
        issues.extend(missing_translation_issues(&report));
    }
    if verbose {
        issues.extend(unused_translation_issues(&report));
        issues.extend(dynamic_key_issues(&report));
    }
    issues.extend(
        scan_summary
            .errors
            .iter()
            .map(|err| Issue::from(ParseErrorIssue::from(err))),
    );
    issues.extend(
        loaded
            .warnings
            .iter()
            .map(|err| Issue::from(ResourceErrorIssue::from(err))),
    );

    let summary = CheckSummary {
        report,
        report_path,
        source_files_checked: scan_summary.files_scanned,
        translation_files_loaded: loaded.files_loaded,
        fail_on_missing: config.fail_on_missing,
    };

    Ok(CommandResult::new(CommandSummary::Check(summary), issues))
}
