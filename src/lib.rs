//! Transcov - translation coverage for JS/TS projects
//!
//! Transcov statically scans JavaScript and TypeScript sources for
//! translation key usages (`t("key")`, `i18n.t("key")`,
//! `<Trans i18nKey="key" />`), diffs them against i18next-style JSON
//! translation files and reports missing keys, unused keys and per-language
//! coverage.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (scan, registry, coverage, report)
//! - `error`: Typed errors for source and resource IO
//! - `issues`: Issue type definitions and reporting
//!
//! ## Library use
//!
//! ```
//! use serde_json::json;
//! use transcov::core::{ResourceSet, ScanSession, UnusedMatching};
//!
//! let session = ScanSession::default();
//! session
//!     .scan_source("src/App.tsx", r#"const title = t("common.title");"#)
//!     .unwrap();
//!
//! let mut resources = ResourceSet::new();
//! resources.insert("en", "common", json!({ "title": "Hello" }));
//! resources.insert("fr", "common", json!({}));
//!
//! let report = session.report(&resources, None, UnusedMatching::default());
//! assert_eq!(report.summary.coverage_percent["en"], 100);
//! assert_eq!(report.summary.coverage_percent["fr"], 0);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod issues;
