//! Core analysis engine.
//!
//! Source text flows through the pipeline as:
//!
//! 1. `parsers::source` parses a file into an swc module
//! 2. `extract::FileAnalyzer` offers each call and JSX element to the
//!    `matchers::MatcherSet` and builds `usage::UsageRecord`s
//! 3. `registry::UsageRegistry` collects records from all files
//! 4. `coverage` diffs a registry snapshot against a `resources::ResourceSet`
//!    loaded by `parsers::json`
//! 5. `report` wraps the diff with a timestamp and writes it out
//!
//! `session::ScanSession` ties steps 1-3 together and hands out reports.

pub mod coverage;
pub mod extract;
pub mod file_scanner;
pub mod key;
pub mod matchers;
pub mod parsers;
pub mod registry;
pub mod report;
pub mod resources;
pub mod session;
pub mod usage;

pub use coverage::{Coverage, CoverageSummary, DiffOptions, MissingEntry, UnusedMatching};
pub use key::{ParsedKey, parse_key};
pub use registry::UsageRegistry;
pub use report::{Report, compute_report, write_report};
pub use resources::ResourceSet;
pub use session::{ScanSession, ScanSummary};
pub use usage::{KeyArgument, UsageLocation, UsageRecord};
