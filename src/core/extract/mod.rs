//! Key extraction - per-file collection of usage records.
//!
//! Parsing is handled by `crate::core::parsers::source`; this module walks
//! the resulting AST and turns matcher hits into usage records. Records are
//! merged into the shared registry by `crate::core::session`.

pub mod file_analyzer;


pub use file_analyzer::FileAnalyzer;
