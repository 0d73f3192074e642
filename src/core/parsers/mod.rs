//! File parsers for source code and translation files.
//!
//! - `source`: JS/JSX/TS/TSX source parser (uses swc for AST generation)
//! - `json`: translation resource loader (glob patterns to a `ResourceSet`)

pub mod json;
pub mod source;
