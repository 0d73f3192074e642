use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::{config::DEFAULT_NAMESPACE, core::ResourceSet, error::ResourceError};

/// `en`, `ja`, `es-MX`, `zh-CN`.
static LANGUAGE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").expect("language code pattern is valid")
});

#[derive(Debug, Default)]
pub struct LoadResourcesResult {
    pub resources: ResourceSet,
    /// Number of files that were read and parsed.
    pub files_loaded: usize,
    /// Patterns and files that could not be loaded. Loading continues past them.
    pub warnings: Vec<ResourceError>,
}

fn is_language_code(value: &str) -> bool {
    LANGUAGE_CODE.is_match(value)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Extracts the language from a translation file path.
///
/// Examples:
/// - "locales/en.json" -> "en"
/// - "locales/es-MX/common.json" -> "es-MX"
/// - "locales/common.json" -> "common"
pub fn extract_language(path: &Path) -> String {
    let stem = file_stem(path);
    if is_language_code(&stem) {
        return stem;
    }

    let parent = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str());
    match parent {
        Some(dir) if is_language_code(dir) => dir.to_string(),
        _ => stem,
    }
}

/// Extracts the namespace from a translation file path.
///
/// A file named after a language (`en.json`) holds the default
/// `translation` namespace; any other file name is the namespace.
pub fn extract_namespace(path: &Path) -> String {
    let stem = file_stem(path);
    if is_language_code(&stem) {
        DEFAULT_NAMESPACE.to_string()
    } else {
        stem
    }
}

pub fn parse_resource_file(path: &Path) -> Result<Value, ResourceError> {
    let display = path.to_string_lossy().to_string();
    let content = fs::read_to_string(path).map_err(|source| ResourceError::Read {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ResourceError::Json {
        path: display,
        source,
    })
}

fn expand_pattern(pattern: &str, base_dir: &Path) -> Result<Vec<PathBuf>, ResourceError> {
    let full_pattern = if Path::new(pattern).is_absolute() {
        PathBuf::from(pattern)
    } else {
        base_dir.join(pattern.strip_prefix("./").unwrap_or(pattern))
    };

    let entries = glob::glob(&full_pattern.to_string_lossy()).map_err(|source| {
        ResourceError::Pattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;

    let mut files: Vec<PathBuf> = entries.flatten().filter(|p| p.is_file()).collect();
    files.sort();
    Ok(files)
}

/// Load every JSON file matched by `patterns` (relative to `base_dir`).
///
/// Each file becomes one namespace of one language. Bad patterns and files
/// that cannot be read or parsed are recorded as warnings and skipped. A
/// file matched by several patterns is loaded once.
pub fn load_resources(patterns: &[String], base_dir: &Path) -> LoadResourcesResult {
    let mut result = LoadResourcesResult::default();
    let mut seen: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let files = match expand_pattern(pattern, base_dir) {
            Ok(files) => files,
            Err(err) => {
                debug!("Skipping pattern: {}", err);
                result.warnings.push(err);
                continue;
            }
        };

        for file in files {
            if seen.contains(&file) {
                continue;
            }
            seen.push(file.clone());

            match parse_resource_file(&file) {
                Ok(tree) => {
                    let language = extract_language(&file);
                    let namespace = extract_namespace(&file);
                    debug!("Loaded: {} -> {}/{}", file.display(), language, namespace);
                    result.resources.insert(language, namespace, tree);
                    result.files_loaded += 1;
                }
                Err(err) => {
                    debug!("Skipping file: {}", err);
                    result.warnings.push(err);
                }
            }
        }
    }

    result
}
