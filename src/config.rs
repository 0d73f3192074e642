use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::UnusedMatching;

pub const CONFIG_FILE_NAME: &str = ".transcovrc.json";

/// Namespace for keys written without a separator, and for dynamic usages.
pub const DEFAULT_NAMESPACE: &str = "translation";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_true")]
    pub ignore_test_files: bool,
    /// Glob patterns for translation JSON files, relative to the source root.
    #[serde(default = "default_translation_files")]
    pub translation_files: Vec<String>,
    /// Languages to report on. All loaded languages when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default = "default_namespace")]
    pub default_namespace: String,
    #[serde(default = "default_report_path")]
    pub report_path: String,
    #[serde(default = "default_true")]
    pub emit_warnings: bool,
    #[serde(default)]
    pub fail_on_missing: bool,
    #[serde(default)]
    pub unused_matching: UnusedMatching,
}

fn default_includes() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_translation_files() -> Vec<String> {
    vec!["locales/**/*.json".to_string()]
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_report_path() -> String {
    ".transcov/translations-report.json".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            ignores: Vec::new(),
            ignore_test_files: true,
            translation_files: default_translation_files(),
            languages: None,
            default_namespace: default_namespace(),
            report_path: default_report_path(),
            emit_warnings: true,
            fail_on_missing: false,
            unused_matching: UnusedMatching::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid or the default
    /// namespace is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths, so
        // `src/[id]` is valid without escaping.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        for pattern in &self.translation_files {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'translationFiles': \"{}\"", pattern)
            })?;
        }

        if self.default_namespace.is_empty() {
            anyhow::bail!("'defaultNamespace' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
