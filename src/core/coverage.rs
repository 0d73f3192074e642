//! Coverage and diff engine.
//!
//! Compares the static keys found in source code against a [`ResourceSet`]
//! and computes, for each language:
//!
//! - **missing**: keys used in code with no entry in that language
//! - **unused**: resource entries no static key refers to
//! - **coverage**: share of distinct static keys that resolve
//!
//! The computation is pure. It takes a snapshot of records, so it can run
//! against a registry that other threads are still filling.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::{
    key::parse_key,
    resources::{ResourceSet, flatten_keys},
    usage::{UsageLocation, UsageRecord},
};

/// How flattened resource paths are compared with source keys when
/// looking for unused entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnusedMatching {
    /// Compare against `namespace.localKey` of each parsed source key, so
    /// `auth:login.title` matches the resource path `auth.login.title` and a
    /// bare `hello` matches `translation.hello`.
    #[default]
    Normalized,
    /// Compare against the canonical keys exactly as written in source.
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    pub default_namespace: String,
    pub unused_matching: UnusedMatching,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            default_namespace: crate::config::DEFAULT_NAMESPACE.to_string(),
            unused_matching: UnusedMatching::default(),
        }
    }
}

/// A static key with no resource entry in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingEntry {
    pub key: String,
    pub namespace: String,
    /// Every usage site of the key, in insertion order.
    pub used_in: Vec<UsageLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    pub total_missing: usize,
    pub total_unused: usize,
    pub coverage_percent: BTreeMap<String, u32>,
}

/// Output of [`compute_coverage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Number of distinct static keys.
    pub total_keys: usize,
    pub dynamic_keys: Vec<UsageRecord>,
    pub extracted_keys: Vec<UsageRecord>,
    pub languages: Vec<String>,
    pub missing: BTreeMap<String, Vec<MissingEntry>>,
    pub unused: BTreeMap<String, Vec<String>>,
    pub summary: CoverageSummary,
}

/// Languages to report on: the configured list, or every loaded language.
pub fn resolve_languages(configured: Option<&[String]>, resources: &ResourceSet) -> Vec<String> {
    match configured {
        Some(languages) => languages.to_vec(),
        None => resources.languages(),
    }
}

/// Percentage of `total` keys that are not missing, rounded half up.
/// No keys at all counts as full coverage.
pub fn coverage_percent(total: usize, missing: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    let covered = total.saturating_sub(missing) as f64;
    ((covered / total as f64) * 100.0).round() as u32
}

/// Compute missing keys, unused keys and coverage for every language.
pub fn compute_coverage(
    records: &[UsageRecord],
    resources: &ResourceSet,
    languages: &[String],
    options: &DiffOptions,
) -> Coverage {
    let (extracted_keys, dynamic_keys): (Vec<UsageRecord>, Vec<UsageRecord>) =
        records.iter().cloned().partition(|r| !r.is_dynamic);

    let mut seen = HashSet::new();
    let static_keys: Vec<&str> = extracted_keys
        .iter()
        .map(|r| r.canonical_key.as_str())
        .filter(|key| seen.insert(*key))
        .collect();

    let matchable: HashSet<String> = match options.unused_matching {
        UnusedMatching::Normalized => static_keys
            .iter()
            .map(|key| parse_key(key, &options.default_namespace).dotted())
            .collect(),
        UnusedMatching::Literal => static_keys.iter().map(|key| key.to_string()).collect(),
    };

    let mut missing = BTreeMap::new();
    let mut unused = BTreeMap::new();
    let mut coverage = BTreeMap::new();

    for language in languages {
        let language_missing: Vec<MissingEntry> = static_keys
            .iter()
            .filter_map(|key| {
                let parsed = parse_key(key, &options.default_namespace);
                if resources.contains_key(language, &parsed.namespace, &parsed.local_key) {
                    return None;
                }
                let usages = extracted_keys.iter().filter(|r| r.canonical_key == *key);
                Some(MissingEntry {
                    key: key.to_string(),
                    namespace: parsed.namespace,
                    used_in: usages.clone().map(UsageRecord::location).collect(),
                    default_value: usages.filter_map(|r| r.default_value.clone()).next(),
                })
            })
            .collect();

        let language_unused: Vec<String> = resources
            .language(language)
            .into_iter()
            .flatten()
            .flat_map(|(namespace, tree)| flatten_keys(tree, namespace))
            .filter(|path| !matchable.contains(path))
            .collect();

        coverage.insert(
            language.clone(),
            coverage_percent(static_keys.len(), language_missing.len()),
        );
        missing.insert(language.clone(), language_missing);
        unused.insert(language.clone(), language_unused);
    }

    let summary = CoverageSummary {
        total_missing: missing.values().map(Vec::len).sum(),
        total_unused: unused.values().map(Vec::len).sum(),
        coverage_percent: coverage,
    };

    Coverage {
        total_keys: static_keys.len(),
        dynamic_keys,
        extracted_keys: extracted_keys.clone(),
        languages: languages.to_vec(),
        missing,
        unused,
        summary,
    }
}
