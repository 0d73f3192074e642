//! Cross-file usage registry.
//!
//! Collects [`UsageRecord`]s from every scanned file into one multimap keyed
//! by canonical key. Keys keep first-insertion order and records under one
//! key keep the order in which they were added.
//!
//! All access goes through a single mutex, so parallel file scans can append
//! while another thread takes a snapshot for an interim report. Readers
//! always get owned copies, never a view into the live map.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use crate::core::usage::UsageRecord;

#[derive(Debug, Default)]
struct RegistryInner {
    /// Canonical keys in first-insertion order.
    order: Vec<String>,
    buckets: HashMap<String, Vec<UsageRecord>>,
}

impl RegistryInner {
    fn push(&mut self, record: UsageRecord) {
        match self.buckets.get_mut(&record.canonical_key) {
            Some(bucket) => bucket.push(record),
            None => {
                self.order.push(record.canonical_key.clone());
                self.buckets
                    .insert(record.canonical_key.clone(), vec![record]);
            }
        }
    }

    fn records(&self) -> impl Iterator<Item = &UsageRecord> {
        self.order
            .iter()
            .filter_map(|key| self.buckets.get(key))
            .flatten()
    }

    fn remove_file(&mut self, file: &str) {
        for bucket in self.buckets.values_mut() {
            bucket.retain(|record| record.source_file != file);
        }
        self.buckets.retain(|_, bucket| !bucket.is_empty());
        let buckets = &self.buckets;
        self.order.retain(|key| buckets.contains_key(key));
    }
}

/// Session-scoped, thread-safe store of usage records.
#[derive(Debug, Default)]
pub struct UsageRegistry {
    inner: Mutex<RegistryInner>,
}

impl UsageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record. Never deduplicates.
    pub fn add_record(&self, record: UsageRecord) {
        self.inner.lock().push(record);
    }

    /// Append records under a single lock acquisition, preserving their order.
    pub fn add_records(&self, records: impl IntoIterator<Item = UsageRecord>) {
        let mut inner = self.inner.lock();
        for record in records {
            inner.push(record);
        }
    }

    /// Drop every record previously added for `file` and append `records`.
    ///
    /// Used when a file is scanned again so its usages are not counted twice.
    /// Both steps happen under one lock, so readers see either the old or the
    /// new records for the file, never both.
    pub fn replace_file(&self, file: &str, records: impl IntoIterator<Item = UsageRecord>) {
        let mut inner = self.inner.lock();
        inner.remove_file(file);
        for record in records {
            inner.push(record);
        }
    }

    /// Snapshot of every record, grouped by key in first-insertion order.
    pub fn all_records(&self) -> Vec<UsageRecord> {
        self.inner.lock().records().cloned().collect()
    }

    pub fn static_records(&self) -> Vec<UsageRecord> {
        self.inner
            .lock()
            .records()
            .filter(|r| !r.is_dynamic)
            .cloned()
            .collect()
    }

    pub fn dynamic_records(&self) -> Vec<UsageRecord> {
        self.inner
            .lock()
            .records()
            .filter(|r| r.is_dynamic)
            .cloned()
            .collect()
    }

    /// Distinct canonical keys of static records, in first-seen order.
    pub fn unique_static_keys(&self) -> Vec<String> {
        let inner = self.inner.lock();
        let mut seen = HashSet::new();
        inner
            .records()
            .filter(|r| !r.is_dynamic)
            .filter(|r| seen.insert(r.canonical_key.as_str()))
            .map(|r| r.canonical_key.clone())
            .collect()
    }

    /// All records for one canonical key, in insertion order.
    pub fn usages_for(&self, key: &str) -> Vec<UsageRecord> {
        self.inner
            .lock()
            .buckets
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of records (not keys).
    pub fn len(&self) -> usize {
        self.inner.lock().buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().buckets.is_empty()
    }

    /// Reset to empty. Meant for the boundary between two build sessions.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.order.clear();
        inner.buckets.clear();
    }
}
