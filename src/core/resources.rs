//! In-memory translation resources.
//!
//! A [`ResourceSet`] maps language → namespace → JSON tree. Objects are
//! walked; every other value (strings, numbers, arrays, null) is a leaf.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Namespaces of one language.
pub type LanguageResources = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceSet {
    languages: BTreeMap<String, LanguageResources>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) one namespace tree for a language.
    pub fn insert(&mut self, language: impl Into<String>, namespace: impl Into<String>, tree: Value) {
        self.languages
            .entry(language.into())
            .or_default()
            .insert(namespace.into(), tree);
    }

    /// Language codes in sorted order.
    pub fn languages(&self) -> Vec<String> {
        self.languages.keys().cloned().collect()
    }

    pub fn language(&self, language: &str) -> Option<&LanguageResources> {
        self.languages.get(language)
    }

    pub fn namespace(&self, language: &str, namespace: &str) -> Option<&Value> {
        self.languages.get(language)?.get(namespace)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Whether `local_key` resolves as a dot path inside `language`/`namespace`.
    ///
    /// A missing language or namespace, a missing segment, or a segment that
    /// would have to descend into a non-object value all mean "not found".
    pub fn contains_key(&self, language: &str, namespace: &str, local_key: &str) -> bool {
        self.namespace(language, namespace)
            .is_some_and(|tree| lookup_path(tree, local_key).is_some())
    }
}

/// Walk `path` one dot segment at a time.
pub fn lookup_path<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(tree, |current, segment| current.as_object()?.get(segment))
}

/// Flatten a namespace tree into dot-joined leaf paths prefixed by `prefix`.
///
/// Arrays are leaves and are never descended into, even when they hold
/// objects. Empty objects produce no paths.
pub fn flatten_keys(tree: &Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Value::Object(map) = tree {
        for (key, value) in map {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            if value.is_object() {
                keys.extend(flatten_keys(value, &full_key));
            } else {
                keys.push(full_key);
            }
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use crate::core::resources::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_lookup_nested() {
        let tree = json!({"login": {"title": "Log in", "button": "Go"}});
        assert_eq!(lookup_path(&tree, "login.title"), Some(&json!("Log in")));
        assert!(lookup_path(&tree, "login.missing").is_none());
        assert!(lookup_path(&tree, "logout").is_none());
    }

    #[test]
    fn test_lookup_through_leaf_is_not_found() {
        let tree = json!({"title": "Hi", "items": [{"a": "x"}]});
        assert!(lookup_path(&tree, "title.more").is_none());
        assert!(lookup_path(&tree, "items.0").is_none());
        assert!(lookup_path(&tree, "items.0.a").is_none());
    }

    #[test]
    fn test_lookup_object_and_null_values_count_as_found() {
        let tree = json!({"group": {"a": "x"}, "nothing": null});
        assert!(lookup_path(&tree, "group").is_some());
        assert!(lookup_path(&tree, "nothing").is_some());
    }

    #[test]
    fn test_contains_key_missing_language_or_namespace() {
        let mut resources = ResourceSet::new();
        resources.insert("en", "common", json!({"hello": "Hi"}));

        assert!(resources.contains_key("en", "common", "hello"));
        assert!(!resources.contains_key("fr", "common", "hello"));
        assert!(!resources.contains_key("en", "auth", "hello"));
    }

    #[test]
    fn test_flatten_with_prefix() {
        let tree = json!({"hello": "Hi", "nested": {"deep": {"key": "v"}, "other": "o"}});
        assert_eq!(
            flatten_keys(&tree, "common"),
            vec!["common.hello", "common.nested.deep.key", "common.nested.other"]
        );
    }

    #[test]
    fn test_flatten_arrays_are_leaves() {
        let tree = json!({"list": ["a", "b"], "objects": [{"q": "x"}], "empty": {}});
        assert_eq!(flatten_keys(&tree, "ns"), vec!["ns.list", "ns.objects"]);
    }

    #[test]
    fn test_flatten_non_object_root() {
        assert!(flatten_keys(&json!("text"), "ns").is_empty());
    }

    #[test]
    fn test_languages_sorted() {
        let mut resources = ResourceSet::new();
        resources.insert("fr", "translation", json!({}));
        resources.insert("en", "translation", json!({}));
        assert_eq!(resources.languages(), vec!["en", "fr"]);
    }
}
