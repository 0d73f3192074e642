//! Usage records produced by the pattern matchers.

use serde::{Deserialize, Serialize};

use crate::core::key::parse_key;

/// Canonical key (and local key) of every dynamic usage.
pub const DYNAMIC_KEY: &str = "<dynamic>";

/// What a matcher could learn about the key argument of a matched node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyArgument {
    /// Key text known at scan time: `t("common.save")`, `` t(`common.save`) ``.
    Static(String),
    /// Key computed at runtime: `t(name)`, `` t(`${ns}.save`) ``, `t(a + b)`.
    Dynamic,
}

impl KeyArgument {
    pub fn is_dynamic(&self) -> bool {
        matches!(self, KeyArgument::Dynamic)
    }
}

/// Source position of a usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLocation {
    pub file: String,
    /// 1-based line.
    pub line: usize,
    /// 0-based column.
    pub column: usize,
}

/// One key reference found in a source file.
///
/// Dynamic usages always have `canonical_key == DYNAMIC_KEY`, the default
/// namespace, `local_key == DYNAMIC_KEY` and no default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    /// The key exactly as written at the call site.
    #[serde(rename = "key")]
    pub canonical_key: String,
    pub namespace: String,
    pub local_key: String,
    #[serde(rename = "file")]
    pub source_file: String,
    pub line: usize,
    pub column: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub is_dynamic: bool,
}

impl UsageRecord {
    /// Build a record from a matcher verdict.
    ///
    /// Static keys go through the key parser; dynamic keys get the sentinel
    /// and lose any default value.
    pub fn from_match(
        argument: KeyArgument,
        default_value: Option<String>,
        default_namespace: &str,
        location: UsageLocation,
    ) -> Self {
        match argument {
            KeyArgument::Static(key) => {
                let parsed = parse_key(&key, default_namespace);
                Self {
                    canonical_key: key,
                    namespace: parsed.namespace,
                    local_key: parsed.local_key,
                    source_file: location.file,
                    line: location.line,
                    column: location.column,
                    default_value,
                    is_dynamic: false,
                }
            }
            KeyArgument::Dynamic => Self {
                canonical_key: DYNAMIC_KEY.to_string(),
                namespace: default_namespace.to_string(),
                local_key: DYNAMIC_KEY.to_string(),
                source_file: location.file,
                line: location.line,
                column: location.column,
                default_value: None,
                is_dynamic: true,
            },
        }
    }

    pub fn location(&self) -> UsageLocation {
        UsageLocation {
            file: self.source_file.clone(),
            line: self.line,
            column: self.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::usage::*;
    use pretty_assertions::assert_eq;

    fn loc(file: &str, line: usize, column: usize) -> UsageLocation {
        UsageLocation {
            file: file.to_string(),
            line,
            column,
        }
    }

    #[test]
    fn test_static_record_is_parsed() {
        let record = UsageRecord::from_match(
            KeyArgument::Static("auth:login.title".to_string()),
            Some("Log in".to_string()),
            "translation",
            loc("src/App.tsx", 3, 4),
        );

        assert_eq!(record.canonical_key, "auth:login.title");
        assert_eq!(record.namespace, "auth");
        assert_eq!(record.local_key, "login.title");
        assert_eq!(record.default_value.as_deref(), Some("Log in"));
        assert!(!record.is_dynamic);
        assert_eq!(record.location(), loc("src/App.tsx", 3, 4));
    }

    #[test]
    fn test_dynamic_record_uses_sentinel() {
        let record = UsageRecord::from_match(
            KeyArgument::Dynamic,
            Some("ignored".to_string()),
            "common",
            loc("src/App.tsx", 1, 0),
        );

        assert_eq!(record.canonical_key, DYNAMIC_KEY);
        assert_eq!(record.namespace, "common");
        assert_eq!(record.local_key, DYNAMIC_KEY);
        assert_eq!(record.default_value, None);
        assert!(record.is_dynamic);
    }

    #[test]
    fn test_serialized_field_names() {
        let record = UsageRecord::from_match(
            KeyArgument::Static("hello".to_string()),
            None,
            "translation",
            loc("a.ts", 1, 2),
        );
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "key": "hello",
                "namespace": "translation",
                "localKey": "hello",
                "file": "a.ts",
                "line": 1,
                "column": 2,
                "isDynamic": false
            })
        );
    }
}
