//! Translation key parsing.
//!
//! A raw key written at a call site is split into a namespace and a local key.
//! Two separator grammars compete:
//!
//! - `namespace:local.key` (colon wins whenever present)
//! - `namespace.local.key` (first dot segment is the namespace)
//!
//! Keys with neither separator live in the default namespace.

/// A raw key split into namespace and local key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedKey {
    pub namespace: String,
    pub local_key: String,
}

impl ParsedKey {
    pub fn new(namespace: impl Into<String>, local_key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local_key: local_key.into(),
        }
    }

    /// The key in dot-joined form (`namespace.local_key`).
    ///
    /// This is the shape produced by flattening resource trees, so it is the
    /// form used when matching source keys against resource paths.
    pub fn dotted(&self) -> String {
        format!("{}.{}", self.namespace, self.local_key)
    }
}

/// Parse a raw key into namespace and local key.
///
/// Never fails: any string, including the empty string, has a parse.
///
/// # Examples
///
/// ```
/// use transcov::core::key::parse_key;
///
/// let parsed = parse_key("auth:login.title", "translation");
/// assert_eq!(parsed.namespace, "auth");
/// assert_eq!(parsed.local_key, "login.title");
///
/// let parsed = parse_key("common.buttons.save", "translation");
/// assert_eq!(parsed.namespace, "common");
/// assert_eq!(parsed.local_key, "buttons.save");
///
/// let parsed = parse_key("hello", "translation");
/// assert_eq!(parsed.namespace, "translation");
/// assert_eq!(parsed.local_key, "hello");
/// ```
pub fn parse_key(raw: &str, default_namespace: &str) -> ParsedKey {
    if let Some((namespace, local_key)) = raw.split_once(':') {
        return ParsedKey::new(namespace, local_key);
    }

    if let Some((namespace, local_key)) = raw.split_once('.') {
        return ParsedKey::new(namespace, local_key);
    }

    ParsedKey::new(default_namespace, raw)
}
