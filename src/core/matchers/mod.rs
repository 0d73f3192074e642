//! Pattern matchers for translation key usages.
//!
//! The file analyzer walks each module once and hands every candidate node to
//! each matcher in the [`MatcherSet`]. A matcher inspects one node and either
//! ignores it or reports the key argument it found.
//!
//! ## Module Structure
//!
//! - `call`: `t("key")` and `obj.t("key")` calls
//! - `trans`: `<Trans i18nKey="key" />` elements
//!
//! New call or marker shapes are added by implementing [`UsageMatcher`] and
//! pushing the matcher into the set; the registry and the coverage engine
//! never see matcher types.

mod call;
mod trans;

use swc_common::Span;
use swc_ecma_ast::{CallExpr, Expr, JSXOpeningElement, Lit};

pub use call::CallMatcher;
pub use trans::TransMatcher;

use crate::core::usage::KeyArgument;

/// A syntax tree node offered to the matchers.
#[derive(Debug, Clone, Copy)]
pub enum SyntaxNode<'a> {
    Call(&'a CallExpr),
    JsxOpening(&'a JSXOpeningElement),
}

impl SyntaxNode<'_> {
    pub fn span(&self) -> Span {
        match self {
            SyntaxNode::Call(call) => call.span,
            SyntaxNode::JsxOpening(element) => element.span,
        }
    }
}

/// Result of a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    pub argument: KeyArgument,
    /// Fallback text given at the call site. Only static matches carry one.
    pub default_value: Option<String>,
}

impl KeyMatch {
    pub fn new(argument: KeyArgument) -> Self {
        Self {
            argument,
            default_value: None,
        }
    }

    pub fn with_default_value(mut self, default_value: Option<String>) -> Self {
        if !self.argument.is_dynamic() {
            self.default_value = default_value;
        }
        self
    }
}

/// A stateless matcher over syntax nodes.
///
/// Returns `None` when the node is not a key usage of this matcher's shape.
pub trait UsageMatcher: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn try_match(&self, node: &SyntaxNode<'_>) -> Option<KeyMatch>;
}

/// Ordered collection of matchers evaluated against every node.
pub struct MatcherSet {
    matchers: Vec<Box<dyn UsageMatcher>>,
}

impl MatcherSet {
    /// An empty set. Most callers want [`MatcherSet::default`].
    pub fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    pub fn push(&mut self, matcher: impl UsageMatcher + 'static) -> &mut Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    /// Every match any matcher reports for this node, in registration order.
    pub fn match_node(&self, node: &SyntaxNode<'_>) -> Vec<KeyMatch> {
        self.matchers
            .iter()
            .filter_map(|matcher| matcher.try_match(node))
            .collect()
    }
}

impl Default for MatcherSet {
    fn default() -> Self {
        let mut set = Self::empty();
        set.push(CallMatcher).push(TransMatcher);
        set
    }
}

/// Strip any number of wrapping parentheses: `(("key"))` → `"key"`.
pub(crate) fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}

/// The value of a plain string literal expression.
pub(crate) fn string_literal(expr: &Expr) -> Option<String> {
    match unwrap_parens(expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|v| v.to_string()),
        _ => None,
    }
}
