//! Single-pass key extraction over one parsed module.
//!
//! The analyzer walks the AST once. Every call expression and every JSX
//! opening element is offered to each matcher in the [`MatcherSet`]; each
//! match becomes a [`UsageRecord`] tagged with the file path and the node's
//! start position.

use swc_common::SourceMap;
use swc_ecma_ast::{CallExpr, JSXOpeningElement, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::{
    matchers::{MatcherSet, SyntaxNode},
    usage::{UsageLocation, UsageRecord},
};

/// Collects usage records for a single file.
///
/// # Usage
///
/// ```ignore
/// let parsed = parse_source(code, "src/App.tsx")?;
/// let matchers = MatcherSet::default();
/// let analyzer = FileAnalyzer::new("src/App.tsx", &parsed.source_map, &matchers, "translation");
/// let records = analyzer.analyze(&parsed.module);
/// ```
pub struct FileAnalyzer<'a> {
    /// Path recorded on every usage (as given by the host).
    file_path: &'a str,

    /// SWC source map for looking up line/column positions.
    source_map: &'a SourceMap,

    matchers: &'a MatcherSet,

    /// Namespace for keys without a separator, and for dynamic usages.
    default_namespace: &'a str,

    records: Vec<UsageRecord>,
}

impl<'a> FileAnalyzer<'a> {
    pub fn new(
        file_path: &'a str,
        source_map: &'a SourceMap,
        matchers: &'a MatcherSet,
        default_namespace: &'a str,
    ) -> Self {
        Self {
            file_path,
            source_map,
            matchers,
            default_namespace,
            records: Vec::new(),
        }
    }

    /// Main entry point: analyze a module and return its usages in source order.
    pub fn analyze(mut self, module: &Module) -> Vec<UsageRecord> {
        self.visit_module(module);
        self.records
    }

    fn offer(&mut self, node: SyntaxNode<'_>) {
        let matches = self.matchers.match_node(&node);
        if matches.is_empty() {
            return;
        }

        let loc = self.source_map.lookup_char_pos(node.span().lo);
        for found in matches {
            self.records.push(UsageRecord::from_match(
                found.argument,
                found.default_value,
                self.default_namespace,
                UsageLocation {
                    file: self.file_path.to_string(),
                    line: loc.line,
                    column: loc.col.0,
                },
            ));
        }
    }
}

impl Visit for FileAnalyzer<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.offer(SyntaxNode::Call(node));

        // Nested calls: t(cond ? t("a") : "b")
        node.visit_children_with(self);
    }

    fn visit_jsx_opening_element(&mut self, node: &JSXOpeningElement) {
        self.offer(SyntaxNode::JsxOpening(node));

        // Attribute values may hold calls: <Trans i18nKey={t("k")} />
        node.visit_children_with(self);
    }
}
