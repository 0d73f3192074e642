//! Matcher for `<Trans i18nKey="..." />` marker elements.

use swc_ecma_ast::{JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElementName, JSXExpr};

use super::{KeyMatch, SyntaxNode, UsageMatcher, string_literal};
use crate::core::usage::KeyArgument;

const TRANS_COMPONENT: &str = "Trans";
const KEY_ATTRIBUTE: &str = "i18nKey";

#[derive(Debug, Clone, Copy, Default)]
pub struct TransMatcher;

impl TransMatcher {
    fn key_attribute<'a>(attrs: &'a [JSXAttrOrSpread]) -> Option<&'a JSXAttr> {
        attrs.iter().find_map(|attr| match attr {
            JSXAttrOrSpread::JSXAttr(attr) => match &attr.name {
                JSXAttrName::Ident(name) if name.sym == KEY_ATTRIBUTE => Some(attr),
                _ => None,
            },
            _ => None,
        })
    }

    fn key_argument(value: Option<&JSXAttrValue>) -> KeyArgument {
        match value {
            // i18nKey="common.save"
            Some(JSXAttrValue::Str(s)) => match s.value.as_str() {
                Some(value) => KeyArgument::Static(value.to_string()),
                None => KeyArgument::Dynamic,
            },
            // i18nKey={"common.save"}
            Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
                JSXExpr::Expr(expr) => match string_literal(expr) {
                    Some(value) => KeyArgument::Static(value),
                    None => KeyArgument::Dynamic,
                },
                JSXExpr::JSXEmptyExpr(_) => KeyArgument::Dynamic,
            },
            _ => KeyArgument::Dynamic,
        }
    }
}

impl UsageMatcher for TransMatcher {
    fn name(&self) -> &'static str {
        "trans"
    }

    fn try_match(&self, node: &SyntaxNode<'_>) -> Option<KeyMatch> {
        let SyntaxNode::JsxOpening(element) = node else {
            return None;
        };
        let JSXElementName::Ident(name) = &element.name else {
            return None;
        };
        if name.sym != TRANS_COMPONENT {
            return None;
        }

        let attr = Self::key_attribute(&element.attrs)?;
        Some(KeyMatch::new(Self::key_argument(attr.value.as_ref())))
    }
}
