//! Matcher for translation function calls.
//!
//! Fires on `t(...)` and on any member call whose property is `t`
//! (`i18n.t(...)`, `props.i18n.t(...)`, `this.t(...)`, `super.t(...)`).

use swc_ecma_ast::{
    CallExpr, Callee, Expr, MemberProp, Prop, PropName, PropOrSpread, SuperProp,
};

use super::{KeyMatch, SyntaxNode, UsageMatcher, string_literal, unwrap_parens};
use crate::core::usage::KeyArgument;

const TRANSLATE_FN: &str = "t";
const DEFAULT_VALUE_OPTION: &str = "defaultValue";

#[derive(Debug, Clone, Copy, Default)]
pub struct CallMatcher;

impl CallMatcher {
    fn is_translate_callee(callee: &Callee) -> bool {
        let Callee::Expr(expr) = callee else {
            return false;
        };
        match &**expr {
            Expr::Ident(ident) => ident.sym == TRANSLATE_FN,
            Expr::Member(member) => {
                matches!(&member.prop, MemberProp::Ident(prop) if prop.sym == TRANSLATE_FN)
            }
            // super.t(...)
            Expr::SuperProp(super_prop) => {
                matches!(&super_prop.prop, SuperProp::Ident(prop) if prop.sym == TRANSLATE_FN)
            }
            _ => false,
        }
    }

    /// Classify the first call argument.
    fn key_argument(call: &CallExpr) -> Option<KeyArgument> {
        let arg = call.args.first()?;
        if arg.spread.is_some() {
            return Some(KeyArgument::Dynamic);
        }

        if let Some(value) = string_literal(&arg.expr) {
            return Some(KeyArgument::Static(value));
        }

        // Template literal without `${...}` has a single quasi
        if let Expr::Tpl(tpl) = unwrap_parens(&arg.expr)
            && tpl.exprs.is_empty()
            && let Some(quasi) = tpl.quasis.first()
        {
            return Some(KeyArgument::Static(quasi.raw.to_string()));
        }

        Some(KeyArgument::Dynamic)
    }

    /// Find `{ defaultValue: "..." }` in the options argument.
    fn default_value(call: &CallExpr) -> Option<String> {
        let options = call.args.get(1)?;
        if options.spread.is_some() {
            return None;
        }
        let Expr::Object(object) = unwrap_parens(&options.expr) else {
            return None;
        };

        object.props.iter().find_map(|prop| {
            let PropOrSpread::Prop(prop) = prop else {
                return None;
            };
            let Prop::KeyValue(kv) = &**prop else {
                return None;
            };
            let is_default_value = match &kv.key {
                PropName::Ident(ident) => ident.sym == DEFAULT_VALUE_OPTION,
                PropName::Str(s) => s.value.as_str() == Some(DEFAULT_VALUE_OPTION),
                _ => false,
            };
            if is_default_value {
                string_literal(&kv.value)
            } else {
                None
            }
        })
    }
}

impl UsageMatcher for CallMatcher {
    fn name(&self) -> &'static str {
        "call"
    }

    fn try_match(&self, node: &SyntaxNode<'_>) -> Option<KeyMatch> {
        let SyntaxNode::Call(call) = node else {
            return None;
        };
        if !Self::is_translate_callee(&call.callee) {
            return None;
        }

        let argument = Self::key_argument(call)?;
        let default_value = if argument.is_dynamic() {
            None
        } else {
            Self::default_value(call)
        };
        Some(KeyMatch::new(argument).with_default_value(default_value))
    }
}
