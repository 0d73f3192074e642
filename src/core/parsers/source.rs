use std::{path::Path, sync::Arc};

use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::error::ScanError;

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Whether JSX syntax should be enabled for a file.
///
/// Plain `.ts` files disable it so that `<T>(x) => x` and `<T>value` casts
/// parse; everything else (js, jsx, tsx, mjs, cjs) accepts JSX.
fn jsx_enabled(file_path: &str) -> bool {
    !matches!(
        Path::new(file_path).extension().and_then(|e| e.to_str()),
        Some("ts" | "mts" | "cts")
    )
}

/// Parse JS/TS/JSX/TSX source code string into an AST.
///
/// Each call gets its own `SourceMap`, so parsing is safe to run on any
/// number of threads at once.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource, ScanError> {
    use swc_common::GLOBALS;

    let source_map: Arc<SourceMap> = Arc::default();

    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: jsx_enabled(file_path),
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser.parse_module().map_err(|e| ScanError::Parse {
            path: file_path.to_string(),
            message: format!("{:?}", e),
        })?;

        Ok(ParsedSource {
            module,
            source_map: Arc::clone(&source_map),
        })
    })
}

#[cfg(test)]
mod tests {
    use crate::core::parsers::source::*;

    #[test]
    fn test_parse_tsx() {
        let code = r#"export const App = () => <Trans i18nKey="hello" />;"#;
        let parsed = parse_source(code.to_string(), "App.tsx").unwrap();
        assert_eq!(parsed.module.body.len(), 1);
    }

    #[test]
    fn test_parse_ts_generics_without_jsx() {
        let code = "const id = <T,>(x: T) => x; const n = <number>value;";
        assert!(parse_source(code.to_string(), "util.ts").is_ok());
    }

    #[test]
    fn test_parse_error() {
        let result = parse_source("const = ;".to_string(), "broken.js");
        let err = result.err().unwrap();
        assert!(err.to_string().contains("broken.js"));
    }

    #[test]
    fn test_jsx_enabled() {
        assert!(jsx_enabled("a.tsx"));
        assert!(jsx_enabled("a.jsx"));
        assert!(jsx_enabled("a.js"));
        assert!(jsx_enabled("a.mjs"));
        assert!(!jsx_enabled("a.ts"));
        assert!(!jsx_enabled("a.mts"));
    }
}
