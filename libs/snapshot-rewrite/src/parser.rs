//! Parser adapter: snapshot source text → owned syntax tree.
//!
//! The grammar is fixed to the latest ECMAScript version with the module
//! source type. Errors the parser recovers from are treated the same as
//! fatal ones, so a tree is only returned for input that parsed cleanly.
//!
//! # Examples
//!
//! ```
//! use snapshot_rewrite::parse_module;
//!
//! let parsed = parse_module("export const answer = 42;").expect("parse succeeds");
//! assert_eq!(parsed.module().body.len(), 1);
//!
//! assert!(parse_module("export const = ;").is_err());
//! ```

use swc_core::common::{sync::Lrc, BytePos, FileName, SourceMap, Spanned};
use swc_core::ecma::ast::{EsVersion, Module};
use swc_core::ecma::parser::{error::Error as SyntaxError, lexer::Lexer, Parser, StringInput, Syntax};
use tracing::warn;

use crate::diagnostic::Diagnostic;
use crate::error::{RewriteError, RewriteResult};
use crate::span::Span;

/// A parsed module together with the source map its spans point into.
///
/// Each entry-point call builds its own `ParsedModule`; nothing in it is
/// shared with other calls.
pub struct ParsedModule {
    source_map: Lrc<SourceMap>,
    module: Module,
}

impl ParsedModule {
    /// The syntax tree.
    pub fn module(&self) -> &Module {
        &self.module
    }

    /// Mutable access for the rewriter.
    pub fn module_mut(&mut self) -> &mut Module {
        &mut self.module
    }

    pub(crate) fn source_map(&self) -> Lrc<SourceMap> {
        self.source_map.clone()
    }
}

/// Parses `source` as an ECMAScript module.
///
/// # Errors
///
/// Returns [`RewriteError::Parse`] with one diagnostic per syntax error,
/// spans relative to `source`.
pub fn parse_module(source: &str) -> RewriteResult<ParsedModule> {
    let source_map: Lrc<SourceMap> = Default::default();
    let file = source_map.new_source_file(FileName::Anon.into(), source.to_string());
    let file_start = file.start_pos;

    let lexer = Lexer::new(
        Syntax::Es(Default::default()),
        EsVersion::latest(),
        StringInput::from(&*file),
        None,
    );
    let mut parser = Parser::new_from(lexer);

    let parsed = parser.parse_module();
    let mut errors = parser.take_errors();

    let module = match parsed {
        Ok(module) if errors.is_empty() => module,
        Ok(_) => return Err(syntax_errors(errors, file_start)),
        Err(fatal) => {
            errors.push(fatal);
            return Err(syntax_errors(errors, file_start));
        }
    };

    Ok(ParsedModule { source_map, module })
}

fn syntax_errors(mut errors: Vec<SyntaxError>, file_start: BytePos) -> RewriteError {
    errors.sort_by_key(|e| e.span().lo);
    let diagnostics = errors
        .into_iter()
        .map(|e| {
            let span = Span::from_source_map(e.span(), file_start);
            let diagnostic = Diagnostic::error(e.kind().msg().to_string(), span)
                .with_hint("input must be a valid ECMAScript module");
            warn!(%diagnostic, "snapshot failed to parse");
            diagnostic
        })
        .collect();
    RewriteError::Parse { diagnostics }
}
