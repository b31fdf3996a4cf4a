//! Code generator adapter: syntax tree → source text.
//!
//! Uses the generator's default configuration so that text coming from both
//! bundler backends goes through identical formatting.

use config::constants::GENERATED_NEW_LINE;
use swc_core::ecma::codegen::{text_writer::JsWriter, Config, Emitter};

use crate::error::RewriteResult;
use crate::parser::ParsedModule;

/// Emits `parsed` as source text.
///
/// # Errors
///
/// Returns [`RewriteError::Codegen`](crate::RewriteError::Codegen) when the
/// emitter fails and [`RewriteError::InvalidUtf8`](crate::RewriteError::InvalidUtf8)
/// when its output is not UTF-8.
///
/// # Examples
///
/// ```
/// use snapshot_rewrite::{parse_module, print_module};
///
/// let parsed = parse_module("let   x=1").expect("parse succeeds");
/// let text = print_module(&parsed).expect("emit succeeds");
/// assert_eq!(text.trim_end(), "let x = 1;");
/// ```
pub fn print_module(parsed: &ParsedModule) -> RewriteResult<String> {
    let source_map = parsed.source_map();
    let mut buf = Vec::new();
    {
        let mut emitter = Emitter {
            cfg: Config::default(),
            cm: source_map.clone(),
            comments: None,
            wr: JsWriter::new(source_map, GENERATED_NEW_LINE, &mut buf, None),
        };
        emitter.emit_module(parsed.module())?;
    }
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_module;

    #[test]
    fn test_each_statement_on_its_own_line() {
        let parsed = parse_module("a(); b();").expect("parse succeeds");
        let text = print_module(&parsed).expect("emit succeeds");
        assert_eq!(text.lines().collect::<Vec<_>>(), ["a();", "b();"]);
    }

    #[test]
    fn test_empty_statement_is_emitted_as_lone_semicolon() {
        let parsed = parse_module("a();\n;\nb();").expect("parse succeeds");
        let text = print_module(&parsed).expect("emit succeeds");
        assert!(text.lines().any(|line| line.trim() == ";"));
    }

    #[test]
    fn test_comments_are_not_carried() {
        let parsed = parse_module("// leading\na(); /* trailing */").expect("parse succeeds");
        let text = print_module(&parsed).expect("emit succeeds");
        assert!(!text.contains("leading"));
        assert!(!text.contains("trailing"));
    }
}
