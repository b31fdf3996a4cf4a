//! Output normalizer: drops the lone `;` lines left where statements were
//! replaced by empty statements. Every other line, blank ones and
//! indentation included, is kept verbatim and in order.

use config::constants::{EMPTY_STATEMENT_LINE, GENERATED_NEW_LINE};
use tracing::trace;

/// Removes every line whose trimmed content is exactly `;`.
///
/// Splits on `'\n'` rather than using `lines()`, so a trailing newline in
/// `text` is still present in the result.
///
/// # Examples
///
/// ```
/// use snapshot_rewrite::strip_empty_statement_lines;
///
/// let text = ";\nfoo;\n    ;\n\nbar();\n";
/// assert_eq!(strip_empty_statement_lines(text), "foo;\n\nbar();\n");
/// ```
pub fn strip_empty_statement_lines(text: &str) -> String {
    let mut removed = 0usize;
    let kept: Vec<&str> = text
        .split(GENERATED_NEW_LINE)
        .filter(|line| {
            let artifact = line.trim() == EMPTY_STATEMENT_LINE;
            removed += usize::from(artifact);
            !artifact
        })
        .collect();
    trace!(removed, "stripped empty statement lines");
    kept.join(GENERATED_NEW_LINE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lone_semicolon_lines_are_removed() {
        assert_eq!(strip_empty_statement_lines(";\n;\na();"), "a();");
    }

    #[test]
    fn test_statement_ending_in_semicolon_is_kept() {
        assert_eq!(strip_empty_statement_lines("foo;\n;"), "foo;");
        assert_eq!(strip_empty_statement_lines(";;"), ";;");
        assert_eq!(strip_empty_statement_lines("; // note"), "; // note");
    }

    #[test]
    fn test_indented_and_crlf_artifacts_are_removed() {
        assert_eq!(
            strip_empty_statement_lines("function f() {\n    ;\n\t;\r\n    g();\n}"),
            "function f() {\n    g();\n}"
        );
    }

    #[test]
    fn test_blank_lines_and_indentation_survive() {
        let text = "if (a) {\n    b();\n\n    c();\n}\n";
        assert_eq!(strip_empty_statement_lines(text), text);
    }

    #[test]
    fn test_trailing_newline_survives() {
        assert_eq!(strip_empty_statement_lines("a();\n;\n"), "a();\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_empty_statement_lines(""), "");
        assert_eq!(strip_empty_statement_lines(";"), "");
    }
}
