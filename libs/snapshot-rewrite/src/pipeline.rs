//! Pipeline entry points.
//!
//! ```text
//! rewrite_and_normalize: source → parse → rewrite → emit → strip `;` lines
//! normalize_only:        source → parse → emit
//! ```
//!
//! Every call owns its source map and tree, so calls may run concurrently
//! without coordination; the batch helpers rely on that.
//!
//! Parsing, visiting, emitting and dropping the tree all recurse once per
//! nesting level, so each call runs on a freshly allocated stack segment of
//! [`STACKER_STACK_SIZE_BYTES`] whatever thread it is called from.

use config::constants::STACKER_STACK_SIZE_BYTES;
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::error::RewriteResult;
use crate::normalizer::strip_empty_statement_lines;
use crate::parser::parse_module;
use crate::printer::print_module;
use crate::rewriter::rewrite_module;

/// Rewrites one backend's snapshot so it can be diffed against the other's.
///
/// Parses `code`, applies the rewrite rules, re-emits the tree and removes
/// the `;` lines left by elided statements.
///
/// # Errors
///
/// Returns [`RewriteError::Parse`](crate::RewriteError::Parse) when `code`
/// is not a valid module; no partial output is produced.
///
/// # Examples
///
/// ```
/// use snapshot_rewrite::rewrite_and_normalize;
///
/// let input = "import assert from \"assert\";\n\"use strict\";\nassert.equal(compute(), 42);\n";
/// let output = rewrite_and_normalize(input).expect("rewrite succeeds");
/// assert_eq!(output.trim_end(), "console.log(compute());");
/// ```
pub fn rewrite_and_normalize(code: &str) -> RewriteResult<String> {
    stacker::grow(STACKER_STACK_SIZE_BYTES, || rewrite_and_normalize_inner(code))
}

/// Re-serializes the comparison baseline through the same code generator,
/// without rewriting or line filtering.
///
/// Applying it twice gives the same text as applying it once.
///
/// # Examples
///
/// ```
/// use snapshot_rewrite::normalize_only;
///
/// let once = normalize_only("const  a = 'x'").expect("normalize succeeds");
/// let twice = normalize_only(&once).expect("normalize succeeds");
/// assert_eq!(once, twice);
/// ```
pub fn normalize_only(code: &str) -> RewriteResult<String> {
    stacker::grow(STACKER_STACK_SIZE_BYTES, || normalize_only_inner(code))
}

/// Runs [`rewrite_and_normalize`] over independent sources in parallel.
///
/// Results are in input order; a failing source does not affect the others.
pub fn rewrite_and_normalize_all<S>(sources: &[S]) -> Vec<RewriteResult<String>>
where
    S: AsRef<str> + Sync,
{
    sources
        .par_iter()
        .map(|source| rewrite_and_normalize(source.as_ref()))
        .collect()
}

/// Runs [`normalize_only`] over independent sources in parallel.
pub fn normalize_only_all<S>(sources: &[S]) -> Vec<RewriteResult<String>>
where
    S: AsRef<str> + Sync,
{
    sources
        .par_iter()
        .map(|source| normalize_only(source.as_ref()))
        .collect()
}

#[instrument(level = "debug", skip_all, fields(len = code.len()))]
fn rewrite_and_normalize_inner(code: &str) -> RewriteResult<String> {
    let mut parsed = parse_module(code)?;
    let stats = rewrite_module(parsed.module_mut());
    let generated = print_module(&parsed)?;
    let text = strip_empty_statement_lines(&generated);
    debug!(rewritten = stats.total(), output_len = text.len(), "snapshot rewritten");
    Ok(text)
}

#[instrument(level = "debug", skip_all, fields(len = code.len()))]
fn normalize_only_inner(code: &str) -> RewriteResult<String> {
    let parsed = parse_module(code)?;
    print_module(&parsed)
}
