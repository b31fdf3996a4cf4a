//! # Snapshot Rewrite Crate
//!
//! Source-to-source rewriting of bundler test snapshots. Two backends emit
//! snapshots that differ in superficial ways (assertion style, assert
//! imports, `"use strict"` prologues, quoting and spacing); this crate
//! removes those differences so the two outputs can be diffed.
//!
//! ## Architecture
//!
//! ```text
//! Source → parser (swc, latest ES, module) → rewriter → printer (swc) → normalizer
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use snapshot_rewrite::{normalize_only, rewrite_and_normalize};
//!
//! let ours = rewrite_and_normalize("import assert from 'node:assert';\nassert.strictEqual(x, 1);")
//!     .expect("rewrite succeeds");
//! let theirs = normalize_only("console.log(x)").expect("normalize succeeds");
//! assert_eq!(ours, theirs);
//! ```
//!
//! ## Design Principles
//!
//! - **Owned Trees**: Every call parses into its own tree and mutates it in place
//! - **Closed Dispatch**: Rules match on syntax-tree enum variants
//! - **No Partial Output**: Parse failures propagate with diagnostics

pub mod diagnostic;
pub mod error;
pub mod normalizer;
pub mod parser;
pub mod pipeline;
pub mod printer;
pub mod rewriter;
pub mod span;

// Re-exports for convenience
pub use diagnostic::{Diagnostic, Severity};
pub use error::{RewriteError, RewriteResult};
pub use normalizer::strip_empty_statement_lines;
pub use parser::{parse_module, ParsedModule};
pub use pipeline::{normalize_only, normalize_only_all, rewrite_and_normalize, rewrite_and_normalize_all};
pub use printer::print_module;
pub use rewriter::{rewrite_module, RewriteStats};
pub use span::Span;
