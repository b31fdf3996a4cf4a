//! # Configuration Constants
//!
//! Rule tables for the tree rewriter, markers for the output normalizer and
//! resource limits for the pipeline entry points.
//!
//! ## Categories
//!
//! - **Imports**: Module sources whose import declarations are elided
//! - **Assertions**: Callee shape and arity of rewritten assertion calls
//! - **Directives**: The directive string removed from prologues
//! - **Output**: Line markers used when normalizing generated text
//! - **Limits**: Stack growth parameters for deep syntax trees

// =============================================================================
// IMPORT CONSTANTS
// =============================================================================

/// Module sources whose import declarations are removed.
///
/// Matching is exact: `"assert/strict"` or `"Assert"` are kept.
///
/// # Example
///
/// ```rust
/// use config::constants::ASSERT_MODULE_SOURCES;
///
/// assert!(ASSERT_MODULE_SOURCES.contains(&"assert"));
/// assert!(!ASSERT_MODULE_SOURCES.contains(&"assert/strict"));
/// ```
pub const ASSERT_MODULE_SOURCES: [&str; 2] = ["assert", "node:assert"];

/// Returns true when `source` names one of the elided assertion modules.
///
/// # Example
///
/// ```rust
/// use config::constants::is_assert_module_source;
///
/// assert!(is_assert_module_source("assert"));
/// assert!(!is_assert_module_source("chai"));
/// ```
pub fn is_assert_module_source(source: &str) -> bool {
    ASSERT_MODULE_SOURCES.contains(&source)
}

// =============================================================================
// ASSERTION CONSTANTS
// =============================================================================

/// Identifier that must appear as the object of a rewritten call.
pub const ASSERT_OBJECT: &str = "assert";

/// Members of [`ASSERT_OBJECT`] whose calls are turned into log calls.
///
/// # Example
///
/// ```rust
/// use config::constants::ASSERTION_MEMBERS;
///
/// assert_eq!(ASSERTION_MEMBERS.len(), 3);
/// ```
pub const ASSERTION_MEMBERS: [&str; 3] = ["equal", "strictEqual", "deepEqual"];

/// Returns true when `member` is one of [`ASSERTION_MEMBERS`].
///
/// # Example
///
/// ```rust
/// use config::constants::is_assertion_member;
///
/// assert!(is_assertion_member("deepEqual"));
/// assert!(!is_assertion_member("deepStrictEqual"));
/// ```
pub fn is_assertion_member(member: &str) -> bool {
    ASSERTION_MEMBERS.contains(&member)
}

/// Exact argument count an assertion call must have to be rewritten.
///
/// Calls carrying a message argument (three arguments) are left alone.
pub const ASSERTION_ARITY: usize = 2;

/// Object identifier of the replacement callee.
pub const LOG_OBJECT: &str = "console";

/// Member name of the replacement callee.
pub const LOG_METHOD: &str = "log";

// =============================================================================
// DIRECTIVE CONSTANTS
// =============================================================================

/// Directive removed from directive prologues.
///
/// # Example
///
/// ```rust
/// use config::constants::STRICT_DIRECTIVE;
///
/// assert_eq!(STRICT_DIRECTIVE, "use strict");
/// ```
pub const STRICT_DIRECTIVE: &str = "use strict";

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Trimmed content of a line left behind by emitting an empty statement.
pub const EMPTY_STATEMENT_LINE: &str = ";";

/// Line separator used by the code generator and by the normalizer.
pub const GENERATED_NEW_LINE: &str = "\n";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Bytes of stack allocated by `stacker::grow` for every entry-point call.
///
/// Parse, traversal, emission and drop of the tree recurse once per nesting
/// level; this segment holds a module nested a few thousand levels deep in an
/// unoptimized build.
///
/// # Example
///
/// ```rust
/// use config::constants::STACKER_STACK_SIZE_BYTES;
///
/// assert!(STACKER_STACK_SIZE_BYTES >= 64 * 1024 * 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 256 * 1024 * 1024;
