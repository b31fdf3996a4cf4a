//! # Tests for Config Constants
//!
//! Unit tests verifying the rule tables and limits.

use crate::constants::*;

// =============================================================================
// IMPORT TESTS
// =============================================================================

#[test]
fn test_both_assert_sources_are_listed() {
    assert!(is_assert_module_source("assert"));
    assert!(is_assert_module_source("node:assert"));
}

#[test]
fn test_assert_source_matching_is_exact() {
    assert!(!is_assert_module_source("assert/strict"));
    assert!(!is_assert_module_source("node:assert/strict"));
    assert!(!is_assert_module_source("Assert"));
    assert!(!is_assert_module_source(" assert"));
    assert!(!is_assert_module_source(""));
}

// =============================================================================
// ASSERTION TESTS
// =============================================================================

#[test]
fn test_assertion_members() {
    for member in ["equal", "strictEqual", "deepEqual"] {
        assert!(is_assertion_member(member), "{member} should be rewritten");
    }
    for member in ["ok", "notEqual", "deepStrictEqual", "throws", "Equal"] {
        assert!(!is_assertion_member(member), "{member} should be kept");
    }
}

#[test]
fn test_assertion_arity_drops_exactly_one_argument() {
    assert_eq!(ASSERTION_ARITY, 2);
}

#[test]
fn test_replacement_callee_differs_from_assert_object() {
    assert_ne!(LOG_OBJECT, ASSERT_OBJECT);
    assert!(!LOG_METHOD.is_empty());
}

// =============================================================================
// OUTPUT TESTS
// =============================================================================

#[test]
fn test_empty_statement_line_is_trimmed() {
    assert_eq!(EMPTY_STATEMENT_LINE.trim(), EMPTY_STATEMENT_LINE);
    assert_eq!(GENERATED_NEW_LINE, "\n");
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_stack_segment_is_page_aligned_and_large() {
    assert_eq!(STACKER_STACK_SIZE_BYTES % 4096, 0);
    assert!(STACKER_STACK_SIZE_BYTES >= 64 * 1024 * 1024);
}
