//! The three rewrite rules.
//!
//! Each rule matches one node kind and either mutates it in place or
//! downgrades it to an empty statement. Rules never look at each other's
//! nodes, so the order in which the traversal reaches them does not matter.

use config::constants::{
    is_assert_module_source, is_assertion_member, ASSERTION_ARITY, ASSERT_OBJECT, LOG_METHOD,
    LOG_OBJECT, STRICT_DIRECTIVE,
};
use swc_core::ecma::ast::{
    Callee, CallExpr, EmptyStmt, Expr, ExprStmt, Lit, MemberExpr, MemberProp, ModuleDecl,
    ModuleItem, Stmt, Str,
};
use tracing::debug;

// =============================================================================
// IMPORT ELISION
// =============================================================================

/// Replaces an `import ... from "assert"` (or `"node:assert"`) declaration
/// with an empty statement in the same slot.
pub(super) fn elide_assert_import(item: &mut ModuleItem) -> bool {
    let ModuleItem::ModuleDecl(ModuleDecl::Import(import)) = item else {
        return false;
    };
    if !is_assert_module_source(&import.src.value) {
        return false;
    }

    debug!(source = &*import.src.value, "eliding assert import");
    let span = import.span;
    *item = ModuleItem::Stmt(Stmt::Empty(EmptyStmt { span }));
    true
}

// =============================================================================
// STRICT-DIRECTIVE ELISION
// =============================================================================

/// Walks the directive prologue of a statement list and empties every
/// `"use strict"` directive in it. Returns how many were removed.
pub(super) fn elide_strict_directives(stmts: &mut [Stmt]) -> usize {
    let mut elided = 0;
    for stmt in stmts.iter_mut() {
        if elide_strict_directive(stmt) {
            elided += 1;
        } else if !continues_prologue(stmt) {
            break;
        }
    }
    elided
}

/// Module-level variant of [`elide_strict_directives`]. Import declarations
/// do not end the prologue, whether or not they have been elided yet.
pub(super) fn elide_module_strict_directives(items: &mut [ModuleItem]) -> usize {
    let mut elided = 0;
    for item in items.iter_mut() {
        let stmt = match item {
            ModuleItem::Stmt(stmt) => stmt,
            ModuleItem::ModuleDecl(ModuleDecl::Import(_)) => continue,
            _ => break,
        };
        if elide_strict_directive(stmt) {
            elided += 1;
        } else if !continues_prologue(stmt) {
            break;
        }
    }
    elided
}

fn elide_strict_directive(stmt: &mut Stmt) -> bool {
    let Stmt::Expr(ExprStmt { span, expr, .. }) = stmt else {
        return false;
    };
    let Expr::Lit(Lit::Str(literal)) = &**expr else {
        return false;
    };
    if !is_strict_directive(literal) {
        return false;
    }

    debug!("eliding \"use strict\" directive");
    let span = *span;
    *stmt = Stmt::Empty(EmptyStmt { span });
    true
}

/// Escaped spellings such as `"use\x20strict"` are not directives, so the
/// raw text between the quotes has to match as well as the cooked value.
fn is_strict_directive(literal: &Str) -> bool {
    if &*literal.value != STRICT_DIRECTIVE {
        return false;
    }
    match &literal.raw {
        Some(raw) => raw.get(1..raw.len().saturating_sub(1)) == Some(STRICT_DIRECTIVE),
        None => true,
    }
}

fn continues_prologue(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Empty(_) => true,
        Stmt::Expr(ExprStmt { expr, .. }) => matches!(&**expr, Expr::Lit(Lit::Str(_))),
        _ => false,
    }
}

// =============================================================================
// ASSERTION-TO-LOG REWRITE
// =============================================================================

/// Turns `assert.equal(a, b)` (also `strictEqual`, `deepEqual`) into
/// `console.log(a)`. Any other callee shape or argument count is left alone.
pub(super) fn rewrite_assertion(call: &mut CallExpr) -> bool {
    if call.args.len() != ASSERTION_ARITY {
        return false;
    }
    let Callee::Expr(callee) = &mut call.callee else {
        return false;
    };
    let Expr::Member(MemberExpr { obj, prop, .. }) = &mut **callee else {
        return false;
    };
    let (Expr::Ident(object), MemberProp::Ident(member)) = (&mut **obj, prop) else {
        return false;
    };
    if &*object.sym != ASSERT_OBJECT || !is_assertion_member(&member.sym) {
        return false;
    }

    debug!(member = &*member.sym, "rewriting assertion to log call");
    object.sym = LOG_OBJECT.into();
    member.sym = LOG_METHOD.into();
    call.args.truncate(1);
    true
}
