//! Tree rewriter: one in-place pass over an owned module.
//!
//! # Rules
//!
//! - **Import elision**: imports of `assert` / `node:assert` become empty
//!   statements in the same slot
//! - **Strict-directive elision**: `"use strict"` in a directive prologue
//!   becomes an empty statement
//! - **Assertion-to-log**: `assert.equal(a, b)`, `assert.strictEqual(a, b)`
//!   and `assert.deepEqual(a, b)` become `console.log(a)`
//!
//! Dispatch is a `match` on the node's variant inside the visitor methods;
//! nodes that do not have the expected shape are skipped.
//!
//! # Examples
//!
//! ```
//! use snapshot_rewrite::{parse_module, rewrite_module};
//!
//! let mut parsed = parse_module("import assert from 'assert';\nassert.equal(a, 1);")
//!     .expect("parse succeeds");
//! let stats = rewrite_module(parsed.module_mut());
//! assert_eq!(stats.imports_elided, 1);
//! assert_eq!(stats.assertions_rewritten, 1);
//! ```

use serde::Serialize;
use swc_core::ecma::ast::{
    ArrowExpr, BlockStmt, BlockStmtOrExpr, CallExpr, Constructor, Function, GetterProp, Module,
    ModuleItem, SetterProp,
};
use swc_core::ecma::visit::{VisitMut, VisitMutWith};
use tracing::debug;

mod rules;


/// How many nodes each rule changed during one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewriteStats {
    /// Import declarations turned into empty statements.
    pub imports_elided: usize,
    /// `"use strict"` directives turned into empty statements.
    pub directives_elided: usize,
    /// Assertion calls turned into `console.log` calls.
    pub assertions_rewritten: usize,
}

impl RewriteStats {
    /// Total number of rewritten nodes.
    pub fn total(&self) -> usize {
        self.imports_elided + self.directives_elided + self.assertions_rewritten
    }

    /// True when no rule matched anything.
    pub fn is_unchanged(&self) -> bool {
        self.total() == 0
    }
}

/// Applies every rewrite rule to `module` in a single traversal.
pub fn rewrite_module(module: &mut Module) -> RewriteStats {
    let mut rewriter = Rewriter::default();
    module.visit_mut_with(&mut rewriter);
    debug!(stats = ?rewriter.stats, "rewrite pass finished");
    rewriter.stats
}

#[derive(Default)]
struct Rewriter {
    stats: RewriteStats,
}

impl Rewriter {
    fn strip_prologue(&mut self, body: Option<&mut BlockStmt>) {
        if let Some(body) = body {
            self.stats.directives_elided += rules::elide_strict_directives(&mut body.stmts);
        }
    }
}

impl VisitMut for Rewriter {
    fn visit_mut_module_items(&mut self, items: &mut Vec<ModuleItem>) {
        self.stats.directives_elided += rules::elide_module_strict_directives(items);
        for item in items.iter_mut() {
            if rules::elide_assert_import(item) {
                self.stats.imports_elided += 1;
            }
        }
        items.visit_mut_children_with(self);
    }

    fn visit_mut_call_expr(&mut self, call: &mut CallExpr) {
        call.visit_mut_children_with(self);
        if rules::rewrite_assertion(call) {
            self.stats.assertions_rewritten += 1;
        }
    }

    fn visit_mut_function(&mut self, function: &mut Function) {
        self.strip_prologue(function.body.as_mut());
        function.visit_mut_children_with(self);
    }

    fn visit_mut_arrow_expr(&mut self, arrow: &mut ArrowExpr) {
        if let BlockStmtOrExpr::BlockStmt(body) = &mut *arrow.body {
            self.strip_prologue(Some(body));
        }
        arrow.visit_mut_children_with(self);
    }

    fn visit_mut_constructor(&mut self, constructor: &mut Constructor) {
        self.strip_prologue(constructor.body.as_mut());
        constructor.visit_mut_children_with(self);
    }

    fn visit_mut_getter_prop(&mut self, getter: &mut GetterProp) {
        self.strip_prologue(getter.body.as_mut());
        getter.visit_mut_children_with(self);
    }

    fn visit_mut_setter_prop(&mut self, setter: &mut SetterProp) {
        self.strip_prologue(setter.body.as_mut());
        setter.visit_mut_children_with(self);
    }
}
