use std::collections::HashMap;

use crate::ast::ast::{Expr, ExprId};

/// How the evaluator must look a reference up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Walk this many environments outward from the current one.
    Local(usize),
    /// Look the name up in the global environment directly.
    Global,
}

/// Resolved scope distances, keyed by expression id.
///
/// This is the only artifact that outlives a resolution run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingTable {
    distances: HashMap<ExprId, usize>,
}

impl BindingTable {
    pub fn new() -> Self {
        BindingTable::default()
    }

    pub fn insert(&mut self, id: ExprId, distance: usize) {
        self.distances.insert(id, distance);
    }

    pub fn get(&self, id: ExprId) -> Option<usize> {
        self.distances.get(&id).copied()
    }

    pub fn lookup(&self, id: ExprId) -> Lookup {
        match self.get(id) {
            Some(distance) => Lookup::Local(distance),
            None => Lookup::Global,
        }
    }

    /// Distance recorded for a reference-bearing expression, `None` for globals
    /// and for expressions that carry no identity.
    pub fn distance_of(&self, expr: &Expr) -> Option<usize> {
        expr.get_id().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
