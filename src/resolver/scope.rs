use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::ast::ExprId,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

use super::bindings::BindingTable;

/// Readiness of a name within one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableState {
    /// Declared, initializer still being resolved
    Declared,
    Defined,
}

/// Lexical scope frames, innermost last. An empty stack is the global scope,
/// which is not tracked.
#[derive(Debug, Default)]
pub struct ScopeStack {
    frames: Vec<HashMap<String, VariableState>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack::default()
    }

    pub fn enter(&mut self) {
        self.frames.push(HashMap::new());
    }

    pub fn exit(&mut self) {
        self.frames.pop();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Declares `name` in the innermost frame.
    ///
    /// Re-declaring a name already present in the same frame is an error and
    /// leaves the frame as it was.
    pub fn declare(&mut self, name: &Token) -> Result<(), Error> {
        let Some(frame) = self.frames.last_mut() else {
            return Ok(());
        };

        if frame.contains_key(&name.value) {
            return Err(Error::at(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: name.value.clone(),
                },
                name,
            ));
        }

        frame.insert(name.value.clone(), VariableState::Declared);
        Ok(())
    }

    pub fn define(&mut self, name: &str) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), VariableState::Defined);
        }
    }

    /// State of `name` in the innermost frame only.
    pub fn state_in_innermost(&self, name: &str) -> Option<VariableState> {
        self.frames.last().and_then(|frame| frame.get(name).copied())
    }

    /// Records the distance to the nearest frame holding `name`.
    ///
    /// Nothing is recorded when no frame holds it, leaving the reference global.
    pub fn resolve_reference(&self, id: ExprId, name: &str, bindings: &mut BindingTable) -> Option<usize> {
        let distance = self
            .frames
            .iter()
            .rev()
            .position(|frame| frame.contains_key(name))?;

        trace!(%id, name, distance, "resolved local");
        bindings.insert(id, distance);
        Some(distance)
    }
}
