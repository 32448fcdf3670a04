//! Static scope resolution.
//!
//! This module walks the parsed program once, before evaluation, and:
//!
//! - Computes the scope distance of every local variable reference
//! - Validates `self`, `super`, `break`, `continue` and `return` placement
//! - Detects duplicate declarations and reads inside a variable's own initializer
//!
//! The output is a `BindingTable` keyed by expression id. References that do not
//! appear in the table are globals. Diagnostics never stop the walk; callers must
//! refuse to evaluate a program whose resolution reported any.

pub mod bindings;
pub mod context;
pub mod resolver;
pub mod scope;
