//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into the statement and expression trees consumed by the resolver.
//! It uses a Pratt parser for expressions with proper operator
//! precedence and handles:
//!
//! - Statement parsing (declarations, classes, control flow)
//! - Expression parsing (binary ops, calls, property access, assignment)
//! - Assigning node identities to reference-bearing expressions
//! - Error reporting
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
