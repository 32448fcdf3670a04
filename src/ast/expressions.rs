use crate::{
    lexer::tokens::{LiteralValue, Token},
    Span,
};

use super::ast::{Expr, ExprId};

// LITERALS

/// Literal Expression
/// Represents a number, string, boolean or nil literal.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub span: Span,
}

// REFERENCES

/// Variable Expression
/// A read of a named variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub id: ExprId,
    pub name: Token,
}

/// Assignment Expression
/// `name = value`. Keyed separately from any read of the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub id: ExprId,
    pub name: Token,
    pub value: Box<Expr>,
    pub span: Span,
}

/// Self Expression
/// The receiver inside a method body.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfExpr {
    pub id: ExprId,
    pub keyword: Token,
}

/// Super Expression
/// `super.method`, a superclass method bound to the current receiver.
#[derive(Debug, Clone, PartialEq)]
pub struct SuperExpr {
    pub id: ExprId,
    pub keyword: Token,
    pub method: Token,
    pub span: Span,
}

// OPERATORS

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Short-circuiting `&&` and `||`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: Box<Expr>,
    pub span: Span,
}

/// `condition ? then_branch : else_branch`
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpr {
    pub condition: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub expression: Box<Expr>,
    pub span: Span,
}

// CALLS AND PROPERTIES

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// Property read, `object.name`
#[derive(Debug, Clone, PartialEq)]
pub struct GetExpr {
    pub object: Box<Expr>,
    pub name: Token,
    pub span: Span,
}

/// Property write, `object.name = value`
#[derive(Debug, Clone, PartialEq)]
pub struct SetExpr {
    pub object: Box<Expr>,
    pub name: Token,
    pub value: Box<Expr>,
    pub span: Span,
}
