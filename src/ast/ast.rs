use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, CallExpr, ConditionalExpr, GetExpr, GroupingExpr, LiteralExpr,
        LogicalExpr, PrefixExpr, SelfExpr, SetExpr, SuperExpr, VariableExpr,
    },
    statements::{
        BlockStmt, BreakStmt, ClassDeclStmt, ContinueStmt, DoWhileStmt, ExpressionStmt, FnDeclStmt,
        ForStmt, IfStmt, PrintStmt, ReturnStmt, SwitchStmt, VarDeclStmt, WhileStmt,
    },
};

/// Identity of a reference-bearing expression node.
///
/// Assigned by the parser, unique within one parse. Two structurally equal
/// expressions at different places in the source always carry different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub u32);

impl Display for ExprId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    VarDecl(VarDeclStmt),
    Expression(ExpressionStmt),
    Print(PrintStmt),
    If(IfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    Switch(SwitchStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Return(ReturnStmt),
    FnDecl(FnDeclStmt),
    ClassDecl(ClassDeclStmt),
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Variable(VariableExpr),
    Assignment(AssignmentExpr),
    Binary(BinaryExpr),
    Unary(PrefixExpr),
    Literal(LiteralExpr),
    Grouping(GroupingExpr),
    Logical(LogicalExpr),
    Conditional(ConditionalExpr),
    Call(CallExpr),
    Get(GetExpr),
    Set(SetExpr),
    Super(SuperExpr),
    SelfRef(SelfExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Variable(expr) => &expr.name.span,
            Expr::Assignment(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Literal(expr) => &expr.span,
            Expr::Grouping(expr) => &expr.span,
            Expr::Logical(expr) => &expr.span,
            Expr::Conditional(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Get(expr) => &expr.span,
            Expr::Set(expr) => &expr.span,
            Expr::Super(expr) => &expr.span,
            Expr::SelfRef(expr) => &expr.keyword.span,
        }
    }

    /// Returns the binding-table key for reference-bearing expressions.
    pub fn get_id(&self) -> Option<ExprId> {
        match self {
            Expr::Variable(expr) => Some(expr.id),
            Expr::Assignment(expr) => Some(expr.id),
            Expr::Super(expr) => Some(expr.id),
            Expr::SelfRef(expr) => Some(expr.id),
            _ => None,
        }
    }
}
