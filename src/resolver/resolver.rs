use tracing::{debug, info};

use crate::{
    ast::{
        ast::{Expr, ExprId, Stmt},
        expressions::{SelfExpr, SuperExpr, VariableExpr},
        statements::{BlockStmt, ClassDeclStmt, FnDeclStmt, ReturnStmt, SwitchStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

use super::{
    bindings::BindingTable,
    context::{ClassKind, Context, FunctionKind, LoopKind},
    scope::{ScopeStack, VariableState},
};

/// Name bound to the receiver inside methods.
pub const SELF_NAME: &str = "self";
/// Name bound to the superclass inside methods of a subclass.
pub const SUPER_NAME: &str = "super";
/// Methods with this name are initializers.
pub const INITIALIZER_NAME: &str = "init";

/// Receives resolver diagnostics as they are found.
pub trait DiagnosticSink {
    fn report(&mut self, error: Error);
}

impl DiagnosticSink for Vec<Error> {
    fn report(&mut self, error: Error) {
        self.push(error);
    }
}

/// The outcome of resolving one program.
#[derive(Debug)]
pub struct Resolution {
    pub bindings: BindingTable,
    pub diagnostics: Vec<Error>,
}

impl Resolution {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// The binding table, or every diagnostic if any was reported.
    pub fn into_result(self) -> Result<BindingTable, Vec<Error>> {
        if self.diagnostics.is_empty() {
            Ok(self.bindings)
        } else {
            Err(self.diagnostics)
        }
    }
}

/// Resolves `statements` as one program, collecting diagnostics.
pub fn resolve(statements: &[Stmt]) -> Resolution {
    let mut diagnostics: Vec<Error> = Vec::new();
    let bindings = Resolver::new(&mut diagnostics).resolve(statements);

    info!(
        locals = bindings.len(),
        diagnostics = diagnostics.len(),
        "resolution finished"
    );

    Resolution {
        bindings,
        diagnostics,
    }
}

/// One resolution run. Owns its scope stack; the binding table is handed
/// back by [`Resolver::resolve`].
pub struct Resolver<'s> {
    scopes: ScopeStack,
    bindings: BindingTable,
    sink: &'s mut dyn DiagnosticSink,
}

impl<'s> Resolver<'s> {
    pub fn new(sink: &'s mut dyn DiagnosticSink) -> Self {
        Resolver {
            scopes: ScopeStack::new(),
            bindings: BindingTable::new(),
            sink,
        }
    }

    /// Walks all top-level statements and returns the binding table.
    pub fn resolve(mut self, statements: &[Stmt]) -> BindingTable {
        debug!(statements = statements.len(), "resolving program");

        let context = Context::default();
        for stmt in statements {
            self.resolve_stmt(stmt, context);
        }

        self.bindings
    }

    fn report(&mut self, error_impl: ErrorImpl, token: &Token) {
        let error = Error::at(error_impl, token);
        debug!(%error, "resolver diagnostic");
        self.sink.report(error);
    }

    fn declare(&mut self, name: &Token) {
        if let Err(error) = self.scopes.declare(name) {
            debug!(%error, "resolver diagnostic");
            self.sink.report(error);
        }
    }

    fn begin_scope(&mut self) {
        self.scopes.enter();
        debug!(depth = self.scopes.depth(), "entered scope");
    }

    fn end_scope(&mut self) {
        self.scopes.exit();
        debug!(depth = self.scopes.depth(), "left scope");
    }

    fn resolve_local(&mut self, id: ExprId, name: &str) {
        self.scopes.resolve_reference(id, name, &mut self.bindings);
    }

    // Statements

    fn resolve_stmt(&mut self, stmt: &Stmt, context: Context) {
        match stmt {
            Stmt::Block(block) => self.resolve_block(block, context),
            Stmt::VarDecl(decl) => {
                self.declare(&decl.name);
                if let Some(value) = &decl.assigned_value {
                    self.resolve_expr(value, context);
                }
                self.scopes.define(&decl.name.value);
            }
            Stmt::Expression(stmt) => self.resolve_expr(&stmt.expression, context),
            Stmt::Print(stmt) => self.resolve_expr(&stmt.expression, context),
            Stmt::If(stmt) => {
                self.resolve_expr(&stmt.condition, context);
                self.resolve_stmt(&stmt.then_body, context);
                if let Some(else_body) = &stmt.else_body {
                    self.resolve_stmt(else_body, context);
                }
            }
            Stmt::While(stmt) => {
                self.resolve_expr(&stmt.condition, context);
                self.resolve_stmt(&stmt.body, context.with_loop(LoopKind::Loop));
            }
            Stmt::DoWhile(stmt) => {
                self.resolve_stmt(&stmt.body, context.with_loop(LoopKind::Loop));
                self.resolve_expr(&stmt.condition, context);
            }
            Stmt::For(stmt) => {
                if let Some(initializer) = &stmt.initializer {
                    self.resolve_stmt(initializer, context);
                }
                if let Some(condition) = &stmt.condition {
                    self.resolve_expr(condition, context);
                }
                if let Some(increment) = &stmt.increment {
                    self.resolve_expr(increment, context);
                }
                self.resolve_stmt(&stmt.body, context.with_loop(LoopKind::Loop));
            }
            Stmt::Switch(stmt) => self.resolve_switch(stmt, context),
            Stmt::Break(stmt) => {
                if context.looping == LoopKind::None {
                    self.report(ErrorImpl::BreakOutsideLoop, &stmt.keyword);
                }
            }
            Stmt::Continue(stmt) => {
                if context.looping == LoopKind::None {
                    self.report(ErrorImpl::ContinueOutsideLoop, &stmt.keyword);
                }
            }
            Stmt::Return(stmt) => self.resolve_return(stmt, context),
            Stmt::FnDecl(function) => {
                // Defined before the body so the function can call itself
                self.declare(&function.name);
                self.scopes.define(&function.name.value);
                self.resolve_function(function, FunctionKind::Function, context);
            }
            Stmt::ClassDecl(class) => self.resolve_class(class, context),
        }
    }

    fn resolve_block(&mut self, block: &BlockStmt, context: Context) {
        self.begin_scope();
        for stmt in block.iter() {
            self.resolve_stmt(stmt, context);
        }
        self.end_scope();
    }

    fn resolve_switch(&mut self, stmt: &SwitchStmt, context: Context) {
        self.resolve_expr(&stmt.subject, context);

        let context = context.with_loop(LoopKind::Switch);
        for case in &stmt.cases {
            if let Some(value) = &case.value {
                self.resolve_expr(value, context);
            }
            self.resolve_block(&case.body, context);
        }
    }

    fn resolve_return(&mut self, stmt: &ReturnStmt, context: Context) {
        if context.function == FunctionKind::None {
            self.report(ErrorImpl::ReturnOutsideFunction, &stmt.keyword);
        }

        if let Some(value) = &stmt.value {
            if context.function == FunctionKind::Initializer {
                self.report(ErrorImpl::ReturnValueFromInitializer, &stmt.keyword);
            }
            if context.function != FunctionKind::None {
                self.resolve_expr(value, context);
            }
        }
    }

    fn resolve_function(&mut self, function: &FnDeclStmt, kind: FunctionKind, context: Context) {
        let context = context.with_function(kind);

        self.begin_scope();
        for parameter in &function.parameters {
            self.declare(parameter);
            self.scopes.define(&parameter.value);
        }
        for stmt in &function.body {
            self.resolve_stmt(stmt, context);
        }
        self.end_scope();
    }

    fn resolve_class(&mut self, class: &ClassDeclStmt, context: Context) {
        let mut context = context.with_class(ClassKind::Class);

        self.declare(&class.name);
        if let Some(superclass) = &class.superclass {
            context = context.with_class(ClassKind::Subclass);
            self.resolve_variable(superclass);
        }
        self.scopes.define(&class.name.value);

        if class.superclass.is_some() {
            self.begin_scope();
            self.scopes.define(SUPER_NAME);
        }

        self.begin_scope();
        self.scopes.define(SELF_NAME);

        for method in &class.methods {
            let kind = if method.name.value == INITIALIZER_NAME {
                FunctionKind::Initializer
            } else {
                FunctionKind::Method
            };
            self.resolve_function(method, kind, context);
        }

        self.end_scope();
        if class.superclass.is_some() {
            self.end_scope();
        }
    }

    // Expressions

    fn resolve_expr(&mut self, expr: &Expr, context: Context) {
        match expr {
            Expr::Variable(variable) => self.resolve_variable(variable),
            Expr::Assignment(assignment) => {
                self.resolve_expr(&assignment.value, context);
                self.resolve_local(assignment.id, &assignment.name.value);
            }
            Expr::Binary(binary) => {
                self.resolve_expr(&binary.left, context);
                self.resolve_expr(&binary.right, context);
            }
            Expr::Unary(prefix) => self.resolve_expr(&prefix.right_expr, context),
            Expr::Literal(_) => {}
            Expr::Grouping(grouping) => self.resolve_expr(&grouping.expression, context),
            Expr::Logical(logical) => {
                self.resolve_expr(&logical.left, context);
                self.resolve_expr(&logical.right, context);
            }
            Expr::Conditional(conditional) => {
                self.resolve_expr(&conditional.condition, context);
                self.resolve_expr(&conditional.then_branch, context);
                self.resolve_expr(&conditional.else_branch, context);
            }
            Expr::Call(call) => {
                self.resolve_expr(&call.callee, context);
                for argument in &call.arguments {
                    self.resolve_expr(argument, context);
                }
            }
            Expr::Get(get) => self.resolve_expr(&get.object, context),
            Expr::Set(set) => {
                self.resolve_expr(&set.object, context);
                self.resolve_expr(&set.value, context);
            }
            Expr::Super(super_expr) => self.resolve_super(super_expr, context),
            Expr::SelfRef(self_expr) => self.resolve_self(self_expr, context),
        }
    }

    fn resolve_variable(&mut self, variable: &VariableExpr) {
        let name = &variable.name.value;
        if self.scopes.state_in_innermost(name) == Some(VariableState::Declared) {
            self.report(
                ErrorImpl::ReadInOwnInitializer {
                    variable: name.clone(),
                },
                &variable.name,
            );
        }

        self.resolve_local(variable.id, name);
    }

    fn resolve_self(&mut self, expr: &SelfExpr, context: Context) {
        if context.class == ClassKind::None {
            self.report(ErrorImpl::SelfOutsideClass, &expr.keyword);
            return;
        }

        self.resolve_local(expr.id, SELF_NAME);
    }

    fn resolve_super(&mut self, expr: &SuperExpr, context: Context) {
        match context.class {
            ClassKind::None => self.report(ErrorImpl::SuperOutsideClass, &expr.keyword),
            ClassKind::Class => self.report(ErrorImpl::SuperWithoutSuperclass, &expr.keyword),
            ClassKind::Subclass => {}
        }

        self.resolve_local(expr.id, SUPER_NAME);
    }
}
