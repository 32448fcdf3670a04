use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::VariableExpr,
        statements::{
            BlockStmt, BreakStmt, ClassDeclStmt, ContinueStmt, DoWhileStmt, ExpressionStmt,
            FnDeclStmt, ForStmt, IfStmt, PrintStmt, ReturnStmt, SwitchCase, SwitchStmt,
            VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Position,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.enter_nesting()?;

    let stmt = match parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        Some(stmt_fn) => stmt_fn(parser),
        None => parse_expression_stmt(parser),
    };

    parser.exit_nesting();
    stmt
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.get_position();
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt {
        expression,
        span: parser.span_from(start),
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let name = parser.expect_detailed(
        TokenKind::Identifier,
        "expected identifier during variable declaration",
    )?;

    let assigned_value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        name,
        assigned_value,
        span: parser.span_from(start),
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Print(PrintStmt {
        expression,
        span: parser.span_from(start),
    }))
}

/// Parses `( expr )`, the head of `if`, `while`, `do`-`while` and `switch`.
fn parse_parenthesized_expr(parser: &mut Parser, construct: &str) -> Result<Expr, Error> {
    parser.expect_detailed(TokenKind::OpenParen, &format!("expected '(' after '{}'", construct))?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_detailed(TokenKind::CloseParen, &format!("expected ')' after {} condition", construct))?;

    Ok(expr)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_parenthesized_expr(parser, "if")?;
    let then_body = parse_stmt(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body: Box::new(then_body),
        else_body,
        span: parser.span_from(start),
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_parenthesized_expr(parser, "while")?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body: Box::new(body),
        span: parser.span_from(start),
    }))
}

pub fn parse_do_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let body = parse_stmt(parser)?;
    parser.expect_detailed(TokenKind::While, "expected 'while' after do body")?;
    let condition = parse_parenthesized_expr(parser, "while")?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::DoWhile(DoWhileStmt {
        body: Box::new(body),
        condition,
        span: parser.span_from(start),
    }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();
    parser.expect_detailed(TokenKind::OpenParen, "expected '(' after 'for'")?;

    let initializer = match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
            None
        }
        TokenKind::Let => Some(Box::new(parse_var_decl_stmt(parser)?)),
        _ => Some(Box::new(parse_expression_stmt(parser)?)),
    };

    let condition = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect_detailed(TokenKind::Semicolon, "expected ';' after loop condition")?;

    let increment = if parser.current_token_kind() != TokenKind::CloseParen {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect_detailed(TokenKind::CloseParen, "expected ')' after for clauses")?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::For(ForStmt {
        initializer,
        condition,
        increment,
        body: Box::new(body),
        span: parser.span_from(start),
    }))
}

pub fn parse_switch_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let subject = parse_parenthesized_expr(parser, "switch")?;
    parser.expect_detailed(TokenKind::OpenCurly, "expected '{' before switch cases")?;

    let mut cases = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        let case_start = parser.get_position();
        let value = match parser.current_token_kind() {
            TokenKind::Case => {
                parser.advance();
                Some(parse_expr(parser, BindingPower::Default)?)
            }
            TokenKind::Default => {
                parser.advance();
                None
            }
            _ => return Err(parser.error_detailed("expected 'case' or 'default'")),
        };
        parser.expect_detailed(TokenKind::Colon, "expected ':' after case")?;

        let mut body = Vec::new();
        while !matches!(
            parser.current_token_kind(),
            TokenKind::Case | TokenKind::Default | TokenKind::CloseCurly | TokenKind::EOF
        ) {
            body.push(parse_stmt(parser)?);
        }

        cases.push(SwitchCase {
            value,
            body: BlockStmt {
                body,
                span: parser.span_from(case_start),
            },
        });
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::Switch(SwitchStmt {
        subject,
        cases,
        span: parser.span_from(start),
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance().clone();
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Break(BreakStmt { keyword }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance().clone();
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Continue(ContinueStmt { keyword }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance().clone();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt {
        span: parser.span_from(keyword.span.start.clone()),
        keyword,
        value,
    }))
}

/// Parses `{ stmt* }`.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect_detailed(TokenKind::OpenCurly, "expected '{' before block")?.span.start;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly && parser.has_tokens() {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect_detailed(TokenKind::CloseCurly, "expected '}' after block")?;

    Ok(BlockStmt {
        body: statements,
        span: parser.span_from(start),
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// Parses `name(params) { body }`, shared by functions and methods.
fn parse_function(parser: &mut Parser, start: Position) -> Result<FnDeclStmt, Error> {
    let name = parser.expect_detailed(TokenKind::Identifier, "expected function name")?;

    parser.expect_detailed(TokenKind::OpenParen, "expected '(' after function name")?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            parameters.push(parser.expect_detailed(TokenKind::Identifier, "expected parameter name")?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect_detailed(TokenKind::CloseParen, "expected ')' after parameters")?;

    let body = parse_block(parser)?;

    Ok(FnDeclStmt {
        name,
        parameters,
        body: body.body,
        span: parser.span_from(start),
    })
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    Ok(Stmt::FnDecl(parse_function(parser, start)?))
}

pub fn parse_class_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let name = parser.expect_detailed(TokenKind::Identifier, "expected class name")?;

    let superclass = if parser.current_token_kind() == TokenKind::Less {
        parser.advance();
        let superclass_name = parser.expect_detailed(TokenKind::Identifier, "expected superclass name")?;
        Some(VariableExpr {
            id: parser.advance_id(),
            name: superclass_name,
        })
    } else {
        None
    };

    parser.expect_detailed(TokenKind::OpenCurly, "expected '{' before class body")?;

    let mut methods = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly && parser.has_tokens() {
        let method_start = parser.get_position();
        methods.push(parse_function(parser, method_start)?);
    }

    parser.expect_detailed(TokenKind::CloseCurly, "expected '}' after class body")?;

    Ok(Stmt::ClassDecl(ClassDeclStmt {
        name,
        superclass,
        methods,
        span: parser.span_from(start),
    }))
}
