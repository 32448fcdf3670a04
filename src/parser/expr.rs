use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentExpr, BinaryExpr, CallExpr, ConditionalExpr, GetExpr, GroupingExpr,
            LiteralExpr, LogicalExpr, PrefixExpr, SelfExpr, SetExpr, SuperExpr, VariableExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let expr = parse_nested_expr(parser, bp);
    parser.exit_nesting();
    expr
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::at(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.current_token(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While LED and current BP is greater than BP of the caller, keep extending lhs
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(Error::at(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.current_token(),
            ));
        };

        let operator_bp = parser.current_binding_power();
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    if token.is_one_of_many(&[
        TokenKind::Number,
        TokenKind::String,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Nil,
    ]) {
        let Some(value) = token.literal.clone() else {
            return Err(Error::at(
                ErrorImpl::NumberParseError { token: token.value.clone() },
                &token,
            ));
        };
        parser.advance();

        return Ok(Expr::Literal(LiteralExpr {
            value,
            span: token.span,
        }));
    }

    match token.kind {
        TokenKind::Identifier => {
            parser.advance();
            Ok(Expr::Variable(VariableExpr {
                id: parser.advance_id(),
                name: token,
            }))
        }
        _ => Err(Error::at(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            &token,
        )),
    }
}

pub fn parse_self_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let keyword = parser.advance().clone();

    Ok(Expr::SelfRef(SelfExpr {
        id: parser.advance_id(),
        keyword,
    }))
}

pub fn parse_super_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let keyword = parser.advance().clone();
    parser.expect_detailed(TokenKind::Dot, "expected '.' after 'super'")?;
    let method = parser.expect_detailed(TokenKind::Identifier, "expected superclass method name")?;

    Ok(Expr::Super(SuperExpr {
        id: parser.advance_id(),
        span: Span {
            start: keyword.span.start.clone(),
            end: method.span.end.clone(),
        },
        keyword,
        method,
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_logical_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Logical(LogicalExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(PrefixExpr {
        span: Span {
            start: operator.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator,
        right_expr: Box::new(rhs),
    }))
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    // Right associative: `a = b = c` assigns `b = c` first
    let value = parse_expr(parser, BindingPower::Default)?;

    let span = Span {
        start: left.get_span().start.clone(),
        end: value.get_span().end.clone(),
    };

    match left {
        Expr::Variable(variable) => Ok(Expr::Assignment(AssignmentExpr {
            id: parser.advance_id(),
            name: variable.name,
            value: Box::new(value),
            span,
        })),
        Expr::Get(get) => Ok(Expr::Set(SetExpr {
            object: get.object,
            name: get.name,
            value: Box::new(value),
            span,
        })),
        _ => Err(Error::at(ErrorImpl::InvalidAssignmentTarget, &operator)),
    }
}

pub fn parse_conditional_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let then_branch = parse_expr(parser, BindingPower::Default)?;
    parser.expect_detailed(TokenKind::Colon, "expected ':' in conditional expression")?;
    let else_branch = parse_expr(parser, BindingPower::Assignment)?;

    Ok(Expr::Conditional(ConditionalExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: else_branch.get_span().end.clone(),
        },
        condition: Box::new(left),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_detailed(TokenKind::CloseParen, "expected ')' after expression")?;

    Ok(Expr::Grouping(GroupingExpr {
        expression: Box::new(expr),
        span: parser.span_from(start),
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            args.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect_detailed(TokenKind::CloseParen, "expected ')' after arguments")?;

    Ok(Expr::Call(CallExpr {
        span: parser.span_from(left.get_span().start.clone()),
        callee: Box::new(left),
        arguments: args,
    }))
}

pub fn parse_member_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let name = parser.expect_detailed(TokenKind::Identifier, "expected property name after '.'")?;

    Ok(Expr::Get(GetExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: name.span.end.clone(),
        },
        object: Box::new(left),
        name,
    }))
}
