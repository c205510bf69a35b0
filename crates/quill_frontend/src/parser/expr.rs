use super::{ParseErrorKind, ParseResult, Parser};
use crate::ast::*;
use crate::token::TokenKind;

impl Parser<'_> {
    /// ```text
    /// expr    := identifier '=' expr
    ///          | identifier
    ///          | operand
    /// operand := number | string
    /// ```
    pub(super) fn parse_expr(&mut self) -> ParseResult<Expr> {
        // `a = b = 1` assigns `b` first, so targets are collected left to
        // right and folded from the innermost out
        let mut targets = vec![];

        let mut expr = loop {
            if self.peek() != TokenKind::Identifier {
                break self.parse_operand()?;
            }

            let name = self.identifier_here();
            self.advance();

            if !self.eat(TokenKind::Equals) {
                break Expr::Identifier(name);
            }

            targets.push(name);
        };

        while let Some(name) = targets.pop() {
            expr = Expr::Assignment(Assignment {
                pos: name.pos,
                name,
                value: Box::new(expr),
            });
        }

        Ok(expr)
    }

    fn parse_operand(&mut self) -> ParseResult<Expr> {
        match self.peek() {
            TokenKind::Literal => {
                let pos = self.lexer.pos();

                let value = match self.lexer.text().parse::<f64>() {
                    Ok(value) if value.is_finite() => value,
                    _ => return Err(self.error(ParseErrorKind::NumberOutOfRange)),
                };

                self.advance();
                Ok(Expr::Literal(Literal { value, pos }))
            }

            TokenKind::StringLiteral => {
                let literal = StringLiteral {
                    value: self.lexer.text().to_owned(),
                    pos: self.lexer.pos(),
                };

                self.advance();
                Ok(Expr::StringLiteral(literal))
            }

            _ => Err(self.error(ParseErrorKind::ExpectedExpression)),
        }
    }
}
