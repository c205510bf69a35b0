
mod expr;

use quill_diagnostic::{Diagnostic, IntoDiagnostic};
use quill_utils::keyvec::KeyVec;

use crate::ast::*;
use crate::lexer::Lexer;
use crate::symbols::Table;
use crate::token::TokenKind;

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub pos: usize,
}

#[derive(serde::Serialize, thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected identifier")]
    ExpectedIdentifier,

    #[error("expected expression")]
    ExpectedExpression,

    #[error("expected {}", .0.token_name())]
    ExpectedToken(TokenKind),

    #[error("expected ';' or newline")]
    ExpectedStatementEnd,

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("numeric literal out of range")]
    NumberOutOfRange,
}

impl IntoDiagnostic for ParseError {
    fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::syntax(self.pos, self.kind.to_string())
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser pulling tokens from a [`Lexer`].
///
/// Whitespace (and characters the lexer could not classify) are skipped
/// between any two grammar tokens. Line breaks are not: a newline ends a
/// statement just like a semicolon.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut parser = Self {
            lexer: Lexer::new(source),
            diagnostics: vec![],
        };

        // move off BOF
        parser.advance();

        parser
    }

    pub fn parse(mut self) -> (Module, Vec<Diagnostic>) {
        let module = self.parse_module();

        tracing::debug!(
            statements = module.statements.len(),
            diagnostics = self.diagnostics.len(),
            "parsed module"
        );

        (module, self.diagnostics)
    }

    fn parse_module(&mut self) -> Module {
        let mut statements = KeyVec::new();

        loop {
            match self.peek() {
                TokenKind::EOF => break,

                // blank line
                TokenKind::Newline => self.advance(),

                _ => {
                    if let Some(stmt) = self.parse_statement_or_recover() {
                        let _ = statements.insert(stmt);
                    }
                }
            }
        }

        Module {
            locals: Table::default(),
            statements,
        }
    }

    fn parse_statement_or_recover(&mut self) -> Option<Stmt> {
        match self.parse_statement() {
            Ok(stmt) => {
                self.expect_statement_end();
                Some(stmt)
            }

            Err(err) => {
                self.report(err);
                self.recover();
                None
            }
        }
    }

    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        let kind = self.peek();
        let pos = self.lexer.pos();

        match kind {
            TokenKind::Var => {
                self.advance();

                let name = self.parse_identifier()?;
                let typename = if self.eat(TokenKind::Colon) {
                    Some(self.parse_identifier()?)
                } else {
                    None
                };

                self.expect(TokenKind::Equals)?;
                let init = self.parse_expr()?;

                Ok(Stmt::Var(Var {
                    name,
                    typename,
                    init,
                    pos,
                }))
            }

            TokenKind::Type => {
                self.advance();

                let name = self.parse_identifier()?;
                self.expect(TokenKind::Equals)?;
                let typename = self.parse_identifier()?;

                Ok(Stmt::TypeAlias(TypeAlias {
                    name,
                    typename,
                    pos,
                }))
            }

            _ => {
                let expression = self.parse_expr()?;

                Ok(Stmt::Expression(ExpressionStatement {
                    pos: expression.pos(),
                    expression,
                }))
            }
        }
    }

    fn parse_identifier(&mut self) -> ParseResult<Identifier> {
        match self.peek() {
            TokenKind::Identifier => {
                let ident = self.identifier_here();
                self.advance();
                Ok(ident)
            }

            _ => Err(self.error(ParseErrorKind::ExpectedIdentifier)),
        }
    }

    fn identifier_here(&self) -> Identifier {
        Identifier {
            text: self.lexer.text().to_owned(),
            pos: self.lexer.pos(),
        }
    }

    /// A statement ends at `;`, a line break, or the end of input.
    fn expect_statement_end(&mut self) {
        match self.peek() {
            TokenKind::Semicolon | TokenKind::Newline => self.advance(),
            TokenKind::EOF => {}

            _ => {
                let err = self.error(ParseErrorKind::ExpectedStatementEnd);
                self.report(err);
                self.recover();
            }
        }
    }

    /// Skip past the next statement boundary.
    fn recover(&mut self) {
        loop {
            match self.lexer.token() {
                TokenKind::Semicolon | TokenKind::Newline => {
                    self.advance();
                    return;
                }
                TokenKind::EOF => return,
                _ => self.advance(),
            }
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::ExpectedToken(kind)))
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// The current significant token.
    fn peek(&mut self) -> TokenKind {
        while matches!(
            self.lexer.token(),
            TokenKind::Whitespace | TokenKind::Unknown
        ) {
            self.advance();
        }

        self.lexer.token()
    }

    fn advance(&mut self) {
        self.lexer.scan();

        let errors = self.lexer.take_errors();
        self.diagnostics
            .extend(errors.into_iter().map(IntoDiagnostic::into_diagnostic));
    }

    fn report(&mut self, error: ParseError) {
        self.diagnostics.push(error.into_diagnostic());
    }

    /// An error at the current token. Running out of input mid-statement
    /// always reads as "unexpected end of input".
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        let kind = match self.lexer.token() {
            TokenKind::EOF => ParseErrorKind::UnexpectedEof,
            _ => kind,
        };

        ParseError {
            kind,
            pos: self.lexer.pos(),
        }
    }
}
