#[cfg(test)]
mod tests;

use std::str::Chars;

use quill_diagnostic::{Diagnostic, IntoDiagnostic};
use quill_utils::peek::Peek;

use crate::token::*;

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    pub kind: LexerErrorKind,
    pub pos: usize,
}

#[derive(serde::Serialize, thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unknown escape sequence `\\{0}`")]
    UnknownEscape(char),
}

impl IntoDiagnostic for LexerError {
    fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::lexical(self.pos, self.kind.to_string())
    }
}

/// A pull-based cursor over source text.
///
/// The lexer holds exactly one token at a time. [`Lexer::scan`] replaces it
/// with the next one and [`Lexer::token`], [`Lexer::pos`] and [`Lexer::text`]
/// describe it. Trivia is not skipped: whitespace and line terminators come
/// out as their own tokens.
///
/// Before the first scan the lexer sits on [`TokenKind::BOF`]. Once the input
/// is exhausted it stays on [`TokenKind::EOF`] no matter how often it is
/// scanned again.
pub struct Lexer<'src> {
    all: &'src str,
    chars: Chars<'src>,

    token: TokenKind,
    token_start: usize,
    // decoded contents of the current string literal
    value: Option<String>,

    errors: Vec<LexerError>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            all: source,
            chars: source.chars(),

            token: TokenKind::BOF,
            token_start: 0,
            value: None,

            errors: vec![],
        }
    }

    pub fn scan(&mut self) {
        if self.token == TokenKind::EOF {
            return;
        }

        self.value = None;
        self.token_start = self.byte_pos();

        self.token = match self.chars.next() {
            None => TokenKind::EOF,

            // line and paragraph separators end a line too
            Some('\n' | '\u{2028}' | '\u{2029}') => TokenKind::Newline,
            Some('\r') => {
                self.chars.eat('\n');
                TokenKind::Newline
            }
            Some(ch) if is_inline_whitespace(ch) => {
                self.chars.eat_while(|&ch| is_inline_whitespace(ch));
                TokenKind::Whitespace
            }

            Some('=') => TokenKind::Equals,
            Some(':') => TokenKind::Colon,
            Some(';') => TokenKind::Semicolon,

            Some(quote @ ('"' | '\'')) => self.lex_string(quote),

            Some(ch) if ch.is_ascii_digit() => {
                self.chars.eat_while(char::is_ascii_digit);
                TokenKind::Literal
            }

            Some(ch) if is_ident_start(ch) => self.lex_alpha(),

            Some(ch) => {
                self.report(LexerErrorKind::UnexpectedChar(ch), self.token_start);
                TokenKind::Unknown
            }
        };
    }

    pub fn token(&self) -> TokenKind {
        self.token
    }

    pub fn pos(&self) -> usize {
        self.token_start
    }

    pub fn text(&self) -> &str {
        match &self.value {
            Some(value) => value.as_str(),
            None => &self.all[self.token_start..self.byte_pos()],
        }
    }

    pub fn current(&self) -> Token {
        Token {
            kind: self.token,
            pos: self.token_start,
            text: self.text().to_owned(),
        }
    }

    /// Drive the lexer to the end, yielding owned tokens.
    pub fn tokens(self) -> Tokens<'src> {
        Tokens { lexer: self }
    }

    /// Errors reported since the last call.
    pub fn take_errors(&mut self) -> Vec<LexerError> {
        std::mem::take(&mut self.errors)
    }

    fn lex_alpha(&mut self) -> TokenKind {
        self.chars.eat_while(|&ch| is_ident(ch));

        let s = &self.all[self.token_start..self.byte_pos()];
        TokenKind::keyword(s).unwrap_or(TokenKind::Identifier)
    }

    fn lex_string(&mut self, quote: char) -> TokenKind {
        let mut value = String::new();

        loop {
            match self.chars.peek() {
                // the line terminator is left for the parser
                None | Some('\n' | '\r' | '\u{2028}' | '\u{2029}') => {
                    self.report(LexerErrorKind::UnterminatedString, self.token_start);
                    break;
                }

                Some(ch) if ch == quote => {
                    self.chars.next();
                    break;
                }

                Some('\\') => {
                    let escape_pos = self.byte_pos();
                    self.chars.next();
                    self.lex_escape(escape_pos, &mut value);
                }

                Some(ch) => {
                    self.chars.next();
                    value.push(ch);
                }
            }
        }

        self.value = Some(value);
        TokenKind::StringLiteral
    }

    fn lex_escape(&mut self, escape_pos: usize, value: &mut String) {
        let decoded = match self.chars.peek() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('0') => '\0',
            Some(ch @ ('\\' | '"' | '\'')) => ch,

            // a trailing backslash: the string is unterminated anyway
            None | Some('\n' | '\r' | '\u{2028}' | '\u{2029}') => {
                value.push('\\');
                return;
            }

            Some(ch) => {
                self.chars.next();
                self.report(LexerErrorKind::UnknownEscape(ch), escape_pos);
                value.push('\\');
                value.push(ch);
                return;
            }
        };

        self.chars.next();
        value.push(decoded);
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }

    fn report(&mut self, kind: LexerErrorKind, pos: usize) {
        self.errors.push(LexerError { kind, pos });
    }
}

/// Every token up to, but not including, end of input.
pub struct Tokens<'src> {
    lexer: Lexer<'src>,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.lexer.scan();
        (self.lexer.token() != TokenKind::EOF).then(|| self.lexer.current())
    }
}

fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_inline_whitespace(ch: char) -> bool {
    ch.is_whitespace() && !is_line_break(ch)
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
