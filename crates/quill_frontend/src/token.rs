use crate::{Node, NodeCopy};

/// A scanned token, detached from the lexer that produced it.
#[derive(Node!)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
    pub text: String,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(NodeCopy!)]
pub enum TokenKind {
    Function,
    Var,
    Type,
    Return,

    Equals,
    Colon,
    Semicolon,

    Literal,
    StringLiteral,
    Identifier,

    Newline,
    Whitespace,

    Unknown,

    BOF,
    EOF,
}

impl TokenKind {
    pub fn keyword(s: &str) -> Option<Self> {
        match s {
            "function" => Some(TokenKind::Function),
            "var" => Some(TokenKind::Var),
            "type" => Some(TokenKind::Type),
            "return" => Some(TokenKind::Return),
            _ => None,
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function | TokenKind::Var | TokenKind::Type | TokenKind::Return
        )
    }

    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::Function => "'function'",
            TokenKind::Var => "'var'",
            TokenKind::Type => "'type'",
            TokenKind::Return => "'return'",
            TokenKind::Equals => "'='",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::Literal => "number",
            TokenKind::StringLiteral => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Newline => "newline",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Unknown => "unknown character",
            TokenKind::BOF => "beginning of input",
            TokenKind::EOF => "end of input",
        }
    }
}
