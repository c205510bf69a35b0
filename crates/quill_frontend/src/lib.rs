//! The quill front-end: source text in, a bound [`Module`] and diagnostics out.
//!
//! ```text
//! source ─▶ Lexer ─▶ Parser ─▶ Module ─▶ Binder ─▶ (Module + Table, diagnostics)
//! ```
//!
//! Every stage reports problems as diagnostics and keeps going, so a module is
//! produced for any input. The run failed if the diagnostics are non-empty.

#[macro_use]
extern crate macro_rules_attribute;

mod binder;
mod lexer;
mod parser;

pub mod ast;
pub mod symbols;
pub mod token;


pub use binder::{BindError, BindErrorKind, Binder};
pub use lexer::{Lexer, LexerError, LexerErrorKind, Tokens};
pub use parser::{ParseError, ParseErrorKind, Parser};

use ast::Module;
use quill_diagnostic::{Diagnostic, IntoDiagnostic};

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, serde::Serialize)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)];
}

/// The outcome of running the whole pipeline over one source text.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub module: Module,
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// The tokens of `source`, trivia included. Lexical errors are only reported
/// through [`parse`].
pub fn lex(source: &str) -> Tokens<'_> {
    Lexer::new(source).tokens()
}

/// Parse a module. Lexical and syntax diagnostics come back interleaved in the
/// order they were found.
pub fn parse(source: &str) -> (Module, Vec<Diagnostic>) {
    Parser::new(source).parse()
}

pub fn bind(module: Module) -> (Module, Vec<BindError>) {
    binder::bind(module)
}

pub fn compile(source: &str) -> Compilation {
    let (module, mut diagnostics) = parse(source);

    let (module, bind_errors) = bind(module);
    diagnostics.extend(bind_errors.into_iter().map(IntoDiagnostic::into_diagnostic));

    tracing::debug!(
        statements = module.statements.len(),
        symbols = module.locals.len(),
        diagnostics = diagnostics.len(),
        "compiled module"
    );

    Compilation {
        module,
        diagnostics,
    }
}
