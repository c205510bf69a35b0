//! Diagnostics shared by every stage of the front-end.
//!
//! A [`Diagnostic`] is a plain record: what kind of problem it is, the byte
//! offset it points at and a message. Stages never abort on a diagnostic; they
//! push it and carry on, and the caller decides what a non-empty list means.

mod emitter;
mod render;
pub mod sources;

use std::fmt;

pub use emitter::{DiagnosticEmitter, PrettyDiagnosticEmitter};
pub use termcolor;
use termcolor::{Color, ColorSpec};

#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub pos: usize,
    pub message: String,

    pub labels: Vec<Label>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, pos: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            pos,
            message: message.into(),
            labels: vec![],
        }
    }

    pub fn lexical(pos: usize, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Lexical, pos, message)
    }

    pub fn syntax(pos: usize, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Syntax, pos, message)
    }

    pub fn binding(pos: usize, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Binding, pos, message)
    }

    /// Attach a secondary location, e.g. where a name was first declared.
    #[must_use]
    pub fn with_label(mut self, pos: usize, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            pos,
            message: message.into(),
        });
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} error at {}: {}", self.kind, self.pos, self.message)
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
    Binding,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Lexical => "lexical",
            DiagnosticKind::Syntax => "syntax",
            DiagnosticKind::Binding => "binding",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub pos: usize,
    pub message: String,
}

pub trait IntoDiagnostic {
    fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
    fn into_diagnostic(self) -> Diagnostic {
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Lines of source shown above the offending line.
    pub context_size: usize,

    pub error_color: ColorSpec,
    pub label_color: ColorSpec,
    pub subtle: ColorSpec,

    pub gutter: &'static str,
    pub arrow: &'static str,

    pub underline: &'static str,
    pub label_underline: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        let mut error_color = ColorSpec::new();
        error_color.set_fg(Some(Color::Red));
        error_color.set_bold(true);

        let mut label_color = ColorSpec::new();
        label_color.set_fg(Some(Color::Blue));
        label_color.set_bold(true);

        let mut subtle = ColorSpec::new();
        subtle.set_italic(true);
        subtle.set_dimmed(true);

        Self {
            context_size: 1,

            error_color,
            label_color,
            subtle,

            gutter: "│",
            arrow: "-->",

            underline: "^",
            label_underline: "-",
        }
    }
}
