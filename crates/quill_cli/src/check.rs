use std::io::{self, Write};

use quill_diagnostic::sources::SourceFile;
use quill_diagnostic::DiagnosticEmitter;
use quill_frontend::ast::Module;

use crate::cli::Emit;
use crate::{CliError, CliResult};

/// Runs the front-end over source files, passing every diagnostic on to `D`.
pub struct Checker<D: DiagnosticEmitter> {
    pub diagnostics: D,
    error_count: usize,
}

impl<D: DiagnosticEmitter> Checker<D> {
    pub fn new(diagnostics: D) -> Self {
        Self {
            diagnostics,
            error_count: 0,
        }
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn check(&mut self, source: &SourceFile) -> Module {
        let compilation = quill_frontend::compile(source.text());

        tracing::info!(
            name = source.name(),
            diagnostics = compilation.diagnostics.len(),
            "checked source"
        );

        self.error_count += compilation.diagnostics.len();
        for diagnostic in compilation.diagnostics {
            self.diagnostics.emit_diagnostic(diagnostic, source);
        }

        compilation.module
    }

    /// Check `source` and write the requested output to `out`. Output is
    /// written even when there were errors.
    pub fn run(
        &mut self,
        source: &SourceFile,
        emit: Option<Emit>,
        out: &mut impl Write,
    ) -> CliResult<()> {
        let module = self.check(source);

        match emit {
            Some(Emit::Tokens) => write_tokens(source.text(), out)?,
            Some(Emit::Ast) => write_json(&module, out)?,
            Some(Emit::Symbols) => write_json(&module.locals, out)?,
            None => {}
        }

        match self.error_count() {
            0 => Ok(()),
            n => Err(CliError::HadErrors(n)),
        }
    }
}

fn write_tokens(source: &str, out: &mut impl Write) -> io::Result<()> {
    for token in quill_frontend::lex(source) {
        writeln!(out, "{} {:?} {:?}", token.pos, token.kind, token.text)?;
    }

    Ok(())
}

fn write_json(value: &impl serde::Serialize, out: &mut impl Write) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;

    Ok(())
}
