use termcolor::{ColorChoice, StandardStream};

use crate::sources::SourceFile;
use crate::{Config, Diagnostic};

pub trait DiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, source: &SourceFile);
}

impl DiagnosticEmitter for Vec<Diagnostic> {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, _source: &SourceFile) {
        self.push(diagnostic);
    }
}

/// Renders diagnostics to stderr as they are emitted.
pub struct PrettyDiagnosticEmitter {
    pub stream: StandardStream,
    pub config: Config,
}

impl PrettyDiagnosticEmitter {
    pub fn new(color_choice: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stderr(color_choice),
            config: Config::default(),
        }
    }
}

impl Default for PrettyDiagnosticEmitter {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

impl DiagnosticEmitter for PrettyDiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, source: &SourceFile) {
        // write errors on stderr are dropped
        let _ = diagnostic.write_to_stream(source, &self.config, &mut self.stream);
    }
}
