use std::io;

use termcolor::{ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::sources::SourceFile;
use crate::{Config, Diagnostic};

const TAB: &str = "    ";

impl Diagnostic {
    pub fn write_to_stream(
        &self,
        source: &SourceFile,
        config: &Config,
        stream: &mut impl WriteColor,
    ) -> io::Result<()> {
        DiagnosticWriter {
            diagnostic: self,
            source,
            stream,
            config,
        }
        .draw_all()
    }
}

#[derive(Clone, Copy)]
enum Marker {
    Primary,
    Label,
}

struct DiagnosticWriter<'stream, 'a, W: WriteColor> {
    diagnostic: &'a Diagnostic,
    source: &'a SourceFile,

    stream: &'stream mut W,
    config: &'a Config,
}

impl<'a, W: WriteColor> DiagnosticWriter<'_, 'a, W> {
    fn draw_all(mut self) -> io::Result<()> {
        self.draw_header()?;

        let line_num_width = self.line_num_width();

        self.draw_location(line_num_width)?;
        self.draw_snippet(self.diagnostic.pos, None, Marker::Primary, line_num_width)?;

        let diagnostic = self.diagnostic;
        for label in &diagnostic.labels {
            self.draw_snippet(
                label.pos,
                Some(label.message.as_str()),
                Marker::Label,
                line_num_width,
            )?;
        }

        writeln!(self.stream)?;

        Ok(())
    }

    fn draw_header(&mut self) -> io::Result<()> {
        self.stream.set_color(&self.config.error_color)?;
        write!(self.stream, "error[{}]:", self.diagnostic.kind)?;
        self.stream.reset()?;

        writeln!(self.stream, " {}", self.diagnostic.message)
    }

    fn draw_location(&mut self, line_num_width: usize) -> io::Result<()> {
        let (line, col) = self.line_col(self.diagnostic.pos);

        self.stream.set_color(&self.config.subtle)?;
        write!(
            self.stream,
            "{:>width$}{} {}:{line}:{col}",
            "",
            self.config.arrow,
            self.source.name(),
            width = line_num_width,
        )?;

        if let Some(path) = self.source.path() {
            write!(self.stream, " ({}:{line}:{col})", path.display())?;
        }

        writeln!(self.stream)?;
        self.stream.reset()
    }

    fn draw_snippet(
        &mut self,
        pos: usize,
        label: Option<&str>,
        marker: Marker,
        line_num_width: usize,
    ) -> io::Result<()> {
        let pos = self.clamp(pos);
        let line = self.source.byte_to_line_index(pos).unwrap_or(0);

        self.draw_gutter(None, line_num_width)?;
        writeln!(self.stream)?;

        for context_line in line.saturating_sub(self.config.context_size)..=line {
            let line_str = self
                .source
                .line_str(context_line)
                .unwrap_or_default()
                .replace('\t', TAB);

            self.draw_gutter(Some(context_line + 1), line_num_width)?;
            writeln!(self.stream, "{line_str}")?;
        }

        let line_start = self.source.line_to_byte(line).unwrap_or(0);
        let before = self.source.text().get(line_start..pos).unwrap_or_default();
        let offset = str_width(before);

        self.draw_gutter(None, line_num_width)?;

        let (color, underline) = self.marker_style(marker);
        self.stream.set_color(color)?;
        write!(self.stream, "{:<offset$}{underline}", "")?;

        if let Some(label) = label {
            write!(self.stream, " {label}")?;
        }

        self.stream.reset()?;
        writeln!(self.stream)
    }

    fn draw_gutter(&mut self, line: Option<usize>, line_num_width: usize) -> io::Result<()> {
        self.stream.set_color(&self.config.subtle)?;

        match line {
            Some(line) => write!(self.stream, "{line:>line_num_width$}")?,
            None => write!(self.stream, "{:>line_num_width$}", "")?,
        }

        write!(self.stream, " {} ", self.config.gutter)?;

        self.stream.reset()
    }

    fn marker_style(&self, marker: Marker) -> (&'a ColorSpec, &'static str) {
        match marker {
            Marker::Primary => (&self.config.error_color, self.config.underline),
            Marker::Label => (&self.config.label_color, self.config.label_underline),
        }
    }

    fn line_num_width(&self) -> usize {
        let last_line = std::iter::once(self.diagnostic.pos)
            .chain(self.diagnostic.labels.iter().map(|label| label.pos))
            .map(|pos| self.line_col(pos).0)
            .max()
            .unwrap_or(1);

        1 + last_line.max(1).ilog10() as usize
    }

    fn line_col(&self, pos: usize) -> (usize, usize) {
        self.source
            .byte_to_line_col(self.clamp(pos))
            .unwrap_or((1, 1))
    }

    fn clamp(&self, pos: usize) -> usize {
        pos.min(self.source.text().len())
    }
}

fn str_width(s: &str) -> usize {
    s.replace('\t', TAB).width()
}
