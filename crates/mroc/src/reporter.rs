//! Collects diagnostics for one command run and writes them in the chosen
//! format.

use std::io::Write;

use mro_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use mro_diagnostic::{Diagnostic, Severity};

use crate::commands::OutputFormat;

enum Sink<W: Write> {
    Terminal(TerminalEmitter<W>),
    Json(JsonEmitter<W>),
}

/// Emits diagnostics and counts them by severity.
pub struct Reporter<W: Write> {
    sink: Sink<W>,
    errors: usize,
    warnings: usize,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `writer`.
    ///
    /// `source_name` is shown alongside line numbers. JSON output opens its
    /// array immediately; [`finish`](Self::finish) closes it.
    pub fn new(
        writer: W,
        format: OutputFormat,
        color: ColorMode,
        is_tty: bool,
        source_name: &str,
    ) -> Self {
        let sink = match format {
            OutputFormat::Text => Sink::Terminal(
                TerminalEmitter::with_color_mode(writer, color, is_tty)
                    .with_source_name(source_name),
            ),
            OutputFormat::Json => {
                let mut emitter = JsonEmitter::new(writer).with_source_name(source_name);
                emitter.begin();
                Sink::Json(emitter)
            }
        };
        Reporter {
            sink,
            errors: 0,
            warnings: 0,
        }
    }

    fn emitter(&mut self) -> &mut dyn DiagnosticEmitter {
        match &mut self.sink {
            Sink::Terminal(emitter) => emitter,
            Sink::Json(emitter) => emitter,
        }
    }

    pub fn report(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
        }
        self.emitter().emit(diagnostic);
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Write the summary (text) or close the array (JSON), then flush.
    pub fn finish(mut self) {
        let (errors, warnings) = (self.errors, self.warnings);
        match &mut self.sink {
            Sink::Terminal(emitter) => emitter.emit_summary(errors, warnings),
            Sink::Json(emitter) => emitter.end(),
        }
        self.emitter().flush();
    }
}
