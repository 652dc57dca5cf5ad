use std::fmt;
use std::io::Write;

use super::DiagnosticKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Note,
    Error,
}

/// A location in code referred to by the diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticLocation<'s> {
    pub file_name: &'s str,
    pub line_number: u32,
    pub column_number: u32,
}

impl<'s> fmt::Display for DiagnosticLocation<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name)?;
        if self.line_number > 0 {
            write!(f, ":{}", self.line_number)?;
        }
        if self.column_number > 0 {
            write!(f, ":{}", self.column_number)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage<'s> {
    pub kind: DiagnosticKind,
    pub location: DiagnosticLocation<'s>,
    pub body: String,
}

impl<'s> fmt::Display for DiagnosticMessage<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // This is an abuse of the "alternate" syntax in fmt::Display trait used to pass a boolean
        // argument to fmt(), in this case to tell the DiagnosticMessage to print this message
        // as an error.
        let infix = match f.alternate() {
            true => "ERROR: ",
            false => "",
        };
        write!(f, "{}: {}{}", self.location, infix, self.body)
    }
}

/// A complete Diagnostic, including a main message and optional notes, plus the level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic<'s> {
    pub level: DiagnosticLevel,
    pub message: DiagnosticMessage<'s>,
    pub notes: Vec<DiagnosticMessage<'s>>,
}

impl<'s> Diagnostic<'s> {
    /// Builds a new diagnostic. Normally called by a [DiagnosticBuilder].
    pub fn new(
        level: DiagnosticLevel,
        message: DiagnosticMessage<'s>,
        notes: Vec<DiagnosticMessage<'s>>,
    ) -> Diagnostic<'s> {
        Diagnostic { level, message, notes }
    }
}

impl<'s> fmt::Display for Diagnostic<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.level == DiagnosticLevel::Error {
            write!(f, "{:#}", self.message)?;
        } else {
            write!(f, "{}", self.message)?;
        }
        for m in &self.notes {
            write!(f, "\n{}", m)?;
        }
        Ok(())
    }
}

/// An interface for an object that can receive diagnostics from the toolchain as they are emitted.
pub trait DiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: &Diagnostic);
    fn flush(&mut self);
}

/// Translates a subsystem-specific location, such as a token index, into a source location.
pub trait DiagnosticLocationTranslator<'s, LocationT> {
    fn get_location(&self, loc: &LocationT) -> DiagnosticLocation<'s>;
}

// This is an adaptor between subsystems (like the parser) and the diagnostic consumer. It holds
// the consumer and translator and facilitates creating Diagnostics, and ultimately provides the
// completed diagnostics to the DiagnosticConsumer.
pub struct DiagnosticEmitter<'c, 's, LocationT> {
    consumer: &'c mut dyn DiagnosticConsumer,
    translator: &'c dyn DiagnosticLocationTranslator<'s, LocationT>,
}

impl<'c, 's, LocationT> DiagnosticEmitter<'c, 's, LocationT> {
    pub fn new(
        consumer: &'c mut dyn DiagnosticConsumer,
        translator: &'c dyn DiagnosticLocationTranslator<'s, LocationT>,
    ) -> DiagnosticEmitter<'c, 's, LocationT> {
        DiagnosticEmitter { consumer, translator }
    }

    pub fn build(
        &self,
        level: DiagnosticLevel,
        kind: DiagnosticKind,
        location: &LocationT,
        body: String,
    ) -> DiagnosticBuilder<'c, 's, LocationT> {
        DiagnosticBuilder::build(level, kind, location, body, self.translator)
    }

    pub fn emit(&mut self, diagnostic: &Diagnostic) {
        self.consumer.handle_diagnostic(diagnostic);
    }
}

/// A helper structure for building a single diagnostic with a fluid API.
pub struct DiagnosticBuilder<'c, 's, LocationT> {
    level: DiagnosticLevel,
    message: DiagnosticMessage<'s>,
    notes: Vec<DiagnosticMessage<'s>>,

    translator: &'c dyn DiagnosticLocationTranslator<'s, LocationT>,
}

impl<'c, 's, LocationT> DiagnosticBuilder<'c, 's, LocationT> {
    pub fn build(
        level: DiagnosticLevel,
        kind: DiagnosticKind,
        location: &LocationT,
        body: String,
        translator: &'c dyn DiagnosticLocationTranslator<'s, LocationT>,
    ) -> DiagnosticBuilder<'c, 's, LocationT> {
        let location = translator.get_location(location);
        let message = DiagnosticMessage { kind, location, body };
        DiagnosticBuilder { level, message, notes: Vec::new(), translator }
    }

    pub fn note(mut self, kind: DiagnosticKind, location: &LocationT, body: String) -> Self {
        let location = self.translator.get_location(location);
        self.notes.push(DiagnosticMessage { kind, location, body });
        self
    }

    pub fn emit(self) -> Diagnostic<'s> {
        Diagnostic::new(self.level, self.message, self.notes)
    }
}

pub struct StreamDiagnosticConsumer<W: Write> {
    stream: std::io::BufWriter<W>,
}

impl<W: Write> StreamDiagnosticConsumer<W> {
    pub fn new(stream: W) -> StreamDiagnosticConsumer<W> {
        StreamDiagnosticConsumer { stream: std::io::BufWriter::new(stream) }
    }
}

impl<W: Write> DiagnosticConsumer for StreamDiagnosticConsumer<W> {
    fn handle_diagnostic(&mut self, diag: &Diagnostic) {
        if let Err(e) = writeln!(self.stream, "{}", diag) {
            tracing::warn!(error = %e, "failed to write diagnostic");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.stream.flush() {
            tracing::warn!(error = %e, "failed to flush diagnostics");
        }
    }
}

pub fn console_diagnostic_consumer() -> StreamDiagnosticConsumer<impl Write> {
    StreamDiagnosticConsumer::new(std::io::stderr())
}

/// Discards every diagnostic.
pub struct NullDiagnosticConsumer {}

impl DiagnosticConsumer for NullDiagnosticConsumer {
    fn handle_diagnostic(&mut self, _diag: &Diagnostic) {}
    fn flush(&mut self) {}
}

/// Keeps every diagnostic in memory, in order of emission.
#[derive(Default)]
pub struct CollectingDiagnosticConsumer {
    pub diagnostics: Vec<String>,
}

impl DiagnosticConsumer for CollectingDiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: &Diagnostic) {
        self.diagnostics.push(diag.to_string());
    }
    fn flush(&mut self) {}
}
