use std::io::{self, Write};

use super::cursor::Cursor;
use super::{LexError, Location, TokenIndex, TokenKind};
use crate::toolchain::diagnostics::{DiagnosticLocation, DiagnosticLocationTranslator};
use crate::toolchain::source;

/// The token kinds of one source buffer, with the location of each token kept alongside.
pub struct TokenizedBuffer<'s> {
    kinds: Vec<TokenKind>,
    locations: Vec<Location>,
    // Position just past the last character, reported for errors at end of input.
    end: Location,
    source: &'s source::SourceBuffer<'s>,
}

impl<'s> TokenizedBuffer<'s> {
    pub fn tokenize(source: &'s source::SourceBuffer<'s>) -> Result<TokenizedBuffer<'s>, LexError> {
        let mut cursor = Cursor::new(source.code());
        let mut kinds = Vec::new();
        let mut locations = Vec::new();
        while let Some(token) = cursor.next_token()? {
            kinds.push(token.kind);
            locations.push(token.location);
        }
        let end = cursor.location();
        tracing::debug!(file = source.file_name(), tokens = kinds.len(), "tokenized buffer");
        Ok(TokenizedBuffer { kinds, locations, end, source })
    }

    pub fn token_at(&self, i: TokenIndex) -> Option<TokenKind> {
        self.kinds.get(i).copied()
    }

    /// Location of the token at `i`, or of the end of input for any index past the last token.
    pub fn location_at(&self, i: TokenIndex) -> Location {
        self.locations.get(i).copied().unwrap_or(self.end)
    }

    /// Writes the name of every token kind, one per line.
    pub fn write_tokens(&self, out: &mut dyn Write) -> io::Result<()> {
        for kind in self.kinds.iter() {
            writeln!(out, "{}", kind.name())?;
        }
        Ok(())
    }

    pub fn tokens(&self) -> &[TokenKind] {
        &self.kinds
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl<'s> DiagnosticLocationTranslator<'s, TokenIndex> for TokenizedBuffer<'s> {
    fn get_location(&self, token_index: &TokenIndex) -> DiagnosticLocation<'s> {
        let location = self.location_at(*token_index);
        DiagnosticLocation {
            file_name: self.source.file_name(),
            line_number: location.line,
            column_number: location.column,
        }
    }
}
