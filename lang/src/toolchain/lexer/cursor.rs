use bstr::ByteSlice;

use super::token::{lookup, Token, TokenKind};
use super::{LexError, LexErrorKind, Location};

/// Token scanner over a source byte string.
///
/// Also tracks input position by line and column. All scanning state, including the word
/// accumulator, belongs to one Cursor, so concurrent tokenize calls share nothing.
///
/// Design roughly inspired by the rustc lexer Cursor.
pub struct Cursor<'s> {
    input: &'s [u8],
    // An iterator over the input character string, with the byte span of each character.
    chars: bstr::CharIndices<'s>,
    // Byte span of the character most recently bumped.
    span: (usize, usize),
    line: u32,
    column: u32,
    // Word characters seen since the last delimiter.
    word: String,
}

impl<'s> Cursor<'s> {
    pub const EOF: char = '\0';

    /// The bstr::CharIndices iterator substitutes invalid utf-8 sequences with the utf-8
    /// placeholder sequence U+FFFD. A substituted sequence is a fatal lexing error. A U+FFFD that
    /// is actually encoded in the source is just an unidentified character.
    pub const BAD: char = '\u{fffd}';

    pub fn new(input: &'s [u8]) -> Cursor<'s> {
        Cursor {
            input,
            chars: input.char_indices(),
            span: (0, 0),
            line: 1,
            column: 1,
            word: String::new(),
        }
    }

    /// Scans the next token. Returns `Ok(None)` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            // Collect string position at the start of the token.
            let location = self.location();

            let first_char = match self.bump() {
                Some(c) => c,
                None => return Ok(None),
            };

            let kind = match first_char {
                c if is_word_continuation(c) => {
                    self.word.clear();
                    self.word.push(c);
                    while is_word_continuation(self.first()) {
                        if let Some(next) = self.bump() {
                            self.word.push(next);
                        }
                    }
                    classify_word(&self.word, location)?
                }

                // Blank space separates tokens and is otherwise dropped.
                c if is_blank_space(c) => continue,

                // Relational operators may be one or two characters long. A '!' is only valid as
                // the start of '!='.
                '=' | '!' | '>' | '<' => {
                    if self.first() == '=' {
                        self.bump();
                        let mut pair = String::with_capacity(2);
                        pair.push(first_char);
                        pair.push('=');
                        match lookup(&pair) {
                            Some(kind) => kind,
                            None => return Err(LexError::unidentified(pair, location)),
                        }
                    } else {
                        single_character(first_char, location)?
                    }
                }

                Self::BAD if self.substituted() => {
                    return Err(LexError {
                        kind: LexErrorKind::InvalidUtf8,
                        lexeme: first_char.to_string(),
                        location,
                    });
                }

                c => single_character(c, location)?,
            };

            tracing::trace!(kind = kind.name(), line = location.line, column = location.column);
            return Ok(Some(Token::new(kind, location)));
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    fn first(&self) -> char {
        self.chars.clone().next().map_or(Self::EOF, |(_, _, c)| c)
    }

    fn bump(&mut self) -> Option<char> {
        let (start, end, c) = self.chars.next()?;
        self.span = (start, end);
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    // True if the last bumped character stands in for an invalid sequence.
    fn substituted(&self) -> bool {
        let (start, end) = self.span;
        self.input.get(start..end) != Some("\u{fffd}".as_bytes())
    }
}

// Classification order matters: reserved words first, then identifiers, then literals.
fn classify_word(word: &str, location: Location) -> Result<TokenKind, LexError> {
    if let Some(kind) = lookup(word) {
        return Ok(kind);
    }

    if word.chars().any(is_alphabetic) {
        // A word can mix letters and digits, but it must not start with a digit.
        if word.starts_with(is_numeric) {
            return Err(LexError::unidentified(word, location));
        }
        return Ok(TokenKind::Ident);
    }

    if word.chars().all(is_numeric) {
        return Ok(TokenKind::Literal);
    }

    Err(LexError::unidentified(word, location))
}

fn single_character(c: char, location: Location) -> Result<TokenKind, LexError> {
    let mut buffer = [0u8; 4];
    lookup(c.encode_utf8(&mut buffer)).ok_or_else(|| LexError::unidentified(c, location))
}

fn is_blank_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

// Hyphen is deliberately absent: '-' always lexes as the subtraction operator.
fn is_word_continuation(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-'
}

fn is_numeric(c: char) -> bool {
    c.is_ascii_digit()
}
