use std::fmt::Display;

use super::Location;

/// A scanned token: its kind and where its first character sits in the source.
///
/// Tokens carry no text. Identifier names and literal values are classified and then discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, location: Location) -> Token {
        Token { kind, location }
    }
}

/// An enumeration of all possible token kinds in the toy language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `program` reserved word, opens the program block.
    StartProgram,

    /// `end_program` reserved word, closes the program block.
    EndProgram,

    /// A word containing at least one letter or underscore and not starting with a digit,
    /// `newValue` or `mod1` for example.
    Ident,

    /// A word made only of ASCII digits, `4059` for example.
    Literal,

    /// `;` terminates an assignment statement.
    Semicolon,

    /// `=` single-character assignment.
    Assign,

    /// `+` arithmetic operator.
    AddOp,

    /// `-` arithmetic operator.
    SubtractOp,

    /// `*` arithmetic operator.
    MultiplyOp,

    /// `/` arithmetic operator.
    DivideOp,

    /// `%` arithmetic operator.
    ModOp,

    /// `(` single-character delimiter.
    OpenParen,

    /// `)` single-character delimiter.
    CloseParen,

    /// `if` reserved word.
    StartConditional,

    /// `loop` reserved word.
    StartLoop,

    /// `end_loop` reserved word.
    EndLoop,

    /// `==` comparison.
    EqualLogic,

    /// `!=` comparison.
    NotEqualLogic,

    /// `>` comparison.
    GreaterThanLogic,

    /// `<` comparison.
    LessThanLogic,

    /// `>=` comparison.
    GreaterThanEqualLogic,

    /// `<=` comparison.
    LessThanEqualLogic,

    /// `end_if` reserved word, or its short form `end`.
    EndConditional,

    /// `:` separates the loop counter assignment from its bound.
    Colon,
}

// Token streams are plain vectors of kinds, keep them one byte per token.
assert_eq_size!(TokenKind, u8);

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 24] = [
        TokenKind::StartProgram,
        TokenKind::EndProgram,
        TokenKind::Ident,
        TokenKind::Literal,
        TokenKind::Semicolon,
        TokenKind::Assign,
        TokenKind::AddOp,
        TokenKind::SubtractOp,
        TokenKind::MultiplyOp,
        TokenKind::DivideOp,
        TokenKind::ModOp,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::StartConditional,
        TokenKind::StartLoop,
        TokenKind::EndLoop,
        TokenKind::EqualLogic,
        TokenKind::NotEqualLogic,
        TokenKind::GreaterThanLogic,
        TokenKind::LessThanLogic,
        TokenKind::GreaterThanEqualLogic,
        TokenKind::LessThanEqualLogic,
        TokenKind::EndConditional,
        TokenKind::Colon,
    ];

    /// The upper-case name used when listing tokens, `START_PROGRAM` for example.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::StartProgram => "START_PROGRAM",
            TokenKind::EndProgram => "END_PROGRAM",
            TokenKind::Ident => "IDENT",
            TokenKind::Literal => "LITERAL",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Assign => "ASSIGN",
            TokenKind::AddOp => "ADD_OP",
            TokenKind::SubtractOp => "SUBTRACT_OP",
            TokenKind::MultiplyOp => "MULTIPLY_OP",
            TokenKind::DivideOp => "DIVIDE_OP",
            TokenKind::ModOp => "MOD_OP",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::StartConditional => "START_CONDITIONAL",
            TokenKind::StartLoop => "START_LOOP",
            TokenKind::EndLoop => "END_LOOP",
            TokenKind::EqualLogic => "EQUAL_LOGIC",
            TokenKind::NotEqualLogic => "NOT_EQUAL_LOGIC",
            TokenKind::GreaterThanLogic => "GREATER_THAN_LOGIC",
            TokenKind::LessThanLogic => "LESS_THAN_LOGIC",
            TokenKind::GreaterThanEqualLogic => "GREATER_THAN_EQUAL_LOGIC",
            TokenKind::LessThanEqualLogic => "LESS_THAN_EQUAL_LOGIC",
            TokenKind::EndConditional => "END_CONDITIONAL",
            TokenKind::Colon => "COLON",
        }
    }

    pub fn is_relational(self) -> bool {
        matches!(
            self,
            TokenKind::EqualLogic
                | TokenKind::NotEqualLogic
                | TokenKind::GreaterThanLogic
                | TokenKind::LessThanLogic
                | TokenKind::GreaterThanEqualLogic
                | TokenKind::LessThanEqualLogic
        )
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            TokenKind::AddOp
                | TokenKind::SubtractOp
                | TokenKind::MultiplyOp
                | TokenKind::DivideOp
                | TokenKind::ModOp
        )
    }
}

/// Looks up a reserved word or punctuation lexeme.
///
/// This is the fixed keyword and punctuation table of the language. Identifiers and literals are
/// not in it, they are classified by character class instead.
pub fn lookup(lexeme: &str) -> Option<TokenKind> {
    let kind = match lexeme {
        "program" => TokenKind::StartProgram,
        "end_program" => TokenKind::EndProgram,
        "if" => TokenKind::StartConditional,
        "end_if" => TokenKind::EndConditional,
        "end" => TokenKind::EndConditional,
        "loop" => TokenKind::StartLoop,
        "end_loop" => TokenKind::EndLoop,

        ";" => TokenKind::Semicolon,
        ":" => TokenKind::Colon,
        "=" => TokenKind::Assign,
        "+" => TokenKind::AddOp,
        "-" => TokenKind::SubtractOp,
        "*" => TokenKind::MultiplyOp,
        "/" => TokenKind::DivideOp,
        "%" => TokenKind::ModOp,
        "(" => TokenKind::OpenParen,
        ")" => TokenKind::CloseParen,

        "==" => TokenKind::EqualLogic,
        "!=" => TokenKind::NotEqualLogic,
        ">" => TokenKind::GreaterThanLogic,
        "<" => TokenKind::LessThanLogic,
        ">=" => TokenKind::GreaterThanEqualLogic,
        "<=" => TokenKind::LessThanEqualLogic,

        _ => return None,
    };
    Some(kind)
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
