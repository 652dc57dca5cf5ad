#[cfg(test)]
mod tests {
    use crate::toolchain::lexer::token::TokenKind::*;
    use crate::toolchain::lexer::{tokenize, LexErrorKind, Location, TokenKind, TokenizedBuffer};
    use crate::toolchain::source;
    use crate::toylang;

    // Lexing helper function to compare expected kinds and (line, column) starts of the tokens.
    fn check_lexing(source: &source::SourceBuffer, expect: Vec<(TokenKind, u32, u32)>) {
        let buffer = TokenizedBuffer::tokenize(source).unwrap();
        let actual: Vec<(TokenKind, u32, u32)> = (0..buffer.len())
            .map(|i| {
                let location = buffer.location_at(i);
                (buffer.tokens()[i], location.line, location.column)
            })
            .collect();
        assert_eq!(actual, expect);
    }

    // Lexing helper function for inputs that should fail, checks the reported lexeme and location.
    fn check_lex_error(source: &source::SourceBuffer, lexeme: &str, line: u32, column: u32) {
        let err = match TokenizedBuffer::tokenize(source) {
            Ok(buffer) => panic!("expected lex error, got {:?}", buffer.tokens()),
            Err(err) => err,
        };
        assert_eq!(err.kind, LexErrorKind::UnidentifiedToken);
        assert_eq!(err.lexeme, lexeme);
        assert_eq!(err.location, Location::new(line, column));
        assert_eq!(err.to_string(), format!("Unidentified token: {}", lexeme));
    }

    #[test]
    fn smoke_test() {
        check_lexing(
            toylang!("program\nz = mod1 / (value % 7);\nend_program\n"),
            vec![
                (StartProgram, 1, 1),
                (Ident, 2, 1),
                (Assign, 2, 3),
                (Ident, 2, 5),
                (DivideOp, 2, 10),
                (OpenParen, 2, 12),
                (Ident, 2, 13),
                (ModOp, 2, 19),
                (Literal, 2, 21),
                (CloseParen, 2, 22),
                (Semicolon, 2, 23),
                (EndProgram, 3, 1),
            ],
        );
    }

    #[test]
    fn empty_string() {
        check_lexing(toylang!(""), vec![]);
        check_lexing(toylang!("\n\t\n  "), vec![]);
    }

    #[test]
    fn reserved_words() {
        check_lexing(
            toylang!("program end_program if end_if end loop end_loop"),
            vec![
                (StartProgram, 1, 1),
                (EndProgram, 1, 9),
                (StartConditional, 1, 21),
                (EndConditional, 1, 24),
                (EndConditional, 1, 31),
                (StartLoop, 1, 35),
                (EndLoop, 1, 40),
            ],
        );
    }

    #[test]
    fn reserved_words_are_exact() {
        check_lexing(
            toylang!("programs If end_ifx _loop"),
            vec![(Ident, 1, 1), (Ident, 1, 10), (Ident, 1, 13), (Ident, 1, 21)],
        );
    }

    #[test]
    fn identifiers_and_literals() {
        check_lexing(
            toylang!("newValue mod1 _tmp x_2 4059 0"),
            vec![
                (Ident, 1, 1),
                (Ident, 1, 10),
                (Ident, 1, 15),
                (Ident, 1, 20),
                (Literal, 1, 24),
                (Literal, 1, 29),
            ],
        );
    }

    #[test]
    fn final_word_needs_no_trailing_delimiter() {
        check_lexing(toylang!("x"), vec![(Ident, 1, 1)]);
        check_lexing(toylang!("42"), vec![(Literal, 1, 1)]);
        check_lexing(toylang!("end_program"), vec![(EndProgram, 1, 1)]);
    }

    #[test]
    fn single_character_operators() {
        check_lexing(
            toylang!("; : = + - * / % ( ) > <"),
            vec![
                (Semicolon, 1, 1),
                (Colon, 1, 3),
                (Assign, 1, 5),
                (AddOp, 1, 7),
                (SubtractOp, 1, 9),
                (MultiplyOp, 1, 11),
                (DivideOp, 1, 13),
                (ModOp, 1, 15),
                (OpenParen, 1, 17),
                (CloseParen, 1, 19),
                (GreaterThanLogic, 1, 21),
                (LessThanLogic, 1, 23),
            ],
        );
    }

    #[test]
    fn two_character_operators() {
        check_lexing(
            toylang!("== != >= <="),
            vec![
                (EqualLogic, 1, 1),
                (NotEqualLogic, 1, 4),
                (GreaterThanEqualLogic, 1, 7),
                (LessThanEqualLogic, 1, 10),
            ],
        );
    }

    #[test]
    fn greater_equal_is_one_token() {
        check_lexing(
            toylang!("z>=50"),
            vec![(Ident, 1, 1), (GreaterThanEqualLogic, 1, 2), (Literal, 1, 4)],
        );
    }

    #[test]
    fn operators_munch_two_characters_at_most() {
        // '===' is '==' then '='.
        check_lexing(toylang!("==="), vec![(EqualLogic, 1, 1), (Assign, 1, 3)]);
        // '=>' is not an operator, so it is '=' then '>'.
        check_lexing(toylang!("=>"), vec![(Assign, 1, 1), (GreaterThanLogic, 1, 2)]);
        check_lexing(toylang!("< ="), vec![(LessThanLogic, 1, 1), (Assign, 1, 3)]);
    }

    #[test]
    fn operators_end_words() {
        check_lexing(
            toylang!("a+b-c"),
            vec![(Ident, 1, 1), (AddOp, 1, 2), (Ident, 1, 3), (SubtractOp, 1, 4), (Ident, 1, 5)],
        );
    }

    #[test]
    fn hyphen_is_subtraction() {
        check_lexing(
            toylang!("end-loop"),
            vec![(EndConditional, 1, 1), (SubtractOp, 1, 4), (StartLoop, 1, 5)],
        );
    }

    #[test]
    fn tabs_and_newlines() {
        check_lexing(
            toylang!("\tx\n\n\ty"),
            vec![(Ident, 1, 2), (Ident, 3, 2)],
        );
    }

    #[test]
    fn unknown_characters() {
        check_lex_error(toylang!("#"), "#", 1, 1);
        check_lex_error(toylang!("x = 1 @ 2"), "@", 1, 7);
        check_lex_error(toylang!("x = 1;\ny = {"), "{", 2, 5);
        check_lex_error(toylang!("a,b"), ",", 1, 2);
        check_lex_error(toylang!("x\r\n"), "\r", 1, 2);
    }

    #[test]
    fn lone_bang() {
        check_lex_error(toylang!("!"), "!", 1, 1);
        check_lex_error(toylang!("x ! y"), "!", 1, 3);
        check_lex_error(toylang!("! ="), "!", 1, 1);
    }

    #[test]
    fn word_starting_with_digit() {
        check_lex_error(toylang!("1abc"), "1abc", 1, 1);
        check_lex_error(toylang!("x = 2_000;"), "2_000", 1, 5);
    }

    #[test]
    fn non_ascii_letters_are_not_word_characters() {
        check_lex_error(toylang!("café"), "é", 1, 4);
    }

    #[test]
    fn replacement_character_in_text_is_unidentified() {
        check_lex_error(toylang!("x = \u{fffd};"), "\u{fffd}", 1, 5);
        let err = tokenize("program \u{fffd}").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnidentifiedToken);
        assert_eq!(err.to_string(), "Unidentified token: \u{fffd}");
    }

    #[test]
    fn tokenize_matches_buffer() {
        let text = "program if (x <= 3) x = x * 2; end_if end_program";
        let kinds = tokenize(text).unwrap();
        let source = source::SourceBuffer::new_from_string(text, "inline");
        let buffer = TokenizedBuffer::tokenize(&source).unwrap();
        assert_eq!(kinds.as_slice(), buffer.tokens());
        assert_eq!(buffer.token_at(4), Some(LessThanEqualLogic));
        assert_eq!(buffer.token_at(buffer.len()), None);
    }

    #[test]
    fn end_of_input_location() {
        let source = source::SourceBuffer::new_from_string("x = 1;\n", "inline");
        let buffer = TokenizedBuffer::tokenize(&source).unwrap();
        assert_eq!(buffer.location_at(buffer.len()), Location::new(2, 1));
    }

    #[test]
    fn write_tokens_one_name_per_line() {
        let source = source::SourceBuffer::new_from_string("x = 1;", "inline");
        let buffer = TokenizedBuffer::tokenize(&source).unwrap();
        let mut out = Vec::new();
        buffer.write_tokens(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "IDENT\nASSIGN\nLITERAL\nSEMICOLON\n");
    }

    #[test]
    fn tokenizing_is_idempotent() {
        let text = "program loop (i = 0 : 10) z = z + i; end_loop end_program\n";
        assert_eq!(tokenize(text).unwrap(), tokenize(text).unwrap());
    }
}
