#[cfg(test)]
mod tests {
    use crate::toolchain::lexer::token::TokenKind::*;
    use crate::toolchain::lexer::{tokenize, TokenKind};
    use crate::toolchain::parser::{
        recognize, recognize_program, Production, SyntaxError, MAX_DEPTH,
    };

    fn check_accepts(source: &str) {
        let tokens = tokenize(source).unwrap();
        assert_eq!(recognize(&tokens), Ok(()), "rejected {:?}", source);
    }

    fn check_rejects(source: &str, expect: SyntaxError) {
        let tokens = tokenize(source).unwrap();
        assert_eq!(recognize(&tokens), Err(expect), "source {:?}", source);
    }

    fn missing(expected: TokenKind, found: Option<TokenKind>, index: usize) -> SyntaxError {
        SyntaxError::MissingToken { expected, found, index }
    }

    fn unexpected(production: Production, found: Option<TokenKind>, index: usize) -> SyntaxError {
        SyntaxError::UnexpectedToken { production, found, index }
    }

    #[test]
    fn smoke_test() {
        check_accepts(
            r"program
value = 32;
mod1 = 45;
z = mod1 / value * (value % 7) + mod1;
loop (i = 0 : value)
z = z + mod1;
end_loop
if (z >= 50)
newValue = 50 / mod1;
x = mod1;
end_if
end_program
",
        );
    }

    #[test]
    fn empty_input() {
        check_rejects("", missing(StartProgram, None, 0));
        check_rejects("\n\t\n  ", missing(StartProgram, None, 0));
    }

    #[test]
    fn empty_program() {
        check_accepts("program end_program");
    }

    #[test]
    fn program_must_open() {
        check_rejects("x = 1; end_program", missing(StartProgram, Some(Ident), 0));
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        check_accepts("program end_program x = 1;");
        let tokens = tokenize("program end_program x = 1;").unwrap();
        assert_eq!(recognize_program(&tokens), Ok(2));
        let tokens = tokenize("program x = 1; end_program").unwrap();
        assert_eq!(recognize_program(&tokens), Ok(tokens.len()));
    }

    #[test]
    fn assignment_needs_semicolon() {
        check_rejects("program x = 1 end_program", missing(Semicolon, Some(EndProgram), 4));
    }

    #[test]
    fn assignment_needs_assign() {
        check_rejects("program x 1; end_program", missing(Assign, Some(Literal), 2));
    }

    #[test]
    fn statement_alternatives() {
        check_rejects(
            "program 1 = x; end_program",
            unexpected(Production::Statement, Some(Literal), 1),
        );
        check_rejects(
            "program ; end_program",
            unexpected(Production::Statement, Some(Semicolon), 1),
        );
    }

    #[test]
    fn expression_chains_without_precedence() {
        check_accepts("program x = a + b - c * d / e % f; end_program");
        check_accepts("program x = ((a)); end_program");
        check_accepts("program x = (a + (b * 2)) % 3; end_program");
    }

    #[test]
    fn expression_needs_term_after_operator() {
        check_rejects(
            "program x = a + ; end_program",
            unexpected(Production::Term, Some(Semicolon), 5),
        );
        check_rejects("program x = a + +", unexpected(Production::Term, Some(AddOp), 5));
    }

    #[test]
    fn unclosed_parenthesis() {
        check_rejects("program x = (a + b; end_program", missing(CloseParen, Some(Semicolon), 7));
    }

    #[test]
    fn conditional_with_every_comparison() {
        for op in ["==", "!=", ">", "<", ">=", "<="] {
            check_accepts(&format!("program if (x {} 1) y = 2; end_if end_program", op));
        }
    }

    #[test]
    fn conditional_short_end() {
        check_accepts("program if (x == 1) y = 2; end end_program");
    }

    #[test]
    fn conditional_requires_comparison() {
        // Token 4 is the ')' following 'x'.
        check_rejects(
            "program if (x) y = 1; end_if end_program",
            unexpected(Production::LogicExpression, Some(CloseParen), 4),
        );
    }

    #[test]
    fn comparisons_do_not_chain() {
        check_rejects(
            "program if (a < b < c) end_if end_program",
            missing(CloseParen, Some(LessThanLogic), 6),
        );
    }

    #[test]
    fn comparison_operands_are_terms() {
        check_accepts("program if ((a + 1) >= (b * 2)) end_if end_program");
        check_rejects(
            "program if (a + 1 > b) end_if end_program",
            unexpected(Production::LogicExpression, Some(AddOp), 4),
        );
    }

    #[test]
    fn empty_blocks() {
        check_accepts("program if (a == b) end_if loop (i = 0 : 10) end_loop end_program");
    }

    #[test]
    fn nested_blocks() {
        check_accepts(
            "program
            loop (i = 0 : n)
                if ((i % 2) == 0) x = x + i; end_if
                loop (j = i : n * 2)
                    if (j != i) end_if
                end_loop
            end_loop
            end_program",
        );
    }

    #[test]
    fn loop_header() {
        check_rejects(
            "program loop (i : 10) end_loop end_program",
            missing(Assign, Some(Colon), 4),
        );
        check_rejects(
            "program loop (i = 0) end_loop end_program",
            missing(Colon, Some(CloseParen), 6),
        );
    }

    #[test]
    fn missing_loop_terminator() {
        // The loop body stops one token short of the end and then requires 'end_loop'.
        check_rejects(
            "program loop (i = 0 : 10) x = 1; end_program",
            missing(EndLoop, Some(EndProgram), 13),
        );
    }

    #[test]
    fn missing_conditional_terminator() {
        check_rejects(
            "program if (a == b) x = 1; end_program",
            missing(EndConditional, Some(EndProgram), 11),
        );
    }

    #[test]
    fn missing_program_terminator() {
        check_rejects("program x = 1;", missing(EndProgram, None, 5));
        check_rejects("program x = 1; y", missing(EndProgram, Some(Ident), 5));
    }

    #[test]
    fn wrong_terminator() {
        check_rejects(
            "program if (a == b) end_loop end_program",
            unexpected(Production::Statement, Some(EndLoop), 7),
        );
    }

    fn nested_parentheses(depth: usize) -> String {
        format!("program x = {}1{}; end_program", "(".repeat(depth), ")".repeat(depth))
    }

    fn nested_conditionals(depth: usize) -> String {
        format!("program {}{}end_program", "if (a == b) ".repeat(depth), "end_if ".repeat(depth))
    }

    #[test]
    fn nesting_at_limit() {
        check_accepts(&nested_parentheses(MAX_DEPTH));
        check_accepts(&nested_conditionals(MAX_DEPTH));
    }

    #[test]
    fn deep_parentheses_are_rejected() {
        // Tokens 0..3 are 'program x =', so the first parenthesis past the limit follows
        // MAX_DEPTH accepted ones.
        let err = SyntaxError::NestingTooDeep {
            limit: MAX_DEPTH,
            found: Some(OpenParen),
            index: 3 + MAX_DEPTH,
        };
        check_rejects(&nested_parentheses(MAX_DEPTH + 1), err.clone());
        check_rejects(&nested_parentheses(100_000), err);
    }

    #[test]
    fn deep_blocks_are_rejected() {
        // Each 'if (a == b)' header is six tokens.
        let err = SyntaxError::NestingTooDeep {
            limit: MAX_DEPTH,
            found: Some(StartConditional),
            index: 1 + 6 * MAX_DEPTH,
        };
        check_rejects(&nested_conditionals(50_000), err);

        // Parentheses in a header count toward the same limit.
        let source = format!(
            "program {}if ((a) == b) end_if {}end_program",
            "loop (i = 0 : n) ".repeat(MAX_DEPTH - 1),
            "end_loop ".repeat(MAX_DEPTH - 1)
        );
        let tokens = tokenize(&source).unwrap();
        let err = recognize(&tokens).unwrap_err();
        assert!(matches!(err, SyntaxError::NestingTooDeep { found: Some(OpenParen), .. }));
        assert_eq!(err.found(), Some(OpenParen));
    }
}
