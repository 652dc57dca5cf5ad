use super::*;

// term : IDENT
//      | LITERAL
//      | OPEN_PAREN expression CLOSE_PAREN
//      ;
pub fn handle_term(context: &mut Context) -> Result<(), SyntaxError> {
    match context.token_kind() {
        Some(TokenKind::Ident) | Some(TokenKind::Literal) => {
            context.consume();
        }

        // '('
        Some(TokenKind::OpenParen) => {
            context.enter()?;
            context.consume();
            handle_expression::handle_expression(context)?;
            // ')'
            context.expect(TokenKind::CloseParen)?;
            context.leave();
        }

        _ => return Err(context.unexpected(Production::Term)),
    }
    Ok(())
}
