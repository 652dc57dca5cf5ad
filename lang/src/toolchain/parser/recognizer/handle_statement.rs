use super::*;

// statement : assignment SEMICOLON
//           | conditional
//           | loop
//           ;
pub fn handle_statement(context: &mut Context) -> Result<(), SyntaxError> {
    match context.token_kind() {
        Some(TokenKind::Ident) => {
            handle_assignment::handle_assignment(context)?;
            // ';'
            context.expect(TokenKind::Semicolon)?;
        }

        Some(TokenKind::StartConditional) => handle_conditional::handle_conditional(context)?,

        Some(TokenKind::StartLoop) => handle_loop::handle_loop(context)?,

        _ => return Err(context.unexpected(Production::Statement)),
    }
    Ok(())
}
