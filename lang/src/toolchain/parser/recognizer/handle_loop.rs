use super::*;

// loop : START_LOOP OPEN_PAREN assignment COLON expression CLOSE_PAREN statement* END_LOOP
//      ;
pub fn handle_loop(context: &mut Context) -> Result<(), SyntaxError> {
    context.enter()?;
    // 'loop'
    context.expect(TokenKind::StartLoop)?;
    context.expect(TokenKind::OpenParen)?;

    // Counter initialization, then ':' and the bound.
    handle_assignment::handle_assignment(context)?;
    context.expect(TokenKind::Colon)?;
    handle_expression::handle_expression(context)?;

    context.expect(TokenKind::CloseParen)?;

    while context.in_block_body(TokenKind::EndLoop) {
        handle_statement::handle_statement(context)?;
    }

    // 'end_loop'
    context.expect(TokenKind::EndLoop)?;
    context.leave();
    Ok(())
}
