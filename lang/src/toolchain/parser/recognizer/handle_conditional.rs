use super::*;

// conditional : START_CONDITIONAL OPEN_PAREN logicExpression CLOSE_PAREN statement*
//               END_CONDITIONAL
//             ;
pub fn handle_conditional(context: &mut Context) -> Result<(), SyntaxError> {
    context.enter()?;
    // 'if'
    context.expect(TokenKind::StartConditional)?;
    context.expect(TokenKind::OpenParen)?;
    handle_logic_expression::handle_logic_expression(context)?;
    context.expect(TokenKind::CloseParen)?;

    while context.in_block_body(TokenKind::EndConditional) {
        handle_statement::handle_statement(context)?;
    }

    // 'end_if' or 'end'
    context.expect(TokenKind::EndConditional)?;
    context.leave();
    Ok(())
}
