use super::*;

// program : START_PROGRAM statement* END_PROGRAM
//         ;
pub fn handle_program(context: &mut Context) -> Result<(), SyntaxError> {
    // 'program'
    context.expect(TokenKind::StartProgram)?;

    while context.in_block_body(TokenKind::EndProgram) {
        handle_statement::handle_statement(context)?;
    }

    // 'end_program'
    context.expect(TokenKind::EndProgram)?;
    Ok(())
}
