use super::*;

// assignment : IDENT ASSIGN expression
//            ;
pub fn handle_assignment(context: &mut Context) -> Result<(), SyntaxError> {
    context.expect(TokenKind::Ident)?;
    // '='
    context.expect(TokenKind::Assign)?;
    handle_expression::handle_expression(context)
}
