use super::*;

// expression : term (arithOp term)*
//            ;
//
// arithOp : ADD_OP | SUBTRACT_OP | MULTIPLY_OP | DIVIDE_OP | MOD_OP
//         ;
pub fn handle_expression(context: &mut Context) -> Result<(), SyntaxError> {
    handle_term::handle_term(context)?;

    while let Some(kind) = context.token_kind() {
        if !kind.is_arithmetic() {
            break;
        }
        context.consume();
        handle_term::handle_term(context)?;
    }
    Ok(())
}
