use super::*;

// logicExpression : term relOp term
//                 ;
//
// relOp : EQUAL_LOGIC | NOT_EQUAL_LOGIC | GREATER_THAN_LOGIC | LESS_THAN_LOGIC
//       | GREATER_THAN_EQUAL_LOGIC | LESS_THAN_EQUAL_LOGIC
//       ;
//
// Exactly one comparison. A bare term is not a logic expression, and comparisons don't chain.
pub fn handle_logic_expression(context: &mut Context) -> Result<(), SyntaxError> {
    handle_term::handle_term(context)?;

    match context.token_kind() {
        Some(kind) if kind.is_relational() => {
            context.consume();
        }
        _ => return Err(context.unexpected(Production::LogicExpression)),
    }

    handle_term::handle_term(context)
}
