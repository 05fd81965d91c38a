use crate::expr::Expr;
use thiserror::Error as ThisError;

///
/// InvalidExpression
///
/// Structural defects the type system cannot rule out. Raised only by the
/// explicit validation pass; the evaluator itself stays total.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum InvalidExpression {
    #[error("combinator node has no children")]
    EmptyCombinator,
}

/// Reject malformed trees at construction time, off the hot evaluation path.
pub fn validate<O>(expr: &Expr<O>) -> Result<(), InvalidExpression> {
    match expr {
        Expr::Leaf { .. } => Ok(()),
        Expr::Combinator { children, .. } => {
            if children.is_empty() {
                return Err(InvalidExpression::EmptyCombinator);
            }
            for child in children {
                validate(child)?;
            }
            Ok(())
        }
    }
}
