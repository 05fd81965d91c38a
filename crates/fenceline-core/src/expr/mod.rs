//! Boolean expression trees over spatial objects.
//!
//! An [`Expr`] combines atomic spatial tests (intersects, contains, within)
//! with AND, OR, and NOT, and evaluates either against a single object or
//! against another tree. Negation resolves as a boolean over pairwise tests,
//! never as a geometric complement.

pub(crate) mod ast;
mod bounds;
pub(crate) mod eval;
pub(crate) mod normalize;
pub(crate) mod validate;

#[cfg(test)]
mod tests;

pub use ast::{CombineOp, Expr};
pub use eval::SpatialRelation;
pub use normalize::normalize;
pub use validate::{InvalidExpression, validate};
