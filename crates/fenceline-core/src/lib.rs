//! Core engine for Fenceline: compound geofence conditions as boolean
//! expression trees over spatial objects, evaluated against single objects
//! or against other trees.
//!
//! Trees are immutable after construction; evaluation is pure recursion and
//! may run from any number of threads without synchronization.

pub mod expr;
pub mod spatial;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///
/// Prelude contains only domain vocabulary: the expression tree, the
/// relations, and the stock spatial capability.
///

pub mod prelude {
    pub use crate::{
        expr::{CombineOp, Expr, InvalidExpression, SpatialRelation, normalize, validate},
        spatial::{Geom, SpatialObject},
    };
}
