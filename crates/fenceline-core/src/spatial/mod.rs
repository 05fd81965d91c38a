//! Spatial capability consumed by the expression engine.
//!
//! The engine never computes geometry itself; object-to-object tests and
//! bounding rectangles are delegated through [`SpatialObject`]. [`Geom`] is
//! the stock kurbo-backed implementation.

pub(crate) mod geom;

pub use geom::Geom;

use kurbo::Rect;
use std::sync::Arc;

///
/// SpatialObject
///
/// Object-to-object geometric tests plus an axis-aligned bounding rectangle.
/// Decouples expression evaluation from any concrete geometry representation.
///
/// `contains` and `within` are asymmetric: `a.contains(b)` means `b` lies
/// entirely inside `a`. Boundaries are closed — touching counts for every
/// relation.
///

pub trait SpatialObject {
    fn intersects(&self, other: &Self) -> bool;

    fn contains(&self, other: &Self) -> bool;

    fn within(&self, other: &Self) -> bool {
        other.contains(self)
    }

    fn bounding_rect(&self) -> Rect;
}

/// Objects shared by several expression trees can be held through an `Arc`;
/// the engine only ever reads them.
impl<T: SpatialObject> SpatialObject for Arc<T> {
    fn intersects(&self, other: &Self) -> bool {
        (**self).intersects(&**other)
    }

    fn contains(&self, other: &Self) -> bool {
        (**self).contains(&**other)
    }

    fn within(&self, other: &Self) -> bool {
        (**self).within(&**other)
    }

    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }
}
