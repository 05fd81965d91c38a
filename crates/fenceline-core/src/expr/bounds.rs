use crate::{expr::Expr, spatial::SpatialObject};
use kurbo::Rect;

impl<O: SpatialObject> Expr<O> {
    ///
    /// Smallest axis-aligned rectangle covering every object in the tree,
    /// used by spatial indexes for pruning.
    ///
    /// Negation is ignored: a negated region's box is treated as the plain
    /// region's box. The engine never materializes geometric complements, so
    /// this is the tightest rectangle it can report.
    ///
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        match self {
            Self::Leaf { object, .. } => object.bounding_rect(),
            Self::Combinator { children, .. } => {
                let mut rects = children.iter().map(Self::bounding_rect);
                // Seed the union from the first child; starting from a zero
                // rect would corrupt unions with negative coordinates. A
                // childless combinator violates the tree invariant and
                // degrades to an empty rect rather than failing.
                match rects.next() {
                    Some(first) => rects.fold(first, |acc, rect| acc.union(rect)),
                    None => Rect::ZERO,
                }
            }
        }
    }
}
