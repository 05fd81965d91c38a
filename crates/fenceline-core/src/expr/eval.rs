use crate::{
    expr::{CombineOp, Expr},
    spatial::SpatialObject,
};

///
/// SpatialRelation
///
/// The three relations the engine evaluates. `Contains`/`Within` are
/// asymmetric; `Intersects` is symmetric.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpatialRelation {
    Intersects,
    Contains,
    Within,
}

impl SpatialRelation {
    /// Leaf-level primitive test, delegated to the spatial capability.
    pub(crate) fn test<O: SpatialObject>(self, lhs: &O, rhs: &O) -> bool {
        match self {
            Self::Intersects => lhs.intersects(rhs),
            Self::Contains => lhs.contains(rhs),
            Self::Within => lhs.within(rhs),
        }
    }
}

///
/// Evaluate an expression against a single spatial object.
///
/// The public entry applies the node's own negate flag once; the raw form
/// below resolves structure only. Evaluation is total — it reads fields,
/// allocates nothing, and cannot fail.
///
pub(crate) fn eval_object<O: SpatialObject>(
    relation: SpatialRelation,
    expr: &Expr<O>,
    target: &O,
) -> bool {
    expr.apply_negate(raw_object(relation, expr, target))
}

fn raw_object<O: SpatialObject>(relation: SpatialRelation, expr: &Expr<O>, target: &O) -> bool {
    match expr {
        Expr::Leaf { object, .. } => relation.test(object, target),
        // Children re-enter the public form so each subtree's negate is
        // honored at the point it is visited. AND/OR short-circuit.
        Expr::Combinator {
            op: CombineOp::And,
            children,
            ..
        } => children.iter().all(|child| eval_object(relation, child, target)),
        Expr::Combinator {
            op: CombineOp::Or,
            children,
            ..
        } => children.iter().any(|child| eval_object(relation, child, target)),
    }
}

///
/// Evaluate an expression against another expression.
///
/// The right-hand tree is decomposed first; once it is reduced to a single
/// object, the left-hand tree's own structure (negation, AND/OR) is handled
/// uniformly by the node-vs-object evaluator. The left-hand negate flag is
/// applied exactly once, here.
///
pub(crate) fn eval_expr<O: SpatialObject + Clone>(
    relation: SpatialRelation,
    lhs: &Expr<O>,
    rhs: &Expr<O>,
) -> bool {
    lhs.apply_negate(raw_expr(relation, lhs, rhs))
}

fn raw_expr<O: SpatialObject + Clone>(
    relation: SpatialRelation,
    lhs: &Expr<O>,
    rhs: &Expr<O>,
) -> bool {
    if rhs.negate() {
        // lhs R (not rhs) == not (lhs R rhs). The negation acts on the truth
        // value of the comparison, never on the geometry, so the identity is
        // exact for all three relations. Resolve against a transient
        // negate-cleared copy and invert the outcome.
        return !raw_expr(relation, lhs, &rhs.with_negate_cleared());
    }
    match rhs {
        Expr::Leaf { object, .. } => raw_object(relation, lhs, object),
        Expr::Combinator {
            op: CombineOp::And,
            children,
            ..
        } => children.iter().all(|child| raw_expr(relation, lhs, child)),
        Expr::Combinator {
            op: CombineOp::Or,
            children,
            ..
        } => children.iter().any(|child| raw_expr(relation, lhs, child)),
    }
}

impl<O: SpatialObject> Expr<O> {
    /// Evaluate one relation between this tree and a single object.
    #[must_use]
    pub fn evaluate(&self, relation: SpatialRelation, target: &O) -> bool {
        eval_object(relation, self, target)
    }

    #[must_use]
    pub fn intersects(&self, target: &O) -> bool {
        eval_object(SpatialRelation::Intersects, self, target)
    }

    #[must_use]
    pub fn contains(&self, target: &O) -> bool {
        eval_object(SpatialRelation::Contains, self, target)
    }

    #[must_use]
    pub fn within(&self, target: &O) -> bool {
        eval_object(SpatialRelation::Within, self, target)
    }
}

impl<O: SpatialObject + Clone> Expr<O> {
    /// Evaluate one relation between this tree and another tree.
    #[must_use]
    pub fn evaluate_expr(&self, relation: SpatialRelation, other: &Self) -> bool {
        eval_expr(relation, self, other)
    }

    #[must_use]
    pub fn intersects_expr(&self, other: &Self) -> bool {
        eval_expr(SpatialRelation::Intersects, self, other)
    }

    #[must_use]
    pub fn contains_expr(&self, other: &Self) -> bool {
        eval_expr(SpatialRelation::Contains, self, other)
    }

    #[must_use]
    pub fn within_expr(&self, other: &Self) -> bool {
        eval_expr(SpatialRelation::Within, self, other)
    }
}
