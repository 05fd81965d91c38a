use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{BitAnd, BitOr, Not},
};

///
/// CombineOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CombineOp {
    And,
    Or,
}

impl CombineOp {
    pub(crate) const fn keyword(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

///
/// Expr
///
/// A geofence condition: either a (maybe negated) spatial object, or a
/// (maybe negated) AND/OR combinator over child expressions.
///
/// Node kind is closed at the type level: a leaf always carries an object,
/// a combinator never does. Trees are immutable after construction —
/// evaluation builds transient copies with a flipped negate flag instead of
/// mutating, so one tree may be evaluated concurrently from many threads.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expr<O> {
    Leaf {
        negate: bool,
        object: O,
    },
    Combinator {
        negate: bool,
        op: CombineOp,
        children: Vec<Expr<O>>,
    },
}

impl<O> Expr<O> {
    #[must_use]
    pub const fn leaf(object: O) -> Self {
        Self::Leaf {
            negate: false,
            object,
        }
    }

    #[must_use]
    pub const fn and(children: Vec<Self>) -> Self {
        Self::Combinator {
            negate: false,
            op: CombineOp::And,
            children,
        }
    }

    #[must_use]
    pub const fn or(children: Vec<Self>) -> Self {
        Self::Combinator {
            negate: false,
            op: CombineOp::Or,
            children,
        }
    }

    /// Consume the expression and flip its negate flag.
    #[must_use]
    pub fn negated(mut self) -> Self {
        match &mut self {
            Self::Leaf { negate, .. } | Self::Combinator { negate, .. } => *negate = !*negate,
        }
        self
    }

    #[must_use]
    pub const fn negate(&self) -> bool {
        match self {
            Self::Leaf { negate, .. } | Self::Combinator { negate, .. } => *negate,
        }
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Invert a raw evaluation result when this node is negated.
    pub(crate) const fn apply_negate(&self, value: bool) -> bool {
        if self.negate() { !value } else { value }
    }
}

impl<O: Clone> Expr<O> {
    /// Transient copy with the negate flag cleared; the original is untouched.
    pub(crate) fn with_negate_cleared(&self) -> Self {
        let mut copy = self.clone();
        match &mut copy {
            Self::Leaf { negate, .. } | Self::Combinator { negate, .. } => *negate = false,
        }
        copy
    }
}

impl<O> Not for Expr<O> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negated()
    }
}

impl<O> BitAnd for Expr<O> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::and(vec![self, rhs])
    }
}

impl<O: Clone> BitAnd for &Expr<O> {
    type Output = Expr<O>;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(vec![self.clone(), rhs.clone()])
    }
}

impl<O> BitOr for Expr<O> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::or(vec![self, rhs])
    }
}

impl<O: Clone> BitOr for &Expr<O> {
    type Output = Expr<O>;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(vec![self.clone(), rhs.clone()])
    }
}

/// Parenthesized diagnostic rendering: leaves print their object, combinators
/// join children with the operator keyword, negation prefixes `not `.
impl<O: fmt::Display> fmt::Display for Expr<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negate() {
            f.write_str("not ")?;
        }
        match self {
            Self::Leaf { object, .. } => write!(f, "{object}"),
            Self::Combinator { op, children, .. } => {
                f.write_str("(")?;
                for (idx, child) in children.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " {} ", op.keyword())?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
        }
    }
}
