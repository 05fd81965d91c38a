use crate::expr::Expr;

///
/// Normalize an expression into a canonical form.
///
/// Guarantees:
/// - Evaluation equivalence is preserved for all three relations, in both
///   the node-vs-object and node-vs-node forms
/// - Non-negated same-operator children are flattened into their parent
/// - Single-child combinators collapse into the child, XOR-combining the
///   negate flags
///
/// Child order is left untouched; it only affects short-circuit cost.
///
#[must_use]
pub fn normalize<O: Clone>(expr: &Expr<O>) -> Expr<O> {
    match expr {
        Expr::Leaf { .. } => expr.clone(),
        Expr::Combinator {
            negate,
            op,
            children,
        } => {
            let mut out: Vec<Expr<O>> = Vec::new();
            for child in children {
                match normalize(child) {
                    Expr::Combinator {
                        negate: false,
                        op: child_op,
                        children: grandchildren,
                    } if child_op == *op => out.extend(grandchildren),
                    other => out.push(other),
                }
            }

            if out.len() == 1 {
                // AND(x) and OR(x) both reduce to x.
                let only = out.swap_remove(0);
                return if *negate { only.negated() } else { only };
            }

            Expr::Combinator {
                negate: *negate,
                op: *op,
                children: out,
            }
        }
    }
}
