use crate::{
    expr::{Expr, InvalidExpression, SpatialRelation, normalize, validate},
    spatial::Geom,
};
use kurbo::Rect;

fn region_a() -> Expr<Geom> {
    Expr::leaf(Geom::circle(0.0, 0.0, 10.0))
}

fn region_b() -> Expr<Geom> {
    Expr::leaf(Geom::circle(5.0, 0.0, 10.0))
}

#[test]
fn point_against_or_of_overlapping_circles() {
    let fence = region_a() | region_b();
    assert!(fence.intersects(&Geom::point(3.0, 0.0)));
}

#[test]
fn negated_region_excludes_the_overlap() {
    // Inside A and inside B: "A and not B" must reject.
    let fence = region_a() & !region_b();
    assert!(!fence.intersects(&Geom::point(3.0, 0.0)));

    // Inside A, outside B: accepted.
    assert!(fence.intersects(&Geom::point(-8.0, 0.0)));
}

#[test]
fn conjunction_contains_only_regions_inside_both() {
    let fence = region_a() & region_b();

    let in_overlap = Geom::circle(2.5, 0.0, 1.0);
    assert!(fence.contains(&in_overlap));
    assert!(fence.evaluate(SpatialRelation::Contains, &in_overlap));

    // Pokes out of A on the right.
    let outside_a = Geom::circle(9.5, 0.0, 2.0);
    assert!(!fence.contains(&outside_a));

    // Pokes out of B on the left.
    let outside_b = Geom::circle(-4.0, 0.0, 2.0);
    assert!(!fence.contains(&outside_b));
}

#[test]
fn tree_against_tree_bottoms_out_at_objects() {
    let fence = region_a() & !region_b();
    let other = Expr::leaf(Geom::point(-8.0, 0.0));

    assert!(fence.intersects_expr(&other));
    assert!(!fence.intersects_expr(&other.clone().negated()));

    let both = region_a() & region_b();
    let target = Expr::leaf(Geom::circle(2.5, 0.0, 1.0));
    assert!(both.contains_expr(&target));
    assert!(target.within_expr(&both));
}

#[test]
fn within_is_the_converse_of_contains() {
    let small = Expr::leaf(Geom::circle(2.0, 0.0, 1.0));
    let big = Geom::circle(0.0, 0.0, 10.0);

    assert!(small.within(&big));
    assert!(!small.contains(&big));
}

#[test]
fn bounding_rect_unions_children() {
    let fence = Expr::or(vec![
        Expr::leaf(Geom::rect(-10.0, -10.0, -5.0, -5.0)),
        Expr::leaf(Geom::rect(5.0, 5.0, 10.0, 10.0)),
    ]);
    assert_eq!(fence.bounding_rect(), Rect::new(-10.0, -10.0, 10.0, 10.0));
}

#[test]
fn bounding_rect_with_all_negative_coordinates() {
    // The union must seed from the first child, not from a zero rect.
    let fence = Expr::and(vec![
        Expr::leaf(Geom::rect(-20.0, -20.0, -15.0, -15.0)),
        Expr::leaf(Geom::rect(-12.0, -12.0, -8.0, -8.0)),
    ]);
    assert_eq!(fence.bounding_rect(), Rect::new(-20.0, -20.0, -8.0, -8.0));
}

#[test]
fn bounding_rect_ignores_negation() {
    let plain = region_a();
    let negated = region_a().negated();
    assert_eq!(plain.bounding_rect(), negated.bounding_rect());
}

#[test]
fn childless_combinator_degrades_to_an_empty_rect() {
    let broken: Expr<Geom> = Expr::and(Vec::new());
    assert_eq!(broken.bounding_rect(), Rect::ZERO);
}

#[test]
fn validate_rejects_childless_combinators() {
    let broken: Expr<Geom> = Expr::or(vec![Expr::and(Vec::new())]);
    assert_eq!(validate(&broken), Err(InvalidExpression::EmptyCombinator));

    let fine = region_a() & !region_b();
    assert_eq!(validate(&fine), Ok(()));
}

#[test]
fn rendering_matches_the_expression_shape() {
    let fence = region_a() & !region_b();
    assert_eq!(
        fence.to_string(),
        "(circle(0 0, 10) and not circle(5 0, 10))"
    );

    let negated = fence.negated();
    assert_eq!(
        negated.to_string(),
        "not (circle(0 0, 10) and not circle(5 0, 10))"
    );
}

#[test]
fn normalize_flattens_and_collapses() {
    let nested = Expr::and(vec![
        Expr::and(vec![region_a(), region_b()]),
        Expr::leaf(Geom::point(1.0, 1.0)),
    ]);
    let flat = normalize(&nested);
    match &flat {
        Expr::Combinator { children, .. } => assert_eq!(children.len(), 3),
        Expr::Leaf { .. } => panic!("expected a combinator after flattening"),
    }

    let single = Expr::or(vec![region_a().negated()]).negated();
    assert_eq!(normalize(&single), region_a());
}

#[test]
fn expressions_round_trip_through_serde() {
    let fence = (region_a() & !region_b()) | Expr::leaf(Geom::rect(0.0, 0.0, 4.0, 4.0));
    let encoded = serde_json::to_string(&fence).expect("expression should encode");
    let decoded: Expr<Geom> = serde_json::from_str(&encoded).expect("expression should decode");
    assert_eq!(decoded, fence);
}
