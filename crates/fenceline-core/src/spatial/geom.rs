use crate::spatial::SpatialObject;
use kurbo::{Circle, Point, Rect, Shape};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Geom
///
/// Stock spatial object over kurbo primitives. Rectangles are expected in
/// kurbo's normalized form (`x0 <= x1`, `y0 <= y1`).
///

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geom {
    Point(Point),
    Rect(Rect),
    Circle(Circle),
}

impl Geom {
    #[must_use]
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point(Point::new(x, y))
    }

    #[must_use]
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::Rect(Rect::new(x0, y0, x1, y1))
    }

    #[must_use]
    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self::Circle(Circle::new((x, y), radius))
    }
}

#[expect(clippy::float_cmp)]
impl SpatialObject for Geom {
    fn intersects(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Point(a), Self::Point(b)) => a == b,
            (Self::Point(p), Self::Rect(r)) | (Self::Rect(r), Self::Point(p)) => {
                point_in_rect(p, r)
            }
            (Self::Point(p), Self::Circle(c)) | (Self::Circle(c), Self::Point(p)) => {
                point_in_circle(p, c)
            }
            (Self::Rect(a), Self::Rect(b)) => a.overlaps(b),
            (Self::Rect(r), Self::Circle(c)) | (Self::Circle(c), Self::Rect(r)) => {
                circle_touches_rect(c, r)
            }
            (Self::Circle(a), Self::Circle(b)) => {
                a.center.distance(b.center) <= a.radius + b.radius
            }
        }
    }

    fn contains(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Point(a), Self::Point(b)) => a == b,
            // A point contains another object only when that object has
            // collapsed onto the point itself.
            (Self::Point(p), Self::Rect(r)) => {
                r.x0 == p.x && r.x1 == p.x && r.y0 == p.y && r.y1 == p.y
            }
            (Self::Point(p), Self::Circle(c)) => c.radius == 0.0 && c.center == p,
            (Self::Rect(r), Self::Point(p)) => point_in_rect(p, r),
            (Self::Rect(a), Self::Rect(b)) => a.contains_rect(b),
            (Self::Rect(r), Self::Circle(c)) => r.contains_rect(c.bounding_box()),
            (Self::Circle(c), Self::Point(p)) => point_in_circle(p, c),
            (Self::Circle(c), Self::Rect(r)) => rect_in_circle(r, c),
            (Self::Circle(a), Self::Circle(b)) => {
                a.center.distance(b.center) + b.radius <= a.radius
            }
        }
    }

    fn bounding_rect(&self) -> Rect {
        match *self {
            Self::Point(p) => Rect::from_points(p, p),
            Self::Rect(r) => r,
            Self::Circle(c) => c.bounding_box(),
        }
    }
}

// kurbo's `Rect::contains` is half-open; every relation here is closed.
fn point_in_rect(p: Point, r: Rect) -> bool {
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}

fn point_in_circle(p: Point, c: Circle) -> bool {
    p.distance(c.center) <= c.radius
}

// Nearest point of the rect to the circle center decides overlap.
fn circle_touches_rect(c: Circle, r: Rect) -> bool {
    let nearest = Point::new(c.center.x.clamp(r.x0, r.x1), c.center.y.clamp(r.y0, r.y1));
    nearest.distance(c.center) <= c.radius
}

// The farthest rect corner from the circle center decides containment.
fn rect_in_circle(r: Rect, c: Circle) -> bool {
    let dx = (c.center.x - r.x0).abs().max((c.center.x - r.x1).abs());
    let dy = (c.center.y - r.y0).abs().max((c.center.y - r.y1).abs());
    dx.hypot(dy) <= c.radius
}

impl fmt::Display for Geom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Point(p) => write!(f, "point({} {})", p.x, p.y),
            Self::Rect(r) => write!(f, "rect({} {}, {} {})", r.x0, r.y0, r.x1, r.y1),
            Self::Circle(c) => write!(f, "circle({} {}, {})", c.center.x, c.center.y, c.radius),
        }
    }
}
