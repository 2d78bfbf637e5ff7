//! Area Predicate
//!
//! Decides whether a point lies inside the target area for a given scale `r`.
//! The area is the union of three shapes, one per quadrant:
//!
//! ```text
//!              y
//!              |
//!   Rectangle  |  Circle
//!   [-r, 0] x  |  radius r/2
//!   [0, r/2]   |
//! -------------+------------- x
//!   Triangle   |
//!   (-r,0),    |  (empty)
//!   (0,-r),    |
//!   origin     |
//! ```
//!
//! Every comparison is inclusive, so shape edges (and the origin for any `r`)
//! count as inside. The shapes are evaluated in the fixed order of
//! [`Shape::ALL`].

/// One of the shapes making up the area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Quarter circle of radius `r/2` in the first quadrant
    Circle,
    /// Rectangle `[-r, 0] x [0, r/2]` in the second quadrant
    Rectangle,
    /// Right triangle with legs `r` in the third quadrant
    Triangle,
}

impl Shape {
    /// Every shape of the area, in evaluation order
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Rectangle, Shape::Triangle];

    /// Shape name as used in logs
    pub fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Rectangle => "rectangle",
            Shape::Triangle => "triangle",
        }
    }

    /// Check whether `(x, y)` lies inside this shape scaled by `r`
    pub fn contains(self, x: f64, y: f64, r: f64) -> bool {
        match self {
            Shape::Circle => in_circle(x, y, r),
            Shape::Rectangle => in_rectangle(x, y, r),
            Shape::Triangle => in_triangle(x, y, r),
        }
    }
}

fn in_circle(x: f64, y: f64, r: f64) -> bool {
    let half = r / 2.0;
    x >= 0.0 && y >= 0.0 && x * x + y * y <= half * half
}

fn in_rectangle(x: f64, y: f64, r: f64) -> bool {
    x >= -r && x <= 0.0 && y >= 0.0 && y <= r / 2.0
}

fn in_triangle(x: f64, y: f64, r: f64) -> bool {
    x >= -r && x <= 0.0 && y >= -r && y <= 0.0 && y >= -x - r
}

/// First shape (in [`Shape::ALL`] order) containing the point, if any
pub fn hit_shape(x: f64, y: f64, r: f64) -> Option<Shape> {
    Shape::ALL.into_iter().find(|shape| shape.contains(x, y, r))
}

/// Check whether the point lies inside the area
pub fn in_area(x: f64, y: f64, r: f64) -> bool {
    hit_shape(x, y, r).is_some()
}
