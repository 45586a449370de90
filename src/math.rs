//! Geometry helpers for mapping pointer positions onto color axes.

use euclid::{Point2D, Size2D, Vector2D};
use num_traits::Float;

use crate::Component;

/// Unit tag for coordinates local to a drawing surface, in pixels with the
/// origin at the top left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSpace;

/// Unit tag for coordinates relative to the host's client area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientSpace;

/// A point on a surface.
pub type Point = Point2D<Component, SurfaceSpace>;

/// The size of a surface.
pub type Size = Size2D<Component, SurfaceSpace>;

/// A point in client coordinates, as delivered by pointer events.
pub type ClientPoint = Point2D<Component, ClientSpace>;

/// Linearly interpolate between `a` and `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Round half up to the nearest integer. Readings are computed in `f64`
/// whatever `Component` is, so the result does not depend on the feature set.
pub fn round(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// The angle in degrees between the horizontal line through `center` and the
/// line from `center` to `point`, in `[0, 360)`. Since y grows downwards, a
/// point straight below the center is at 90° and straight above at 270°.
pub fn angle(center: Point, point: Point) -> Component {
    let Vector2D { x, y, .. } = point - center;
    // atan2 is in (-180, 180], shift negative angles by a full turn.
    let theta = y.atan2(x).to_degrees();
    if theta < 0.0 {
        theta + 360.0
    } else {
        theta
    }
}

/// Rotate `point` around `center` by `degrees`. Positive angles turn
/// counter clockwise on screen.
pub fn rotate(center: Point, point: Point, degrees: Component) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let Vector2D { x, y, .. } = point - center;
    Point::new(cos * x + sin * y + center.x, cos * y - sin * x + center.y)
}

/// Pull `point` towards `center` so it is at most `radius` away, keeping its
/// angle. Returns the new point along with its distance from `center`.
pub fn clamp_to_circle(center: Point, point: Point, radius: Component) -> (Point, Component) {
    let distance = (point - center).length();
    if distance > radius {
        let ratio = radius / distance;
        (center.lerp(point, ratio), radius)
    } else {
        (point, distance)
    }
}
