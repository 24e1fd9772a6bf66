//! # Strokes
//!
//! Value types for freehand annotation: points, the polyline paths a drag
//! gesture samples into, and the committed stroke pairing a path with its
//! color.

use crate::color::Color;

/// Nib width of every committed stroke, in output pixels.
pub const STROKE_WIDTH: f32 = 5.0;

/// A 2D position in view/output pixel space.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}
impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}
impl From<Point> for [f32; 2] {
    fn from(value: Point) -> Self {
        [value.x, value.y]
    }
}

/// An open polyline of drag samples.
///
/// Always holds at least the point it was started from; grows while its
/// gesture is live and is never mutated once wrapped in a [`Stroke`].
#[derive(Clone, PartialEq, Debug)]
pub struct Path {
    // Most drag gestures are a handful of samples - keep those inline.
    points: smallvec::SmallVec<[Point; 16]>,
}
impl Path {
    #[must_use]
    pub fn new(start: Point) -> Self {
        Self {
            points: smallvec::smallvec![start],
        }
    }
    /// Connect a straight segment from the current end to `point`.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    /// Number of *points*, never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[must_use]
    pub fn first(&self) -> Point {
        // Unwrap OK - constructed with a start point, only ever grows.
        self.points.first().copied().unwrap()
    }
    /// Consecutive point pairs, one per straight segment.
    /// Empty for a single-point path.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// One committed freehand drawing gesture.
///
/// Color and width are fixed at creation and never mutate.
#[derive(Clone, PartialEq, Debug)]
pub struct Stroke {
    path: Path,
    color: Color,
    width: f32,
}
impl Stroke {
    #[must_use]
    pub fn new(path: Path, color: Color) -> Self {
        Self {
            path,
            color,
            width: STROKE_WIDTH,
        }
    }
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }
}

#[cfg(test)]
mod test {
    use super::{Path, Point, Stroke, STROKE_WIDTH};
    use crate::color::Color;
    #[test]
    fn path_grows_in_order() {
        let mut path = Path::new(Point::new(1.0, 2.0));
        path.push(Point::new(3.0, 4.0));
        path.push(Point::new(5.0, 6.0));
        assert_eq!(
            path.points(),
            [
                Point::new(1.0, 2.0),
                Point::new(3.0, 4.0),
                Point::new(5.0, 6.0)
            ]
        );
        assert_eq!(path.segments().count(), 2);
    }
    #[test]
    fn single_point_path_has_no_segments() {
        let path = Path::new(Point::new(0.0, 0.0));
        assert_eq!(path.len(), 1);
        assert!(!path.is_empty());
        assert_eq!(path.segments().count(), 0);
    }
    #[test]
    fn stroke_takes_fixed_width() {
        let stroke = Stroke::new(Path::new(Point::new(0.0, 0.0)), Color::RED);
        assert_eq!(stroke.width(), STROKE_WIDTH);
        assert_eq!(stroke.color(), Color::RED);
    }
}
