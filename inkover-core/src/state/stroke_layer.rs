//! # Stroke layer
//!
//! The ordered, append-only record of committed strokes for one session,
//! plus the single path a live drag gesture is sampling into.

use crate::color::Color;
use crate::stroke::{Path, Point, Stroke};

/// Committed strokes in draw order, later strokes painting over earlier
/// ones. Grows by one stroke per completed drag gesture and never shrinks;
/// discarded wholesale when a new image is picked.
#[derive(Clone, Default, Debug)]
pub struct StrokeLayer {
    strokes: Vec<Stroke>,
    /// The path of the drag gesture currently in flight, if any, with the
    /// color it will commit as.
    live: Option<(Path, Color)>,
}

// Public methods for the client
impl StrokeLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// The committed strokes, insertion order = draw order.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }
}

// Gesture stream entry points. Out-of-order calls are absorbed as no-ops -
// a dropped stroke segment is cheap, a fault is not.
impl StrokeLayer {
    /// Open a new in-progress path. Not observable through [`Self::strokes`]
    /// until committed.
    pub fn begin_stroke(&mut self, start: Point, color: Color) {
        if self.live.is_some() {
            // Drag gestures never interleave, so a live path here means the
            // host lost a drag-end. The unfinished path is dropped.
            log::trace!("begin_stroke while a stroke is live - dropping the live path");
        }
        self.live = Some((Path::new(start), color));
    }
    /// Append a sample to the live path. No-op when no stroke is live.
    pub fn extend_stroke(&mut self, point: Point) {
        match &mut self.live {
            Some((path, _)) => path.push(point),
            None => log::trace!("extend_stroke with no stroke live - ignored"),
        }
    }
    /// Move the live path into the committed sequence. No-op when no stroke
    /// is live.
    pub fn commit_stroke(&mut self) {
        if let Some((path, color)) = self.live.take() {
            self.strokes.push(Stroke::new(path, color));
        }
    }
}

impl<'a> IntoIterator for &'a StrokeLayer {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::StrokeLayer;
    use crate::color::Color;
    use crate::stroke::{Path, Point, Stroke};

    #[test]
    fn begin_extend_commit_round_trips() {
        let mut layer = StrokeLayer::new();
        layer.begin_stroke(Point::new(0.0, 0.0), Color::RED);
        layer.extend_stroke(Point::new(1.0, 1.0));
        layer.extend_stroke(Point::new(2.0, 0.0));
        // Not committed yet - nothing observable.
        assert!(layer.is_empty());
        layer.commit_stroke();

        let mut expected = Path::new(Point::new(0.0, 0.0));
        expected.push(Point::new(1.0, 1.0));
        expected.push(Point::new(2.0, 0.0));
        assert_eq!(layer.strokes(), [Stroke::new(expected, Color::RED)]);
    }

    #[test]
    fn extend_before_begin_is_a_no_op() {
        let mut layer = StrokeLayer::new();
        layer.extend_stroke(Point::new(5.0, 5.0));
        layer.commit_stroke();
        assert!(layer.strokes().is_empty());
    }

    #[test]
    fn commit_without_begin_is_a_no_op() {
        let mut layer = StrokeLayer::new();
        layer.commit_stroke();
        layer.commit_stroke();
        assert!(layer.is_empty());
    }

    #[test]
    fn begin_while_live_drops_the_unfinished_path() {
        let mut layer = StrokeLayer::new();
        layer.begin_stroke(Point::new(0.0, 0.0), Color::RED);
        layer.extend_stroke(Point::new(1.0, 0.0));
        layer.begin_stroke(Point::new(9.0, 9.0), Color::BLUE);
        layer.commit_stroke();

        assert_eq!(layer.len(), 1);
        assert_eq!(layer.strokes()[0].color(), Color::BLUE);
        assert_eq!(layer.strokes()[0].path().points(), [Point::new(9.0, 9.0)]);
    }

    #[test]
    fn commit_order_is_insertion_order() {
        let mut layer = StrokeLayer::new();
        for (i, color) in [Color::RED, Color::BLUE, Color::BLACK].into_iter().enumerate() {
            layer.begin_stroke(Point::new(i as f32, 0.0), color);
            layer.commit_stroke();
        }
        let colors: Vec<_> = layer.iter().map(Stroke::color).collect();
        assert_eq!(colors, [Color::RED, Color::BLUE, Color::BLACK]);
    }
}
