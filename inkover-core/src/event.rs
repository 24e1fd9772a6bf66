//! # Input events
//!
//! The gesture callbacks of the host, flattened into one explicit ordered
//! stream. The host guarantees events for a single gesture never interleave
//! with another gesture of the same kind; the session consumes the stream
//! synchronously, in order.

use crate::stroke::Point;

/// One gesture event, in view/output pixel coordinates.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum InputEvent {
    /// A drag gesture touched down.
    DragStart { pos: Point },
    /// A drag gesture sampled another position.
    DragMove { pos: Point },
    /// A drag gesture lifted, committing its stroke.
    DragEnd,
    /// A transform gesture's incremental deltas. A plain rotate button is
    /// the degenerate case `zoom: 1.0, degrees: 90.0`.
    Pinch { zoom: f32, degrees: f32 },
}
