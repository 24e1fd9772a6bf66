//! Per-session editing state: the view transform, the stroke layer, and the
//! session struct that owns both alongside the picked image.

pub mod session;
pub mod stroke_layer;
pub mod transform;

pub use session::EditSession;
pub use stroke_layer::StrokeLayer;
pub use transform::{Matrix, TransformError, ViewTransform};
