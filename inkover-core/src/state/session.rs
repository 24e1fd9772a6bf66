use crate::color::Color;
use crate::compositor::{self, SourceImage};
use crate::event::InputEvent;
use crate::state::stroke_layer::StrokeLayer;
use crate::state::transform::ViewTransform;

/// All mutable state for editing one picked image.
///
/// Created empty, populated by [`Self::set_image`], and driven by the
/// host's ordered gesture stream through [`Self::apply`]. Picking a new
/// image discards the transform and every stroke - annotations belong to
/// the image they were drawn over.
pub struct EditSession {
    source: Option<SourceImage>,
    transform: ViewTransform,
    layer: StrokeLayer,
    /// Color committed strokes are drawn in for the whole session.
    annotation_color: Color,
}

impl Default for EditSession {
    fn default() -> Self {
        Self {
            source: None,
            transform: ViewTransform::IDENTITY,
            layer: StrokeLayer::new(),
            annotation_color: Color::RED,
        }
    }
}

impl EditSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Install a freshly decoded image, resetting the transform to identity
    /// and the stroke layer to empty.
    pub fn set_image(&mut self, image: SourceImage) {
        self.source = Some(image);
        self.transform = ViewTransform::IDENTITY;
        self.layer = StrokeLayer::new();
    }
    pub fn set_annotation_color(&mut self, color: Color) {
        self.annotation_color = color;
    }
    #[must_use]
    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }
    #[must_use]
    pub fn strokes(&self) -> &StrokeLayer {
        &self.layer
    }
    #[must_use]
    pub fn annotation_color(&self) -> Color {
        self.annotation_color
    }

    /// Consume one gesture event.
    ///
    /// With no image picked there is nothing on screen to draw over or
    /// transform, so every event is inert.
    pub fn apply(&mut self, event: InputEvent) {
        if self.source.is_none() {
            log::trace!("input event with no image picked - ignored");
            return;
        }
        match event {
            InputEvent::DragStart { pos } => {
                self.layer.begin_stroke(pos, self.annotation_color);
            }
            InputEvent::DragMove { pos } => self.layer.extend_stroke(pos),
            InputEvent::DragEnd => self.layer.commit_stroke(),
            InputEvent::Pinch { zoom, degrees } => self.transform.pinch_by(zoom, degrees),
        }
    }
    /// Consume an ordered gesture stream.
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Flatten the session into its output raster, or `None` when no image
    /// has been picked yet.
    #[must_use]
    pub fn flatten(&self) -> Option<image::RgbaImage> {
        self.source
            .as_ref()
            .map(|source| compositor::flatten(source, self.transform, &self.layer))
    }
}
