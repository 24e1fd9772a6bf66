//! # Compositor
//!
//! Flattens {source image, view transform, stroke layer} into the single
//! raster the screen showed: the image drawn under the accumulated
//! scale-then-rotate transform, then every committed stroke on top in
//! untransformed view space.
//!
//! Pure - no platform canvas, no hidden state. The same three inputs always
//! produce byte-identical output, which is what makes the save path
//! testable without a rendering surface.

use image::RgbaImage;

use crate::state::stroke_layer::StrokeLayer;
use crate::state::transform::{Matrix, ViewTransform};
use crate::stroke::{Point, Stroke};

/// An immutable decoded raster, as picked for one editing session.
#[derive(Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    #[must_use]
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl From<RgbaImage> for SourceImage {
    fn from(pixels: RgbaImage) -> Self {
        Self::new(pixels)
    }
}

/// Produce the flattened output raster.
///
/// The output always matches the source dimensions - the transform changes
/// what lands inside those bounds, never the bounds themselves. Source
/// pixels transformed out of bounds clip; output pixels with no preimage
/// keep the transparent-black fill.
#[must_use]
pub fn flatten(
    source: &SourceImage,
    transform: ViewTransform,
    strokes: &StrokeLayer,
) -> RgbaImage {
    let mut output = RgbaImage::new(source.width(), source.height());

    // Image pass. The screen drew the image with view space scaled then
    // rotated about the origin, i.e. device = scale ∘ rotate · source.
    // Sample backwards: each output pixel center pulls from the source
    // pixel its preimage lands in (nearest neighbor), so an identity
    // transform reproduces the source exactly.
    if let Ok(inverse) = Matrix::from(transform).inverse() {
        let (source_w, source_h) = (source.width() as f32, source.height() as f32);
        for (x, y, pixel) in output.enumerate_pixels_mut() {
            let [sx, sy] = inverse.apply([x as f32 + 0.5, y as f32 + 0.5]);
            let (sx, sy) = (sx.floor(), sy.floor());
            if sx >= 0.0 && sy >= 0.0 && sx < source_w && sy < source_h {
                *pixel = *source.pixels.get_pixel(sx as u32, sy as u32);
            }
        }
    } else {
        // Scale collapsed to zero - none of the image is visible. The
        // stroke pass still runs over the bare fill.
        log::trace!("flatten with uninvertable transform - image pass skipped");
    }

    // Stroke pass: commit order, view space, never transformed. The screen
    // drew strokes over the already-transformed image, so replaying them
    // untransformed over the identically-transformed raster reproduces the
    // preview pixel-for-pixel.
    for stroke in strokes {
        draw_stroke(&mut output, stroke);
    }

    output
}

fn draw_stroke(target: &mut RgbaImage, stroke: &Stroke) {
    let nib = image::Rgba(stroke.color().to_rgba8());
    if stroke.path().len() == 1 {
        // Zero segments - a touch that never moved still leaves a dot.
        stamp(target, stroke.path().first(), stroke.width(), nib);
        return;
    }
    for (a, b) in stroke.path().segments() {
        draw_segment(target, a, b, stroke.width(), nib);
    }
}

/// Stamp the square nib at half-pixel intervals along the segment.
fn draw_segment(target: &mut RgbaImage, a: Point, b: Point, width: f32, nib: image::Rgba<u8>) {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let steps = ((dx * dx + dy * dy).sqrt() * 2.0).ceil() as u32;
    for i in 0..=steps {
        let t = i as f32 / steps.max(1) as f32;
        stamp(
            target,
            Point::new(a.x + dx * t, a.y + dy * t),
            width,
            nib,
        );
    }
}

fn stamp(target: &mut RgbaImage, center: Point, width: f32, nib: image::Rgba<u8>) {
    let half = ((width / 2.0).max(0.5)) as i32;
    let (cx, cy) = (center.x as i32, center.y as i32);
    let (w, h) = (target.width() as i32, target.height() as i32);
    for oy in -half..=half {
        for ox in -half..=half {
            let (px, py) = (cx + ox, cy + oy);
            if px >= 0 && px < w && py >= 0 && py < h {
                target.put_pixel(px as u32, py as u32, nib);
            }
        }
    }
}
