/// The accumulated pinch state: a uniform scale, then a rotation, both about
/// the origin (0,0).
///
/// Applied to the source image only - strokes always live in untransformed
/// view space. Rotation is in degrees, clockwise with +Y down, and
/// accumulates unbounded rather than normalizing into `[0, 360)`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct ViewTransform {
    /// Uniform in x and y. Each pinch multiplies in its incremental zoom.
    pub scale: f32,
    /// Degrees, summed over every pinch and rotate gesture.
    pub rotation: f32,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: 0.0,
    };
    /// Fold one transform gesture's deltas into the accumulated state.
    pub fn pinch_by(&mut self, zoom: f32, degrees: f32) {
        self.scale *= zoom;
        self.rotation += degrees;
    }
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.rotation == 0.0
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// The transform cannot be inverted anymore, and has become useless.
    /// Occurs if scale gets too close to zero.
    #[error("uninvertable")]
    Uninvertable,
}

/// Column-major linear map of view space, no translation component.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Matrix {
    /// Column-major matrix elements
    pub elements: [[f32; 2]; 2],
}

impl Matrix {
    pub const IDENTITY: Self = Self {
        elements: [[1.0, 0.0], [0.0, 1.0]],
    };
    /// Map a point through the transform.
    #[must_use]
    pub fn apply(&self, [x, y]: [f32; 2]) -> [f32; 2] {
        let [[a, b], [c, d]] = self.elements;
        [a * x + c * y, b * x + d * y]
    }
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let [[a, b], [c, d]] = self.elements;
        a * d - c * b
    }
    /// Invert, failing once the determinant has collapsed toward zero.
    pub fn inverse(&self) -> Result<Self, TransformError> {
        let det = self.determinant();
        if det.abs() <= f32::EPSILON {
            return Err(TransformError::Uninvertable);
        }
        let [[a, b], [c, d]] = self.elements;
        Ok(Self {
            elements: [[d / det, -b / det], [-c / det, a / det]],
        })
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<ViewTransform> for Matrix {
    fn from(value: ViewTransform) -> Self {
        // scale ∘ rotate - each source point is rotated, then scaled,
        // exactly the order the canvas concatenated them on screen.
        let (sin, cos) = value.rotation.to_radians().sin_cos();
        let s = value.scale;
        Self {
            elements: [[s * cos, s * sin], [s * -sin, s * cos]],
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Matrix, TransformError, ViewTransform};

    fn assert_close(actual: [f32; 2], expected: [f32; 2]) {
        const EPSILON: f32 = 1e-4;
        assert!(
            (actual[0] - expected[0]).abs() < EPSILON
                && (actual[1] - expected[1]).abs() < EPSILON,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn identity_is_default() {
        assert_eq!(ViewTransform::default(), ViewTransform::IDENTITY);
        assert_eq!(Matrix::from(ViewTransform::IDENTITY), Matrix::IDENTITY);
        assert_close(Matrix::IDENTITY.apply([3.5, -2.0]), [3.5, -2.0]);
    }

    #[test]
    fn pinch_accumulates_unbounded() {
        let mut transform = ViewTransform::default();
        transform.pinch_by(2.0, 90.0);
        transform.pinch_by(1.5, 90.0);
        transform.pinch_by(1.0, 300.0);
        assert_eq!(transform.scale, 3.0);
        // Rotation does not normalize.
        assert_eq!(transform.rotation, 480.0);
    }

    #[test]
    fn quarter_turn_is_clockwise() {
        let quarter = Matrix::from(ViewTransform {
            scale: 1.0,
            rotation: 90.0,
        });
        // +X maps to +Y (down), which reads as clockwise on screen.
        assert_close(quarter.apply([1.0, 0.0]), [0.0, 1.0]);
        assert_close(quarter.apply([0.0, 1.0]), [-1.0, 0.0]);
    }

    #[test]
    fn scale_applies_after_rotation() {
        let matrix = Matrix::from(ViewTransform {
            scale: 2.0,
            rotation: 90.0,
        });
        assert_close(matrix.apply([3.0, 0.0]), [0.0, 6.0]);
    }

    #[test]
    fn inverse_round_trips() {
        let matrix = Matrix::from(ViewTransform {
            scale: 0.75,
            rotation: 33.0,
        });
        let inverse = matrix.inverse().unwrap();
        assert_close(inverse.apply(matrix.apply([12.0, -7.0])), [12.0, -7.0]);
    }

    #[test]
    fn collapsed_scale_is_uninvertable() {
        let matrix = Matrix::from(ViewTransform {
            scale: 0.0,
            rotation: 45.0,
        });
        assert!(matches!(
            matrix.inverse(),
            Err(TransformError::Uninvertable)
        ));
    }
}
