use crate::util::{FiniteF32, FiniteF32Error};

/// A straight-alpha RGBA color, channels in `[0, 1]`.
///
/// Channels are guaranteed finite, which lets strokes holding a color
/// compare `Eq` and hash.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct Color([FiniteF32; 4]);
impl Color {
    pub const TRANSPARENT: Self = Self([FiniteF32::ZERO; 4]);
    pub const BLACK: Self = Self([
        FiniteF32::ZERO,
        FiniteF32::ZERO,
        FiniteF32::ZERO,
        FiniteF32::ONE,
    ]);
    pub const WHITE: Self = Self([FiniteF32::ONE; 4]);
    /// The annotation color every committed stroke carries by default.
    pub const RED: Self = Self([
        FiniteF32::ONE,
        FiniteF32::ZERO,
        FiniteF32::ZERO,
        FiniteF32::ONE,
    ]);
    pub const BLUE: Self = Self([
        FiniteF32::ZERO,
        FiniteF32::ZERO,
        FiniteF32::ONE,
        FiniteF32::ONE,
    ]);
    /// Create a new color from straight-alpha channels.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Result<Self, FiniteF32Error> {
        Ok(Self([
            FiniteF32::new(r)?,
            FiniteF32::new(g)?,
            FiniteF32::new(b)?,
            FiniteF32::new(a)?,
        ]))
    }
    #[must_use]
    pub fn as_array(&self) -> [f32; 4] {
        [
            self.0[0].get(),
            self.0[1].get(),
            self.0[2].get(),
            self.0[3].get(),
        ]
    }
    /// Pack into 8-bit RGBA for the rasterizer. Out-of-range channels clamp.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        self.as_array()
            .map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
    #[must_use]
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        let channel =
            |v: u8| FiniteF32::new(f32::from(v) / 255.0).unwrap_or(FiniteF32::ZERO);
        Self([channel(r), channel(g), channel(b), channel(a)])
    }
}
