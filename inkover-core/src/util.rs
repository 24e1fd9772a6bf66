//! Utility types, used throughout the crate.

/// A float which is non-NaN and non-infinite.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[repr(transparent)]
pub struct FiniteF32(f32);
impl FiniteF32 {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);
    pub fn new(val: f32) -> Result<Self, FiniteF32Error> {
        if val.is_finite() {
            Ok(Self(val))
        } else {
            Err(FiniteF32Error::NotFinite)
        }
    }
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for FiniteF32 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f32> for FiniteF32 {
    type Error = FiniteF32Error;
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
impl From<FiniteF32> for f32 {
    fn from(value: FiniteF32) -> Self {
        value.get()
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiniteF32Error {
    #[error("not finite")]
    NotFinite,
}

// This is safe - even though f32 is !Eq, we guarantee that no value is ever NaN
// So PartialEq can act like Eq
impl Eq for FiniteF32 {}
impl std::hash::Hash for FiniteF32 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // Since we impl Eq, we can impl Hash too!
        // (As x == y is required to imply Hash(x) == Hash(y) which isn't possible with NaN)
        state.write_u32(self.0.to_bits());
    }
}

#[cfg(test)]
mod test {
    use super::{FiniteF32, FiniteF32Error};
    #[test]
    fn rejects_non_finite() {
        assert_eq!(FiniteF32::new(f32::NAN), Err(FiniteF32Error::NotFinite));
        assert_eq!(
            FiniteF32::new(f32::INFINITY),
            Err(FiniteF32Error::NotFinite)
        );
        assert_eq!(
            FiniteF32::new(f32::NEG_INFINITY),
            Err(FiniteF32Error::NotFinite)
        );
    }
    #[test]
    fn round_trips() {
        let half = FiniteF32::new(0.5).unwrap();
        assert_eq!(half.get(), 0.5);
        assert_eq!(half, FiniteF32::try_from(0.5).unwrap());
    }
}
