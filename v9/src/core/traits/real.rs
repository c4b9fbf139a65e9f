use super::FuzzyEq;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared.
///
/// All geometry in this crate (slices, path points, bounds) is generic over this trait, `f32` and
/// `f64` implement it.
pub trait Real:
    num_traits::real::Real
    + FuzzyEq
    + std::default::Default
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn three() -> Self {
        Self::two() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }

    /// Lossy conversion to `f64`, used when reporting values in errors and logs.
    #[inline]
    fn as_f64(self) -> f64 {
        num_traits::ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn three() -> Self {
        3.0f32
    }

    #[inline]
    fn four() -> Self {
        4.0f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn three() -> Self {
        3.0f64
    }

    #[inline]
    fn four() -> Self {
        4.0f64
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}
