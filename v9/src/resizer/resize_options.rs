use crate::core::traits::Real;

/// Struct to hold options parameters when resizing a path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResizeOptions<T>
where
    T: Real,
{
    /// Tolerance when checking the target size against the source path size. A target smaller
    /// than the source by no more than this amount is resized as if it matched the source size
    /// exactly. Defaults to zero (the target must be at least the source size).
    pub size_eps: T,
}

impl<T> ResizeOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            size_eps: T::zero(),
        }
    }
}

impl<T> Default for ResizeOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
