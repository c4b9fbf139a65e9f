use crate::{core::traits::Real, error::Error, error::Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};
use std::{cmp::Ordering, fmt};

/// One stretchable interval `[start, end]` along a single axis.
///
/// Slices are immutable once created and compare structurally (exact float equality, no
/// tolerance).
///
/// # Examples
///
/// ```
/// # use v9::slices::*;
/// let slice = Slice::new(9.0, 15.0).unwrap();
/// assert_eq!(slice.size(), 6.0);
/// assert_eq!(slice, Slice::new(9.0, 15.0).unwrap());
/// // start must not be past end
/// assert!(Slice::new(2.0, 1.0).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Slice<T = f64> {
    start: T,
    end: T,
}

impl<T> Slice<T>
where
    T: Real,
{
    /// Create a new slice spanning `start` to `end`.
    ///
    /// Returns [Error::InvalidSlice] if `start > end` (or either value is NaN).
    pub fn new(start: T, end: T) -> Result<Self> {
        let ordered = matches!(
            start.partial_cmp(&end),
            Some(Ordering::Less | Ordering::Equal)
        );
        if !ordered {
            return Err(Error::InvalidSlice {
                start: start.as_f64(),
                end: end.as_f64(),
            });
        }

        Ok(Slice { start, end })
    }

    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Length of the slice, `end - start`, always `>= 0`.
    #[inline]
    pub fn size(&self) -> T {
        self.end - self.start
    }

    /// Returns `true` if the slice has zero size and so can never stretch anything.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == T::zero()
    }

    /// Displacement contributed by this slice to a coordinate at `position` when every unit of
    /// slice size grows by `stretch_factor`.
    ///
    /// Points at or before `start` are not moved, points past `end` are moved by the full growth
    /// of the slice, and points inside are moved proportionally to how far into the slice they
    /// are.
    #[inline]
    pub fn displacement(&self, position: T, stretch_factor: T) -> T {
        if position <= self.start {
            return T::zero();
        }

        let mut offset = self.size() * stretch_factor;
        if position <= self.end {
            offset = offset * ((position - self.start) / self.size());
        }

        offset
    }
}

impl<T> TryFrom<(T, T)> for Slice<T>
where
    T: Real,
{
    type Error = Error;

    #[inline]
    fn try_from((start, end): (T, T)) -> Result<Self> {
        Slice::new(start, end)
    }
}

impl<T> fmt::Display for Slice<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slice(start={}, end={})", self.start, self.end)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Slice<T>
where
    T: Real + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawSlice<U> {
            start: U,
            end: U,
        }

        let raw = RawSlice::<T>::deserialize(deserializer)?;
        Slice::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
