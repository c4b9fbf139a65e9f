use super::Vector2;
use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned bounding box.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AABB<T = f64> {
    pub min_x: T,
    pub min_y: T,
    pub max_x: T,
    pub max_y: T,
}

impl<T> AABB<T>
where
    T: Real,
{
    #[inline]
    pub fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        AABB {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Zero size box at the origin.
    #[inline]
    pub fn zero() -> Self {
        AABB::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Zero size box holding only `point`.
    #[inline]
    pub fn from_point(point: Vector2<T>) -> Self {
        AABB::new(point.x, point.y, point.x, point.y)
    }

    #[inline]
    pub fn width(&self) -> T {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.max_y - self.min_y
    }

    /// Grow the box (in place) to hold `point`.
    #[inline]
    pub fn include_point(&mut self, point: Vector2<T>) {
        self.min_x = num_traits::real::Real::min(self.min_x, point.x);
        self.min_y = num_traits::real::Real::min(self.min_y, point.y);
        self.max_x = num_traits::real::Real::max(self.max_x, point.x);
        self.max_y = num_traits::real::Real::max(self.max_y, point.y);
    }

    /// Returns the smallest box holding both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use v9::AABB;
    /// let r = AABB::new(0.0, 0.0, 1.0, 1.0).union(&AABB::new(2.0, -1.0, 3.0, 0.5));
    /// assert_eq!(r, AABB::new(0.0, -1.0, 3.0, 1.0));
    /// assert_eq!((r.width(), r.height()), (3.0, 2.0));
    /// ```
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        AABB::new(
            num_traits::real::Real::min(self.min_x, other.min_x),
            num_traits::real::Real::min(self.min_y, other.min_y),
            num_traits::real::Real::max(self.max_x, other.max_x),
            num_traits::real::Real::max(self.max_y, other.max_y),
        )
    }

    /// Fuzzy equal comparison of all four edges using `fuzzy_epsilon`.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: &Self, fuzzy_epsilon: T) -> bool {
        self.min_x.fuzzy_eq_eps(other.min_x, fuzzy_epsilon)
            && self.min_y.fuzzy_eq_eps(other.min_y, fuzzy_epsilon)
            && self.max_x.fuzzy_eq_eps(other.max_x, fuzzy_epsilon)
            && self.max_y.fuzzy_eq_eps(other.max_y, fuzzy_epsilon)
    }

    /// Same as [AABB::fuzzy_eq_eps] using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}
