/// Trait for fuzzy equality comparisons with floating point numbers.
///
/// Resized coordinates are produced by sums of products of slice sizes and stretch factors, so
/// they rarely match an expected value bit for bit. Comparing with a tolerance is the only sound
/// way to assert on them.
///
/// # Examples
///
/// ```
/// # use v9::core::traits::*;
/// // growing a 6 unit wide slice by 4 units
/// let stretch = 4.0f64 / 6.0;
/// let x = 15.0 + 6.0 * stretch * (15.0 - 9.0) / 6.0;
/// assert!(x.fuzzy_eq(19.0));
/// assert!(!x.fuzzy_eq(19.001));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns the default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if `self` and `other` differ by less than `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if the magnitude of `self` is less than `fuzzy_epsilon`.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_zero_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

// f32 only carries ~7 significant digits, icon coordinates in the tens need a looser tolerance
impl_fuzzy_eq!(f32, 1.0e-4);
impl_fuzzy_eq!(f64, 1.0e-8);
