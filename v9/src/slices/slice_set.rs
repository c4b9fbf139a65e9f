use super::Slice;
use crate::{
    core::traits::Real,
    error::{Axis, Error, Result},
};
use std::{cmp::Ordering, fmt::Debug};

/// Validated collection of the [Slice] values for one axis.
///
/// On construction zero size slices are dropped (they can never stretch anything) and the
/// remaining slices are sorted by `start`. Overlapping or touching slices are kept as given, their
/// displacements add up.
///
/// # Examples
///
/// ```
/// # use v9::slices::*;
/// # use v9::Axis;
/// let set = SliceSet::new(
///     Axis::Vertical,
///     vec![
///         Slice::new(14.0, 15.0).unwrap(),
///         Slice::new(0.0, 0.0).unwrap(),
///         Slice::new(9.0, 10.0).unwrap(),
///     ],
/// )
/// .unwrap();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set[0], Slice::new(9.0, 10.0).unwrap());
/// assert_eq!(set.total_stretchable(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SliceSet<T = f64> {
    axis: Axis,
    slices: Vec<Slice<T>>,
    total_stretchable: T,
}

impl<T> SliceSet<T>
where
    T: Real,
{
    /// Create a new slice set for `axis` from `slices`.
    ///
    /// Returns [Error::EmptySliceList] if `slices` is empty. Note only the given list is checked,
    /// a list holding only zero size slices is accepted and results in a set with a
    /// [SliceSet::total_stretchable] of zero.
    pub fn new(axis: Axis, slices: Vec<Slice<T>>) -> Result<Self> {
        if slices.is_empty() {
            return Err(Error::EmptySliceList { axis });
        }

        let given = slices.len();
        let mut slices: Vec<_> = slices.into_iter().filter(|s| !s.is_empty()).collect();
        if slices.len() != given {
            log::trace!(
                "dropped {} zero size {} slice(s)",
                given - slices.len(),
                axis
            );
        }

        // slices are never NaN (rejected by Slice::new) so partial_cmp always succeeds
        slices.sort_by(|a, b| {
            a.start()
                .partial_cmp(&b.start())
                .unwrap_or(Ordering::Equal)
        });

        let total_stretchable = slices.iter().fold(T::zero(), |acc, s| acc + s.size());

        Ok(SliceSet {
            axis,
            slices,
            total_stretchable,
        })
    }

    /// Create the classic single stretch region nine-patch from a rectangle.
    ///
    /// Returns `(vertical, horizontal)` where vertical holds `[left, right]` and horizontal holds
    /// `[top, bottom]`. Input may be any primitive number type (integer or floating).
    ///
    /// # Examples
    ///
    /// ```
    /// # use v9::slices::*;
    /// let (vertical, horizontal) = SliceSet::<f32>::from_rect(0, 0, 4, 4).unwrap();
    /// assert_eq!(vertical.slices(), &[Slice::new(0.0, 4.0).unwrap()]);
    /// assert_eq!(horizontal.slices(), &[Slice::new(0.0, 4.0).unwrap()]);
    /// ```
    pub fn from_rect<N>(left: N, top: N, right: N, bottom: N) -> Result<(Self, Self)>
    where
        N: num_traits::ToPrimitive + Debug + Copy,
    {
        let vertical = Slice::new(to_real(left)?, to_real(right)?)?;
        let horizontal = Slice::new(to_real(top)?, to_real(bottom)?)?;
        Ok((
            SliceSet::new(Axis::Vertical, vec![vertical])?,
            SliceSet::new(Axis::Horizontal, vec![horizontal])?,
        ))
    }

    /// The axis this set applies to.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Retained slices (non zero size), sorted by start.
    #[inline]
    pub fn slices(&self) -> &[Slice<T>] {
        &self.slices
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Slice<T>> {
        self.slices.iter()
    }

    /// Number of retained slices.
    #[inline]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Returns `true` if every given slice had zero size.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Sum of the sizes of all retained slices.
    #[inline]
    pub fn total_stretchable(&self) -> T {
        self.total_stretchable
    }

    /// Stretch factor required to grow `original` to `target` along this axis, i.e. the growth
    /// per unit of slice size.
    ///
    /// A set without any stretchable extent has a stretch factor of zero.
    #[inline]
    pub fn stretch_factor(&self, original: T, target: T) -> T {
        if self.total_stretchable == T::zero() {
            return T::zero();
        }

        (target - original) / self.total_stretchable
    }

    /// Total displacement of a coordinate at `position` when every unit of slice size grows by
    /// `stretch_factor`. See [Slice::displacement].
    pub fn displacement(&self, position: T, stretch_factor: T) -> T {
        let mut result = T::zero();
        for slice in &self.slices {
            if position <= slice.start() {
                // sorted by start, no later slice can contribute
                break;
            }
            result = result + slice.displacement(position, stretch_factor);
        }

        result
    }

    /// New coordinate for `position` after stretching, `position + displacement`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use v9::slices::*;
    /// # use v9::Axis;
    /// let set = SliceSet::new(Axis::Vertical, vec![Slice::new(9.0, 15.0).unwrap()]).unwrap();
    /// assert_eq!(set.offset(9.0, 1.0), 9.0);
    /// assert_eq!(set.offset(15.0, 1.0), 21.0);
    /// assert_eq!(set.offset(24.0, 1.0), 30.0);
    /// ```
    #[inline]
    pub fn offset(&self, position: T, stretch_factor: T) -> T {
        position + self.displacement(position, stretch_factor)
    }
}

impl<T> std::ops::Index<usize> for SliceSet<T> {
    type Output = Slice<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.slices[index]
    }
}

impl<'a, T> IntoIterator for &'a SliceSet<T> {
    type Item = &'a Slice<T>;
    type IntoIter = std::slice::Iter<'a, Slice<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

pub(crate) fn to_real<T, N>(value: N) -> Result<T>
where
    T: Real,
    N: num_traits::ToPrimitive + Debug + Copy,
{
    <T as num_traits::NumCast>::from(value).ok_or_else(|| Error::NonRepresentable {
        value: format!("{:?}", value),
    })
}
