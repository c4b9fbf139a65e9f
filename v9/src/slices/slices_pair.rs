use super::{Slice, SliceSet};
use crate::{
    core::{math::AABB, traits::Real},
    error::{Axis, Result},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug};

/// The vertical and horizontal [SliceSet] pair describing how a path stretches.
///
/// Vertical slices stretch X coordinates (path width), horizontal slices stretch Y coordinates
/// (path height).
///
/// # Examples
///
/// ```
/// # use v9::slices::*;
/// // single stretch region, like a classic nine-patch
/// let slices = Slices::<f64>::from_rect(9.0, 7.0, 15.0, 13.0).unwrap();
/// assert_eq!(slices.vertical().total_stretchable(), 6.0);
/// assert_eq!(slices.horizontal().total_stretchable(), 6.0);
///
/// // several stretch regions per axis
/// let slices = Slices::new(
///     vec![Slice::new(9.0, 10.0).unwrap(), Slice::new(14.0, 15.0).unwrap()],
///     vec![Slice::new(5.0, 6.0).unwrap(), Slice::new(18.0, 19.0).unwrap()],
/// )
/// .unwrap();
/// assert_eq!(slices.vertical().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Slices<T = f64> {
    vertical: SliceSet<T>,
    horizontal: SliceSet<T>,
}

impl<T> Slices<T>
where
    T: Real,
{
    /// Create slices from the vertical (X) and horizontal (Y) slice lists.
    ///
    /// Fails if either list is empty, see [SliceSet::new].
    pub fn new(vertical: Vec<Slice<T>>, horizontal: Vec<Slice<T>>) -> Result<Self> {
        Ok(Slices {
            vertical: SliceSet::new(Axis::Vertical, vertical)?,
            horizontal: SliceSet::new(Axis::Horizontal, horizontal)?,
        })
    }

    /// Create slices from already validated sets.
    ///
    /// The sets keep the axis they were built for, passing them swapped is allowed but the
    /// resulting errors will name the axis each set was built with.
    #[inline]
    pub fn from_sets(vertical: SliceSet<T>, horizontal: SliceSet<T>) -> Self {
        Slices {
            vertical,
            horizontal,
        }
    }

    /// Single stretch region from `left`, `top`, `right`, `bottom` given as any primitive number
    /// type. See [SliceSet::from_rect].
    pub fn from_rect<N>(left: N, top: N, right: N, bottom: N) -> Result<Self>
    where
        N: num_traits::ToPrimitive + Debug + Copy,
    {
        let (vertical, horizontal) = SliceSet::from_rect(left, top, right, bottom)?;
        Ok(Slices::from_sets(vertical, horizontal))
    }

    /// Single stretch region covering `rect`.
    #[inline]
    pub fn from_aabb(rect: &AABB<T>) -> Result<Self> {
        Slices::new(
            vec![Slice::new(rect.min_x, rect.max_x)?],
            vec![Slice::new(rect.min_y, rect.max_y)?],
        )
    }

    /// Slices stretching X coordinates.
    #[inline]
    pub fn vertical(&self) -> &SliceSet<T> {
        &self.vertical
    }

    /// Slices stretching Y coordinates.
    #[inline]
    pub fn horizontal(&self) -> &SliceSet<T> {
        &self.horizontal
    }

    /// Returns the set for `axis`.
    #[inline]
    pub fn get(&self, axis: Axis) -> &SliceSet<T> {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }
}

fn write_set<T: Real>(f: &mut fmt::Formatter<'_>, set: &SliceSet<T>) -> fmt::Result {
    write!(f, "[")?;
    for (i, slice) in set.iter().enumerate() {
        if i != 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", slice)?;
    }
    write!(f, "]")
}

impl<T> fmt::Display for Slices<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slices(verticalSlices=")?;
        write_set(f, &self.vertical)?;
        write!(f, ", horizontalSlices=")?;
        write_set(f, &self.horizontal)?;
        write!(f, ")")
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSlices<U> {
    vertical_slices: Vec<U>,
    horizontal_slices: Vec<U>,
}

#[cfg(feature = "serde")]
impl<T> Serialize for Slices<T>
where
    T: Real + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawSlices {
            vertical_slices: self.vertical.slices().to_vec(),
            horizontal_slices: self.horizontal.slices().to_vec(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Slices<T>
where
    T: Real + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawSlices::<Slice<T>>::deserialize(deserializer)?;
        Slices::new(raw.vertical_slices, raw.horizontal_slices).map_err(serde::de::Error::custom)
    }
}
