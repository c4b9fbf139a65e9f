//! Error type shared by slice construction and path resizing.
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Identifies one of the two slice sets.
///
/// The name denotes the orientation of the dividing lines, not the direction of motion: vertical
/// slices are bounded by vertical lines and therefore stretch X coordinates, horizontal slices
/// stretch Y coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Slices along the X axis (affects X coordinates, path width).
    Vertical,
    /// Slices along the Y axis (affects Y coordinates, path height).
    Horizontal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Vertical => write!(f, "vertical"),
            Axis::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Errors returned by slice construction and [PathResizer](crate::PathResizer) operations.
///
/// Numeric payloads are widened to `f64` so the error type is not generic over the path's
/// numeric type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A slice was created with `start > end`.
    #[error("invalid slice, start must be <= end: start = {start}, end = {end}")]
    InvalidSlice { start: f64, end: f64 },

    /// A slice set was created from an empty list.
    #[error("at least 1 {axis} slice is required")]
    EmptySliceList { axis: Axis },

    /// The resize target is smaller than the source path on one axis.
    #[error(
        "the destination {} must be >= original path {}: destination = {target}, original = {original}",
        dimension(.axis),
        dimension(.axis)
    )]
    UndersizedTarget { axis: Axis, target: f64, original: f64 },

    /// The resize target grows an axis whose slices are all empty.
    #[error(
        "cannot grow {} from {original} to {target}, all {axis} slices have zero size",
        dimension(.axis)
    )]
    NoStretchableRegion { axis: Axis, target: f64, original: f64 },

    /// A value could not be converted to the path's numeric type.
    #[error("value {value} is not representable as a path coordinate")]
    NonRepresentable { value: String },
}

fn dimension(axis: &Axis) -> &'static str {
    match axis {
        Axis::Vertical => "width",
        Axis::Horizontal => "height",
    }
}
