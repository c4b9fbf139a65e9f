//! Nine-patch style resizing applied directly to vector path geometry.
//!
//! A [PathResizer] takes a path and a set of stretchable regions ([Slices]) along each axis and
//! produces copies of the path at any larger size where only the designated regions deform.
//! Corner radii, glyph strokes and other detail outside of the slices keep their shape.
//!
//! # Examples
//!
//! ```
//! use v9::path;
//! use v9::path::*;
//! use v9::slices::*;
//!
//! // rounded square icon, 24 x 24
//! let icon = path![
//!     move_to(19.0, 3.0),
//!     line_to(5.0, 3.0),
//!     rel_cubic_to(-1.1, 0.0, -2.0, 0.9, -2.0, 2.0),
//!     rel_line_to(0.0, 14.0),
//!     rel_cubic_to(0.0, 1.1, 0.9, 2.0, 2.0, 2.0),
//!     rel_line_to(14.0, 0.0),
//!     rel_cubic_to(1.1, 0.0, 2.0, -0.9, 2.0, -2.0),
//!     line_to(21.0, 5.0),
//!     rel_cubic_to(0.0, -1.1, -0.9, -2.0, -2.0, -2.0),
//!     close(),
//! ];
//!
//! // stretch the flat middle part of each side only
//! let resizer = icon.resizer(Slices::from_rect(9.0, 7.0, 15.0, 13.0).unwrap());
//! let wide = resizer.resize(68.0, 32.0).unwrap();
//! let bounds = wide.tight_bounds().unwrap();
//! assert!((bounds.width() - 68.0f64).abs() < 1e-9);
//! assert!((bounds.height() - 32.0f64).abs() < 1e-9);
//! ```

#[macro_use]
mod macros;
pub mod core;
mod error;
pub mod path;
pub mod resizer;
pub mod slices;

pub use crate::core::math::AABB;
pub use crate::error::{Axis, Error, Result};
pub use crate::path::{Path, PathSeg, PathSink, PathSource};
pub use crate::resizer::{PathResizer, ResizeOptions};
pub use crate::slices::{Slice, SliceSet, Slices};
