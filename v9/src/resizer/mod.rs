//! This module has the [PathResizer] which stretches a path's geometry to a target size, moving
//! only the points lying in or past the designated slices.
mod path_resizer;
mod resize_options;

pub use path_resizer::*;
pub use resize_options::*;
