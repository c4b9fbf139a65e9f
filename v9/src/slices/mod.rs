//! This module has the types describing stretchable regions: a single [Slice], the per axis
//! [SliceSet], and the [Slices] pair used by the path resizer.
mod slice;
mod slice_set;
mod slices_pair;

pub use slice::*;
pub use slice_set::*;
pub use slices_pair::*;
