//! This module has the path model consumed and produced by the resizer: [PathSeg] drawing
//! commands, the owned [Path] type, and the [PathSource]/[PathSink] traits used to read from and
//! write into any path representation.
mod owned_path;
mod path_seg;
mod traits;

pub use owned_path::*;
pub use path_seg::*;
pub use traits::*;
