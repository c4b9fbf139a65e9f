//! Core module has common/shared math and numeric traits used by slices, paths, and the resizer.
pub mod math;
pub mod traits;
