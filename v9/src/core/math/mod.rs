//! Core/common math functions for working with points, bounding boxes, and bezier curves.
mod aabb;
mod base_math;
mod vector2;

pub use aabb::AABB;
pub use base_math::*;
pub use vector2::{vec2, Vector2};
