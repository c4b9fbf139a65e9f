//! Core/common numeric traits for use in v9.
mod fuzzy_eq;
mod real;

pub use fuzzy_eq::FuzzyEq;
pub use real::Real;
