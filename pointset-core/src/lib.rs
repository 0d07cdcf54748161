#![warn(clippy::all)]

//! Core data structures for storing typed point attribute data
//!
//! A [`PointSet`](crate::containers::PointSet) holds the positions of a fixed number of points together with
//! named attributes (index, normal, quality, visibility) of heterogeneous element types. All attribute data
//! is stored in columnar memory layout and can be reordered coherently by a single permutation.
//! Start with the [containers](crate::containers) module.

pub extern crate nalgebra;

pub mod containers;
/// Error type for all point set operations
pub mod error;
/// Attribute keys and the supported element types
pub mod layout;
/// Utilities for working with permutations
pub mod util;

#[cfg(test)]
pub(crate) mod test_utils;
