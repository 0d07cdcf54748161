use std::cmp::Ordering;

use itertools::Itertools;

use crate::error::{PointSetError, Result};

/// How thoroughly a permutation is checked before a point set is reordered by it
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PermutationCheck {
    /// Every index must be smaller than the point count. Repeated indices are accepted and
    /// duplicate the corresponding points (dropping the ones that are not referenced)
    #[default]
    Bounds,
    /// Like `Bounds`, but additionally every point index must occur exactly once
    Strict,
}

/// Checks that `permutation` can be used to reorder `point_count` points under the given `check`.
/// Returns an `InvalidArgument` error describing the first violation otherwise
/// ```
/// # use pointset_core::util::*;
/// assert!(validate_permutation(&[2, 0, 1], 3, PermutationCheck::Strict).is_ok());
/// assert!(validate_permutation(&[0, 0, 1], 3, PermutationCheck::Bounds).is_ok());
/// assert!(validate_permutation(&[0, 0, 1], 3, PermutationCheck::Strict).is_err());
/// assert!(validate_permutation(&[0, 1], 3, PermutationCheck::Bounds).is_err());
/// ```
pub fn validate_permutation(
    permutation: &[usize],
    point_count: usize,
    check: PermutationCheck,
) -> Result<()> {
    if permutation.len() != point_count {
        return Err(PointSetError::invalid_argument(format!(
            "Permutation has {} entries, but there are {} points",
            permutation.len(),
            point_count
        )));
    }
    if let Some((position, index)) = permutation
        .iter()
        .enumerate()
        .find(|(_, index)| **index >= point_count)
    {
        return Err(PointSetError::invalid_argument(format!(
            "Permutation entry {} at position {} is out of bounds for {} points",
            index, position, point_count
        )));
    }
    if check == PermutationCheck::Strict {
        if let Some(index) = permutation.iter().duplicates().next() {
            return Err(PointSetError::invalid_argument(format!(
                "Permutation references point {} more than once",
                index
            )));
        }
    }
    Ok(())
}

/// Returns the identity permutation for `point_count` points
pub fn identity_permutation(point_count: usize) -> Vec<usize> {
    (0..point_count).collect()
}

/// Returns the inverse of `permutation`, so that reordering by `permutation` and then by the inverse
/// restores the original order
///
/// # Panics
///
/// If `permutation` is not a bijection on `0..permutation.len()`
/// ```
/// # use pointset_core::util::*;
/// assert_eq!(vec![1, 2, 0], invert_permutation(&[2, 0, 1]));
/// ```
pub fn invert_permutation(permutation: &[usize]) -> Vec<usize> {
    let mut inverse = vec![usize::MAX; permutation.len()];
    for (new_index, &old_index) in permutation.iter().enumerate() {
        assert_eq!(
            usize::MAX,
            inverse[old_index],
            "permutation must not contain duplicates"
        );
        inverse[old_index] = new_index;
    }
    inverse
}

/// Computes the stable permutation that sorts the groups of `dimensions` elements in `data` according
/// to `compare`
pub fn sorting_permutation<T, C>(data: &[T], dimensions: usize, mut compare: C) -> Vec<usize>
where
    C: FnMut(&[T], &[T]) -> Ordering,
{
    let mut indices = identity_permutation(data.len() / dimensions);
    indices.sort_by(|&idx_a, &idx_b| {
        compare(
            &data[(idx_a * dimensions)..((idx_a + 1) * dimensions)],
            &data[(idx_b * dimensions)..((idx_b + 1) * dimensions)],
        )
    });
    indices
}
