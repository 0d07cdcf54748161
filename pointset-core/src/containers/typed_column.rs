use std::slice::ChunksExact;

use crate::layout::PrimitiveType;

/// A single column of homogeneous attribute data. The data is a flat buffer that is logically
/// organized as `point_count()` contiguous groups of `dimensions()` elements, one group per point
#[derive(Debug, Clone, PartialEq)]
pub struct TypedColumn<T: PrimitiveType> {
    data: Vec<T>,
    dimensions: usize,
}

impl<T: PrimitiveType> TypedColumn<T> {
    /// Creates a new `TypedColumn` from the given `data`, with `dimensions` elements per point
    ///
    /// # Panics
    ///
    /// If `dimensions` is zero.<br>
    /// If `data.len()` is not a multiple of `dimensions`
    /// ```
    /// # use pointset_core::containers::*;
    /// let column = TypedColumn::new(vec![1.0, 2.0, 3.0, 4.0], 2);
    /// assert_eq!(2, column.point_count());
    /// assert_eq!(&[3.0, 4.0], column.point(1));
    /// ```
    pub fn new(data: Vec<T>, dimensions: usize) -> Self {
        assert!(dimensions > 0, "dimensions must be greater than zero");
        assert_eq!(
            0,
            data.len() % dimensions,
            "length of data must be a multiple of dimensions"
        );
        Self { data, dimensions }
    }

    /// Returns the number of elements per point
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Returns the total number of elements in this column
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if this column stores no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of points in this column
    pub fn point_count(&self) -> usize {
        self.data.len() / self.dimensions
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns the elements of the point at `index`
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds
    pub fn point(&self, index: usize) -> &[T] {
        let start = index * self.dimensions;
        &self.data[start..(start + self.dimensions)]
    }

    /// Returns an iterator over the element groups of all points in this column
    pub fn iter_points(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.dimensions)
    }

    /// Reorders the points in this column so that point `i` afterwards is the point at
    /// `permutation[i]` before the call. Indices in `permutation` must be smaller than
    /// `point_count()`, which is not checked beyond the bounds checks of slice indexing
    ///
    /// # Panics
    ///
    /// If any index in `permutation` is out of bounds
    /// ```
    /// # use pointset_core::containers::*;
    /// let mut column = TypedColumn::new(vec![1, 2, 3, 4, 5, 6], 2);
    /// column.reorder(&[2, 0, 1]);
    /// assert_eq!(&[5, 6, 1, 2, 3, 4], column.as_slice());
    /// ```
    pub fn reorder(&mut self, permutation: &[usize]) {
        let mut reordered = Vec::with_capacity(permutation.len() * self.dimensions);
        for &index in permutation {
            reordered.extend_from_slice(self.point(index));
        }
        self.data = reordered;
    }

    /// Replaces the buffer of this column with `data` and returns the previous buffer
    ///
    /// # Panics
    ///
    /// If `data.len()` does not equal `self.len()`
    pub fn replace(&mut self, data: Vec<T>) -> Vec<T> {
        assert_eq!(self.data.len(), data.len());
        std::mem::replace(&mut self.data, data)
    }

    /// Consumes this column and returns its buffer
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_keeps_groups_together() {
        let mut column = TypedColumn::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0], 3);
        column.reorder(&[2, 1, 0]);
        assert_eq!(
            &[7.0, 8.0, 9.0, 4.0, 5.0, 6.0, 1.0, 2.0, 3.0],
            column.as_slice()
        );
        assert_eq!(3, column.dimensions());
    }

    #[test]
    fn test_reorder_with_duplicates() {
        let mut column = TypedColumn::new(vec![true, false, false], 1);
        column.reorder(&[0, 0, 2]);
        assert_eq!(&[true, true, false], column.as_slice());
    }

    #[test]
    #[should_panic]
    fn test_reorder_out_of_bounds_panics() {
        let mut column = TypedColumn::new(vec![1u8, 2], 1);
        column.reorder(&[0, 2]);
    }

    #[test]
    fn test_iter_points() {
        let column = TypedColumn::new(vec![1u16, 2, 3, 4], 2);
        let points = column.iter_points().collect::<Vec<_>>();
        assert_eq!(vec![&[1u16, 2][..], &[3, 4][..]], points);
    }

    #[test]
    fn test_replace_returns_previous_buffer() {
        let mut column = TypedColumn::new(vec![9, 9, 9], 1);
        let previous = column.replace(vec![1, 2, 3]);
        assert_eq!(vec![9, 9, 9], previous);
        assert_eq!(&[1, 2, 3], column.as_slice());
    }

    #[test]
    #[should_panic]
    fn test_new_with_zero_dimensions_panics() {
        TypedColumn::new(vec![1.0f32], 0);
    }

    #[test]
    #[should_panic]
    fn test_new_with_remainder_panics() {
        TypedColumn::new(vec![1.0f32, 2.0, 3.0], 2);
    }
}
