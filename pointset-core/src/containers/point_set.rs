use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashMap},
};

use nalgebra::{Scalar, Vector3};
use rayon::prelude::*;

use crate::{
    error::{PointSetError, Result},
    layout::{AttributeKey, PrimitiveType},
    util::{sorting_permutation, validate_permutation, PermutationCheck},
};

use super::{AttributeData, AttributeValue};

/// Options that control how a [`PointSet`] validates its inputs
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PointSetOptions {
    permutation_check: PermutationCheck,
}

impl PointSetOptions {
    /// Creates the default options, which check permutations with [`PermutationCheck::Bounds`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the check that permutations passed to `sort_attributes` have to pass
    /// ```
    /// # use pointset_core::containers::*;
    /// # use pointset_core::util::*;
    /// let options = PointSetOptions::new().with_permutation_check(PermutationCheck::Strict);
    /// assert_eq!(PermutationCheck::Strict, options.permutation_check());
    /// ```
    pub fn with_permutation_check(mut self, check: PermutationCheck) -> Self {
        self.permutation_check = check;
        self
    }

    pub fn permutation_check(&self) -> PermutationCheck {
        self.permutation_check
    }
}

/// A set of points stored in columnar memory layout. Each point has a position and zero or more
/// attributes, identified by an [`AttributeKey`]. The positions and every attribute are stored as
/// separate [`AttributeValue`]s, each with its own element type and number of elements per point.
///
/// The number of points is determined from the positions when the `PointSet` is created and never
/// changes. Every attribute that is added has to provide data for exactly this number of points.
/// All operations validate their arguments before mutating anything, so a failed operation leaves
/// the `PointSet` unchanged:
/// ```
/// # use pointset_core::containers::*;
/// # use pointset_core::layout::*;
/// let mut points = PointSet::new(vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0], 3).unwrap();
/// points.add_attribute(AttributeKey::Index, vec![1i32, 2, 3], 1).unwrap();
/// assert!(points.add_attribute(AttributeKey::Quality, vec![0.5f32, 0.5], 1).is_err());
///
/// points.sort_attributes(&[2, 1, 0]).unwrap();
/// assert_eq!(
///     &[7.0, 8.0, 9.0, 4.0, 5.0, 6.0, 1.0, 2.0, 3.0],
///     points.get_positions::<f64>().unwrap()
/// );
/// assert_eq!(&[3, 2, 1], points.get_attribute_data::<i32>(AttributeKey::Index).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    positions: AttributeValue,
    attributes: HashMap<AttributeKey, AttributeValue>,
    point_count: usize,
    options: PointSetOptions,
}

impl PointSet {
    /// Creates a new `PointSet` from the given position data with `elements_per_point` position
    /// elements per point, using default [`PointSetOptions`]
    ///
    /// Returns an `InvalidArgument` error if `positions` is empty, if `elements_per_point` is zero or
    /// larger than the number of position elements, or if the number of position elements is not
    /// a multiple of `elements_per_point`
    pub fn new<D: Into<AttributeData>>(positions: D, elements_per_point: usize) -> Result<Self> {
        Self::with_options(positions, elements_per_point, PointSetOptions::default())
    }

    /// Like `new`, but with custom `options`
    pub fn with_options<D: Into<AttributeData>>(
        positions: D,
        elements_per_point: usize,
        options: PointSetOptions,
    ) -> Result<Self> {
        let positions = positions.into();
        let point_count = Self::point_count_of(&positions, elements_per_point)?;
        Ok(Self {
            positions: AttributeValue::new(positions, elements_per_point),
            attributes: HashMap::new(),
            point_count,
            options,
        })
    }

    /// Returns the number of points in this `PointSet`
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn options(&self) -> &PointSetOptions {
        &self.options
    }

    /// Returns the positions as a typed slice, or a `TypeMismatch` error if the positions are not
    /// stored as elements of type `T`
    pub fn get_positions<T: PrimitiveType>(&self) -> Result<&[T]> {
        self.positions.get::<T>()
    }

    /// Returns the positions as 3D vectors. Fails with `InvalidArgument` if the positions do not
    /// have three elements per point and with `TypeMismatch` if they are not stored as `T`
    /// ```
    /// # use pointset_core::containers::*;
    /// # use pointset_core::nalgebra::Vector3;
    /// let points = PointSet::new(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
    /// let positions = points.get_positions_3d::<f32>().unwrap();
    /// assert_eq!(vec![Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)], positions);
    /// ```
    pub fn get_positions_3d<T: PrimitiveType + Scalar>(&self) -> Result<Vec<Vector3<T>>> {
        if self.positions.dimensions() != 3 {
            return Err(PointSetError::invalid_argument(format!(
                "Positions have {} elements per point, 3D positions require 3",
                self.positions.dimensions()
            )));
        }
        let positions = self.positions.get::<T>()?;
        Ok(positions
            .chunks_exact(3)
            .map(|position| Vector3::new(position[0], position[1], position[2]))
            .collect())
    }

    /// Returns the number of position elements per point
    pub fn position_dimensions(&self) -> usize {
        self.positions.dimensions()
    }

    /// Returns the untyped positions
    pub fn positions(&self) -> &AttributeValue {
        &self.positions
    }

    /// Adds the given attribute `data` with `elements_per_point` elements per point under `key`,
    /// replacing any previous data for `key`.
    ///
    /// Fails with `InvalidArgument` under the same conditions as `new`, and additionally if the
    /// number of points in `data` does not match `self.point_count()`. In this case, the `PointSet`
    /// is left unchanged
    pub fn add_attribute<D: Into<AttributeData>>(
        &mut self,
        key: AttributeKey,
        data: D,
        elements_per_point: usize,
    ) -> Result<()> {
        let data = data.into();
        let point_count = Self::point_count_of(&data, elements_per_point)?;
        if point_count != self.point_count {
            return Err(PointSetError::invalid_argument(format!(
                "Attribute {} has data for {} points, but the point set has {} points",
                key, point_count, self.point_count
            )));
        }
        self.attributes
            .insert(key, AttributeValue::new(data, elements_per_point));
        Ok(())
    }

    /// Returns the keys of all attributes in this `PointSet`
    pub fn get_all_attribute_keys(&self) -> BTreeSet<AttributeKey> {
        self.attributes.keys().copied().collect()
    }

    /// Returns the number of attributes in this `PointSet`, not counting the positions
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Returns an iterator over all attributes in this `PointSet`, in no particular order
    pub fn attributes(&self) -> impl Iterator<Item = (AttributeKey, &AttributeValue)> + '_ {
        self.attributes.iter().map(|(key, value)| (*key, value))
    }

    /// Returns the untyped attribute for `key`, if it exists
    pub fn get_attribute(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.attributes.get(&key)
    }

    /// Returns the data of the attribute `key` as a typed slice. Fails with `NotFound` if there is no
    /// such attribute and with `TypeMismatch` if its elements are not of type `T`
    pub fn get_attribute_data<T: PrimitiveType>(&self, key: AttributeKey) -> Result<&[T]> {
        self.attribute_value(key)?.get::<T>()
    }

    /// Mutable version of `get_attribute_data`. Allows changing values in place, but not the shape
    /// of the attribute
    pub fn get_attribute_data_mut<T: PrimitiveType>(
        &mut self,
        key: AttributeKey,
    ) -> Result<&mut [T]> {
        self.attributes
            .get_mut(&key)
            .ok_or(PointSetError::NotFound(key))?
            .get_mut::<T>()
    }

    /// Returns the elements of attribute `key` for the point at `index`
    /// ```
    /// # use pointset_core::containers::*;
    /// # use pointset_core::layout::*;
    /// let mut points = PointSet::new(vec![0.0f64; 6], 3).unwrap();
    /// points.add_attribute(AttributeKey::Normal, vec![0.0f32, 0.0, 1.0, 0.0, 1.0, 0.0], 3).unwrap();
    /// assert_eq!(&[0.0, 1.0, 0.0], points.get_attribute_point::<f32>(AttributeKey::Normal, 1).unwrap());
    /// assert!(points.get_attribute_point::<f32>(AttributeKey::Normal, 2).is_err());
    /// ```
    pub fn get_attribute_point<T: PrimitiveType>(
        &self,
        key: AttributeKey,
        index: usize,
    ) -> Result<&[T]> {
        let value = self.attribute_value(key)?;
        if index >= self.point_count {
            return Err(PointSetError::invalid_argument(format!(
                "Point index {} is out of bounds for {} points",
                index, self.point_count
            )));
        }
        Ok(value.column::<T>()?.point(index))
    }

    /// Returns the number of elements per point of the attribute `key`. Fails with `NotFound` if
    /// there is no such attribute
    pub fn get_attribute_dimensions(&self, key: AttributeKey) -> Result<usize> {
        self.attribute_value(key).map(|value| value.dimensions())
    }

    /// Replaces the data of attribute `key` with `data` and returns the previous data. The
    /// dimensionality of the attribute stays the same.
    ///
    /// Fails with `NotFound` if there is no such attribute, with `InvalidArgument` if `data` does not
    /// contain exactly as many elements as the current data, and with `TypeMismatch` if the element
    /// type of `data` differs from the stored element type
    pub fn swap_attribute_data<D: Into<AttributeData>>(
        &mut self,
        key: AttributeKey,
        data: D,
    ) -> Result<AttributeData> {
        let data = data.into();
        let value = self
            .attributes
            .get_mut(&key)
            .ok_or(PointSetError::NotFound(key))?;
        if data.len() != value.element_count() {
            return Err(PointSetError::invalid_argument(format!(
                "Attribute {} has {} elements, but the new data has {} elements",
                key,
                value.element_count(),
                data.len()
            )));
        }
        value.replace(data)
    }

    /// Returns `true` if this `PointSet` contains the attribute `key`
    pub fn has_attribute(&self, key: AttributeKey) -> bool {
        self.attributes.contains_key(&key)
    }

    /// Removes the attribute `key`. Does nothing if there is no such attribute
    pub fn remove_attribute(&mut self, key: AttributeKey) {
        self.attributes.remove(&key);
    }

    /// Removes the attribute `key` and returns it, if it exists
    pub fn take_attribute(&mut self, key: AttributeKey) -> Option<AttributeValue> {
        self.attributes.remove(&key)
    }

    /// Removes all attributes. The positions are kept
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    /// Reorders the positions and all attributes so that afterwards, point `i` is the point that was
    /// at index `permutation[i]` before the call.
    ///
    /// Fails with `InvalidArgument` if `permutation.len()` does not match `self.point_count()` or if
    /// `permutation` does not pass the [`PermutationCheck`] of this `PointSet`. No data is reordered
    /// in this case
    pub fn sort_attributes(&mut self, permutation: &[usize]) -> Result<()> {
        validate_permutation(
            permutation,
            self.point_count,
            self.options.permutation_check(),
        )?;

        self.positions.reorder(permutation);
        for value in self.attributes.values_mut() {
            value.reorder(permutation);
        }
        Ok(())
    }

    /// Like `sort_attributes`, but reorders the positions and all attributes in parallel
    pub fn par_sort_attributes(&mut self, permutation: &[usize]) -> Result<()> {
        validate_permutation(
            permutation,
            self.point_count,
            self.options.permutation_check(),
        )?;

        let positions = &mut self.positions;
        let attributes = &mut self.attributes;
        rayon::join(
            || positions.reorder(permutation),
            || {
                attributes
                    .par_iter_mut()
                    .for_each(|(_, value)| value.reorder(permutation))
            },
        );
        Ok(())
    }

    /// Computes the permutation that would sort all points by the values of the attribute `key`,
    /// according to `compare`. `compare` receives the elements of two points. The sort is stable
    pub fn sorting_permutation_by<T: PrimitiveType, C: FnMut(&[T], &[T]) -> Ordering>(
        &self,
        key: AttributeKey,
        compare: C,
    ) -> Result<Vec<usize>> {
        let column = self.attribute_value(key)?.column::<T>()?;
        Ok(sorting_permutation(
            column.as_slice(),
            column.dimensions(),
            compare,
        ))
    }

    /// Sorts all points by the values of the attribute `key`, according to `compare`
    /// ```
    /// # use pointset_core::containers::*;
    /// # use pointset_core::layout::*;
    /// let mut points = PointSet::new(vec![1.0f64, 2.0, 3.0], 1).unwrap();
    /// points.add_attribute(AttributeKey::Index, vec![3u32, 1, 2], 1).unwrap();
    /// points.sort_by_attribute::<u32, _>(AttributeKey::Index, |a, b| a[0].cmp(&b[0])).unwrap();
    /// assert_eq!(&[2.0, 3.0, 1.0], points.get_positions::<f64>().unwrap());
    /// ```
    pub fn sort_by_attribute<T: PrimitiveType, C: FnMut(&[T], &[T]) -> Ordering>(
        &mut self,
        key: AttributeKey,
        compare: C,
    ) -> Result<()> {
        let permutation = self.sorting_permutation_by(key, compare)?;
        self.sort_attributes(&permutation)
    }

    fn attribute_value(&self, key: AttributeKey) -> Result<&AttributeValue> {
        self.attributes
            .get(&key)
            .ok_or(PointSetError::NotFound(key))
    }

    /// Checks the shape of `data` and returns the number of points it contains
    fn point_count_of(data: &AttributeData, elements_per_point: usize) -> Result<usize> {
        let len = data.len();
        if elements_per_point == 0 {
            return Err(PointSetError::invalid_argument(
                "Elements per point must be greater than zero",
            ));
        }
        if len == 0 {
            return Err(PointSetError::invalid_argument("Data must not be empty"));
        }
        if elements_per_point > len {
            return Err(PointSetError::invalid_argument(format!(
                "Elements per point ({}) exceed the number of elements ({})",
                elements_per_point, len
            )));
        }
        if len % elements_per_point != 0 {
            return Err(PointSetError::invalid_argument(format!(
                "Number of elements ({}) is not a multiple of elements per point ({})",
                len, elements_per_point
            )));
        }
        Ok(len / elements_per_point)
    }
}
