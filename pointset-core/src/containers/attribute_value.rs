use crate::{
    error::{PointSetError, Result},
    layout::{AttributeDataType, PrimitiveType},
};

use super::TypedColumn;

/// Expands `$body` once for every variant of the enum `$enum`, binding the payload of the active
/// variant to `$inner`
macro_rules! dispatch {
    ($enum:ident, $value:expr, $inner:ident => $body:expr) => {
        match $value {
            $enum::F64($inner) => $body,
            $enum::F32($inner) => $body,
            $enum::I32($inner) => $body,
            $enum::U32($inner) => $body,
            $enum::U16($inner) => $body,
            $enum::U8($inner) => $body,
            $enum::Bool($inner) => $body,
        }
    };
}

/// An owned buffer of elements of one of the supported element types. This is the form in which
/// callers hand data to a point set (and receive it back from `swap_attribute_data`). Any
/// `Vec<T>` with `T: PrimitiveType` converts into `AttributeData`
/// ```
/// # use pointset_core::containers::*;
/// # use pointset_core::layout::*;
/// let data: AttributeData = vec![0.5f32, 0.25].into();
/// assert_eq!(AttributeDataType::F32, data.data_type());
/// assert_eq!(2, data.len());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeData {
    F64(Vec<f64>),
    F32(Vec<f32>),
    I32(Vec<i32>),
    U32(Vec<u32>),
    U16(Vec<u16>),
    U8(Vec<u8>),
    Bool(Vec<bool>),
}

impl AttributeData {
    /// Returns the total number of elements in this buffer
    pub fn len(&self) -> usize {
        dispatch!(AttributeData, self, buffer => buffer.len())
    }

    /// Returns `true` if this buffer stores no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element type of this buffer
    pub fn data_type(&self) -> AttributeDataType {
        match self {
            AttributeData::F64(_) => AttributeDataType::F64,
            AttributeData::F32(_) => AttributeDataType::F32,
            AttributeData::I32(_) => AttributeDataType::I32,
            AttributeData::U32(_) => AttributeDataType::U32,
            AttributeData::U16(_) => AttributeDataType::U16,
            AttributeData::U8(_) => AttributeDataType::U8,
            AttributeData::Bool(_) => AttributeDataType::Bool,
        }
    }

    /// Returns the buffer as a typed slice, or a `TypeMismatch` error if this buffer does not store
    /// elements of type `T`
    pub fn as_slice<T: PrimitiveType>(&self) -> Result<&[T]> {
        T::slice_of(self).ok_or_else(|| PointSetError::TypeMismatch {
            requested: T::data_type(),
            stored: self.data_type(),
        })
    }

    /// Unwraps the typed buffer, or returns a `TypeMismatch` error if this buffer does not store
    /// elements of type `T`
    pub fn into_vec<T: PrimitiveType>(self) -> Result<Vec<T>> {
        T::unwrap_data(self).map_err(|data| PointSetError::TypeMismatch {
            requested: T::data_type(),
            stored: data.data_type(),
        })
    }
}

/// The data of a single attribute of a point set: exactly one [`TypedColumn`] of one of the supported
/// element types. The element type is fixed when the value is created and never changes
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    F64(TypedColumn<f64>),
    F32(TypedColumn<f32>),
    I32(TypedColumn<i32>),
    U32(TypedColumn<u32>),
    U16(TypedColumn<u16>),
    U8(TypedColumn<u8>),
    Bool(TypedColumn<bool>),
}

impl AttributeValue {
    /// Creates a new `AttributeValue` from the given `data` with `dimensions` elements per point
    ///
    /// # Panics
    ///
    /// If `dimensions` is zero.<br>
    /// If `data.len()` is not a multiple of `dimensions`
    pub fn new(data: AttributeData, dimensions: usize) -> Self {
        match data {
            AttributeData::F64(buffer) => Self::F64(TypedColumn::new(buffer, dimensions)),
            AttributeData::F32(buffer) => Self::F32(TypedColumn::new(buffer, dimensions)),
            AttributeData::I32(buffer) => Self::I32(TypedColumn::new(buffer, dimensions)),
            AttributeData::U32(buffer) => Self::U32(TypedColumn::new(buffer, dimensions)),
            AttributeData::U16(buffer) => Self::U16(TypedColumn::new(buffer, dimensions)),
            AttributeData::U8(buffer) => Self::U8(TypedColumn::new(buffer, dimensions)),
            AttributeData::Bool(buffer) => Self::Bool(TypedColumn::new(buffer, dimensions)),
        }
    }

    /// Returns the total number of elements stored in this value (not divided by the dimensions)
    pub fn element_count(&self) -> usize {
        dispatch!(AttributeValue, self, column => column.len())
    }

    /// Returns the number of elements per point
    pub fn dimensions(&self) -> usize {
        dispatch!(AttributeValue, self, column => column.dimensions())
    }

    /// Returns the number of points stored in this value
    pub fn point_count(&self) -> usize {
        dispatch!(AttributeValue, self, column => column.point_count())
    }

    /// Returns the element type of this value
    pub fn data_type(&self) -> AttributeDataType {
        match self {
            AttributeValue::F64(_) => AttributeDataType::F64,
            AttributeValue::F32(_) => AttributeDataType::F32,
            AttributeValue::I32(_) => AttributeDataType::I32,
            AttributeValue::U32(_) => AttributeDataType::U32,
            AttributeValue::U16(_) => AttributeDataType::U16,
            AttributeValue::U8(_) => AttributeDataType::U8,
            AttributeValue::Bool(_) => AttributeDataType::Bool,
        }
    }

    /// Reorders the points of this value by `permutation`, see [`TypedColumn::reorder`]
    pub fn reorder(&mut self, permutation: &[usize]) {
        dispatch!(AttributeValue, self, column => column.reorder(permutation))
    }

    /// Replaces the buffer of this value with `data` and returns the previous buffer. The element
    /// type of `data` has to match the element type of this value, no conversion is performed.
    /// The dimensionality of this value stays the same
    ///
    /// # Panics
    ///
    /// If the element types match but `data.len()` does not equal `self.element_count()`
    pub fn replace(&mut self, data: AttributeData) -> Result<AttributeData> {
        let stored = self.data_type();
        match (self, data) {
            (AttributeValue::F64(column), AttributeData::F64(buffer)) => {
                Ok(AttributeData::F64(column.replace(buffer)))
            }
            (AttributeValue::F32(column), AttributeData::F32(buffer)) => {
                Ok(AttributeData::F32(column.replace(buffer)))
            }
            (AttributeValue::I32(column), AttributeData::I32(buffer)) => {
                Ok(AttributeData::I32(column.replace(buffer)))
            }
            (AttributeValue::U32(column), AttributeData::U32(buffer)) => {
                Ok(AttributeData::U32(column.replace(buffer)))
            }
            (AttributeValue::U16(column), AttributeData::U16(buffer)) => {
                Ok(AttributeData::U16(column.replace(buffer)))
            }
            (AttributeValue::U8(column), AttributeData::U8(buffer)) => {
                Ok(AttributeData::U8(column.replace(buffer)))
            }
            (AttributeValue::Bool(column), AttributeData::Bool(buffer)) => {
                Ok(AttributeData::Bool(column.replace(buffer)))
            }
            (_, data) => Err(PointSetError::TypeMismatch {
                requested: data.data_type(),
                stored,
            }),
        }
    }

    /// Returns the typed column of this value, or a `TypeMismatch` error if this value does not
    /// store elements of type `T`
    pub fn column<T: PrimitiveType>(&self) -> Result<&TypedColumn<T>> {
        T::column_of(self).ok_or_else(|| PointSetError::TypeMismatch {
            requested: T::data_type(),
            stored: self.data_type(),
        })
    }

    /// Returns the elements of this value as a typed slice, or a `TypeMismatch` error if this value
    /// does not store elements of type `T`
    /// ```
    /// # use pointset_core::containers::*;
    /// let value = AttributeValue::new(vec![1i32, 2, 3].into(), 1);
    /// assert_eq!(&[1, 2, 3], value.get::<i32>().unwrap());
    /// assert!(value.get::<f32>().is_err());
    /// ```
    pub fn get<T: PrimitiveType>(&self) -> Result<&[T]> {
        self.column::<T>().map(|column| column.as_slice())
    }

    /// Mutable version of `get`. The shape of the value can not be changed through the returned slice
    pub fn get_mut<T: PrimitiveType>(&mut self) -> Result<&mut [T]> {
        let stored = self.data_type();
        T::column_of_mut(self)
            .map(|column| column.as_mut_slice())
            .ok_or(PointSetError::TypeMismatch {
                requested: T::data_type(),
                stored,
            })
    }

    /// Consumes this value and returns its buffer
    pub fn into_data(self) -> AttributeData {
        match self {
            AttributeValue::F64(column) => AttributeData::F64(column.into_inner()),
            AttributeValue::F32(column) => AttributeData::F32(column.into_inner()),
            AttributeValue::I32(column) => AttributeData::I32(column.into_inner()),
            AttributeValue::U32(column) => AttributeData::U32(column.into_inner()),
            AttributeValue::U16(column) => AttributeData::U16(column.into_inner()),
            AttributeValue::U8(column) => AttributeData::U8(column.into_inner()),
            AttributeValue::Bool(column) => AttributeData::Bool(column.into_inner()),
        }
    }
}
