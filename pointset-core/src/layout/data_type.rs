use std::fmt::{Debug, Display};

use static_assertions::const_assert;

use crate::containers::{AttributeData, AttributeValue, TypedColumn};

/// Possible element types for the data of a single attribute (or the positions) of a point set
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AttributeDataType {
    F64,
    F32,
    I32,
    U32,
    U16,
    U8,
    Bool,
}

impl AttributeDataType {
    /// Returns the size in bytes of a single element of this type
    /// ```
    /// # use pointset_core::layout::*;
    /// assert_eq!(8, AttributeDataType::F64.size());
    /// assert_eq!(1, AttributeDataType::Bool.size());
    /// ```
    pub fn size(&self) -> usize {
        match self {
            AttributeDataType::F64 => 8,
            AttributeDataType::F32 => 4,
            AttributeDataType::I32 => 4,
            AttributeDataType::U32 => 4,
            AttributeDataType::U16 => 2,
            AttributeDataType::U8 => 1,
            AttributeDataType::Bool => 1,
        }
    }

    /// Returns the name of the Rust type that corresponds to this data type
    pub fn name(&self) -> &'static str {
        match self {
            AttributeDataType::F64 => "f64",
            AttributeDataType::F32 => "f32",
            AttributeDataType::I32 => "i32",
            AttributeDataType::U32 => "u32",
            AttributeDataType::U16 => "u16",
            AttributeDataType::U8 => "u8",
            AttributeDataType::Bool => "bool",
        }
    }
}

impl Display for AttributeDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

const_assert!(std::mem::size_of::<bool>() == 1);

mod private {
    pub trait Sealed {}
}

/// Trait for all element types that can be stored in a point set. It is sealed and implemented for
/// exactly the types that [`AttributeDataType`] can describe, which is what makes typed access into
/// an [`AttributeValue`] a checked operation instead of a cast.
pub trait PrimitiveType: Copy + Debug + PartialEq + Send + Sync + 'static + private::Sealed {
    /// Returns the corresponding `AttributeDataType` of this type
    /// ```
    /// # use pointset_core::layout::*;
    /// assert_eq!(AttributeDataType::U16, u16::data_type());
    /// ```
    fn data_type() -> AttributeDataType;
    /// Returns the column of `value` if `value` stores elements of this type
    fn column_of(value: &AttributeValue) -> Option<&TypedColumn<Self>>;
    /// Mutable version of `column_of`
    fn column_of_mut(value: &mut AttributeValue) -> Option<&mut TypedColumn<Self>>;
    /// Returns the buffer in `data` if it stores elements of this type
    fn slice_of(data: &AttributeData) -> Option<&[Self]>;
    /// Unwraps the buffer in `data` if it stores elements of this type, otherwise gives `data` back
    fn unwrap_data(data: AttributeData) -> Result<Vec<Self>, AttributeData>;
}

macro_rules! impl_primitive_type {
    ($type:ty, $variant:ident) => {
        impl private::Sealed for $type {}

        impl PrimitiveType for $type {
            fn data_type() -> AttributeDataType {
                AttributeDataType::$variant
            }

            fn column_of(value: &AttributeValue) -> Option<&TypedColumn<Self>> {
                match value {
                    AttributeValue::$variant(column) => Some(column),
                    _ => None,
                }
            }

            fn column_of_mut(value: &mut AttributeValue) -> Option<&mut TypedColumn<Self>> {
                match value {
                    AttributeValue::$variant(column) => Some(column),
                    _ => None,
                }
            }

            fn slice_of(data: &AttributeData) -> Option<&[Self]> {
                match data {
                    AttributeData::$variant(buffer) => Some(buffer.as_slice()),
                    _ => None,
                }
            }

            fn unwrap_data(data: AttributeData) -> Result<Vec<Self>, AttributeData> {
                match data {
                    AttributeData::$variant(buffer) => Ok(buffer),
                    other => Err(other),
                }
            }
        }

        impl From<Vec<$type>> for AttributeData {
            fn from(buffer: Vec<$type>) -> Self {
                AttributeData::$variant(buffer)
            }
        }

        impl From<&[$type]> for AttributeData {
            fn from(buffer: &[$type]) -> Self {
                AttributeData::$variant(buffer.to_vec())
            }
        }
    };
}

impl_primitive_type! {f64, F64}
impl_primitive_type! {f32, F32}
impl_primitive_type! {i32, I32}
impl_primitive_type! {u32, U32}
impl_primitive_type! {u16, U16}
impl_primitive_type! {u8, U8}
impl_primitive_type! {bool, Bool}
