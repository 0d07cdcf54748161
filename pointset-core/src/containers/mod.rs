//! Containers for storing point data in columnar memory layout.
//!
//! The central type is [`PointSet`], which stores the positions of a fixed number of points together with
//! any number of attributes. Each attribute is identified by an [`AttributeKey`](crate::layout::AttributeKey)
//! and stored as an [`AttributeValue`], a type-tagged [`TypedColumn`]. Data enters and leaves a `PointSet`
//! as [`AttributeData`], an owned buffer of one of the supported element types.
//!
//! # Typed access
//!
//! Since the element type of an attribute is only known at runtime, all typed accessors (`get_positions`,
//! `get_attribute_data` etc.) take the expected element type as a type parameter and check it against the
//! stored type. A mismatch is reported as [`PointSetError::TypeMismatch`](crate::error::PointSetError),
//! never as a reinterpretation of the stored memory.
//!
//! # Reordering
//!
//! [`PointSet::sort_attributes`] applies one permutation to the positions and all attributes, using the
//! number of elements per point of each column, so all columns stay consistent with each other.

mod typed_column;
pub use self::typed_column::*;

mod attribute_value;
pub use self::attribute_value::*;

mod point_set;
pub use self::point_set::*;
