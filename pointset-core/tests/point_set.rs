use std::collections::BTreeSet;

use anyhow::Result;
use pointset_core::{
    containers::{AttributeData, PointSet, PointSetOptions},
    error::PointSetError,
    layout::{AttributeDataType, AttributeKey},
    util::{identity_permutation, PermutationCheck},
};

fn default_positions() -> Vec<f64> {
    vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
}

#[test]
fn test_sort_all_attributes() -> Result<()> {
    let mut points = PointSet::new(default_positions(), 3)?;
    points.add_attribute(AttributeKey::Index, vec![1i32, 2, 3], 1)?;

    points.sort_attributes(&[2, 1, 0])?;

    assert_eq!(
        &[7.0, 8.0, 9.0, 4.0, 5.0, 6.0, 1.0, 2.0, 3.0],
        points.get_positions::<f64>()?
    );
    assert_eq!(
        &[3, 2, 1],
        points.get_attribute_data::<i32>(AttributeKey::Index)?
    );
    Ok(())
}

#[test]
fn test_positions_with_remainder_are_rejected() {
    let result = PointSet::new(vec![1.0f64, 2.0, 3.0], 2);
    assert!(matches!(result, Err(PointSetError::InvalidArgument(_))));
}

#[test]
fn test_identity_permutation_keeps_all_columns() -> Result<()> {
    let mut points = PointSet::new(default_positions(), 3)?;
    points.add_attribute(AttributeKey::Index, vec![1u32, 2, 3], 1)?;
    points.add_attribute(AttributeKey::Normal, vec![0.0f32, 0.0, 1.0, 0.0, 1.0, 0.0], 2)?;
    points.add_attribute(AttributeKey::Quality, vec![10u16, 20, 30], 1)?;
    points.add_attribute(AttributeKey::Visibility, vec![true, false, true], 1)?;
    let expected = points.clone();

    points.sort_attributes(&identity_permutation(points.point_count()))?;
    assert_eq!(expected, points);
    Ok(())
}

#[test]
fn test_mixed_attribute_types() -> Result<()> {
    let mut points = PointSet::new(vec![0u8, 1, 2, 3], 2)?;
    points.add_attribute(AttributeKey::Index, vec![7i32, 8], 1)?;
    points.add_attribute(AttributeKey::Normal, vec![0.0f64, 1.0, 0.0, 1.0, 0.0, 0.0], 3)?;
    points.add_attribute(AttributeKey::Quality, vec![0.25f32, 0.75], 1)?;
    points.add_attribute(AttributeKey::Visibility, vec![true, true, false, false], 2)?;

    assert_eq!(
        BTreeSet::from(AttributeKey::ALL),
        points.get_all_attribute_keys()
    );

    points.sort_attributes(&[1, 0])?;

    assert_eq!(&[2u8, 3, 0, 1], points.get_positions::<u8>()?);
    assert_eq!(&[8, 7], points.get_attribute_data::<i32>(AttributeKey::Index)?);
    assert_eq!(
        &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        points.get_attribute_data::<f64>(AttributeKey::Normal)?
    );
    assert_eq!(
        &[0.75f32, 0.25],
        points.get_attribute_data::<f32>(AttributeKey::Quality)?
    );
    assert_eq!(
        &[false, false, true, true],
        points.get_attribute_data::<bool>(AttributeKey::Visibility)?
    );
    assert_eq!(2, points.get_attribute_dimensions(AttributeKey::Visibility)?);
    Ok(())
}

#[test]
fn test_failed_operations_keep_point_set_usable() -> Result<()> {
    let mut points = PointSet::with_options(
        default_positions(),
        3,
        PointSetOptions::new().with_permutation_check(PermutationCheck::Strict),
    )?;
    points.add_attribute(AttributeKey::Index, vec![1i32, 2, 3], 1)?;
    let expected = points.clone();

    assert!(points
        .add_attribute(AttributeKey::Normal, vec![1.0f32, 0.0], 1)
        .is_err());
    assert!(points
        .swap_attribute_data(AttributeKey::Index, vec![1i32, 2])
        .is_err());
    assert!(points.sort_attributes(&[2, 2, 0]).is_err());
    assert!(points.sort_attributes(&[0, 1]).is_err());
    assert_eq!(expected, points);

    points.sort_attributes(&[1, 2, 0])?;
    assert_eq!(
        &[2, 3, 1],
        points.get_attribute_data::<i32>(AttributeKey::Index)?
    );
    Ok(())
}

#[test]
fn test_swap_returns_previous_data() -> Result<()> {
    let mut points = PointSet::new(default_positions(), 3)?;
    points.add_attribute(AttributeKey::Quality, vec![1u8, 1, 1], 1)?;

    let previous = points.swap_attribute_data(AttributeKey::Quality, vec![2u8, 3, 4])?;
    assert_eq!(AttributeData::U8(vec![1, 1, 1]), previous);
    assert_eq!(AttributeDataType::U8, previous.data_type());
    assert_eq!(
        &[2u8, 3, 4],
        points.get_attribute_data::<u8>(AttributeKey::Quality)?
    );
    Ok(())
}
