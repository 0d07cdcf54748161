use rand::{seq::SliceRandom, Rng};

use crate::{
    containers::{AttributeData, PointSet},
    layout::{AttributeDataType, AttributeKey},
    util::identity_permutation,
};

/// Generates `count` random elements of the given `data_type`
pub(crate) fn random_attribute_data<R: Rng + ?Sized>(
    data_type: AttributeDataType,
    count: usize,
    rng: &mut R,
) -> AttributeData {
    match data_type {
        AttributeDataType::F64 => (0..count).map(|_| rng.gen::<f64>()).collect::<Vec<_>>().into(),
        AttributeDataType::F32 => (0..count).map(|_| rng.gen::<f32>()).collect::<Vec<_>>().into(),
        AttributeDataType::I32 => (0..count).map(|_| rng.gen::<i32>()).collect::<Vec<_>>().into(),
        AttributeDataType::U32 => (0..count).map(|_| rng.gen::<u32>()).collect::<Vec<_>>().into(),
        AttributeDataType::U16 => (0..count).map(|_| rng.gen::<u16>()).collect::<Vec<_>>().into(),
        AttributeDataType::U8 => (0..count).map(|_| rng.gen::<u8>()).collect::<Vec<_>>().into(),
        AttributeDataType::Bool => (0..count).map(|_| rng.gen::<bool>()).collect::<Vec<_>>().into(),
    }
}

/// Returns a random bijective permutation of `count` point indices
pub(crate) fn random_permutation<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<usize> {
    let mut permutation = identity_permutation(count);
    permutation.shuffle(rng);
    permutation
}

/// Creates a `PointSet` with `point_count` random 3D `f64` positions and one attribute of random type and
/// dimensionality for every `AttributeKey`
pub(crate) fn random_point_set<R: Rng + ?Sized>(point_count: usize, rng: &mut R) -> PointSet {
    const DATA_TYPES: [AttributeDataType; 7] = [
        AttributeDataType::F64,
        AttributeDataType::F32,
        AttributeDataType::I32,
        AttributeDataType::U32,
        AttributeDataType::U16,
        AttributeDataType::U8,
        AttributeDataType::Bool,
    ];

    let positions = random_attribute_data(AttributeDataType::F64, point_count * 3, rng);
    let mut points = PointSet::new(positions, 3).expect("random positions have a valid shape");
    for key in AttributeKey::ALL {
        let data_type = *DATA_TYPES.choose(rng).expect("DATA_TYPES is not empty");
        let dimensions = rng.gen_range(1..=4);
        let data = random_attribute_data(data_type, point_count * dimensions, rng);
        points
            .add_attribute(key, data, dimensions)
            .expect("random attribute has a valid shape");
    }
    points
}
