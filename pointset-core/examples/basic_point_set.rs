use pointset_core::{
    containers::PointSet,
    error::PointSetError,
    layout::AttributeKey,
};

fn main() -> Result<(), PointSetError> {
    // Three points with 3D positions. The number of points is derived from the positions and fixed from now on
    let mut points = PointSet::new(vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0], 3)?;
    println!("Created a point set with {} points", points.point_count());

    // Attributes can have any of the supported element types and any number of elements per point, as long
    // as they provide data for exactly as many points as there are positions
    points.add_attribute(AttributeKey::Index, vec![1i32, 2, 3], 1)?;
    points.add_attribute(
        AttributeKey::Normal,
        vec![0.0f32, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0],
        3,
    )?;

    // Data for the wrong number of points is rejected and leaves the point set untouched
    if let Err(why) = points.add_attribute(AttributeKey::Quality, vec![0.5f32, 0.5], 1) {
        println!("Could not add qualities: {}", why);
    }

    // Typed access checks the element type
    if let Err(why) = points.get_attribute_data::<f64>(AttributeKey::Index) {
        println!("Could not read indices as f64: {}", why);
    }

    // Reverse the order of all points. Positions and all attributes are reordered together
    points.sort_attributes(&[2, 1, 0])?;

    for position in points.get_positions_3d::<f64>()? {
        println!("Position: {}", position.transpose());
    }
    println!(
        "Indices: {:?}",
        points.get_attribute_data::<i32>(AttributeKey::Index)?
    );
    println!(
        "Normals: {:?}",
        points.get_attribute_data::<f32>(AttributeKey::Normal)?
    );

    Ok(())
}
