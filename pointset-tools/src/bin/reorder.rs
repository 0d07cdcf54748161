#![warn(clippy::all)]

use anyhow::{anyhow, Context, Result};
use clap::{App, Arg};
use float_ord::FloatOrd;
use log::{info, warn};
use pointset_core::{
    containers::{AttributeValue, PointSet, PointSetOptions},
    layout::AttributeKey,
    util::PermutationCheck,
};

const DEMO_POSITIONS: [f64; 9] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

struct Args {
    pub order: Option<Vec<usize>>,
    pub dimensions: usize,
    pub strict: bool,
    pub parallel: bool,
    pub sort_by_position: bool,
}

fn parse_order(order: &str) -> Result<Vec<usize>> {
    order
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<usize>()
                .with_context(|| format!("Invalid point index '{}' in order", entry))
        })
        .collect()
}

fn get_args() -> Result<Args> {
    let matches = App::new("pointset reorder")
        .version("0.1")
        .about("Builds a small point set, reorders it and prints the reordered positions and attributes")
        .arg(
            Arg::with_name("ORDER")
                .short("o")
                .long("order")
                .takes_value(true)
                .value_name("ORDER")
                .help("Comma-separated new order of the points, e.g. 2,1,0. Defaults to the reversed order"),
        )
        .arg(
            Arg::with_name("DIMENSIONS")
                .short("d")
                .long("dimensions")
                .takes_value(true)
                .value_name("DIMENSIONS")
                .default_value("3")
                .help("Number of position elements per point"),
        )
        .arg(
            Arg::with_name("STRICT")
                .short("s")
                .long("strict")
                .help("Reject orders that reference a point more than once"),
        )
        .arg(
            Arg::with_name("PARALLEL")
                .short("p")
                .long("parallel")
                .help("Reorder all attributes in parallel"),
        )
        .arg(
            Arg::with_name("SORT_BY_POSITION")
                .long("sort-by-position")
                .conflicts_with("ORDER")
                .help("Sort points descending by the first position element instead of using an explicit order"),
        )
        .get_matches();

    let order = matches.value_of("ORDER").map(parse_order).transpose()?;
    let dimensions = matches
        .value_of("DIMENSIONS")
        .ok_or_else(|| anyhow!("Missing number of dimensions"))?
        .parse::<usize>()
        .context("Number of dimensions must be a non-negative integer")?;

    Ok(Args {
        order,
        dimensions,
        strict: matches.is_present("STRICT"),
        parallel: matches.is_present("PARALLEL"),
        sort_by_position: matches.is_present("SORT_BY_POSITION"),
    })
}

fn build_demo_points(args: &Args) -> Result<PointSet> {
    let check = if args.strict {
        PermutationCheck::Strict
    } else {
        PermutationCheck::Bounds
    };
    let mut points = PointSet::with_options(
        DEMO_POSITIONS.to_vec(),
        args.dimensions,
        PointSetOptions::new().with_permutation_check(check),
    )?;
    let indices = (1..=points.point_count() as i32).collect::<Vec<_>>();
    points.add_attribute(AttributeKey::Index, indices, 1)?;
    info!(
        "Created point set with {} points and {} attribute(s)",
        points.point_count(),
        points.attribute_count()
    );
    Ok(points)
}

fn format_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::F64(column) => format!("{:?}", column.as_slice()),
        AttributeValue::F32(column) => format!("{:?}", column.as_slice()),
        AttributeValue::I32(column) => format!("{:?}", column.as_slice()),
        AttributeValue::U32(column) => format!("{:?}", column.as_slice()),
        AttributeValue::U16(column) => format!("{:?}", column.as_slice()),
        AttributeValue::U8(column) => format!("{:?}", column.as_slice()),
        AttributeValue::Bool(column) => format!("{:?}", column.as_slice()),
    }
}

fn print_points(points: &PointSet) {
    println!(
        "Positions ({} per point): {}",
        points.position_dimensions(),
        format_value(points.positions())
    );
    for key in points.get_all_attribute_keys() {
        if let Some(value) = points.get_attribute(key) {
            println!(
                "{} ({} per point): {}",
                key,
                value.dimensions(),
                format_value(value)
            );
        }
    }
}

fn reorder(points: &mut PointSet, args: &Args) -> Result<()> {
    if args.sort_by_position {
        let mut positions = points
            .get_positions::<f64>()?
            .chunks_exact(points.position_dimensions())
            .enumerate()
            .map(|(index, position)| (index, position[0]))
            .collect::<Vec<_>>();
        positions.sort_by(|(_, a), (_, b)| FloatOrd(*b).cmp(&FloatOrd(*a)));
        let order = positions
            .into_iter()
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        info!("Sorting by first position element, order {:?}", order);
        return apply_order(points, &order, args.parallel);
    }

    let order = args
        .order
        .clone()
        .unwrap_or_else(|| (0..points.point_count()).rev().collect());
    info!("Reordering points with order {:?}", order);
    apply_order(points, &order, args.parallel)
}

fn apply_order(points: &mut PointSet, order: &[usize], parallel: bool) -> Result<()> {
    let result = if parallel {
        points.par_sort_attributes(order)
    } else {
        points.sort_attributes(order)
    };
    if let Err(why) = &result {
        warn!("Order {:?} was rejected: {}", order, why);
    }
    result.map_err(|e| e.into())
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = get_args()?;
    let mut points = build_demo_points(&args)?;

    println!("Before:");
    print_points(&points);

    reorder(&mut points, &args)?;

    println!("After:");
    print_points(&points);

    Ok(())
}
