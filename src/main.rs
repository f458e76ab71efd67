use std::env;

use vector2::{aggregate, parse_vector2, Vector2, DEFAULT_TOLERANCE};

fn describe(vector: Vector2) {
	println!("Vector: {vector}");
	println!("  magnitude:               {}", vector.magnitude());
	println!("  normalized:              {}", vector.normalize());
	println!("  signed angle:            {}°", vector.signed_angle_degrees());
	println!("  clockwise angle from up: {}°", vector.clockwise_angle_from_up());
	println!("  perpendicular:           {}", vector.perpendicular());

	let neighbors: Vec<String> = vector.surrounding().iter().map(Vector2::to_string).collect();
	println!("  lattice neighbors:       {}", neighbors.join(" "));
}

fn main() {
	env_logger::init();

	let mut args = env::args();
	let program = args.next().unwrap_or_else(|| "vector2".to_owned());
	if args.len() == 0 {
		println!("Usage: {program} <vectors ...>");
		println!("Each vector is written [x; y], e.g. \"[3; -4.5]\".");
		return;
	}

	let mut vectors = Vec::new();
	for (i, arg) in args.enumerate() {
		log::debug!("Parsing argument {i}: {arg:?}");
		match parse_vector2(format!("argument {}", i + 1), &arg) {
			Ok(vector) => {
				describe(vector);
				vectors.push(vector);
			}
			Err(err) => {
				log::error!("\n{:?}", miette::Report::new(err));
			}
		}
	}

	if vectors.is_empty() {
		log::warn!("No vector could be parsed");
		return;
	}

	println!();
	println!("Sum:   {}", aggregate::sum(&vectors));
	if let (Some(min), Some(max), Some(range)) = (
		aggregate::min(&vectors),
		aggregate::max(&vectors),
		aggregate::range_dimensionally(&vectors),
	) {
		println!("Min:   {min}");
		println!("Max:   {max}");
		println!("Range: {range}");
	}
	println!(
		"Consecutively parallel: {}",
		aggregate::are_parallel(&vectors, DEFAULT_TOLERANCE)
	);
}
