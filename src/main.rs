use image::error::ImageError;

use quadtree_prune::Quadtree;
use quadtree_prune::error::QuadtreeError;

/// Helper function for `main`.
fn error_exit(msg: &str, code: i32) -> ! {
	eprintln!("{}", msg);
	std::process::exit(code)
}

/// Largest power of two that fits in both dimensions.
fn largest_resolution(width: u32, height: u32) -> u32 {
	let side = std::cmp::min(width, height);
	if side == 0 { 0 } else { 1 << (31 - side.leading_zeros()) }
}

/// Parses an optional numeric argument, exiting on garbage.
fn numeric_arg<T: std::str::FromStr>(matches: &clap::ArgMatches, name: &str) -> Option<T> {
	matches.value_of(name).map(|v| match v.parse() {
		Ok(n) => n,
		Err(_) => error_exit(&format!("Non-numeric value for {}", name), 2)
	})
}

/// `clap`-based CLI for building, rotating and pruning image quadtrees.
///
/// May exit process with status code if there are errors:
///
/// 1: `clap` error
///
/// 2: invalid arguments
///
/// 3: file I/O issues
///
/// 4: invalid image data
///
/// 5: computation limits exceeded
///
/// 10: other, potentially unknown error
fn main() {
	env_logger::init();

	let clap_matches = clap::App::new("quadtree_prune")
		.version(env!("CARGO_PKG_VERSION"))
		.author("vkcz")
		.about("Lossily simplifies a square image through a prunable quadtree.")
		.arg_from_usage("-r, --resolution=[N] 'Side of the upper-left square to use; must be a power of two; defaults to the largest that fits'")
		.arg_from_usage("-t, --tolerance=[N] 'Prune subtrees whose leaves are all within this squared RGB distance of their average'")
		.arg_from_usage("-l, --leaves=[N] 'Prune with the smallest tolerance leaving at most N leaves'")
		.arg_from_usage("-c, --rotate=[N] 'Number of clockwise quarter turns to apply; defaults to 0'")
		.arg_from_usage("<INPUT> 'Path to input image'")
		.arg_from_usage("[OUTPUT] 'Path to output PNG; defaults to INPUT with a modified file extension'")
		.get_matches();

	if clap_matches.is_present("tolerance") && clap_matches.is_present("leaves") {
		error_exit("Only one of -t/--tolerance and -l/--leaves may be present", 2);
	}

	let input_path = match clap_matches.value_of("INPUT") {
		Some(p) => p,
		None => error_exit("Missing input path", 2)
	};
	let source = match image::open(input_path) {
		Ok(i) => i,
		Err(e) => {
			let (msg, code) = match e {
				ImageError::Decoding(_) => ("Invalid image data", 4),
				ImageError::Limits(_) => ("Computation limits exceeded", 5),
				ImageError::IoError(_) => ("File not found or could not be read", 3),
				_ => ("An error occurred", 10)
			};
			error_exit(msg, code)
		}
	}.into_rgba();

	let resolution = numeric_arg(&clap_matches, "resolution")
		.unwrap_or_else(|| largest_resolution(source.width(), source.height()));
	let mut tree = match Quadtree::from_image(&source, resolution) {
		Ok(t) => t,
		Err(e) => {
			let code = match e {
				QuadtreeError::ZeroResolution => 4,
				QuadtreeError::NonPowerOfTwo(_) |
				QuadtreeError::ExceedsSource { .. } => 2,
			};
			error_exit(&e.to_string(), code)
		}
	};
	log::info!("{} leaves before pruning", tree.leaf_count());

	let rotations = numeric_arg::<u32>(&clap_matches, "rotate").unwrap_or(0);
	for _ in 0..rotations % 4 {
		tree.rotate_clockwise();
	}

	let tolerance = match numeric_arg::<usize>(&clap_matches, "leaves") {
		Some(leaves) => match tree.ideal_prune(leaves) {
			Some(t) => {
				log::info!("ideal tolerance for {} leaves is {}", leaves, t);
				Some(t)
			},
			None => error_exit("No tolerance prunes the tree to that few leaves", 2)
		},
		None => numeric_arg::<u32>(&clap_matches, "tolerance")
	};
	if let Some(t) = tolerance {
		tree.prune(t);
		log::info!("{} leaves after pruning", tree.leaf_count());
	}

	let default_output = input_path.rsplitn(2, '.').last().unwrap_or(input_path).to_string() + ".out.png";
	match tree.decompress().save(clap_matches.value_of("OUTPUT").unwrap_or(&default_output)) {
		Ok(_) => (),
		Err(_) => error_exit("Could not save output", 3)
	}
}
