use quadtree_prune::Quadtree;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

mod common;

fn tree_from_seed(seed: &[u8], exp: u8) -> Option<(image::RgbaImage, Quadtree)> {
	common::try_init_logger_for_default_harness();
	let img = common::image_from_seed(seed, exp)?;
	let tree = Quadtree::from_image(&img, img.width()).ok()?;
	Some((img, tree))
}

#[quickcheck]
fn decompress_round_trips(seed: Vec<u8>, exp: u8) -> TestResult {
	let (img, tree) = match tree_from_seed(&seed, exp) {
		Some(x) => x,
		None => return TestResult::discard(),
	};
	TestResult::from_bool(tree.decompress() == img)
}

#[quickcheck]
fn decompress_agrees_with_get_pixel(seed: Vec<u8>, exp: u8, tolerance: u32) -> TestResult {
	let (_, mut tree) = match tree_from_seed(&seed, exp) {
		Some(x) => x,
		None => return TestResult::discard(),
	};
	tree.prune(tolerance % 20_000);
	let out = tree.decompress();
	for (x, y, pixel) in out.enumerate_pixels() {
		if *pixel != tree.get_pixel(x, y) {
			return TestResult::error(format!("mismatch at ({}, {})", x, y));
		}
	}
	TestResult::passed()
}

#[quickcheck]
fn prune_size_is_monotonic(seed: Vec<u8>, exp: u8, a: u32, b: u32) -> TestResult {
	let (_, tree) = match tree_from_seed(&seed, exp) {
		Some(x) => x,
		None => return TestResult::discard(),
	};
	let (a, b) = (a % 200_000, b % 200_000);
	let (t1, t2) = if a <= b { (a, b) } else { (b, a) };
	TestResult::from_bool(tree.prune_size(t1) >= tree.prune_size(t2))
}

#[quickcheck]
fn repruning_never_adds_leaves(seed: Vec<u8>, exp: u8, tolerance: u32) -> TestResult {
	let (_, mut tree) = match tree_from_seed(&seed, exp) {
		Some(x) => x,
		None => return TestResult::discard(),
	};
	let tolerance = tolerance % 20_000;
	tree.prune(tolerance);
	let once = tree.leaf_count();
	tree.prune(tolerance);
	TestResult::from_bool(tree.leaf_count() <= once)
}

#[quickcheck]
fn prune_at_zero_is_idempotent(seed: Vec<u8>, exp: u8) -> TestResult {
	let (_, mut tree) = match tree_from_seed(&seed, exp) {
		Some(x) => x,
		None => return TestResult::discard(),
	};
	tree.prune(0);
	let once = tree.clone();
	tree.prune(0);
	TestResult::from_bool(tree == once)
}

#[quickcheck]
fn prune_size_predicts_prune(seed: Vec<u8>, exp: u8, tolerance: u32) -> TestResult {
	let (_, mut tree) = match tree_from_seed(&seed, exp) {
		Some(x) => x,
		None => return TestResult::discard(),
	};
	let tolerance = tolerance % 20_000;
	let predicted = tree.prune_size(tolerance);
	tree.prune(tolerance);
	TestResult::from_bool(tree.leaf_count() == predicted)
}

#[quickcheck]
fn four_rotations_are_identity(seed: Vec<u8>, exp: u8) -> TestResult {
	let (img, mut tree) = match tree_from_seed(&seed, exp) {
		Some(x) => x,
		None => return TestResult::discard(),
	};
	let original = tree.clone();
	for _ in 0..4 {
		tree.rotate_clockwise();
	}
	TestResult::from_bool(tree == original && tree.decompress() == img)
}

#[quickcheck]
fn rotation_matches_pixel_rotation(seed: Vec<u8>, exp: u8) -> TestResult {
	let (img, mut tree) = match tree_from_seed(&seed, exp) {
		Some(x) => x,
		None => return TestResult::discard(),
	};
	tree.rotate_clockwise();
	TestResult::from_bool(tree.decompress() == image::imageops::rotate90(&img))
}

#[quickcheck]
fn ideal_prune_is_minimal(seed: Vec<u8>, exp: u8, num_leaves: u8) -> TestResult {
	let (_, tree) = match tree_from_seed(&seed, exp) {
		Some(x) => x,
		None => return TestResult::discard(),
	};
	let num_leaves = num_leaves as usize % 70 + 1;
	let t = match tree.ideal_prune(num_leaves) {
		Some(t) => t,
		None => return TestResult::error("no tolerance found for a positive leaf count"),
	};
	if tree.prune_size(t) > num_leaves {
		return TestResult::error(format!("tolerance {} leaves too many leaves", t));
	}
	if t > 0 && tree.prune_size(t - 1) <= num_leaves {
		return TestResult::error(format!("tolerance {} is not minimal", t));
	}
	TestResult::passed()
}
