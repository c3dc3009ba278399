#![allow(dead_code)]

pub fn try_init_logger_for_default_harness() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// Square image of side `1 << (exp % 4)` whose pixels cycle through `seed`.
///
/// Consecutive groups of four bytes become one pixel; `None` for an empty seed.
pub fn image_from_seed(seed: &[u8], exp: u8) -> Option<image::RgbaImage> {
	if seed.is_empty() {
		return None;
	}
	let size = 1u32 << (exp % 4);
	Some(image::RgbaImage::from_fn(size, size, |x, y| {
		let base = ((y * size + x) * 4) as usize;
		image::Rgba([
			seed[base % seed.len()],
			seed[(base + 1) % seed.len()],
			seed[(base + 2) % seed.len()],
			seed[(base + 3) % seed.len()],
		])
	}))
}
