pub type Color = image::Rgba<u8>;

/// Color returned for queries that fall outside of a tree.
pub const DEFAULT_COLOR: Color = image::Rgba([0; 4]);

/// Largest value `color_distance` can produce.
pub const MAX_DISTANCE: u32 = 3 * 255 * 255;

fn sum_channel(colors: &[Color; 4], channel: usize) -> u32 {
	colors.iter().map(|c| c.0[channel] as u32).sum()
}

/// Channel-wise average of four colors, truncating.
pub fn color_average(colors: &[Color; 4]) -> Color {
	image::Rgba::<u8>([
		(sum_channel(colors, 0) / 4) as u8,
		(sum_channel(colors, 1) / 4) as u8,
		(sum_channel(colors, 2) / 4) as u8,
		(sum_channel(colors, 3) / 4) as u8,
	])
}

/// Squared distance between two colors over red, green and blue.
///
/// Alpha does not take part in the distance, even though it is averaged
/// during construction.
pub fn color_distance(a: &Color, b: &Color) -> u32 {
	(0..3).map(|channel| {
		let d = a.0[channel] as i32 - b.0[channel] as i32;
		(d * d) as u32
	}).sum()
}
