use super::color::{Color, DEFAULT_COLOR};
use super::section_offset;

impl super::QuadtreeNode {
	/// Returns the color shown at `(x, y)` by a node covering a `size` by
	/// `size` square, with coordinates relative to the node's top-left corner.
	///
	/// A node without sections answers for its whole square, whatever its
	/// size. Coordinates outside the square give the default color.
	pub fn get_pixel(&self, x: u32, y: u32, size: u32) -> Color {
		if x >= size || y >= size {
			return DEFAULT_COLOR;
		}
		match self.sections {
			Some(ref sects) if size > 1 => {
				let half = size / 2;
				let sect_ind = ((x >= half) as usize) | (((y >= half) as usize) << 1);
				let offset = section_offset(sect_ind, size);
				sects[sect_ind].get_pixel(x - offset.0, y - offset.1, half)
			},
			_ => self.color,
		}
	}

	/// Renders a `size` by `size` image in which every pixel is the result
	/// of `get_pixel` at the same coordinates.
	pub fn decompress(&self, size: u32) -> image::RgbaImage {
		image::RgbaImage::from_fn(size, size, |x, y| self.get_pixel(x, y, size))
	}
}
