pub mod color;
pub mod error;

pub use color::Color;

/// Index of the northwest section.
pub const NW: usize = 0;
/// Index of the northeast section.
pub const NE: usize = 1;
/// Index of the southwest section.
pub const SW: usize = 2;
/// Index of the southeast section.
pub const SE: usize = 3;

/// Node in a quadtree for storing an image.
///
/// May contain four subnodes (branch node) or no subnodes and just a color
/// (leaf node). Sections are ordered northwest, northeast, southwest,
/// southeast.
///
/// It must always contain a color: a leaf carries its source pixel, a branch
/// the average of its four sections' colors. After pruning, a leaf may stand
/// in for a region wider than a single pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadtreeNode {
	pub color: Color,
	pub sections: Option<Box<[QuadtreeNode; 4]>>,
}

impl Default for QuadtreeNode {
	fn default() -> Self {
		Self::leaf(color::DEFAULT_COLOR)
	}
}

/// Offset of section `sect_ind` inside a square of side `size`.
pub(crate) fn section_offset(sect_ind: usize, size: u32) -> (u32, u32) {
	((sect_ind as u32 & 1) * (size / 2), (sect_ind as u32 >> 1) * (size / 2))
}

impl QuadtreeNode {
	/// Creates a leaf node of the given color.
	pub fn leaf(color: Color) -> Self {
		Self { color, sections: None }
	}

	/// Builds the node covering the `size` by `size` square of `source`
	/// whose top-left corner is at `start_pos`.
	///
	/// `size` must be a power of two and the square must lie inside
	/// `source`; the caller is responsible for checking that.
	///
	/// Branch colors are averages of their sections' colors, so a node
	/// high up the tree holds an average of averages rather than the flat
	/// average of every pixel below it.
	pub fn mount<I>(&mut self, source: &I, size: u32, start_pos: (u32, u32))
	where
		I: image::GenericImageView<Pixel = Color>,
	{
		if size <= 1 {
			self.color = source.get_pixel(start_pos.0, start_pos.1);
			self.sections = None;
			return;
		}
		// Recursion
		let mut sections: Box<[QuadtreeNode; 4]> = Default::default();
		for (sect_ind, section) in sections.iter_mut().enumerate() {
			let offset = section_offset(sect_ind, size);
			section.mount(
				source,
				size / 2,
				(start_pos.0 + offset.0, start_pos.1 + offset.1),
			);
		}
		self.color = color::color_average(&[
			sections[NW].color,
			sections[NE].color,
			sections[SW].color,
			sections[SE].color,
		]);
		self.sections = Some(sections);
	}

	/// Whether this node has no sections.
	pub fn is_leaf(&self) -> bool {
		self.sections.is_none()
	}

	/// Number of leaf nodes in this subtree.
	pub fn leaf_count(&self) -> usize {
		match self.sections {
			Some(ref sects) => sects.iter().map(QuadtreeNode::leaf_count).sum(),
			None => 1,
		}
	}

	/// Length of the longest path from this node down to a leaf.
	pub fn height(&self) -> u32 {
		match self.sections {
			Some(ref sects) => 1 + sects.iter().map(QuadtreeNode::height).max().unwrap_or(0),
			None => 0,
		}
	}
}

pub mod query;
pub mod prune;
pub mod rotate;
