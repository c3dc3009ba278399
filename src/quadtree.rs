use crate::node::color::{Color, DEFAULT_COLOR, MAX_DISTANCE};
use crate::node::error::QuadtreeError;
use crate::node::QuadtreeNode;

/// An image quadtree together with the side length of the square it covers.
///
/// An empty tree (the `Default`) has no root and a resolution of 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Quadtree {
	root: Option<QuadtreeNode>,
	resolution: u32,
}

impl Quadtree {
	/// Creates an empty tree.
	pub fn new() -> Self {
		Default::default()
	}

	/// Creates a tree representing the `resolution` by `resolution` block in
	/// the upper-left corner of `source`.
	pub fn from_image<I>(source: &I, resolution: u32) -> Result<Self, QuadtreeError>
	where
		I: image::GenericImageView<Pixel = Color>,
	{
		let mut tree = Self::new();
		tree.build(source, resolution)?;
		Ok(tree)
	}

	/// Replaces the contents of this tree with the `resolution` by
	/// `resolution` block in the upper-left corner of `source`.
	///
	/// `resolution` must be a power of two no larger than either dimension
	/// of `source`. On error the tree is left as it was.
	pub fn build<I>(&mut self, source: &I, resolution: u32) -> Result<(), QuadtreeError>
	where
		I: image::GenericImageView<Pixel = Color>,
	{
		// Validate resolution
		if resolution == 0 {
			return Err(QuadtreeError::ZeroResolution);
		}
		if !resolution.is_power_of_two() {
			return Err(QuadtreeError::NonPowerOfTwo(resolution));
		}
		let (width, height) = source.dimensions();
		if resolution > width || resolution > height {
			return Err(QuadtreeError::ExceedsSource { resolution, width, height });
		}

		let mut root = QuadtreeNode::default();
		root.mount(source, resolution, (0, 0));
		log::debug!("built {0}x{0} quadtree with root color {1:?}", resolution, root.color.0);
		self.root = Some(root);
		self.resolution = resolution;
		Ok(())
	}

	/// Side length of the square this tree covers.
	pub fn resolution(&self) -> u32 {
		self.resolution
	}

	pub fn root(&self) -> Option<&QuadtreeNode> {
		self.root.as_ref()
	}

	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Number of leaves currently in the tree.
	pub fn leaf_count(&self) -> usize {
		self.root.as_ref().map_or(0, QuadtreeNode::leaf_count)
	}

	/// Height of the tree; `None` for an empty tree.
	pub fn height(&self) -> Option<u32> {
		self.root.as_ref().map(QuadtreeNode::height)
	}

	/// Color the decompressed image shows at `(x, y)`.
	///
	/// Out of bounds coordinates and empty trees give `Rgba([0, 0, 0, 0])`.
	pub fn get_pixel(&self, x: u32, y: u32) -> Color {
		match self.root {
			Some(ref root) => root.get_pixel(x, y, self.resolution),
			None => DEFAULT_COLOR,
		}
	}

	/// Renders the tree into a `resolution` by `resolution` image.
	pub fn decompress(&self) -> image::RgbaImage {
		image::RgbaImage::from_fn(self.resolution, self.resolution, |x, y| self.get_pixel(x, y))
	}

	/// Rotates the represented image 90 degrees clockwise in place.
	pub fn rotate_clockwise(&mut self) {
		if let Some(ref mut root) = self.root {
			root.rotate_clockwise();
		}
	}

	/// Replaces every subtree whose leaves all lie within `tolerance` of the
	/// subtree's own color with a single leaf of that color.
	///
	/// Nodes are checked top-down, so the first qualifying ancestor wins.
	pub fn prune(&mut self, tolerance: u32) {
		if let Some(ref mut root) = self.root {
			let collapsed = root.prune(tolerance);
			log::debug!(
				"pruned {} subtrees at tolerance {}, {} leaves remain",
				collapsed, tolerance, root.leaf_count()
			);
		}
	}

	/// Number of leaves the tree would have after `prune(tolerance)`.
	pub fn prune_size(&self, tolerance: u32) -> usize {
		self.root.as_ref().map_or(0, |root| root.prune_size(tolerance))
	}

	/// Finds the smallest tolerance for which pruning leaves at most
	/// `num_leaves` leaves.
	///
	/// Every color distance lies in `[0, 3 * 255^2]`, so that range is
	/// searched. Returns `None` if no tolerance in it is enough, which only
	/// happens for `num_leaves == 0` on a non-empty tree.
	pub fn ideal_prune(&self, num_leaves: usize) -> Option<u32> {
		if self.prune_size(MAX_DISTANCE) > num_leaves {
			return None;
		}
		// Leftmost tolerance in [low, high] whose prune size fits
		let (mut low, mut high) = (0, MAX_DISTANCE);
		while low < high {
			let mid = low + (high - low) / 2;
			let size = self.prune_size(mid);
			log::trace!("tolerance {} gives {} leaves", mid, size);
			if size <= num_leaves {
				high = mid;
			} else {
				low = mid + 1;
			}
		}
		Some(low)
	}
}
