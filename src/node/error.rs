/// Reason why an image couldn't be turned into a quadtree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuadtreeError {
	/// A tree must cover at least one pixel.
	#[error("resolution must be at least 1")]
	ZeroResolution,
	/// The requested resolution is not a power of two.
	#[error("resolution {0} is not a power of two")]
	NonPowerOfTwo(u32),
	/// The requested square does not fit inside the source image.
	#[error("resolution {resolution} exceeds source image of {width}x{height}")]
	ExceedsSource {
		resolution: u32,
		width: u32,
		height: u32,
	},
}
