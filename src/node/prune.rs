use super::color::{color_distance, Color};

impl super::QuadtreeNode {
	/// Whether every leaf under this node lies within `tolerance` of `reference`.
	fn leaves_within(&self, reference: &Color, tolerance: u32) -> bool {
		match self.sections {
			Some(ref sects) => sects.iter().all(|s| s.leaves_within(reference, tolerance)),
			None => color_distance(&self.color, reference) <= tolerance,
		}
	}

	/// Whether this node's color can stand in for every leaf below it.
	pub fn prunable(&self, tolerance: u32) -> bool {
		self.leaves_within(&self.color, tolerance)
	}

	/// Drops the sections of every node whose color is within `tolerance`
	/// of all of its leaves, checking parents before their sections.
	///
	/// Returns the number of nodes that were turned into leaves.
	pub fn prune(&mut self, tolerance: u32) -> usize {
		if self.sections.is_none() {
			return 0;
		}
		if self.prunable(tolerance) {
			self.sections = None;
			return 1;
		}
		match self.sections {
			Some(ref mut sects) => sects.iter_mut().map(|s| s.prune(tolerance)).sum(),
			None => 0,
		}
	}

	/// Number of leaves this subtree would have after `prune(tolerance)`.
	pub fn prune_size(&self, tolerance: u32) -> usize {
		match self.sections {
			Some(ref sects) if !self.prunable(tolerance) => {
				sects.iter().map(|s| s.prune_size(tolerance)).sum()
			},
			_ => 1,
		}
	}
}
