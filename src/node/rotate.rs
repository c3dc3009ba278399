use super::{NE, NW, SE, SW};

impl super::QuadtreeNode {
	/// Turns this subtree a quarter turn clockwise by moving every section
	/// one position clockwise, all the way down.
	///
	/// Colors are left untouched; an average does not depend on where its
	/// inputs sit.
	pub fn rotate_clockwise(&mut self) {
		if let Some(ref mut sects) = self.sections {
			// [NW, NE, SW, SE] <- [SW, NW, SE, NE]
			let [nw, ne, sw, se] = std::mem::take(&mut **sects);
			sects[NW] = sw;
			sects[NE] = nw;
			sects[SW] = se;
			sects[SE] = ne;
			sects.iter_mut().for_each(|s| s.rotate_clockwise());
		}
	}
}
