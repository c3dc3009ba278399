pub mod node;
pub mod quadtree;

pub use node::*;
pub use quadtree::Quadtree;
