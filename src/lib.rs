//! A fixed-depth quad-subdivision spatial index over axis-aligned
//! rectangles, generic over the coordinate and element types.

mod coordinate;
mod error;
mod qnode;
mod quadtree;
mod rect;
mod region_index;

pub use coordinate::Coordinate;
pub use error::Error;
pub use qnode::QNode;
pub use quadtree::{QuadTree, Quadrant};
pub use rect::Rect;
pub use region_index::RegionIndex;
