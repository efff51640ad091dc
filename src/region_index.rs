use crate::{Coordinate, Rect};

/// Common contract of region-bound element stores: a fixed bounding region,
/// containment-checked insertion and the two query flavors.
///
/// Implemented by [`QNode`](crate::QNode) (a single flat region) and
/// [`QuadTree`](crate::QuadTree) (a region subdivided to a fixed depth).
pub trait RegionIndex<T, C: Coordinate> {
    /// The fixed region covered by this index.
    fn bounds(&self) -> Rect<C>;

    /// Number of stored elements, descendants included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every stored element. The region is unchanged.
    fn clear(&mut self);

    /// Stores `element` if `bounds` fits inside the region; returns whether
    /// it was stored. A failed insert leaves the index untouched.
    fn insert(&mut self, element: T, bounds: Rect<C>) -> bool;

    /// Appends references to every stored element to `out`.
    /// `out` is never cleared first.
    fn query_all<'a>(&'a self, out: &mut Vec<&'a T>);

    /// Appends references to every stored element whose bounds overlap
    /// `area` to `out`. `out` is never cleared first.
    fn query_area<'a>(&'a self, area: &Rect<C>, out: &mut Vec<&'a T>);
}
