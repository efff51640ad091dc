use crate::{Coordinate, Rect, RegionIndex};

/// A node covering a fixed rectangular region, owning the elements whose
/// bounds fit that region.
///
/// Each entry keeps the element next to its bounds so area queries can
/// filter without touching the element itself.
#[derive(Clone, Debug)]
pub struct QNode<T, C: Coordinate> {
    bounds: Rect<C>,
    elements: Vec<(T, Rect<C>)>,
}

impl<T, C: Coordinate> QNode<T, C> {
    pub fn new(bounds: Rect<C>) -> Self {
        QNode {
            bounds,
            elements: Vec::new(),
        }
    }

    /// The node's fixed region.
    pub fn bounds(&self) -> Rect<C> {
        self.bounds
    }

    /// True only if `rect` fits inside this node's region.
    pub fn contains(&self, rect: &Rect<C>) -> bool {
        self.bounds.contains(rect)
    }

    /// True only if this node's region fits inside `rect`.
    pub fn is_inside(&self, rect: &Rect<C>) -> bool {
        rect.contains(&self.bounds)
    }

    /// True only if this node's region overlaps `rect`.
    pub fn overlaps(&self, rect: &Rect<C>) -> bool {
        self.bounds.overlaps(rect)
    }

    /// Number of elements owned directly by this node.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes all directly-owned elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Stores `element` if `bounds` fits inside this node's region; returns
    /// whether it was stored.
    pub fn insert(&mut self, element: T, bounds: Rect<C>) -> bool {
        if !self.contains(&bounds) {
            return false;
        }

        self.elements.push((element, bounds));
        true
    }

    /// Appends references to all directly-owned elements to `out`.
    pub fn query_all<'a>(&'a self, out: &mut Vec<&'a T>) {
        for (element, _bounds) in &self.elements {
            out.push(element);
        }
    }

    /// Appends references to the directly-owned elements whose bounds
    /// overlap `area` to `out`.
    pub fn query_area<'a>(&'a self, area: &Rect<C>, out: &mut Vec<&'a T>) {
        for (element, bounds) in &self.elements {
            if area.overlaps(bounds) {
                out.push(element);
            }
        }
    }
}

impl<T, C: Coordinate> RegionIndex<T, C> for QNode<T, C> {
    fn bounds(&self) -> Rect<C> {
        self.bounds()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        self.clear()
    }

    fn insert(&mut self, element: T, bounds: Rect<C>) -> bool {
        self.insert(element, bounds)
    }

    fn query_all<'a>(&'a self, out: &mut Vec<&'a T>) {
        self.query_all(out)
    }

    fn query_area<'a>(&'a self, area: &Rect<C>, out: &mut Vec<&'a T>) {
        self.query_area(area, out)
    }
}
