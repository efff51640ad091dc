use crate::{Coordinate, QNode, Rect, RegionIndex};

/// One of the four subdivisions of a region, in the fixed traversal order
/// used everywhere in the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    /// All quadrants in traversal order: NW, NE, SE, SW.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    /// The bounds of this quadrant of `parent`.
    ///
    /// Each quadrant keeps two of the parent's edges and substitutes the
    /// width/height midpoint for the other two. Midpoints use the coordinate
    /// type's own division, so integer coordinates truncate and sibling
    /// quadrants may differ in size by one unit.
    pub fn child_bounds<C: Coordinate>(self, parent: &Rect<C>) -> Rect<C> {
        let mid_x = parent.left() + parent.width() / C::two();
        let mid_y = parent.top() + parent.height() / C::two();

        match self {
            Quadrant::NorthWest => {
                Rect::new_unchecked(parent.left(), parent.top(), mid_x, mid_y)
            }
            Quadrant::NorthEast => {
                Rect::new_unchecked(mid_x, parent.top(), parent.right(), mid_y)
            }
            Quadrant::SouthEast => {
                Rect::new_unchecked(mid_x, mid_y, parent.right(), parent.bottom())
            }
            Quadrant::SouthWest => {
                Rect::new_unchecked(parent.left(), mid_y, mid_x, parent.bottom())
            }
        }
    }
}

/// A quad-subdivision tree of fixed depth.
///
/// Construction eagerly subdivides the region into four quadrants per level
/// down to `depth`, whether or not they will ever hold elements; the shape
/// never changes afterwards. A depth-0 tree has no children and behaves as a
/// plain [`QNode`].
///
/// Each element lands on the deepest node whose region fully contains its
/// bounds and stays there until [`clear`](QuadTree::clear) or drop. Not
/// thread-safe: callers needing concurrent mutation must synchronize
/// externally.
#[derive(Clone, Debug)]
pub struct QuadTree<T, C: Coordinate> {
    node: QNode<T, C>,
    depth: usize,
    // None iff depth == 0. Boxed to keep deep trees off the stack.
    children: Option<Box<[QuadTree<T, C>; 4]>>,
}

impl<T, C: Coordinate> QuadTree<T, C> {
    /// Builds the full tree over `bounds`, subdivided `depth` levels deep.
    pub fn new(bounds: Rect<C>, depth: usize) -> Self {
        let children = if depth == 0 {
            None
        } else {
            Some(Box::new([
                QuadTree::new(Quadrant::NorthWest.child_bounds(&bounds), depth - 1),
                QuadTree::new(Quadrant::NorthEast.child_bounds(&bounds), depth - 1),
                QuadTree::new(Quadrant::SouthEast.child_bounds(&bounds), depth - 1),
                QuadTree::new(Quadrant::SouthWest.child_bounds(&bounds), depth - 1),
            ]))
        };

        QuadTree {
            node: QNode::new(bounds),
            depth,
            children,
        }
    }

    /// Number of subdivision levels below this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The tree's fixed region.
    pub fn bounds(&self) -> Rect<C> {
        self.node.bounds()
    }

    /// True only if `rect` fits inside this tree's region.
    pub fn contains(&self, rect: &Rect<C>) -> bool {
        self.node.contains(rect)
    }

    /// True only if this tree's region fits inside `rect`.
    pub fn is_inside(&self, rect: &Rect<C>) -> bool {
        self.node.is_inside(rect)
    }

    /// True only if this tree's region overlaps `rect`.
    pub fn overlaps(&self, rect: &Rect<C>) -> bool {
        self.node.overlaps(rect)
    }

    /// Number of elements stored in this node and every node below it.
    /// Recomputed on every call, not cached.
    pub fn len(&self) -> usize {
        let mut n = self.node.len();
        if let Some(children) = &self.children {
            for child in children.iter() {
                n += child.len();
            }
        }
        n
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element from the tree, children first.
    pub fn clear(&mut self) {
        if let Some(children) = &mut self.children {
            for child in children.iter_mut() {
                child.clear();
            }
        }
        self.node.clear();
    }

    /// Stores `element` on the deepest node whose region fully contains
    /// `bounds`; returns whether it was stored.
    ///
    /// Fails without mutating anything when `bounds` does not fit this
    /// tree's region. Children are tried in NW, NE, SE, SW order; the first
    /// one that fully contains `bounds` takes the element.
    pub fn insert(&mut self, element: T, bounds: Rect<C>) -> bool {
        if !self.node.contains(&bounds) {
            return false;
        }

        if let Some(children) = &mut self.children {
            for child in children.iter_mut() {
                if child.contains(&bounds) {
                    return child.insert(element, bounds);
                }
            }
        }

        // no child fully contains the bounds; the element belongs here
        self.node.insert(element, bounds)
    }

    /// Appends references to every element in the tree to `out`, children
    /// before self, children in NW, NE, SE, SW order. No order guarantee is
    /// made beyond that.
    pub fn query_all<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query_all(out);
            }
        }
        self.node.query_all(out);
    }

    /// Appends references to every element whose bounds overlap `area` to
    /// `out`.
    ///
    /// This node's own elements are filtered first, then each child in NW,
    /// NE, SE, SW order:
    /// - the query area fully contains the child: everything below it is
    ///   collected unfiltered;
    /// - the child fully contains the query area: recurse into it and stop,
    ///   no sibling can intersect a region this child wholly contains;
    /// - the child partially overlaps the query area: recurse and keep
    ///   scanning siblings;
    /// - otherwise the child is skipped.
    pub fn query_area<'a>(&'a self, area: &Rect<C>, out: &mut Vec<&'a T>) {
        // elements held here may not fit in any child region
        self.node.query_area(area, out);

        if let Some(children) = &self.children {
            for child in children.iter() {
                if child.is_inside(area) {
                    child.query_all(out);
                    continue;
                }

                if child.contains(area) {
                    child.query_area(area, out);
                    break;
                }

                if child.overlaps(area) {
                    child.query_area(area, out);
                }
            }
        }
    }
}

impl<T, C: Coordinate> RegionIndex<T, C> for QuadTree<T, C> {
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
