use crate::{Coordinate, Error};

/// An axis-aligned rectangle with its origin on the top-left corner,
/// coordinates increasing right and down.
///
/// `right >= left` and `bottom >= top` hold for every constructed value;
/// the fields are private so the invariant cannot be broken afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect<C: Coordinate> {
    left: C,
    top: C,
    right: C,
    bottom: C,
}

impl<C: Coordinate> Default for Rect<C> {
    /// The zero rectangle: all four coordinates zero.
    fn default() -> Self {
        Rect {
            left: C::zero(),
            top: C::zero(),
            right: C::zero(),
            bottom: C::zero(),
        }
    }
}

impl<C: Coordinate> Rect<C> {
    /// Builds a rectangle from its four edge coordinates.
    ///
    /// Fails with [`Error::InvalidCoordinates`] if `right < left` or
    /// `bottom < top`.
    pub fn new(left: C, top: C, right: C, bottom: C) -> Result<Self, Error> {
        if right < left || bottom < top {
            return Err(Error::InvalidCoordinates);
        }
        Ok(Rect {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Builds a rectangle whose ordering invariant is already known to hold.
    pub(crate) fn new_unchecked(left: C, top: C, right: C, bottom: C) -> Self {
        debug_assert!(!(right < left) && !(bottom < top));
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn left(&self) -> C {
        self.left
    }

    pub fn top(&self) -> C {
        self.top
    }

    pub fn right(&self) -> C {
        self.right
    }

    pub fn bottom(&self) -> C {
        self.bottom
    }

    pub fn width(&self) -> C {
        self.right - self.left
    }

    pub fn height(&self) -> C {
        self.bottom - self.top
    }

    /// True only if `other` fits entirely inside this rectangle.
    /// Non-strict: a rectangle contains itself.
    pub fn contains(&self, other: &Rect<C>) -> bool {
        self.left <= other.left
            && self.right >= other.right
            && self.top <= other.top
            && self.bottom >= other.bottom
    }

    /// True only if the two rectangles share positive-area intersection.
    /// Strict: edge-touching rectangles do not overlap, and a zero-area
    /// rectangle overlaps nothing.
    pub fn overlaps(&self, other: &Rect<C>) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}
