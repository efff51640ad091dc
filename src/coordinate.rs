use num_traits::Num;

/// Coordinate types usable for rectangle edges and quadrant bisection.
///
/// Any ordered numeric type qualifies: the blanket impl covers the signed
/// and unsigned integers as well as `f32`/`f64`. Quadrant midpoints are
/// computed with the coordinate's own division, so integer coordinates
/// truncate.
pub trait Coordinate: Num + PartialOrd + Copy {
    /// The divisor used to bisect a region edge.
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<C: Num + PartialOrd + Copy> Coordinate for C {}
