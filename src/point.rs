//! Planar point locations.
use metfor::{Length, Meters, Quantity};

/// A location in a planar (projected) coordinate system.
///
/// Both coordinates must be in the same linear unit as the separation radius they are compared
/// against, usually meters from a map projection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Easting, or x coordinate.
    pub x: f64,
    /// Northing, or y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use point_density::Point;
    ///
    /// let pnt = Point::new(3.0, 4.0);
    /// assert_eq!(pnt.distance(Point::new(0.0, 0.0)), 5.0);
    /// ```
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Create a point from projected lengths, converting them to meters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Km, Meters};
    /// use point_density::Point;
    ///
    /// let pnt = Point::from_lengths(Km(1.5), Km(-2.0));
    /// assert_eq!(pnt, Point::new(1500.0, -2000.0));
    ///
    /// let pnt = Point::from_lengths(Meters(10.0), Meters(20.0));
    /// assert_eq!(pnt, Point::new(10.0, 20.0));
    /// ```
    #[inline]
    pub fn from_lengths<L>(x: L, y: L) -> Self
    where
        L: Length,
        Meters: From<L>,
    {
        Point {
            x: Meters::from(x).unpack(),
            y: Meters::from(y).unpack(),
        }
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Both coordinates are neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(pnt: Point) -> Self {
        (pnt.x, pnt.y)
    }
}
