//! Thin a set of points so that no two kept points are closer than a minimum separation.
//!
//! Points are visited from highest to lowest priority. Each point that has not already been
//! rejected is kept, and every point closer than the radius that has not been visited yet is
//! rejected. Among any cluster of close points the highest priority point always survives, and
//! input order breaks ties between equal priorities.
use crate::{
    error::{ReductionError, Result},
    grid::{BruteForce, NeighborSearch, SpatialGrid},
    point::Point,
    priority::{processing_order, Priority},
    radius::Radius,
};
use log::{debug, trace};

/// Inputs with fewer points than this are searched without building a grid.
pub const DEFAULT_BRUTE_FORCE_THRESHOLD: usize = 64;

/// Configuration for a point density reduction.
///
/// # Examples
///
/// ```rust
/// use metfor::Km;
/// use point_density::{DensityReducer, Point};
///
/// let stations = [
///     Point::new(0.0, 0.0),
///     Point::new(50_000.0, 0.0),
///     Point::new(400_000.0, 0.0),
/// ];
///
/// let reducer = DensityReducer::new(Km(175.0));
/// assert_eq!(reducer.reduce(&stations).unwrap(), vec![true, false, true]);
///
/// // Station 1 reports the most significant weather, so it is plotted instead of station 0.
/// let mask = reducer.reduce_with_priority(&stations, &[0, 61, 0]).unwrap();
/// assert_eq!(mask, vec![false, true, true]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityReducer {
    radius: Radius,
    brute_force_threshold: usize,
}

impl Default for DensityReducer {
    fn default() -> Self {
        DensityReducer {
            radius: Radius::default(),
            brute_force_threshold: DEFAULT_BRUTE_FORCE_THRESHOLD,
        }
    }
}

impl DensityReducer {
    /// Create a reducer that keeps points at least `radius` apart.
    #[inline]
    pub fn new<R>(radius: R) -> Self
    where
        Radius: From<R>,
    {
        DensityReducer::default().with_radius(radius)
    }

    /// Builder method to set the minimum separation.
    #[inline]
    pub fn with_radius<R>(mut self, radius: R) -> Self
    where
        Radius: From<R>,
    {
        self.radius = Radius::from(radius);
        self
    }

    /// Builder method to set the input size below which a spatial grid is not built. The
    /// result does not depend on this value, only the speed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use point_density::{DensityReducer, Point};
    ///
    /// let pnts = [Point::new(0.0, 0.0), Point::new(0.5, 0.0)];
    /// let always_grid = DensityReducer::new(1.0).with_brute_force_threshold(0);
    /// assert_eq!(always_grid.reduce(&pnts).unwrap(), vec![true, false]);
    /// ```
    #[inline]
    pub fn with_brute_force_threshold(mut self, num_points: usize) -> Self {
        self.brute_force_threshold = num_points;
        self
    }

    /// The minimum separation between kept points.
    #[inline]
    pub fn radius(&self) -> Radius {
        self.radius
    }

    /// Input size below which a grid is not built.
    #[inline]
    pub fn brute_force_threshold(&self) -> usize {
        self.brute_force_threshold
    }

    /// Thin `points` using input order as the priority, earlier points are preferred.
    pub fn reduce(&self, points: &[Point]) -> Result<Vec<bool>> {
        let radius = self.validate(points)?;
        Ok(self.run(points, radius, 0..points.len()))
    }

    /// Thin `points`, preferring points with a higher priority.
    ///
    /// Missing priorities, like `None` or NaN, rank below every other value. Points with equal
    /// priority are preferred in input order.
    pub fn reduce_with_priority<P: Priority>(
        &self,
        points: &[Point],
        priority: &[P],
    ) -> Result<Vec<bool>> {
        if priority.len() != points.len() {
            return Err(ReductionError::PriorityLengthMismatch {
                points: points.len(),
                priorities: priority.len(),
            });
        }

        let radius = self.validate(points)?;
        if radius.is_zero() {
            return Ok(self.run(points, radius, 0..points.len()));
        }

        let order = processing_order(priority);
        Ok(self.run(points, radius, order))
    }

    fn validate(&self, points: &[Point]) -> Result<Radius> {
        let radius = self.radius.validate()?;

        if let Some(idx) = points.iter().position(|pnt| !pnt.is_finite()) {
            return Err(ReductionError::InvalidCoordinate(idx));
        }

        Ok(radius)
    }

    fn run<I>(&self, points: &[Point], radius: Radius, order: I) -> Vec<bool>
    where
        I: IntoIterator<Item = usize>,
    {
        let keep = if radius.is_zero() || points.len() < 2 {
            vec![true; points.len()]
        } else if points.len() < self.brute_force_threshold {
            trace!("brute force neighbor search for {} points", points.len());
            greedy_exclusion(points, order, &BruteForce::new(radius.value()))
        } else {
            let grid = SpatialGrid::new(points, radius.value());
            trace!(
                "grid neighbor search for {} points in {} cells",
                points.len(),
                grid.num_cells()
            );
            greedy_exclusion(points, order, &grid)
        };

        debug!(
            "kept {} of {} points with radius {}",
            keep.iter().filter(|&&k| k).count(),
            points.len(),
            radius.value()
        );

        keep
    }
}

/// Visit points in `order`, keeping each one not already rejected and rejecting its unvisited
/// neighbors.
fn greedy_exclusion<I, S>(points: &[Point], order: I, search: &S) -> Vec<bool>
where
    I: IntoIterator<Item = usize>,
    S: NeighborSearch,
{
    let mut keep = vec![true; points.len()];
    let mut finalized = vec![false; points.len()];

    for idx in order {
        if !keep[idx] {
            continue;
        }
        finalized[idx] = true;

        search.for_each_neighbor(points, idx, |other| {
            if !finalized[other] {
                keep[other] = false;
            }
        });
    }

    keep
}

/// Thin `points` so that no two kept points are closer than `radius`, preferring earlier points.
///
/// Returns a mask with one entry per point, `true` if the point is kept.
///
/// # Examples
///
/// ```rust
/// use point_density::{reduce_point_density, Point};
///
/// let pnts = [Point::new(0.0, 0.0), Point::new(0.1, 0.0)];
/// assert_eq!(reduce_point_density(&pnts, 1.0).unwrap(), vec![true, false]);
///
/// // A zero radius keeps everything.
/// assert_eq!(reduce_point_density(&pnts, 0.0).unwrap(), vec![true, true]);
/// ```
pub fn reduce_point_density<R>(points: &[Point], radius: R) -> Result<Vec<bool>>
where
    Radius: From<R>,
{
    DensityReducer::new(radius).reduce(points)
}

/// Thin `points` so that no two kept points are closer than `radius`, preferring points with a
/// higher priority.
///
/// # Examples
///
/// ```rust
/// use point_density::{reduce_point_density_by_priority, Point};
///
/// let pnts = [Point::new(0.0, 0.0), Point::new(0.0, 0.5), Point::new(0.0, 10.0)];
/// let mask = reduce_point_density_by_priority(&pnts, 1.0, &[5, 9, 1]).unwrap();
/// assert_eq!(mask, vec![false, true, true]);
/// ```
pub fn reduce_point_density_by_priority<R, P>(
    points: &[Point],
    radius: R,
    priority: &[P],
) -> Result<Vec<bool>>
where
    Radius: From<R>,
    P: Priority,
{
    DensityReducer::new(radius).reduce_with_priority(points, priority)
}

#[cfg(test)]
mod test {
    use super::*;

    fn pnts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(reduce_point_density(&[], 10.0).unwrap(), Vec::<bool>::new());
        assert_eq!(
            reduce_point_density_by_priority::<_, i32>(&[], 10.0, &[]).unwrap(),
            Vec::<bool>::new()
        );
        assert_eq!(
            reduce_point_density(&pnts(&[(3.0, 4.0)]), 1.0e6).unwrap(),
            vec![true]
        );
    }

    #[test]
    fn test_zero_radius_is_identity() {
        let points = pnts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(
            reduce_point_density(&points, 0.0).unwrap(),
            vec![true, true, true]
        );
        assert_eq!(
            reduce_point_density_by_priority(&points, 0.0, &[1, 2, 3]).unwrap(),
            vec![true, true, true]
        );
    }

    #[test]
    fn test_priority_precedence() {
        let points = pnts(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(
            reduce_point_density_by_priority(&points, 5.0, &[1, 9]).unwrap(),
            vec![false, true]
        );
        assert_eq!(
            reduce_point_density_by_priority(&points, 5.0, &[9, 1]).unwrap(),
            vec![true, false]
        );
    }

    #[test]
    fn test_tie_break() {
        let points = pnts(&[(0.0, 0.0), (0.1, 0.0)]);
        assert_eq!(
            reduce_point_density(&points, 1.0).unwrap(),
            vec![true, false]
        );
        assert_eq!(
            reduce_point_density_by_priority(&points, 1.0, &[4.0, 4.0]).unwrap(),
            vec![true, false]
        );
    }

    #[test]
    fn test_rejected_point_does_not_reject() {
        // 1 is rejected by 0, so it cannot reject 2 even though they are close.
        let points = pnts(&[(0.0, 0.0), (0.8, 0.0), (1.6, 0.0)]);
        assert_eq!(
            reduce_point_density(&points, 1.0).unwrap(),
            vec![true, false, true]
        );
    }

    #[test]
    fn test_exact_radius_is_kept() {
        let points = pnts(&[(0.0, 0.0), (2.0, 0.0)]);
        assert_eq!(
            reduce_point_density(&points, 2.0).unwrap(),
            vec![true, true]
        );
    }

    #[test]
    fn test_coincident_points() {
        let points = pnts(&[(1.0, 1.0); 4]);
        assert_eq!(
            reduce_point_density_by_priority(&points, 0.5, &[2, 7, 7, 3]).unwrap(),
            vec![false, true, false, false]
        );
    }

    #[test]
    fn test_missing_priority_is_lowest() {
        let points = pnts(&[(0.0, 0.0), (0.5, 0.0)]);
        assert_eq!(
            reduce_point_density_by_priority(&points, 1.0, &[None, Some(-100)]).unwrap(),
            vec![false, true]
        );
        assert_eq!(
            reduce_point_density_by_priority(&points, 1.0, &[std::f64::NAN, 0.0]).unwrap(),
            vec![false, true]
        );
    }

    #[test]
    fn test_grid_and_brute_force_agree() {
        let points: Vec<Point> = (0..200)
            .map(|i| {
                let i = i as f64;
                Point::new((i * 7.3) % 50.0, (i * 3.1) % 20.0)
            })
            .collect();
        let priority: Vec<u32> = (0..200).map(|i| (i * 37) % 11).collect();

        for &radius in &[0.5, 2.0, 7.5] {
            let brute = DensityReducer::new(radius).with_brute_force_threshold(usize::MAX);
            let grid = DensityReducer::new(radius).with_brute_force_threshold(0);

            assert_eq!(brute.reduce(&points), grid.reduce(&points));
            assert_eq!(
                brute.reduce_with_priority(&points, &priority),
                grid.reduce_with_priority(&points, &priority)
            );
        }
    }

    #[test]
    fn test_input_errors() {
        let points = pnts(&[(0.0, 0.0), (1.0, 1.0)]);

        assert_eq!(
            reduce_point_density_by_priority(&points, 1.0, &[1]),
            Err(ReductionError::PriorityLengthMismatch {
                points: 2,
                priorities: 1
            })
        );
        assert_eq!(
            reduce_point_density(&points, -1.0),
            Err(ReductionError::NegativeRadius)
        );
        assert_eq!(
            reduce_point_density(&points, std::f64::NAN),
            Err(ReductionError::InvalidRadius)
        );

        let bad = pnts(&[(0.0, 0.0), (std::f64::NAN, 1.0)]);
        assert_eq!(
            reduce_point_density(&bad, 1.0),
            Err(ReductionError::InvalidCoordinate(1))
        );
    }

    #[test]
    fn test_builder() {
        let reducer = DensityReducer::new(2.0).with_brute_force_threshold(10);
        assert_eq!(reducer.radius(), Radius::from(2.0));
        assert_eq!(reducer.brute_force_threshold(), 10);

        let reducer = reducer.with_radius(metfor::Km(1.0));
        assert_eq!(reducer.radius().value(), 1000.0);
        assert_eq!(
            DensityReducer::default().brute_force_threshold(),
            DEFAULT_BRUTE_FORCE_THRESHOLD
        );
    }
}
