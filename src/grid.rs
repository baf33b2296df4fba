//! Spatial indexes for finding the points near a given point.
//!
//! The grid buckets points into square cells as wide as the search radius, so every neighbor
//! of a point is in the 3x3 block of cells centered on it. Cells live in a hash map, so memory
//! scales with the number of points and not the extent of the data.
use crate::point::Point;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Find the indexes of points within a fixed radius of a point.
pub(crate) trait NeighborSearch {
    /// Call `visit` with the index of every point strictly closer than the search radius to
    /// `points[center]`. This usually includes `center` itself.
    fn for_each_neighbor<F>(&self, points: &[Point], center: usize, visit: F)
    where
        F: FnMut(usize);
}

/// Compare every pair of points. Quicker than building a grid for very small inputs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BruteForce {
    radius_sq: f64,
}

impl BruteForce {
    pub(crate) fn new(radius: f64) -> Self {
        BruteForce {
            radius_sq: radius * radius,
        }
    }
}

impl NeighborSearch for BruteForce {
    fn for_each_neighbor<F>(&self, points: &[Point], center: usize, mut visit: F)
    where
        F: FnMut(usize),
    {
        let pnt = points[center];
        points
            .iter()
            .enumerate()
            .filter(|(_, other)| pnt.distance_squared(**other) < self.radius_sq)
            .for_each(|(i, _)| visit(i));
    }
}

type Cell = (i64, i64);

/// Points bucketed into square cells with the same width as the search radius.
#[derive(Debug, Clone)]
pub(crate) struct SpatialGrid {
    cell_size: f64,
    radius_sq: f64,
    cells: HashMap<Cell, SmallVec<[usize; 4]>>,
}

impl SpatialGrid {
    /// Build a grid over `points`. The radius must be finite and greater than zero.
    pub(crate) fn new(points: &[Point], radius: f64) -> Self {
        debug_assert!(radius > 0.0 && radius.is_finite());

        let mut grid = SpatialGrid {
            cell_size: radius,
            radius_sq: radius * radius,
            cells: HashMap::with_capacity(points.len()),
        };

        for (i, pnt) in points.iter().enumerate() {
            let cell = grid.cell_of(*pnt);
            grid.cells.entry(cell).or_default().push(i);
        }

        grid
    }

    /// Number of occupied cells.
    pub(crate) fn num_cells(&self) -> usize {
        self.cells.len()
    }

    // Float to int casts saturate, so points far outside the i64 range of cells pile up in the
    // edge cells. Distances are still checked exactly, so that only costs speed.
    fn cell_of(&self, pnt: Point) -> Cell {
        (
            (pnt.x / self.cell_size).floor() as i64,
            (pnt.y / self.cell_size).floor() as i64,
        )
    }
}

impl NeighborSearch for SpatialGrid {
    fn for_each_neighbor<F>(&self, points: &[Point], center: usize, mut visit: F)
    where
        F: FnMut(usize),
    {
        let pnt = points[center];
        let (cx, cy) = self.cell_of(pnt);

        for dx in -1..=1_i64 {
            let x = match cx.checked_add(dx) {
                Some(x) => x,
                None => continue,
            };

            for dy in -1..=1_i64 {
                let y = match cy.checked_add(dy) {
                    Some(y) => y,
                    None => continue,
                };

                let bucket = match self.cells.get(&(x, y)) {
                    Some(bucket) => bucket,
                    None => continue,
                };

                bucket
                    .iter()
                    .filter(|&&i| pnt.distance_squared(points[i]) < self.radius_sq)
                    .for_each(|&i| visit(i));
            }
        }
    }
}
