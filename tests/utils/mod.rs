use point_density::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Points scattered uniformly over a square `extent` on a side, reproducible from `seed`.
pub fn scattered_points(num: usize, extent: f64, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num)
        .map(|_| Point::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent)))
        .collect()
}

/// Present weather style codes in 0..100, reproducible from `seed`.
#[allow(dead_code)]
pub fn weather_codes(num: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num).map(|_| rng.gen_range(0..100)).collect()
}

/// Panic if any two kept points are closer than `radius`.
pub fn assert_separated(points: &[Point], mask: &[bool], radius: f64) {
    assert_eq!(points.len(), mask.len());

    let kept: Vec<(usize, Point)> = points
        .iter()
        .copied()
        .enumerate()
        .filter(|&(i, _)| mask[i])
        .collect();

    for (n, &(i, a)) in kept.iter().enumerate() {
        for &(j, b) in &kept[(n + 1)..] {
            assert!(
                a.distance(b) >= radius,
                "kept points {} and {} are {} apart, radius {}",
                i,
                j,
                a.distance(b),
                radius
            );
        }
    }
}

/// Panic if a rejected point has no kept point within `radius` that outranks it.
#[allow(dead_code)]
pub fn assert_rejections_explained<P: PartialOrd>(
    points: &[Point],
    mask: &[bool],
    radius: f64,
    priority: &[P],
) {
    for (i, pnt) in points.iter().enumerate().filter(|&(i, _)| !mask[i]) {
        let explained = points
            .iter()
            .enumerate()
            .filter(|&(j, _)| mask[j])
            .any(|(j, other)| {
                pnt.distance(*other) < radius
                    && (priority[j] > priority[i] || (priority[j] == priority[i] && j < i))
            });
        assert!(explained, "point {} was rejected without a reason", i);
    }
}
