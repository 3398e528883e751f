//! Growth-sequence and lane-placement math.

/// Fibonacci by index: 0, 1, 1, 2, 3, 5, ...
///
/// Iterative so spawn-count computation stays O(n) stack-free, and
/// saturating so absurdly late rounds clamp instead of overflowing.
pub fn fibonacci(n: u32) -> u64 {
    let mut a: u64 = 0;
    let mut b: u64 = 1;
    for _ in 0..n {
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    a
}

/// Evenly spaced lane offsets across a horizontal band of the world.
///
/// Lanes are placed bottom-up at `band_height / (count + 1)` intervals;
/// the top lane is instead pulled down from the band's top edge by
/// `top_tolerance` so sprites stay inside the band.
pub fn lane_offsets(
    count: usize,
    band_height: f32,
    band_center_y: f32,
    top_tolerance: f32,
) -> Vec<f32> {
    let bottom_edge = band_center_y - band_height / 2.0;
    let top_edge = band_center_y + band_height / 2.0;

    (0..count)
        .map(|i| {
            if i + 1 == count {
                top_edge - top_tolerance
            } else {
                bottom_edge + band_height / (count as f32 + 1.0) * (i as f32 + 1.0)
            }
        })
        .collect()
}
