/// Replace NaN entries of `data` by linear interpolation over the valid points
///
/// `x` holds the position of each entry and need not be sorted. Positions
/// outside the valid range are linearly extrapolated from the two nearest
/// valid points on that side. Valid entries are returned unchanged.
///
/// With fewer than two valid points the input is returned as-is.
///
/// # Panics
/// If `x` is shorter than `data`.
pub fn interpolate_nans(data: &[f64], x: &[f64]) -> Vec<f64> {
    let mut known: Vec<(f64, f64)> = data
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .map(|(i, &v)| (x[i], v))
        .collect();

    if known.len() < 2 {
        return data.to_vec();
    }

    known.sort_by(|a, b| a.0.total_cmp(&b.0));

    data.iter()
        .enumerate()
        .map(|(i, &v)| if v.is_nan() { interp_at(&known, x[i]) } else { v })
        .collect()
}

/// Evaluate the piecewise-linear function through `known` (sorted by position) at `xi`
fn interp_at(known: &[(f64, f64)], xi: f64) -> f64 {
    let last = known.len() - 1;

    // Index of the right-hand point of the bracketing segment, clamped so the
    // end segments are reused for extrapolation
    let hi = known.partition_point(|&(kx, _)| kx < xi).clamp(1, last);
    let (x0, y0) = known[hi - 1];
    let (x1, y1) = known[hi];

    let slope = (y1 - y0) / (x1 - x0);
    y0 + slope * (xi - x0)
}
