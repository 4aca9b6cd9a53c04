/// Mean Earth radius in km used for great-circle distances
pub const EARTH_RADIUS_KM: f64 = 6367.0;

/// Great-circle distance between two points on the earth
///
/// # Arguments
/// * `a` - (lat, lon) in decimal degrees
/// * `b` - (lat, lon) in decimal degrees
///
/// # Returns
/// * Distance in km on a sphere of radius [`EARTH_RADIUS_KM`]
pub fn haversine(a: (f64, f64), b: (f64, f64)) -> f64 {
    haversine_with_radius(EARTH_RADIUS_KM, a, b)
}

/// Haversine distance on a sphere of the given radius
///
/// Coordinates are not range-checked.
pub fn haversine_with_radius(radius_km: f64, a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lon1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lon2) = (b.0.to_radians(), b.1.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    radius_km * c
}

/// Element-wise haversine over two equal-length slices of (lat, lon) pairs
///
/// # Panics
/// If `from` and `to` differ in length.
pub fn haversine_batch(from: &[(f64, f64)], to: &[(f64, f64)]) -> Vec<f64> {
    haversine_batch_with_radius(EARTH_RADIUS_KM, from, to)
}

/// Batch form of [`haversine_with_radius`]
pub fn haversine_batch_with_radius(
    radius_km: f64,
    from: &[(f64, f64)],
    to: &[(f64, f64)],
) -> Vec<f64> {
    assert_eq!(
        from.len(),
        to.len(),
        "haversine_batch requires equal-length inputs"
    );

    from.iter()
        .zip(to)
        .map(|(&a, &b)| haversine_with_radius(radius_km, a, b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_haversine_same_point_is_zero() {
        let p = (59.9139, 10.7522);
        assert_eq!(haversine(p, p), 0.0);
    }

    #[test]
    fn test_haversine_symmetric() {
        let oslo = (59.9139, 10.7522);
        let bergen = (60.3913, 5.3221);
        assert_relative_eq!(haversine(oslo, bergen), haversine(bergen, oslo));
    }

    #[test]
    fn test_haversine_quarter_circle() {
        // A quarter great circle along the equator is pi * R / 2
        let d = haversine((0.0, 0.0), (0.0, 90.0));
        assert_relative_eq!(d, std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_KM, epsilon = 1e-9);
        assert!((d - 10001.26).abs() < 0.01);
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        // 1 degree of latitude ≈ 111.1 km at R = 6367
        let d = haversine((10.0, 20.0), (11.0, 20.0));
        assert!((d - 111.13).abs() < 0.05);
    }

    #[test]
    fn test_haversine_custom_radius() {
        let d = haversine_with_radius(1.0, (0.0, 0.0), (0.0, 180.0));
        assert_relative_eq!(d, std::f64::consts::PI, epsilon = 1e-12);
    }

    #[test]
    fn test_haversine_batch_matches_scalar() {
        let from = vec![(0.0, 0.0), (45.0, 10.0), (-33.9, 151.2)];
        let to = vec![(0.0, 90.0), (46.0, 11.0), (51.5, -0.1)];

        let batch = haversine_batch(&from, &to);
        assert_eq!(batch.len(), 3);
        for (i, d) in batch.iter().enumerate() {
            assert_eq!(*d, haversine(from[i], to[i]));
        }
    }

    #[test]
    fn test_haversine_batch_empty() {
        assert!(haversine_batch(&[], &[]).is_empty());
    }

    #[test]
    #[should_panic]
    fn test_haversine_batch_length_mismatch() {
        haversine_batch(&[(0.0, 0.0)], &[]);
    }
}
