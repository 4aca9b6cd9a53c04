use geo::{LineString, Polygon, coord};
use serde::Deserialize;

/// Axis-aligned bounding box in geographic degrees
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub lonmin: f64,
    pub lonmax: f64,
    pub latmin: f64,
    pub latmax: f64,
}

impl BoundingBox {
    pub fn new(lonmin: f64, lonmax: f64, latmin: f64, latmax: f64) -> Self {
        Self {
            lonmin,
            lonmax,
            latmin,
            latmax,
        }
    }

    /// Clipping rectangle with x = lon, y = lat
    ///
    /// Corners run NW, NE, SE, SW; the ring is closed by `geo`.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let ring = LineString::from(vec![
            coord! { x: self.lonmin, y: self.latmax },
            coord! { x: self.lonmax, y: self.latmax },
            coord! { x: self.lonmax, y: self.latmin },
            coord! { x: self.lonmin, y: self.latmin },
        ]);
        Polygon::new(ring, vec![])
    }

    /// Inclusive containment test
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.lonmin && lon <= self.lonmax && lat >= self.latmin && lat <= self.latmax
    }

    pub fn width(&self) -> f64 {
        self.lonmax - self.lonmin
    }

    pub fn height(&self) -> f64 {
        self.latmax - self.latmin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    #[test]
    fn test_to_polygon_corner_order() {
        let bbox = BoundingBox::new(-10.0, 5.0, 50.0, 60.0);
        let poly = bbox.to_polygon();
        let coords: Vec<(f64, f64)> = poly.exterior().coords().map(|c| (c.x, c.y)).collect();

        assert_eq!(
            coords,
            vec![
                (-10.0, 60.0),
                (5.0, 60.0),
                (5.0, 50.0),
                (-10.0, 50.0),
                (-10.0, 60.0),
            ]
        );
        assert_eq!(poly.unsigned_area(), bbox.width() * bbox.height());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bbox = BoundingBox::new(0.0, 1.0, 0.0, 1.0);
        assert!(bbox.contains(0.0, 0.0));
        assert!(bbox.contains(0.5, 1.0));
        assert!(!bbox.contains(1.1, 0.5));
        assert!(!bbox.contains(0.5, -0.1));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let bbox: BoundingBox =
            toml::from_str("lonmin = 4.0\nlonmax = 6.0\nlatmin = 58.0\nlatmax = 61.0").unwrap();
        assert_eq!(bbox, BoundingBox::new(4.0, 6.0, 58.0, 61.0));
    }
}
