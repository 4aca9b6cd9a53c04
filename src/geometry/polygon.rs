use geo::{Area, Geometry, Polygon};

/// Collect exterior-ring coordinates of every polygon at or above `min_area_threshold`
///
/// Accepts a `Polygon` or `MultiPolygon`; members of a multipolygon are
/// visited in stored order. Holes are ignored. Any other geometry yields two
/// empty vectors.
///
/// # Returns
/// * `(lons, lats)` - x and y of the concatenated exterior rings
pub fn extract_polygon_coords(
    geom: &Geometry<f64>,
    min_area_threshold: f64,
) -> (Vec<f64>, Vec<f64>) {
    let mut lons = Vec::new();
    let mut lats = Vec::new();

    match geom {
        Geometry::MultiPolygon(multi) => {
            for polygon in &multi.0 {
                push_exterior(polygon, min_area_threshold, &mut lons, &mut lats);
            }
        }
        Geometry::Polygon(polygon) => {
            push_exterior(polygon, min_area_threshold, &mut lons, &mut lats);
        }
        _ => {}
    }

    (lons, lats)
}

fn push_exterior(
    polygon: &Polygon<f64>,
    min_area: f64,
    lons: &mut Vec<f64>,
    lats: &mut Vec<f64>,
) {
    if polygon.unsigned_area() < min_area {
        return;
    }

    for c in polygon.exterior().coords() {
        lons.push(c.x);
        lats.push(c.y);
    }
}
