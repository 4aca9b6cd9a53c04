use std::path::Path;

use super::feature::CoastlineCollection;
use super::source::{GeoJsonSource, GeometrySource};
use crate::config::FileConfig;
use crate::error::{Error, Result};
use crate::geometry::BoundingBox;

/// Extract all coastline inside a bounding box
///
/// Every feature read from `path` is intersected with the rectangle of
/// `bbox`; features with nothing inside are dropped and the rest keep their
/// attributes and order. Everything that touches the box is returned,
/// islands included, so callers usually post-filter the result (see
/// [`CoastlineCollection::retain_min_area`]).
///
/// # Errors
/// * `Error::Read` / `Error::Parse` if the source cannot be loaded
/// * `Error::CrsMismatch` if the source is not in EPSG:4326
pub fn coastline_extraction<S>(
    bbox: &BoundingBox,
    source: &S,
    path: &Path,
) -> Result<CoastlineCollection>
where
    S: GeometrySource + ?Sized,
{
    let coast = source.open(path)?;
    let clip = bbox.to_polygon();

    let features: Vec<_> = coast
        .iter()
        .filter_map(|feature| source.intersect(feature, &clip))
        .collect();

    log::debug!(
        "coastline_extraction: {} of {} features intersect {:?}",
        features.len(),
        coast.len(),
        bbox
    );

    Ok(CoastlineCollection::new(features))
}

/// [`coastline_extraction`] over a GeoJSON file
pub fn extract_coastline_file(bbox: &BoundingBox, path: &Path) -> Result<CoastlineCollection> {
    coastline_extraction(bbox, &GeoJsonSource, path)
}

/// Extract coastline using the box, source file and area filter from settings
pub fn extract_configured_coastline(config: &FileConfig) -> Result<CoastlineCollection> {
    let bbox = config.bbox.ok_or(Error::MissingConfig("bbox"))?;
    let path = config
        .coast_file
        .as_deref()
        .ok_or(Error::MissingConfig("coast_file"))?;

    let mut coast = extract_coastline_file(&bbox, path)?;
    if config.min_area_threshold > 0.0 {
        coast.retain_min_area(config.min_area_threshold);
    }

    Ok(coast)
}
