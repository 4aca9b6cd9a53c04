use std::path::Path;

use geo::{
    BooleanOps, Geometry, GeometryCollection, Intersects, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Polygon,
};
use geojson::{GeoJson, JsonObject};

use super::feature::{CoastFeature, CoastlineCollection};
use crate::error::{Error, Result};

/// Supplier of coastline geometry
///
/// Implementors only need to read a source; clipping has a default built on
/// `geo` boolean operations.
pub trait GeometrySource {
    /// Load every feature at `path`, in lon/lat (EPSG:4326)
    fn open(&self, path: &Path) -> Result<CoastlineCollection>;

    /// Part of `feature` inside `clip`, or `None` when nothing remains
    fn intersect(&self, feature: &CoastFeature, clip: &Polygon<f64>) -> Option<CoastFeature> {
        clip_geometry(&feature.geometry, clip)
            .map(|geometry| CoastFeature::with_properties(geometry, feature.properties.clone()))
    }
}

/// Reads GeoJSON files: a FeatureCollection, a single Feature or a bare Geometry
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonSource;

impl GeoJsonSource {
    /// Parse GeoJSON text into a coastline collection
    ///
    /// Features without geometry are skipped. A legacy `crs` member naming
    /// anything other than EPSG:4326 or OGC CRS84 is rejected.
    pub fn parse(text: &str) -> Result<CoastlineCollection> {
        let geojson: GeoJson = text.parse()?;

        let features = match geojson {
            GeoJson::FeatureCollection(fc) => {
                check_crs(fc.foreign_members.as_ref())?;
                let mut features = Vec::with_capacity(fc.features.len());
                for feature in fc.features {
                    if let Some(f) = convert_feature(feature)? {
                        features.push(f);
                    }
                }
                features
            }
            GeoJson::Feature(feature) => {
                check_crs(feature.foreign_members.as_ref())?;
                convert_feature(feature)?.into_iter().collect()
            }
            GeoJson::Geometry(geometry) => {
                check_crs(geometry.foreign_members.as_ref())?;
                vec![CoastFeature::new(Geometry::try_from(geometry.value)?)]
            }
        };

        Ok(CoastlineCollection::new(features))
    }
}

impl GeometrySource for GeoJsonSource {
    fn open(&self, path: &Path) -> Result<CoastlineCollection> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let coast = Self::parse(&text)?;
        log::debug!("loaded {} coastline features from {:?}", coast.len(), path);
        Ok(coast)
    }
}

fn convert_feature(feature: geojson::Feature) -> Result<Option<CoastFeature>> {
    let Some(geometry) = feature.geometry else {
        log::debug!("skipping feature without geometry (id {:?})", feature.id);
        return Ok(None);
    };

    Ok(Some(CoastFeature::with_properties(
        Geometry::try_from(geometry.value)?,
        feature.properties.unwrap_or_default(),
    )))
}

/// Reject a declared CRS that is not geographic WGS84
///
/// GeoJSON without a `crs` member is WGS84 by definition.
fn check_crs(members: Option<&JsonObject>) -> Result<()> {
    let Some(crs) = members.and_then(|m| m.get("crs")) else {
        return Ok(());
    };

    let name = crs
        .pointer("/properties/name")
        .and_then(|n| n.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| crs.to_string());

    // "EPSG:4326", "urn:ogc:def:crs:EPSG::4326", "urn:ogc:def:crs:OGC:1.3:CRS84"
    let code = name.rsplit(':').next().unwrap_or_default().to_uppercase();
    if code == "4326" || code == "CRS84" {
        Ok(())
    } else {
        Err(Error::CrsMismatch(name))
    }
}

/// Clip a geometry against a polygon
///
/// Areas are intersected, lines cut at the polygon boundary and points kept
/// if they touch it. Returns `None` when the result is empty.
pub fn clip_geometry(geometry: &Geometry<f64>, clip: &Polygon<f64>) -> Option<Geometry<f64>> {
    match geometry {
        Geometry::Polygon(p) => polygonal(p.intersection(clip)),
        Geometry::MultiPolygon(mp) => polygonal(mp.intersection(clip)),
        Geometry::Rect(r) => polygonal(r.to_polygon().intersection(clip)),
        Geometry::Triangle(t) => polygonal(t.to_polygon().intersection(clip)),
        Geometry::LineString(ls) => {
            lineal(clip.clip(&MultiLineString::new(vec![ls.clone()]), false))
        }
        Geometry::MultiLineString(mls) => lineal(clip.clip(mls, false)),
        Geometry::Line(line) => lineal(clip.clip(
            &MultiLineString::new(vec![LineString::from(*line)]),
            false,
        )),
        Geometry::Point(p) => clip.intersects(p).then_some(Geometry::Point(*p)),
        Geometry::MultiPoint(mp) => {
            let kept: Vec<_> = mp.0.iter().filter(|p| clip.intersects(*p)).copied().collect();
            (!kept.is_empty()).then(|| Geometry::MultiPoint(MultiPoint(kept)))
        }
        Geometry::GeometryCollection(gc) => {
            let kept: Vec<_> = gc.0.iter().filter_map(|g| clip_geometry(g, clip)).collect();
            (!kept.is_empty()).then(|| Geometry::GeometryCollection(GeometryCollection(kept)))
        }
    }
}

fn polygonal(mut mp: MultiPolygon<f64>) -> Option<Geometry<f64>> {
    match mp.0.len() {
        0 => None,
        1 => mp.0.pop().map(Geometry::Polygon),
        _ => Some(Geometry::MultiPolygon(mp)),
    }
}

fn lineal(mut mls: MultiLineString<f64>) -> Option<Geometry<f64>> {
    mls.0.retain(|ls| ls.0.len() >= 2);
    match mls.0.len() {
        0 => None,
        1 => mls.0.pop().map(Geometry::LineString),
        _ => Some(Geometry::MultiLineString(mls)),
    }
}
