use std::path::Path;

use geo::{Area, Geometry, MultiPolygon};
use geojson::{Feature, FeatureCollection, JsonObject};

use crate::error::{Error, Result};

/// A single coastline record: geometry in lon/lat plus its attributes
#[derive(Debug, Clone, PartialEq)]
pub struct CoastFeature {
    pub geometry: Geometry<f64>,
    pub properties: JsonObject,
}

impl CoastFeature {
    pub fn new(geometry: Geometry<f64>) -> Self {
        Self {
            geometry,
            properties: JsonObject::new(),
        }
    }

    pub fn with_properties(geometry: Geometry<f64>, properties: JsonObject) -> Self {
        Self {
            geometry,
            properties,
        }
    }

    /// True for polygonal geometry, the only kind with a planar area
    pub fn is_polygonal(&self) -> bool {
        matches!(
            self.geometry,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_)
        )
    }
}

/// Ordered collection of coastline features
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoastlineCollection {
    pub features: Vec<CoastFeature>,
}

impl CoastlineCollection {
    pub fn new(features: Vec<CoastFeature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CoastFeature> {
        self.features.iter()
    }

    /// Drop polygons smaller than `min_area`, e.g. small islands
    ///
    /// Multipolygons keep only their qualifying members and vanish when none
    /// qualify. Line and point features are kept as they are.
    pub fn retain_min_area(&mut self, min_area: f64) {
        let before = self.features.len();

        self.features.retain_mut(|feature| match &mut feature.geometry {
            Geometry::Polygon(p) => p.unsigned_area() >= min_area,
            Geometry::MultiPolygon(mp) => {
                let kept: Vec<_> = mp
                    .0
                    .drain(..)
                    .filter(|p| p.unsigned_area() >= min_area)
                    .collect();
                *mp = MultiPolygon(kept);
                !mp.0.is_empty()
            }
            _ => true,
        });

        log::debug!(
            "retain_min_area({}): kept {} of {} features",
            min_area,
            self.features.len(),
            before
        );
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .features
            .iter()
            .map(|f| Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(&f.geometry))),
                id: None,
                properties: Some(f.properties.clone()),
                foreign_members: None,
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    pub fn to_geojson_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_feature_collection())?)
    }

    /// Write the collection as a GeoJSON FeatureCollection
    pub fn write_geojson(&self, path: &Path) -> Result<()> {
        let json = self.to_geojson_string()?;
        std::fs::write(path, json).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl IntoIterator for CoastlineCollection {
    type Item = CoastFeature;
    type IntoIter = std::vec::IntoIter<CoastFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, Polygon, line_string, polygon};

    fn square(x0: f64, side: f64) -> Polygon<f64> {
        polygon![
            (x: x0, y: 0.0),
            (x: x0 + side, y: 0.0),
            (x: x0 + side, y: side),
            (x: x0, y: side),
        ]
    }

    #[test]
    fn test_retain_min_area() {
        let line: LineString<f64> = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)];
        let mut coast = CoastlineCollection::new(vec![
            CoastFeature::new(Geometry::Polygon(square(0.0, 0.1))),
            CoastFeature::new(Geometry::MultiPolygon(MultiPolygon(vec![
                square(0.0, 0.1),
                square(5.0, 2.0),
            ]))),
            CoastFeature::new(Geometry::LineString(line)),
            CoastFeature::new(Geometry::MultiPolygon(MultiPolygon(vec![square(0.0, 0.2)]))),
        ]);

        coast.retain_min_area(1.0);

        assert_eq!(coast.len(), 2);
        match &coast.features[0].geometry {
            Geometry::MultiPolygon(mp) => {
                assert_eq!(mp.0.len(), 1);
                assert_eq!(mp.0[0].unsigned_area(), 4.0);
            }
            other => panic!("unexpected geometry {:?}", other),
        }
        assert!(!coast.features[1].is_polygonal());
    }

    #[test]
    fn test_geojson_output_keeps_properties() {
        let mut props = JsonObject::new();
        props.insert("name".to_string(), serde_json::json!("Skagerrak"));
        let coast = CoastlineCollection::new(vec![CoastFeature::with_properties(
            Geometry::Polygon(square(0.0, 1.0)),
            props,
        )]);

        let json = coast.to_geojson_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["properties"]["name"], "Skagerrak");
        assert_eq!(value["features"][0]["geometry"]["type"], "Polygon");
    }

    #[test]
    fn test_write_geojson() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coast.geojson");
        let coast = CoastlineCollection::new(vec![CoastFeature::new(Geometry::Polygon(square(
            0.0, 1.0,
        )))]);

        coast.write_geojson(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("FeatureCollection"));
    }

    #[test]
    fn test_write_geojson_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("coast.geojson");
        let err = CoastlineCollection::default().write_geojson(&path).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
