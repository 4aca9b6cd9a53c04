//! Coastline extraction from vector geometry sources

pub mod extract;
pub mod feature;
pub mod source;

pub use extract::{coastline_extraction, extract_coastline_file, extract_configured_coastline};
pub use feature::{CoastFeature, CoastlineCollection};
pub use source::{GeoJsonSource, GeometrySource, clip_geometry};
