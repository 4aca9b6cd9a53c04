//! geohelpers - standalone geospatial and numeric helpers
//!
//! - great-circle distance ([`haversine`], [`haversine_batch`])
//! - NaN interpolation in 1-D ([`interpolate_nans`]) and on grids ([`fill_nan_2d`])
//! - coastline clipping against a bounding box ([`coastline_extraction`])
//! - polygon exterior extraction with an area filter ([`extract_polygon_coords`])
//! - line intersection ([`line_intersection`], [`do_lines_intersect`])

pub mod coastline;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interpolate;

pub use coastline::{
    CoastFeature, CoastlineCollection, GeoJsonSource, GeometrySource, coastline_extraction,
    extract_coastline_file, extract_configured_coastline,
};
pub use config::FileConfig;
pub use error::{Error, Result};
pub use geometry::{
    BoundingBox, EARTH_RADIUS_KM, do_lines_intersect, extract_polygon_coords, haversine,
    haversine_batch, line_intersection,
};
pub use interpolate::{Grid, fill_nan_2d, interpolate_nans};
