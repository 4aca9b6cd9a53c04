pub mod bounds;
pub mod distance;
pub mod intersection;
pub mod polygon;

pub use bounds::BoundingBox;
pub use distance::{
    EARTH_RADIUS_KM, haversine, haversine_batch, haversine_batch_with_radius,
    haversine_with_radius,
};
pub use intersection::{do_lines_intersect, line_intersection};
pub use polygon::extract_polygon_coords;
