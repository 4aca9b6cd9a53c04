pub mod delaunay;
pub mod grid;
pub mod linear;

pub use grid::{Grid, fill_nan_2d};
pub use linear::interpolate_nans;
