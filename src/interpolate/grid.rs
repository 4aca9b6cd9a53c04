use super::delaunay::{barycentric, triangulate};

/// Row-major 2-D grid of `f64`, NaN marks a missing cell
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid {
    /// Grid of `rows` x `cols` filled with `value`
    pub fn new(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Build from row-major data, `None` if the length does not match the shape
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    /// Build from nested rows, `None` if rows are ragged
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Self {
            rows: rows.len(),
            cols,
            data: rows.concat(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Number of non-NaN cells
    pub fn count_valid(&self) -> usize {
        self.data.iter().filter(|v| !v.is_nan()).count()
    }
}

/// Fill NaN cells by linear interpolation over the valid cells
///
/// Valid cells are treated as scattered samples at (col, row) and
/// triangulated; each NaN cell takes the barycentric blend of its enclosing
/// triangle. Cells outside the convex hull of the valid cells stay NaN and
/// valid cells are copied unchanged.
///
/// With fewer than three valid cells, or when they are all collinear, the
/// grid is returned unchanged.
pub fn fill_nan_2d(grid: &Grid) -> Grid {
    let mut points = Vec::new();
    let mut values = Vec::new();

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let v = grid.data[row * grid.cols + col];
            if !v.is_nan() {
                points.push((col as f64, row as f64));
                values.push(v);
            }
        }
    }

    if points.len() < 3 {
        return grid.clone();
    }

    let triangles = triangulate(&points);
    if triangles.is_empty() {
        log::warn!(
            "fill_nan_2d: {} valid cells are collinear, grid left unfilled",
            points.len()
        );
        return grid.clone();
    }

    let mut out = grid.clone();
    let mut filled = vec![false; grid.data.len()];

    // Small tolerance so cells on shared edges are not missed
    const EPS: f64 = -1e-10;

    // Valid cells sit on integer (col, row), so each triangle only needs the
    // cells inside its bounding box
    for tri in &triangles {
        let (p0, p1, p2) = (points[tri.a], points[tri.b], points[tri.c]);
        let col_lo = p0.0.min(p1.0).min(p2.0) as usize;
        let col_hi = p0.0.max(p1.0).max(p2.0) as usize;
        let row_lo = p0.1.min(p1.1).min(p2.1) as usize;
        let row_hi = p0.1.max(p1.1).max(p2.1) as usize;

        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                let idx = row * grid.cols + col;
                if filled[idx] || !grid.data[idx].is_nan() {
                    continue;
                }

                let (u, v, w) = barycentric((col as f64, row as f64), p0, p1, p2);
                if u >= EPS && v >= EPS && w >= EPS {
                    out.data[idx] = u * values[tri.a] + v * values[tri.b] + w * values[tri.c];
                    filled[idx] = true;
                }
            }
        }
    }

    out
}
