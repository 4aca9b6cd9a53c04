//! Delaunay triangulation of scattered (x, y) points
//!
//! Incremental Bowyer-Watson with a super-triangle, plus barycentric
//! weights for linear interpolation inside a triangle.

use std::collections::HashMap;

/// Triangle as indices into the input point slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    fn has_vertex_below(&self, n: usize) -> bool {
        self.a < n || self.b < n || self.c < n
    }
}

/// Working triangle: counter-clockwise vertices and, for each vertex, the
/// neighbour across the opposite edge
#[derive(Debug, Clone, Copy)]
struct Node {
    v: [usize; 3],
    n: [Option<usize>; 3],
}

impl Node {
    /// Edge opposite vertex `i`, in counter-clockwise order
    fn edge(&self, i: usize) -> (usize, usize) {
        (self.v[(i + 1) % 3], self.v[(i + 2) % 3])
    }
}

/// Twice the signed area of (a, b, c); positive when counter-clockwise
fn orient(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

/// True if `p` lies inside or on the circumcircle of counter-clockwise (a, b, c)
fn in_circumcircle(a: (f64, f64), b: (f64, f64), c: (f64, f64), p: (f64, f64)) -> bool {
    let (adx, ady) = (a.0 - p.0, a.1 - p.1);
    let (bdx, bdy) = (b.0 - p.0, b.1 - p.1);
    let (cdx, cdy) = (c.0 - p.0, c.1 - p.1);

    let det = (adx * adx + ady * ady) * (bdx * cdy - cdx * bdy)
        + (bdx * bdx + bdy * bdy) * (cdx * ady - adx * cdy)
        + (cdx * cdx + cdy * cdy) * (adx * bdy - bdx * ady);

    det >= 0.0
}

/// Barycentric weights (u, v, w) of `p` in triangle (p0, p1, p2)
///
/// The interpolated value is `u * z0 + v * z1 + w * z2`. Degenerate
/// triangles produce NaN weights.
pub fn barycentric(
    p: (f64, f64),
    p0: (f64, f64),
    p1: (f64, f64),
    p2: (f64, f64),
) -> (f64, f64, f64) {
    let (v0x, v0y) = (p1.0 - p0.0, p1.1 - p0.1);
    let (v1x, v1y) = (p2.0 - p0.0, p2.1 - p0.1);
    let (v2x, v2y) = (p.0 - p0.0, p.1 - p0.1);

    let dot00 = v0x * v0x + v0y * v0y;
    let dot01 = v0x * v1x + v0y * v1y;
    let dot02 = v0x * v2x + v0y * v2y;
    let dot11 = v1x * v1x + v1y * v1y;
    let dot12 = v1x * v2x + v1y * v2y;

    let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
    let v = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let w = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    (1.0 - v - w, v, w)
}

/// Triangulate `points`
///
/// Returns an empty vector for fewer than three points or when every point
/// is collinear. Each insertion walks from the previous one to the enclosing
/// triangle and grows the cavity through neighbour links, so points that
/// arrive in spatial order (grid rows) cost roughly constant time each.
pub fn triangulate(points: &[(f64, f64)]) -> Vec<Triangle> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;

    for &(x, y) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let dx = max_x - min_x;
    let dy = max_y - min_y;
    let delta = dx.max(dy).max(1.0);
    let mid_x = min_x + 0.5 * dx;

    // Super-triangle occupies indices 0..3; it must be large enough that
    // hull edges of the real points survive its removal
    let mut vertices: Vec<(f64, f64)> = Vec::with_capacity(points.len() + 3);
    vertices.push((mid_x - 100.0 * delta, min_y - 10.0 * delta));
    vertices.push((mid_x + 100.0 * delta, min_y - 10.0 * delta));
    vertices.push((mid_x, max_y + 100.0 * delta));

    let mut nodes = vec![Node {
        v: [0, 1, 2],
        n: [None; 3],
    }];
    // Cavity membership, stamped with the vertex being inserted
    let mut mark: Vec<usize> = vec![0];
    let mut last = 0;

    let mut cavity: Vec<usize> = Vec::new();
    let mut boundary: Vec<(usize, usize, Option<usize>)> = Vec::new();
    let mut by_start: HashMap<usize, usize> = HashMap::new();

    for &point in points {
        let vi = vertices.len();
        vertices.push(point);

        let start = locate(&nodes, &vertices, last, point);

        // Grow the cavity from the enclosing triangle. A neighbour whose
        // shared edge does not face the new point is taken in as well, which
        // keeps the cavity star-shaped when rounding blurs the circle test.
        cavity.clear();
        cavity.push(start);
        mark[start] = vi;
        let mut k = 0;
        while k < cavity.len() {
            let t = cavity[k];
            k += 1;
            for i in 0..3 {
                let Some(nb) = nodes[t].n[i] else { continue };
                if mark[nb] == vi {
                    continue;
                }
                let (ea, eb) = nodes[t].edge(i);
                let [a, b, c] = nodes[nb].v;
                if in_circumcircle(vertices[a], vertices[b], vertices[c], point)
                    || orient(vertices[ea], vertices[eb], point) <= 0.0
                {
                    mark[nb] = vi;
                    cavity.push(nb);
                }
            }
        }

        boundary.clear();
        for &t in &cavity {
            for i in 0..3 {
                let outer = nodes[t].n[i].filter(|&nb| mark[nb] != vi);
                if outer.is_some() || nodes[t].n[i].is_none() {
                    let (ea, eb) = nodes[t].edge(i);
                    boundary.push((ea, eb, outer));
                }
            }
        }

        // Fan the cavity boundary around the new vertex, reusing freed slots
        by_start.clear();
        for (j, &(ea, eb, outer)) in boundary.iter().enumerate() {
            let id = match cavity.get(j) {
                Some(&slot) => slot,
                None => {
                    nodes.push(Node {
                        v: [0; 3],
                        n: [None; 3],
                    });
                    mark.push(0);
                    nodes.len() - 1
                }
            };
            nodes[id] = Node {
                v: [ea, eb, vi],
                n: [None, None, outer],
            };
            if let Some(o) = outer
                && let Some(m) = (0..3).find(|&m| nodes[o].v[m] != ea && nodes[o].v[m] != eb)
            {
                nodes[o].n[m] = Some(id);
            }
            by_start.insert(ea, id);
        }

        for &id in by_start.values() {
            let b = nodes[id].v[1];
            if let Some(&next) = by_start.get(&b) {
                nodes[id].n[0] = Some(next);
                nodes[next].n[1] = Some(id);
            }
        }

        last = by_start.get(&boundary[0].0).copied().unwrap_or(start);
    }

    nodes
        .into_iter()
        .map(|node| Triangle {
            a: node.v[0],
            b: node.v[1],
            c: node.v[2],
        })
        .filter(|t| !t.has_vertex_below(3))
        .map(|t| Triangle {
            a: t.a - 3,
            b: t.b - 3,
            c: t.c - 3,
        })
        .filter(|t| orient(points[t.a], points[t.b], points[t.c]).abs() > 1e-12)
        .collect()
}

/// Walk from triangle `from` toward `p` and return a triangle containing it
///
/// Falls back to a full scan if the walk does not settle, which only rounding
/// on near-degenerate input can cause.
fn locate(nodes: &[Node], vertices: &[(f64, f64)], from: usize, p: (f64, f64)) -> usize {
    let mut t = from;
    for _ in 0..=nodes.len() {
        let step = (0..3).find_map(|i| {
            let (a, b) = nodes[t].edge(i);
            if orient(vertices[a], vertices[b], p) < 0.0 {
                nodes[t].n[i]
            } else {
                None
            }
        });
        match step {
            Some(next) => t = next,
            None => return t,
        }
    }

    nodes
        .iter()
        .position(|node| {
            (0..3).all(|i| {
                let (a, b) = node.edge(i);
                orient(vertices[a], vertices[b], p) >= 0.0
            })
        })
        .unwrap_or(t)
}
