use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::diff;
use crate::geometry::point::Point3d;
use crate::geometry::vector::Vec3;
use crate::grid::{Grid2, linspace};

/// Construction parameters for a Möbius strip model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripParams {
    /// Centerline radius.
    pub radius: f64,
    /// Strip width (the `v` parameter spans [-width/2, width/2]).
    pub width: f64,
    /// Grid samples per parameter axis.
    pub resolution: usize,
}

impl Default for StripParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width: 0.2,
            resolution: 200,
        }
    }
}

/// Structured failure information for strip construction and measures.
#[derive(Debug, Clone, Error)]
pub enum StripError {
    #[error("resolution is {provided}, need at least {required} samples per axis")]
    InsufficientResolution { required: usize, provided: usize },
}

/// A Möbius strip sampled on an n×n parameter grid.
///
/// The parameter grid spans `u` in [0, 2π] along the row axis and `v` in
/// [-w/2, w/2] along the column axis; the point grid is the image of
///
/// ```text
/// x(u,v) = (R + v·cos(u/2))·cos(u)
/// y(u,v) = (R + v·cos(u/2))·sin(u)
/// z(u,v) = v·sin(u/2)
/// ```
///
/// The half-angle term gives the sheet its single half-twist. The seam at
/// `u = 0` / `u = 2π` reconnects only up to a flip in the sign of `v` and is
/// not glued: the grid simply stops at 2π, so the sampled mesh stays open.
///
/// All grids are built once at construction and never mutated; the scalar
/// measures are recomputed from them on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobiusStrip {
    params: StripParams,
    u: Grid2,
    v: Grid2,
    x: Grid2,
    y: Grid2,
    z: Grid2,
}

/// The parametric mapping, shared by grid construction and edge sampling.
fn surface_point(radius: f64, u: f64, v: f64) -> Point3d {
    let half = u / 2.0;
    let ring = radius + v * half.cos();
    Point3d::new(ring * u.cos(), ring * u.sin(), v * half.sin())
}

/// Analytic tangent vectors (∂/∂u, ∂/∂v) of the mapping.
fn surface_tangents(radius: f64, u: f64, v: f64) -> (Vec3, Vec3) {
    let half = u / 2.0;
    let ring = radius + v * half.cos();
    let r_u = Vec3::new(
        -ring * u.sin() - 0.5 * v * half.sin() * u.cos(),
        ring * u.cos() - 0.5 * v * half.sin() * u.sin(),
        0.5 * v * half.cos(),
    );
    let r_v = Vec3::new(half.cos() * u.cos(), half.cos() * u.sin(), half.sin());
    (r_u, r_v)
}

impl MobiusStrip {
    /// Build the parameter and point grids for the given parameters.
    ///
    /// Only the resolution is validated: a grid needs two samples per axis
    /// to have a spacing at all. Non-positive radius or width are accepted
    /// and produce degenerate or self-intersecting geometry.
    #[instrument]
    pub fn new(params: StripParams) -> Result<Self, StripError> {
        if params.resolution < 2 {
            return Err(StripError::InsufficientResolution {
                required: 2,
                provided: params.resolution,
            });
        }
        let n = params.resolution;
        let us = linspace(0.0, TAU, n);
        let vs = linspace(-params.width / 2.0, params.width / 2.0, n);

        let u = Grid2::from_fn(n, n, |i, _| us[i]);
        let v = Grid2::from_fn(n, n, |_, j| vs[j]);
        let mut x = Grid2::zeros(n, n);
        let mut y = Grid2::zeros(n, n);
        let mut z = Grid2::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let p = surface_point(params.radius, us[i], vs[j]);
                x.set(i, j, p.x);
                y.set(i, j, p.y);
                z.set(i, j, p.z);
            }
        }

        info!(
            radius = params.radius,
            width = params.width,
            resolution = n,
            "sampled Möbius strip grids"
        );
        Ok(Self { params, u, v, x, y, z })
    }

    pub fn params(&self) -> StripParams {
        self.params
    }

    pub fn radius(&self) -> f64 {
        self.params.radius
    }

    pub fn width(&self) -> f64 {
        self.params.width
    }

    pub fn resolution(&self) -> usize {
        self.params.resolution
    }

    pub fn u(&self) -> &Grid2 {
        &self.u
    }

    pub fn v(&self) -> &Grid2 {
        &self.v
    }

    pub fn x(&self) -> &Grid2 {
        &self.x
    }

    pub fn y(&self) -> &Grid2 {
        &self.y
    }

    pub fn z(&self) -> &Grid2 {
        &self.z
    }

    /// Evaluate the parametric mapping at arbitrary (u, v).
    pub fn evaluate(&self, u: f64, v: f64) -> Point3d {
        surface_point(self.params.radius, u, v)
    }

    /// Unit surface normal from the analytic tangents.
    ///
    /// Used for mesh shading only; the area quadrature differentiates the
    /// stored grids numerically instead.
    pub fn normal_at(&self, u: f64, v: f64) -> Vec3 {
        let (r_u, r_v) = surface_tangents(self.params.radius, u, v);
        r_u.cross(&r_v).normalized().unwrap_or(Vec3::Z)
    }

    /// Approximate the total surface area.
    ///
    /// Differentiates the stored point grids with the finite-difference
    /// stencils in [`crate::diff`], takes the cross product of the two
    /// tangent vectors at every node, and Riemann-sums the magnitudes:
    /// `area ≈ Σ |r_u × r_v| · du · dv`, with every cell sampled at its
    /// node rather than integrated with a higher-order rule.
    ///
    /// A pure function of the stored grids and spacings. A zero width makes
    /// the v-spacing zero and the quotient 0/0; the resulting NaN is
    /// propagated, not guarded.
    #[instrument(skip(self))]
    pub fn surface_area(&self) -> Result<f64, StripError> {
        let n = self.params.resolution;
        if n < 3 {
            return Err(StripError::InsufficientResolution {
                required: 3,
                provided: n,
            });
        }
        let du = TAU / (n - 1) as f64;
        let dv = self.params.width / (n - 1) as f64;

        let xu = diff::partial_u(&self.x, du);
        let xv = diff::partial_v(&self.x, dv);
        let yu = diff::partial_u(&self.y, du);
        let yv = diff::partial_v(&self.y, dv);
        let zu = diff::partial_u(&self.z, du);
        let zv = diff::partial_v(&self.z, dv);

        let mut sum = 0.0;
        for i in 0..n {
            for j in 0..n {
                let cx = yu.at(i, j) * zv.at(i, j) - zu.at(i, j) * yv.at(i, j);
                let cy = zu.at(i, j) * xv.at(i, j) - xu.at(i, j) * zv.at(i, j);
                let cz = xu.at(i, j) * yv.at(i, j) - yu.at(i, j) * xv.at(i, j);
                sum += (cx * cx + cy * cy + cz * cz).sqrt();
            }
        }
        let area = sum * du * dv;
        debug!(area, "area quadrature complete");
        Ok(area)
    }

    /// Approximate the total boundary length.
    ///
    /// Re-samples the boundary curve at `v = +w/2` with `n` evenly spaced
    /// `u` values (independent of the stored grid), sums the n-1 segment
    /// lengths of the polyline, and doubles the result for the opposite
    /// boundary at `v = -w/2`. The doubling leans on the surface's symmetry
    /// under `v → -v` instead of sampling the second curve; at zero width
    /// both boundaries coincide with the centerline and the doubled result
    /// still approximates `4πR`.
    pub fn edge_length(&self) -> f64 {
        let half_width = self.params.width / 2.0;
        let points: Vec<Point3d> = linspace(0.0, TAU, self.params.resolution)
            .iter()
            .map(|&u| surface_point(self.params.radius, u, half_width))
            .collect();
        let one_edge: f64 = points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum();
        one_edge * 2.0
    }
}
