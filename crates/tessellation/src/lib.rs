use mobius_kernel::geometry::point::Point3d;
use mobius_kernel::geometry::vector::Vec3;
use mobius_kernel::strip::MobiusStrip;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

mod validate;

pub use validate::{validate_mesh, MeshStats};

/// A triangle mesh for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Vertex normals [nx, ny, nz, ...]
    pub normals: Vec<f32>,
    /// Triangle indices [i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn add_vertex(&mut self, pos: Point3d, normal: Vec3) -> u32 {
        let idx = self.vertex_count() as u32;
        self.positions.push(pos.x as f32);
        self.positions.push(pos.y as f32);
        self.positions.push(pos.z as f32);
        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);
        idx
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }
}

/// Triangulate a sampled Möbius strip into a renderable mesh.
///
/// Consumes the strip's stored point grids directly (no re-evaluation of
/// the mapping); shading normals come from the analytic surface normal at
/// the stored parameter pairs. Each of the (n-1)² grid cells becomes two
/// triangles with consistent winding across the sheet. The seam is left
/// unstitched, so the mesh is open along the grid perimeter.
#[instrument(skip(strip), fields(resolution = strip.resolution()))]
pub fn tessellate_strip(strip: &MobiusStrip) -> TriangleMesh {
    let n = strip.resolution();
    let mut mesh = TriangleMesh::new();

    let mut index_grid = vec![vec![0u32; n]; n];
    for i in 0..n {
        for j in 0..n {
            let pos = Point3d::new(strip.x().at(i, j), strip.y().at(i, j), strip.z().at(i, j));
            let normal = strip.normal_at(strip.u().at(i, j), strip.v().at(i, j));
            index_grid[i][j] = mesh.add_vertex(pos, normal);
        }
    }

    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let i00 = index_grid[i][j];
            let i10 = index_grid[i + 1][j];
            let i01 = index_grid[i][j + 1];
            let i11 = index_grid[i + 1][j + 1];

            mesh.add_triangle(i00, i10, i11);
            mesh.add_triangle(i00, i11, i01);
        }
    }

    info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "tessellated Möbius strip"
    );
    mesh
}
