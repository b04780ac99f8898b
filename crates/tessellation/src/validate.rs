//! Edge-adjacency statistics for a triangle mesh.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::TriangleMesh;

/// Counts derived from undirected edge adjacency.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MeshStats {
    /// Edges with exactly one adjacent triangle.
    pub boundary_edges: usize,
    /// Edges with more than two adjacent triangles.
    pub non_manifold_edges: usize,
}

impl MeshStats {
    /// A mesh with no boundary edges is closed. An unstitched Möbius strip
    /// mesh is expected to be open along the whole grid perimeter.
    pub fn is_watertight(&self) -> bool {
        self.boundary_edges == 0
    }
}

/// Count boundary and non-manifold edges.
pub fn validate_mesh(mesh: &TriangleMesh) -> MeshStats {
    let mut edge_uses: HashMap<(u32, u32), u32> = HashMap::new();
    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = if a < b { (a, b) } else { (b, a) };
            *edge_uses.entry(key).or_insert(0) += 1;
        }
    }

    MeshStats {
        boundary_edges: edge_uses.values().filter(|&&uses| uses == 1).count(),
        non_manifold_edges: edge_uses.values().filter(|&&uses| uses > 2).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tessellate_strip;
    use mobius_kernel::geometry::point::Point3d;
    use mobius_kernel::geometry::vector::Vec3;
    use mobius_kernel::strip::{MobiusStrip, StripParams};

    #[test]
    fn test_single_triangle_is_all_boundary() {
        let mut mesh = TriangleMesh::new();
        let a = mesh.add_vertex(Point3d::new(0.0, 0.0, 0.0), Vec3::Z);
        let b = mesh.add_vertex(Point3d::new(1.0, 0.0, 0.0), Vec3::Z);
        let c = mesh.add_vertex(Point3d::new(0.0, 1.0, 0.0), Vec3::Z);
        mesh.add_triangle(a, b, c);

        let stats = validate_mesh(&mesh);
        assert_eq!(stats.boundary_edges, 3);
        assert_eq!(stats.non_manifold_edges, 0);
        assert!(!stats.is_watertight());
    }

    #[test]
    fn test_strip_mesh_is_open_along_the_grid_perimeter() {
        let n = 12;
        let strip = MobiusStrip::new(StripParams {
            resolution: n,
            ..StripParams::default()
        })
        .unwrap();
        let stats = validate_mesh(&tessellate_strip(&strip));
        // Interior edges (including the cell diagonals) are shared by two
        // triangles; only the grid perimeter stays single-sided.
        assert_eq!(stats.boundary_edges, 4 * (n - 1));
        assert_eq!(stats.non_manifold_edges, 0);
        assert!(!stats.is_watertight());
    }

    #[test]
    fn test_empty_mesh_has_no_edges() {
        let stats = validate_mesh(&TriangleMesh::new());
        assert_eq!(stats.boundary_edges, 0);
        assert_eq!(stats.non_manifold_edges, 0);
        assert!(stats.is_watertight());
    }
}
