pub mod diff;
pub mod geometry;
pub mod grid;
pub mod strip;

// Re-export the main types at crate root for convenience.
pub use geometry::point::Point3d;
pub use geometry::vector::Vec3;
pub use grid::Grid2;
pub use strip::{MobiusStrip, StripError, StripParams};
