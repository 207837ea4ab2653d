// Meshraster - Texture-space edge rasterizer for mesh documents

pub mod error;
pub mod mesh;
pub mod render;

pub use error::RasterError;
pub use mesh::{Edge, MeshDocument, Vertex, VertexId};
pub use render::{rasterize, render_file, RasterConfig};
