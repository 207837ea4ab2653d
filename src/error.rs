use std::path::PathBuf;

use thiserror::Error;

use crate::mesh::VertexId;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid mesh document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Edge references unknown vertex {0}")]
    MissingVertex(VertexId),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),
}
