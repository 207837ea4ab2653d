//! The JSON mesh document: a vertex table (`vs`) and an edge list (`dcs`)

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RasterError;

pub type VertexId = u64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Texture-space position, normalized to 0.0-1.0 on both axes
    pub tex: [f32; 2],
}

/// One `dcs` entry: `[[v1, v2], extra]`.
///
/// The authoring tool stores a per-edge scalar in `extra`; rasterization
/// never reads it, so any JSON value is accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord(pub [VertexId; 2], pub serde_json::Value);

impl EdgeRecord {
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.0[0], self.0[1])
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshDocument {
    /// Vertices keyed by the decimal form of their id
    pub vs: HashMap<String, Vertex>,
    pub dcs: Vec<EdgeRecord>,
}

impl MeshDocument {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RasterError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| RasterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::from_slice(&data)?;
        log::debug!(
            "Loaded {}: {} vertices, {} edges",
            path.display(),
            doc.vs.len(),
            doc.dcs.len()
        );
        Ok(doc)
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, RasterError> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, RasterError> {
        self.vs
            .get(&id.to_string())
            .ok_or(RasterError::MissingVertex(id))
    }
}

impl FromStr for MeshDocument {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}
