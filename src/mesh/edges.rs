//! Resolving `dcs` records into texture-space segments

use super::document::MeshDocument;
use crate::error::RasterError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: [f32; 2],
    pub to: [f32; 2],
}

impl MeshDocument {
    /// Resolve every edge in `dcs` order.
    ///
    /// Fails on the first record whose endpoint is absent from `vs`.
    pub fn edges(&self) -> Result<Vec<Edge>, RasterError> {
        self.dcs
            .iter()
            .map(|record| -> Result<Edge, RasterError> {
                let (v1, v2) = record.endpoints();
                Ok(Edge {
                    from: self.vertex(v1)?.tex,
                    to: self.vertex(v2)?.tex,
                })
            })
            .collect()
    }
}
