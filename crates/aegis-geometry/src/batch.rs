//! Render batch partitioning and per-cell quad payloads.
//!
//! A batch is plain data; submitting it to a renderer is the host's job.

use crate::region::Region;
use aegis_core::Cell;
use serde::{Deserialize, Serialize};

/// Limits that decide how many cells fit in one batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchBudget {
    /// Hard vertex limit of a single mesh.
    pub vertex_ceiling: u32,
    /// Vertices emitted per region cell.
    pub vertices_per_cell: u32,
    /// Cells held back from the theoretical maximum.
    pub safety_margin: u32,
}

impl Default for BatchBudget {
    fn default() -> Self {
        Self {
            vertex_ceiling: 60_000,
            vertices_per_cell: 4,
            safety_margin: 8,
        }
    }
}

impl BatchBudget {
    /// `floor(vertex_ceiling / vertices_per_cell) - safety_margin`, never
    /// less than one.
    pub fn cells_per_batch(&self) -> usize {
        let per_cell = self.vertices_per_cell.max(1);
        let raw = (self.vertex_ceiling / per_cell).saturating_sub(self.safety_margin);
        raw.max(1) as usize
    }
}

/// One batch of region cells in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderBatch {
    cells: Vec<Cell>,
}

/// Quad geometry for a batch: four vertices per cell on the `y = 0`
/// plane, UVs, and two triangles per quad.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuadMesh {
    /// `[x, y, z]` positions.
    pub vertices: Vec<[f32; 3]>,
    /// `[u, v]` texture coordinates, one per vertex.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
const QUAD_TRIS: [u32; 6] = [0, 2, 1, 0, 3, 2];

impl RenderBatch {
    /// Cells in this batch.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the batch holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Build the quad payload for this batch.
    pub fn quad_mesh(&self) -> QuadMesh {
        let n = self.cells.len();
        let mut mesh = QuadMesh {
            vertices: Vec::with_capacity(n * 4),
            uvs: Vec::with_capacity(n * 4),
            indices: Vec::with_capacity(n * 6),
        };
        for cell in &self.cells {
            let base = mesh.vertices.len() as u32;
            let (x, z) = (cell.x as f32, cell.z as f32);
            mesh.vertices.extend_from_slice(&[
                [x, 0.0, z],
                [x + 1.0, 0.0, z],
                [x + 1.0, 0.0, z + 1.0],
                [x, 0.0, z + 1.0],
            ]);
            mesh.uvs.extend_from_slice(&QUAD_UVS);
            mesh.indices.extend(QUAD_TRIS.iter().map(|i| base + i));
        }
        mesh
    }
}

/// Split the region into batches of at most
/// [`BatchBudget::cells_per_batch`] cells, scanning its rectangle in
/// row-major order.
pub fn partition(region: &Region, budget: &BatchBudget) -> Vec<RenderBatch> {
    let Some(rect) = region.rect() else {
        return Vec::new();
    };
    let cap = budget.cells_per_batch();
    let mut batches = Vec::new();
    let mut current = Vec::with_capacity(cap.min(region.len()));

    for cell in rect.iter_row_major().filter(|&c| region.contains(c)) {
        current.push(cell);
        if current.len() == cap {
            batches.push(RenderBatch {
                cells: std::mem::take(&mut current),
            });
        }
    }
    if !current.is_empty() {
        batches.push(RenderBatch { cells: current });
    }
    batches
}
