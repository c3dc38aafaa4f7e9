//! Breadth-first traversal over face adjacency (shared, still-twinned edges).

use std::collections::VecDeque;

use crate::error::GraphError;

use super::face::FaceView;
use super::types::{FaceId, Graph};

impl Graph {
    /// Visit every face reachable from `start` exactly once, with its hop
    /// distance (`0` for `start`). Within a level faces come in discovery
    /// order.
    pub fn bfs_face<F>(&self, start: FaceId, mut visit: F) -> Result<(), GraphError>
    where
        F: FnMut(FaceView<'_>, usize),
    {
        if start.0 >= self.faces.len() {
            return Err(GraphError::FaceOutOfRange {
                index: start.0,
                len: self.faces.len(),
            });
        }
        let mut seen = vec![false; self.faces.len()];
        let mut queue = VecDeque::from([(start, 0usize)]);
        seen[start.0] = true;
        while let Some((id, level)) = queue.pop_front() {
            let Some(face) = self.face(id) else {
                continue;
            };
            visit(face, level);
            for nb in face.adjacent_face_indices() {
                if !seen[nb.0] {
                    seen[nb.0] = true;
                    queue.push_back((nb, level + 1));
                }
            }
        }
        Ok(())
    }

    /// Reachable faces grouped by BFS level.
    pub fn bfs_levels(&self, start: FaceId) -> Result<Vec<Vec<FaceId>>, GraphError> {
        let mut levels: Vec<Vec<FaceId>> = Vec::new();
        self.bfs_face(start, |face, level| {
            if levels.len() <= level {
                levels.resize_with(level + 1, Vec::new);
            }
            levels[level].push(face.index());
        })?;
        Ok(levels)
    }
}
