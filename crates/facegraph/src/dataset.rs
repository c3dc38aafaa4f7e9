//! Dataset records: vertices, edges and the face count they should yield.
//!
//! The JSON shape is `{ vertices: [[x, y], ..], edges: [[a, b], ..],
//! expectFaceCount, scale }`. `scale` is a display hint and is not used by
//! the graph itself.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::planar::Graph;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub vertices: Vec<[f64; 2]>,
    pub edges: Vec<[usize; 2]>,
    pub expect_face_count: usize,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

const BUILTIN: &[(&str, &str)] = &[
    ("quadGrid", include_str!("../data/quadGrid.json")),
    ("hSingle", include_str!("../data/hSingle.json")),
    ("quadWithEars", include_str!("../data/quadWithEars.json")),
    ("singleQuad", include_str!("../data/singleQuad.json")),
    ("singleTriangle", include_str!("../data/singleTriangle.json")),
    ("splitQuad", include_str!("../data/splitQuad.json")),
    ("hSplit", include_str!("../data/hSplit.json")),
    ("twoTriangles", include_str!("../data/twoTriangles.json")),
];

impl Dataset {
    pub fn from_json(s: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String, DatasetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Names of the bundled samples.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|(name, _)| *name)
    }

    pub fn builtin(name: &str) -> Result<Self, DatasetError> {
        let (_, src) = BUILTIN
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| DatasetError::Unknown(name.to_string()))?;
        Self::from_json(src)
    }

    pub fn points(&self) -> Vec<Vector2<f64>> {
        self.vertices.iter().map(|&[x, y]| Vector2::new(x, y)).collect()
    }

    pub fn build_graph(&self) -> Result<Graph, DatasetError> {
        Ok(Graph::new(self.points(), &self.edges)?)
    }

    /// Build the graph and compare its face count with `expect_face_count`.
    /// Returns the graph together with the verdict.
    pub fn check_face_count(&self) -> Result<(Graph, bool), DatasetError> {
        let g = self.build_graph()?;
        let ok = g.face_count() == self.expect_face_count;
        if !ok {
            tracing::warn!(
                expected = self.expect_face_count,
                actual = g.face_count(),
                "face count mismatch"
            );
        }
        Ok((g, ok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_matches_its_expected_count() {
        for name in Dataset::builtin_names() {
            let data = Dataset::builtin(name).unwrap();
            let (g, ok) = data.check_face_count().unwrap();
            assert!(
                ok,
                "{name}: expected {}, got {}",
                data.expect_face_count,
                g.face_count()
            );
        }
    }

    #[test]
    fn builtin_counts_follow_euler() {
        // Connected samples: bounded faces = E - V + 1.
        for name in Dataset::builtin_names() {
            let d = Dataset::builtin(name).unwrap();
            assert_eq!(d.edges.len() + 1 - d.vertices.len(), d.expect_face_count, "{name}");
        }
    }

    #[test]
    fn unknown_builtin_is_an_error() {
        assert!(matches!(
            Dataset::builtin("nope"),
            Err(DatasetError::Unknown(n)) if n == "nope"
        ));
    }

    #[test]
    fn parses_camel_case_and_defaults_scale() {
        let d = Dataset::from_json(
            r#"{"vertices": [[0,0],[1,0],[0,1]], "edges": [[0,1],[1,2],[2,0]], "expectFaceCount": 1}"#,
        )
        .unwrap();
        assert_eq!(d.expect_face_count, 1);
        assert_eq!(d.scale, 1.0);
        let back = Dataset::from_json(&d.to_json().unwrap()).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn malformed_json_and_bad_indices_are_reported() {
        assert!(matches!(
            Dataset::from_json("{\"vertices\": 3}"),
            Err(DatasetError::Json(_))
        ));
        let d = Dataset {
            vertices: vec![[0.0, 0.0], [1.0, 0.0]],
            edges: vec![[0, 5]],
            expect_face_count: 0,
            scale: 1.0,
        };
        assert!(matches!(d.build_graph(), Err(DatasetError::Graph(_))));
    }
}
