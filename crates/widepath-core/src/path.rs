//! Widest-path results

use serde::{Serialize, Serializer};

/// A path from source to target together with its bandwidth.
///
/// The bandwidth is the minimum edge weight along the path and is the same
/// value for every vertex on it; a single-vertex path has infinite
/// bandwidth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidestPath {
    /// Vertices ordered source -> target
    pub vertices: Vec<usize>,
    #[serde(serialize_with = "serialize_bandwidth")]
    pub bandwidth: f64,
}

impl WidestPath {
    /// Build a path from a target -> source walk
    pub(crate) fn from_reversed(mut walk: Vec<usize>, bandwidth: f64) -> Self {
        walk.reverse();
        Self {
            vertices: walk,
            bandwidth,
        }
    }

    pub fn source(&self) -> usize {
        self.vertices[0]
    }

    pub fn target(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of vertices on the path
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Consecutive `(u, v)` vertex pairs along the path
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Render a bandwidth for display: `inf` for the source itself
pub fn format_bandwidth(bandwidth: f64) -> String {
    if bandwidth.is_infinite() {
        "inf".to_string()
    } else {
        format!("{}", bandwidth)
    }
}

/// JSON has no infinity; emit the string `"inf"` instead
pub fn serialize_bandwidth<S: Serializer>(bandwidth: &f64, s: S) -> Result<S::Ok, S::Error> {
    if bandwidth.is_infinite() {
        s.serialize_str("inf")
    } else {
        s.serialize_f64(*bandwidth)
    }
}

/// Like [`serialize_bandwidth`]; unreachable becomes `null`
pub fn serialize_optional_bandwidth<S: Serializer>(
    bandwidth: &Option<f64>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match bandwidth {
        Some(bw) => serialize_bandwidth(bw, s),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reversed_orders_source_first() {
        let path = WidestPath::from_reversed(vec![2, 1, 0], 5.0);
        assert_eq!(path.vertices, vec![0, 1, 2]);
        assert_eq!(path.source(), 0);
        assert_eq!(path.target(), 2);
        assert_eq!(path.hops(), 2);
        assert_eq!(path.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_single_vertex_path() {
        let path = WidestPath::from_reversed(vec![3], f64::INFINITY);
        assert_eq!(path.len(), 1);
        assert_eq!(path.hops(), 0);
        assert_eq!(path.edges().count(), 0);
        assert_eq!(format_bandwidth(path.bandwidth), "inf");
    }

    #[test]
    fn test_json_bandwidth() {
        let finite = WidestPath::from_reversed(vec![1, 0], 2.5);
        let json = serde_json::to_value(&finite).unwrap();
        assert_eq!(json["bandwidth"], 2.5);
        assert_eq!(json["vertices"], serde_json::json!([0, 1]));

        let infinite = WidestPath::from_reversed(vec![0], f64::INFINITY);
        let json = serde_json::to_value(&infinite).unwrap();
        assert_eq!(json["bandwidth"], "inf");
    }
}
