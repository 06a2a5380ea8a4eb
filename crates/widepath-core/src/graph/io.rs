//! Graph documents on disk
//!
//! A graph file lists the vertex count and every undirected edge once:
//!
//! ```json
//! { "vertices": 4, "edges": [ { "from": 0, "to": 1, "weight": 10.0 } ] }
//! ```
//!
//! The decoder is chosen from the file extension: `.json`, `.toml`,
//! `.yaml` / `.yml`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Graph;
use crate::error::{Result, WidepathError};

/// Serialized form of a [`Graph`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    pub vertices: usize,
    #[serde(default)]
    pub edges: Vec<GraphFileEdge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphFileEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Json,
    Toml,
    Yaml,
}

impl Encoding {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Encoding::Json),
            Some("toml") => Ok(Encoding::Toml),
            Some("yaml") | Some("yml") => Ok(Encoding::Yaml),
            _ => Err(WidepathError::UnsupportedGraphFile {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl GraphFile {
    /// Build the adjacency lists, validating every edge
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = Graph::with_vertices(self.vertices);
        for edge in self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }
        Ok(graph)
    }

    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph
                .edges()
                .map(|e| GraphFileEdge {
                    from: e.from,
                    to: e.to,
                    weight: e.weight,
                })
                .collect(),
        }
    }
}

/// Load a graph from a JSON, TOML or YAML file
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<Graph> {
    let encoding = Encoding::from_path(path)?;
    let content = fs::read_to_string(path)
        .map_err(|e| WidepathError::io_operation("read graph", path.display(), e))?;

    let file: GraphFile = match encoding {
        Encoding::Json => serde_json::from_str(&content)?,
        Encoding::Toml => toml::from_str(&content)?,
        Encoding::Yaml => serde_yaml::from_str(&content)?,
    };

    let graph = file.into_graph()?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph_loaded"
    );
    Ok(graph)
}

/// Write a graph to a JSON, TOML or YAML file
pub fn save_graph(path: &Path, graph: &Graph) -> Result<()> {
    let file = GraphFile::from_graph(graph);
    let content = match Encoding::from_path(path)? {
        Encoding::Json => serde_json::to_string_pretty(&file)?,
        Encoding::Toml => toml::to_string_pretty(&file)
            .map_err(|e| WidepathError::Other(format!("failed to serialize graph: {}", e)))?,
        Encoding::Yaml => serde_yaml::to_string(&file)?,
    };
    fs::write(path, content)
        .map_err(|e| WidepathError::io_operation("write graph", path.display(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Graph {
        let mut g = Graph::with_vertices(3);
        g.add_edge(0, 1, 2.5).unwrap();
        g.add_edge(1, 2, 7.0).unwrap();
        g
    }

    #[test]
    fn test_save_and_load_each_encoding() {
        let dir = tempdir().unwrap();
        for name in ["g.json", "g.toml", "g.yaml", "g.yml"] {
            let path = dir.path().join(name);
            save_graph(&path, &sample()).unwrap();
            let loaded = load_graph(&path).unwrap();
            assert_eq!(loaded, sample(), "encoding {}", name);
        }
    }

    #[test]
    fn test_load_json_literal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.json");
        fs::write(
            &path,
            r#"{"vertices": 4, "edges": [
                {"from": 0, "to": 1, "weight": 10},
                {"from": 1, "to": 2, "weight": 5},
                {"from": 2, "to": 3, "weight": 8},
                {"from": 3, "to": 0, "weight": 3}
            ]}"#,
        )
        .unwrap();

        let g = load_graph(&path).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn test_load_toml_without_edges() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "vertices = 3\n").unwrap();

        let g = load_graph(&path).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.csv");
        fs::write(&path, "0,1,1").unwrap();
        assert!(matches!(
            load_graph(&path),
            Err(WidepathError::UnsupportedGraphFile { .. })
        ));
    }

    #[test]
    fn test_invalid_edge_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{"vertices": 2, "edges": [{"from": 0, "to": 5, "weight": 1}]}"#,
        )
        .unwrap();
        assert!(matches!(
            load_graph(&path),
            Err(WidepathError::OutOfRange { vertex: 5, len: 2 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_graph(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(
            err,
            WidepathError::FailedOperationWithTarget { .. }
        ));
        assert_eq!(err.exit_code(), crate::error::ExitCode::Failure);
        assert!(err.to_string().contains("read graph"));
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent").join("g.json");
        let err = save_graph(&path, &sample()).unwrap_err();
        assert!(matches!(
            err,
            WidepathError::FailedOperationWithTarget { .. }
        ));
        assert!(err.to_string().contains("write graph"));
    }
}
