use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::graph::{DirectedGraph, Graph};

/// A vertex reference in a request: a raw id or a label
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexRef {
    Id(usize),
    Label(String),
}

impl fmt::Display for VertexRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexRef::Id(id) => write!(f, "{}", id),
            VertexRef::Label(label) => f.write_str(label),
        }
    }
}

/// Parameters for a search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub source: VertexRef,
    #[serde(default)]
    pub destination: Option<VertexRef>,
    /// Also enumerate every tied shortest path to `destination`
    #[serde(default)]
    pub all_paths: bool,
    /// Cap on enumerated paths; never above the server's own limit
    #[serde(default)]
    pub max_paths: Option<usize>,
}

/// Response containing search results, keyed by vertex label
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub execution_id: Uuid,
    pub source: String,
    pub destination: Option<String>,
    pub visited_destination: bool,
    pub execution_time_ms: f64,
    pub reachable: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_paths: Vec<Vec<String>>,
    /// Set when `all_paths` stopped at the path limit
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub all_paths_truncated: bool,
    pub distances: BTreeMap<String, i64>,
    pub predecessors: BTreeMap<String, Vec<String>>,
}

/// Overview of a stored graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub id: Uuid,
    pub vertex_count: usize,
    pub arc_count: usize,
    pub mapped: bool,
    pub created_at: DateTime<Utc>,
    pub searches: usize,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding an ingested graph and its search history
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: Arc<DirectedGraph>,
    pub last_result: Option<SearchResponse>,
    pub searches: usize,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: DirectedGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(graph),
            last_result: None,
            searches: 0,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            id: self.id,
            vertex_count: self.graph.vertex_count(),
            arc_count: self.graph.arc_count(),
            mapped: self.graph.is_mapped(),
            created_at: self.created_at,
            searches: self.searches,
        }
    }
}
