use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{Duration, Utc};
use log::{info, warn};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::DirectedGraph;
use crate::io;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    max_sessions: usize,
    session_timeout: Duration,
    max_paths: usize,
    max_vertices: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_limits(1000, 60)
    }

    /// State that keeps at most `max_sessions` graphs, each for at most
    /// `session_timeout_minutes`.
    pub fn with_limits(max_sessions: usize, session_timeout_minutes: u64) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
            session_timeout: Duration::minutes(session_timeout_minutes.min(u32::MAX as u64) as i64),
            max_paths: 1000,
            max_vertices: io::DEFAULT_MAX_VERTICES,
        }
    }

    /// Caps the number of tied paths one search may enumerate.
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    /// Caps the number of vertex slots an uploaded graph may create.
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_store_unavailable",
                "Session store is unavailable".to_string(),
            )
        })
    }

    /// Drops expired sessions, then the oldest ones until there is room.
    fn evict(&self, sessions: &mut HashMap<Uuid, Session>) {
        let cutoff = Utc::now() - self.session_timeout;
        sessions.retain(|_, s| s.created_at >= cutoff);
        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.id)
            else {
                break;
            };
            warn!("session limit reached, evicting {}", oldest);
            sessions.remove(&oldest);
        }
    }

    fn graph(&self, session_id: Uuid) -> Result<Arc<DirectedGraph>, ApiError> {
        let sessions = self.lock()?;
        sessions
            .get(&session_id)
            .map(|s| Arc::clone(&s.graph))
            .ok_or_else(session_not_found)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph).delete(delete_graph))
        .route("/api/graphs/:session_id/export", get(export_graph))
        .route("/api/graphs/:session_id/search", post(search_graph))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

/// Ingest a graph in the text format
pub async fn create_graph(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<GraphSummary>), ApiError> {
    let graph = io::Importer::new()
        .with_max_vertices(state.max_vertices)
        .import_str(&body)
        .map_err(|e| domain_error(&e.error))?;
    let session = Session::new(graph);
    let summary = session.summary();

    {
        let mut sessions = state.lock()?;
        state.evict(&mut sessions);
        sessions.insert(session.id, session);
    }

    info!(
        "stored graph {} ({} vertices, {} arcs)",
        summary.id, summary.vertex_count, summary.arc_count
    );
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Get the summary of a stored graph
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<GraphSummary>, ApiError> {
    let sessions = state.lock()?;
    sessions
        .get(&session_id)
        .map(|s| Json(s.summary()))
        .ok_or_else(session_not_found)
}

/// Forget a stored graph
pub async fn delete_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.lock()?;
    match sessions.remove(&session_id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(session_not_found()),
    }
}

/// Export a stored graph back to the text format
pub async fn export_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<String, ApiError> {
    let graph = state.graph(session_id)?;
    io::to_text(&*graph).map_err(|e| domain_error(&e))
}

/// Run a shortest path search on a stored graph
pub async fn search_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let graph = state.graph(session_id)?;

    let source = resolve(&graph, &request.source)?;
    let destination = request
        .destination
        .as_ref()
        .map(|d| resolve(&graph, d))
        .transpose()?;

    // enumerating ties needs the full predecessor sets, so no early stop
    let all_paths = request.all_paths && destination.is_some();
    let stop_at = if all_paths { None } else { destination };

    let dijkstra: Dijkstra<i64> = Dijkstra::new();
    let start_time = Instant::now();
    let result = dijkstra
        .search(&*graph, source, stop_at)
        .map_err(|e| domain_error(&e))?;
    let execution_time = start_time.elapsed();

    let mut response =
        build_response(&graph, &result, destination).map_err(|e| domain_error(&e))?;
    response.execution_time_ms = execution_time.as_secs_f64() * 1000.0;

    if let (Some(dest), true) = (destination, all_paths) {
        let limit = request
            .max_paths
            .unwrap_or(state.max_paths)
            .min(state.max_paths);
        // one extra path tells whether the limit cut the enumeration short
        let mut paths = result.paths_to(dest, limit.saturating_add(1));
        response.all_paths_truncated = paths.len() > limit;
        paths.truncate(limit);
        response.all_paths = paths
            .iter()
            .map(|p| labels(&graph, p))
            .collect::<crate::Result<_>>()
            .map_err(|e| domain_error(&e))?;
        if response.all_paths_truncated {
            warn!("path enumeration to {} stopped at {} paths", dest, limit);
        }
    }

    {
        let mut sessions = state.lock()?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.searches += 1;
            session.last_result = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<GraphSummary>>, ApiError> {
    let sessions = state.lock()?;
    let mut summaries: Vec<GraphSummary> = sessions.values().map(Session::summary).collect();
    summaries.sort_by_key(|s| s.created_at);
    Ok(Json(summaries))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn resolve(graph: &DirectedGraph, vertex: &VertexRef) -> Result<usize, ApiError> {
    let label = vertex.to_string();
    graph.resolve_label(&label).map_err(|e| domain_error(&e))
}

fn labels(graph: &DirectedGraph, ids: &[usize]) -> crate::Result<Vec<String>> {
    ids.iter()
        .map(|&id| graph.label_of(id).map(|l| l.into_owned()))
        .collect()
}

fn build_response(
    graph: &DirectedGraph,
    result: &ShortestPathResult<i64>,
    destination: Option<usize>,
) -> crate::Result<SearchResponse> {
    let mut distances = BTreeMap::new();
    let mut predecessors = BTreeMap::new();

    for vertex in 0..result.len() {
        if let Some(distance) = result.distance(vertex) {
            let label = graph.label_of(vertex)?.into_owned();
            predecessors.insert(label.clone(), labels(graph, result.predecessors(vertex))?);
            distances.insert(label, distance);
        }
    }

    let (distance, path) = match destination {
        Some(dest) => (
            result.distance(dest),
            result.path_to(dest).map(|p| labels(graph, &p)).transpose()?,
        ),
        None => (None, None),
    };

    Ok(SearchResponse {
        execution_id: Uuid::new_v4(),
        source: graph.label_of(result.source)?.into_owned(),
        destination: destination
            .map(|d| graph.label_of(d).map(|l| l.into_owned()))
            .transpose()?,
        // a full search settles every reachable vertex
        visited_destination: result.visited_destination
            || (result.destination.is_none() && destination.map_or(false, |d| result.is_reachable(d))),
        execution_time_ms: 0.0,
        reachable: distances.len(),
        distance,
        path,
        all_paths: Vec::new(),
        all_paths_truncated: false,
        distances,
        predecessors,
    })
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "session_not_found",
        "Session not found".to_string(),
    )
}

fn domain_error(err: &Error) -> ApiError {
    let (status, code) = match err {
        Error::Format { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "wrong_format"),
        Error::MixedMode(_) => (StatusCode::UNPROCESSABLE_ENTITY, "mixed_mode"),
        Error::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "validation_failed"),
        Error::NegativeWeight { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "negative_weight"),
        Error::UnknownLabel(_) | Error::NotFound(_) | Error::SourceNotFound => {
            (StatusCode::NOT_FOUND, "vertex_not_found")
        }
        Error::NoPath { .. } => (StatusCode::NOT_FOUND, "no_path"),
        Error::Mapping(_) | Error::ExportMapping(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "mapping_failed")
        }
        Error::AlgorithmError(_) | Error::Io(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
        }
    };
    api_error(status, code, err.to_string())
}
