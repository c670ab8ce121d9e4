pub mod traits;
pub mod dijkstra;
pub mod session;

pub use dijkstra::Dijkstra;
pub use session::SearchSession;
pub use traits::{BestPath, BestPaths, ShortestPathAlgorithm, ShortestPathResult};
