pub mod traits;
pub mod directed;
pub mod identifier;
pub mod vertex;
pub mod validation;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use directed::DirectedGraph;
pub use identifier::IdentifierSpace;
pub use vertex::{SlotState, Vertex};
