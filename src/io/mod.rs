//! Line-oriented text format for graphs.
//!
//! Each non-blank line declares a vertex and its outgoing arcs:
//!
//! ```text
//! <vertexLabel> [<destLabel>,<weight> ...]
//! ```

pub mod export;
pub mod import;

pub use export::{export_file, to_text, write_to};
pub use import::{
    import_file, import_file_partial, import_partial, parse_str, read_from, read_partial,
    ImportError, Importer, DEFAULT_MAX_VERTICES,
};
