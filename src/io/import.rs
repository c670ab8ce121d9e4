use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::graph::{DirectedGraph, Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// Largest number of vertex slots an import may create by default.
///
/// Integer labels index the dense store directly, so a single large label
/// would otherwise allocate every slot below it.
pub const DEFAULT_MAX_VERTICES: usize = 1 << 22;

/// A failed import, carrying the graph as far as it was built.
#[derive(Debug)]
pub struct ImportError<W: Weight = i64> {
    pub graph: DirectedGraph<W>,
    pub error: Error,
}

/// Line-by-line builder for the text format
///
/// ```text
/// <vertexLabel> [<destLabel>,<weight> ...]
/// ```
///
/// Labels are raw integer ids until the first line whose vertex label is not
/// an integer; that switches the graph to mapped mode, which is only allowed
/// while the graph is still empty. Afterwards every label goes through the
/// graph's identifier space and integer-looking labels are rejected.
#[derive(Debug)]
pub struct Importer<W: Weight = i64> {
    graph: DirectedGraph<W>,
    line: usize,
    max_vertices: usize,
}

impl<W> Importer<W>
where
    W: Weight,
{
    pub fn new() -> Self {
        Importer {
            graph: DirectedGraph::new(),
            line: 0,
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }

    /// Rejects integer labels that would grow the graph past `max_vertices`
    /// slots.
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Feeds every line of `input`, then validates.
    pub fn import_str(mut self, input: &str) -> std::result::Result<DirectedGraph<W>, ImportError<W>> {
        for line in input.lines() {
            if let Err(error) = self.feed_line(line) {
                return Err(self.abort(error));
            }
        }
        self.finish()
    }

    /// Feeds every line of `reader`, then validates. A read error keeps the
    /// graph built from the lines before it.
    pub fn import_reader<R: BufRead>(
        mut self,
        reader: R,
    ) -> std::result::Result<DirectedGraph<W>, ImportError<W>> {
        for line in reader.lines() {
            let fed = line
                .map_err(Error::from)
                .and_then(|line| self.feed_line(&line));
            if let Err(error) = fed {
                return Err(self.abort(error));
            }
        }
        self.finish()
    }

    /// Consumes one line of input. Blank lines are ignored.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        self.line += 1;
        let mut fields = line.split_whitespace();
        let Some(label) = fields.next() else {
            return Ok(());
        };

        let id = self.resolve_vertex(label)?;
        for token in fields {
            let (dest, weight) = self.parse_pair(token)?;
            let dest = self.resolve_destination(dest)?;
            self.graph.add_arc(id, dest, weight)?;
        }
        Ok(())
    }

    /// Validates and returns the graph.
    pub fn finish(self) -> std::result::Result<DirectedGraph<W>, ImportError<W>> {
        match self.graph.validate() {
            Ok(()) => {
                info!(
                    "imported {} vertices and {} arcs from {} lines{}",
                    self.graph.vertex_count(),
                    self.graph.arc_count(),
                    self.line,
                    if self.graph.is_mapped() { " (mapped labels)" } else { "" }
                );
                Ok(self.graph)
            }
            Err(error) => Err(ImportError {
                graph: self.graph,
                error,
            }),
        }
    }

    /// Abandons the import, keeping the partial graph alongside `error`.
    pub fn abort(self, error: Error) -> ImportError<W> {
        debug!("import aborted at line {}: {}", self.line, error);
        ImportError {
            graph: self.graph,
            error,
        }
    }

    fn resolve_vertex(&mut self, label: &str) -> Result<usize> {
        if self.graph.is_mapped() {
            if is_integer_label(label) {
                return Err(Error::MixedMode(label.to_string()));
            }
            return Ok(self.graph.map_label(label));
        }

        if let Ok(id) = label.parse::<usize>() {
            if id >= self.max_vertices {
                return Err(self.format_error(label));
            }
            self.graph.add_vertex(id);
            return Ok(id);
        }
        if is_integer_label(label) {
            return Err(self.format_error(label));
        }
        if self.graph.vertex_count() > 0 {
            return Err(Error::MixedMode(label.to_string()));
        }

        debug!("non-integer label {:?} on line {}, switching to mapped mode", label, self.line);
        self.graph.enable_mapping();
        Ok(self.graph.map_label(label))
    }

    fn resolve_destination(&mut self, label: &str) -> Result<usize> {
        if self.graph.is_mapped() {
            if is_integer_label(label) {
                return Err(Error::MixedMode(label.to_string()));
            }
            return Ok(self.graph.map_label(label));
        }

        match label.parse::<usize>() {
            Ok(id) => Ok(id),
            Err(_) if is_integer_label(label) => Err(self.format_error(label)),
            Err(_) => Err(Error::MixedMode(label.to_string())),
        }
    }

    fn parse_pair<'a>(&self, token: &'a str) -> Result<(&'a str, W)> {
        let mut parts = token.split(',');
        let (Some(dest), Some(weight), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(self.format_error(token));
        };
        if dest.is_empty() {
            return Err(self.format_error(token));
        }
        let weight = W::from_str_radix(weight, 10).map_err(|_| self.format_error(token))?;
        Ok((dest, weight))
    }

    fn format_error(&self, token: &str) -> Error {
        Error::Format {
            line: self.line,
            token: token.to_string(),
        }
    }
}

impl<W> Default for Importer<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

fn is_integer_label(label: &str) -> bool {
    label.parse::<i64>().is_ok()
}

/// Imports `input`, returning the partially built graph on failure.
pub fn import_partial(input: &str) -> std::result::Result<DirectedGraph, ImportError> {
    Importer::new().import_str(input)
}

/// Parses a graph from text.
pub fn parse_str(input: &str) -> Result<DirectedGraph> {
    import_partial(input).map_err(|e| e.error)
}

/// Reads a graph from any buffered reader, returning the partially built
/// graph on failure.
pub fn read_partial<R: BufRead>(reader: R) -> std::result::Result<DirectedGraph, ImportError> {
    Importer::new().import_reader(reader)
}

/// Reads a graph from any buffered reader.
pub fn read_from<R: BufRead>(reader: R) -> Result<DirectedGraph> {
    read_partial(reader).map_err(|e| e.error)
}

/// Reads a graph from the file at `path`, returning the partially built
/// graph on failure. A file that cannot be opened yields an empty graph.
pub fn import_file_partial<P: AsRef<Path>>(
    path: P,
) -> std::result::Result<DirectedGraph, ImportError> {
    let path = path.as_ref();
    debug!("importing graph from {}", path.display());
    match File::open(path) {
        Ok(file) => read_partial(BufReader::new(file)),
        Err(error) => Err(ImportError {
            graph: DirectedGraph::new(),
            error: error.into(),
        }),
    }
}

/// Reads a graph from the file at `path`.
pub fn import_file<P: AsRef<Path>>(path: P) -> Result<DirectedGraph> {
    import_file_partial(path).map_err(|e| e.error)
}
