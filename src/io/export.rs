use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::graph::{DirectedGraph, Graph, Weight};
use crate::{Error, Result};

/// Writes one line per vertex: its label followed by `dest,weight` pairs.
///
/// Labels are resolved through the identifier space in mapped mode. Arc
/// order within a line follows the vertex's internal iteration order and is
/// not stable between exports.
pub fn write_to<W, Out>(graph: &DirectedGraph<W>, out: &mut Out) -> Result<()>
where
    W: Weight,
    Out: Write,
{
    for vertex in graph.vertices() {
        write!(out, "{}", export_label(graph, vertex.id())?)?;
        for (dest, weight) in vertex.arcs() {
            write!(out, " {},{}", export_label(graph, dest)?, weight)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Renders the graph to a string in the text format.
pub fn to_text<W: Weight>(graph: &DirectedGraph<W>) -> Result<String> {
    let mut buf = Vec::new();
    write_to(graph, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the graph to `path`, creating parent directories and replacing
/// any existing file.
pub fn export_file<W, P>(graph: &DirectedGraph<W>, path: P) -> Result<()>
where
    W: Weight,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    write_to(graph, &mut out)?;
    out.flush()?;
    debug!("exported {} vertices to {}", graph.vertex_count(), path.display());
    Ok(())
}

fn export_label<W: Weight>(graph: &DirectedGraph<W>, id: usize) -> Result<String> {
    if graph.is_mapped() {
        graph
            .get_mapped(id)
            .map(str::to_string)
            .map_err(|_| Error::ExportMapping(id))
    } else {
        Ok(id.to_string())
    }
}
