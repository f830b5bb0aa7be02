//! Loading attack targets from edge-list files.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use attrition_core::{AdjacencyGraph, GraphHandle};
use tracing::{Span, field, info, instrument};

use super::commands::CliError;

/// Reads an undirected graph from a whitespace-separated edge list.
///
/// Each non-blank line holds `source target`, or a single node id to add an
/// isolated node. Text after `#` is ignored.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be read and
/// [`CliError::EdgeList`] when a line is malformed.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use attrition_cli::cli::load_edge_list;
/// # use attrition_core::GraphHandle;
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "# triangle\n0 1\n1 2\n2 0\n7\n")?;
/// let graph = load_edge_list(file.path())?;
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.load_edge_list", err, fields(path = field::Empty))]
pub fn load_edge_list(path: &Path) -> Result<AdjacencyGraph, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_edge_list(BufReader::new(file), path)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "edge list loaded"
    );
    Ok(graph)
}

pub(super) fn parse_edge_list(
    reader: impl BufRead,
    path: &Path,
) -> Result<AdjacencyGraph, CliError> {
    let mut graph = AdjacencyGraph::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let malformed = || CliError::EdgeList {
            path: path.to_path_buf(),
            line: index + 1,
            content: content.to_owned(),
        };
        let ids = content
            .split_whitespace()
            .map(str::parse::<usize>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;
        match ids.as_slice() {
            [node] => graph.add_node(*node),
            [source, target] => graph.add_edge(*source, *target),
            _ => return Err(malformed()),
        }
    }
    Ok(graph)
}
