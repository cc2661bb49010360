use crate::error::{Error, Result};
use crate::types::NodeId;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Reads an edge list from a file.
///
/// Input format:
/// - one line, one edge in format "u,v",
/// - blank lines and lines starting with `#` are skipped.
///
/// <div class="warning">
///
/// > Self-loops are parsed here but rejected later by
/// > [`AntennaGraph::from_edges`](crate::AntennaGraph::from_edges).
///
/// </div>
///
/// Example input:
/// ```text
/// # triangle with a tail
/// 1,2
/// 1,3
/// 2,3
/// 3,4
/// ```
pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<(NodeId, NodeId)>> {
    let file = File::open(path)?;
    parse_edge_list(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<Vec<(NodeId, NodeId)>> {
    parse_edge_list(BufReader::new(Cursor::new(input)))
}

fn parse_edge_list<R: BufRead>(reader: R) -> Result<Vec<(NodeId, NodeId)>> {
    let mut edges = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<_> = line.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(Error::Parse {
                line: i + 1,
                reason: format!("expected 'u,v', got '{line}'"),
            });
        }
        let u = parse_node(parts[0], i + 1)?;
        let v = parse_node(parts[1], i + 1)?;
        edges.push((u, v));
    }

    Ok(edges)
}

fn parse_node(raw: &str, line: usize) -> Result<NodeId> {
    raw.parse().map_err(|_| Error::Parse {
        line,
        reason: format!("node id '{raw}' is not a non-negative integer"),
    })
}
