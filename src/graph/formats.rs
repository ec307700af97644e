//! Graph file formats consumed by the harness (§6) — not part of the BSP core, which
//! only ever sees a [`CsrGraph`] by reference.
//!
//! Three formats:
//! - [`read_binary_graph`]: a compact binary blob (node/edge counts, offset array,
//!   edge records).
//! - [`read_road_graph`]: the DIMACS-style `p sp <nodes> <edges>` text format.
//! - [`read_problem_file`]: pairs of `(start, end)` node ids for batch queries.

use std::fmt;
use std::io::{BufRead, Read};

use super::csr::{CsrGraph, CsrGraphError, EdgeRecord};

/// Errors raised while parsing a harness graph or problem file.
#[derive(Debug)]
pub enum GraphFileError {
    /// The input ended before a required field was read.
    UnexpectedEof,
    /// A line or header did not match the expected shape.
    Malformed(String),
    /// An integer field failed to parse.
    InvalidInteger(String),
    /// The parsed offsets/edges were rejected by [`CsrGraph::from_raw`].
    Csr(CsrGraphError),
}

impl fmt::Display for GraphFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFileError::UnexpectedEof => write!(f, "unexpected end of input"),
            GraphFileError::Malformed(msg) => write!(f, "malformed input: {msg}"),
            GraphFileError::InvalidInteger(field) => write!(f, "could not parse integer field: {field}"),
            GraphFileError::Csr(err) => write!(f, "invalid graph structure: {err}"),
        }
    }
}

impl std::error::Error for GraphFileError {}

impl From<CsrGraphError> for GraphFileError {
    fn from(err: CsrGraphError) -> Self {
        GraphFileError::Csr(err)
    }
}

/// Reads the binary graph blob format: an 8-byte node count, an 8-byte edge count, a
/// `node_count + 1`-entry array of 8-byte first-edge offsets, then `edge_count`
/// records of `(target: u32, w1: u32, w2: u32)`. All integers are little-endian.
pub fn read_binary_graph(mut r: impl Read) -> Result<CsrGraph, GraphFileError> {
    let node_count = read_u64(&mut r)? as usize;
    let edge_count = read_u64(&mut r)? as usize;

    let mut offsets = Vec::with_capacity(node_count + 1);
    for _ in 0..=node_count {
        offsets.push(read_u64(&mut r)? as usize);
    }

    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let target = read_u32(&mut r)?;
        let w1 = read_u32(&mut r)?;
        let w2 = read_u32(&mut r)?;
        edges.push(EdgeRecord { target, w1, w2 });
    }

    Ok(CsrGraph::from_raw(offsets, edges)?)
}

fn read_u64(r: &mut impl Read) -> Result<u64, GraphFileError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf).map_err(|_| GraphFileError::UnexpectedEof)?;
    Ok(u64::from_le_bytes(buf))
}

fn read_u32(r: &mut impl Read) -> Result<u32, GraphFileError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf).map_err(|_| GraphFileError::UnexpectedEof)?;
    Ok(u32::from_le_bytes(buf))
}

/// Reads the road-graph text format: a header line `p sp <nodes> <edges>`, two unused
/// lines, then `edges` lines of `u v w1 w2` (1-indexed node ids, converted to the
/// engine's 0-indexed [`CsrGraph`]).
pub fn read_road_graph(r: impl BufRead) -> Result<CsrGraph, GraphFileError> {
    let mut lines = r.lines();

    let header = lines
        .next()
        .ok_or(GraphFileError::UnexpectedEof)?
        .map_err(|_| GraphFileError::UnexpectedEof)?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 4 || fields[0] != "p" {
        return Err(GraphFileError::Malformed(format!("expected 'p <keyword> <nodes> <edges>' header, got {header:?}")));
    }
    let node_count: usize = fields[2]
        .parse()
        .map_err(|_| GraphFileError::InvalidInteger(fields[2].to_string()))?;
    let edge_count: usize = fields[3]
        .parse()
        .map_err(|_| GraphFileError::InvalidInteger(fields[3].to_string()))?;

    // Two unused lines (conventionally a comment and a problem-size echo).
    for _ in 0..2 {
        lines.next().ok_or(GraphFileError::UnexpectedEof)?.map_err(|_| GraphFileError::UnexpectedEof)?;
    }

    let mut adjacency: Vec<Vec<EdgeRecord>> = vec![Vec::new(); node_count];
    let mut read = 0;
    for line in lines {
        let line = line.map_err(|_| GraphFileError::UnexpectedEof)?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(GraphFileError::Malformed(format!("expected 'u v w1 w2', got {line:?}")));
        }
        let u: usize = fields[0].parse().map_err(|_| GraphFileError::InvalidInteger(fields[0].to_string()))?;
        let v: u32 = fields[1].parse().map_err(|_| GraphFileError::InvalidInteger(fields[1].to_string()))?;
        let w1: u32 = fields[2].parse().map_err(|_| GraphFileError::InvalidInteger(fields[2].to_string()))?;
        let w2: u32 = fields[3].parse().map_err(|_| GraphFileError::InvalidInteger(fields[3].to_string()))?;

        let u = u.checked_sub(1).ok_or_else(|| GraphFileError::Malformed("node ids are 1-indexed".to_string()))?;
        if u >= node_count {
            return Err(GraphFileError::Malformed(format!("source node {u} outside declared range")));
        }
        adjacency[u].push(EdgeRecord {
            target: v.checked_sub(1).ok_or_else(|| GraphFileError::Malformed("node ids are 1-indexed".to_string()))?,
            w1,
            w2,
        });
        read += 1;
    }

    if read != edge_count {
        return Err(GraphFileError::Malformed(format!("header declared {edge_count} edges, found {read}")));
    }

    Ok(CsrGraph::from_adjacency(adjacency)?)
}

/// Reads the problem file format: blank-line-separated pairs of `(start, end)` node
/// ids (1-indexed, converted to 0-indexed).
pub fn read_problem_file(r: impl BufRead) -> Result<Vec<(usize, usize)>, GraphFileError> {
    let mut pairs = Vec::new();
    let mut pending: Option<usize> = None;

    for line in r.lines() {
        let line = line.map_err(|_| GraphFileError::UnexpectedEof)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let id: usize = trimmed.parse().map_err(|_| GraphFileError::InvalidInteger(trimmed.to_string()))?;
        let id = id
            .checked_sub(1)
            .ok_or_else(|| GraphFileError::Malformed("node ids are 1-indexed".to_string()))?;
        match pending.take() {
            None => pending = Some(id),
            Some(start) => pairs.push((start, id)),
        }
    }

    if pending.is_some() {
        return Err(GraphFileError::Malformed("problem file has an unpaired trailing node id".to_string()));
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn round_trips_a_binary_blob() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2u64.to_le_bytes()); // node_count
        bytes.extend_from_slice(&1u64.to_le_bytes()); // edge_count
        bytes.extend_from_slice(&0u64.to_le_bytes());
        bytes.extend_from_slice(&1u64.to_le_bytes());
        bytes.extend_from_slice(&1u64.to_le_bytes());
        bytes.extend_from_slice(&1u32.to_le_bytes()); // target
        bytes.extend_from_slice(&3u32.to_le_bytes()); // w1
        bytes.extend_from_slice(&4u32.to_le_bytes()); // w2

        let graph = read_binary_graph(Cursor::new(bytes)).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        let e = graph.edge(graph.edge_begin(0));
        assert_eq!((e.target, e.w1, e.w2), (1, 3, 4));
    }

    #[test]
    fn parses_a_road_graph() {
        let text = "p sp 3 2\nc comment\nc another\n1 2 3 4\n2 3 1 1\n";
        let graph = read_road_graph(Cursor::new(text)).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        let e = graph.edge(graph.edge_begin(0));
        assert_eq!((e.target, e.w1, e.w2), (1, 3, 4));
    }

    #[test]
    fn rejects_mismatched_edge_count() {
        let text = "p sp 2 5\nc\nc\n1 2 1 1\n";
        let err = read_road_graph(Cursor::new(text)).unwrap_err();
        matches!(err, GraphFileError::Malformed(_));
    }

    #[test]
    fn parses_problem_pairs() {
        let text = "1\n3\n\n2\n4\n";
        let pairs = read_problem_file(Cursor::new(text)).unwrap();
        assert_eq!(pairs, vec![(0, 2), (1, 3)]);
    }

    #[test]
    fn rejects_unpaired_trailing_id() {
        let text = "1\n2\n\n3\n";
        let err = read_problem_file(Cursor::new(text)).unwrap_err();
        matches!(err, GraphFileError::Malformed(_));
    }
}
