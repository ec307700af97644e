//! A static, read-only compressed-sparse-row graph with two edge weights.
//!
//! This is the engine's sole external collaborator: it is handed to the BSP engine by
//! reference and never mutated once built, so it carries no ghost token — there is
//! nothing here that needs branded interior mutability. Node ids are `0..node_count()`.

use std::fmt;

/// A directed edge endpoint with two non-negative integer costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    /// Destination node id.
    pub target: u32,
    /// First-objective weight.
    pub w1: u32,
    /// Second-objective weight.
    pub w2: u32,
}

/// Errors raised while assembling a [`CsrGraph`] from raw offset/edge arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsrGraphError {
    /// The offsets array was not monotonically non-decreasing, or its length did not
    /// equal `node_count + 1`.
    MalformedOffsets,
    /// An edge referenced a target id outside `0..node_count`.
    TargetOutOfRange { edge_index: usize, target: u32 },
}

impl fmt::Display for CsrGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsrGraphError::MalformedOffsets => {
                write!(f, "CSR offsets array must be non-decreasing with length node_count + 1")
            }
            CsrGraphError::TargetOutOfRange { edge_index, target } => write!(
                f,
                "edge {edge_index} targets node {target}, outside the graph's node range"
            ),
        }
    }
}

impl std::error::Error for CsrGraphError {}

/// A read-only, compressed-sparse-row adjacency structure over `0..node_count` node ids.
///
/// For a node `u`, its outgoing edges occupy the half-open range
/// `edge_begin(u)..edge_end(u)` of [`CsrGraph::edge`].
pub struct CsrGraph {
    /// `offsets[u]..offsets[u + 1]` bounds node `u`'s edges. Length `node_count + 1`.
    offsets: Vec<usize>,
    edges: Vec<EdgeRecord>,
}

impl CsrGraph {
    /// Builds a graph from a first-edge offset array (length `node_count + 1`) and a
    /// flat edge-record array indexed the same way the offsets describe.
    pub fn from_raw(offsets: Vec<usize>, edges: Vec<EdgeRecord>) -> Result<Self, CsrGraphError> {
        if offsets.is_empty() || offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(CsrGraphError::MalformedOffsets);
        }
        if *offsets.last().unwrap() != edges.len() {
            return Err(CsrGraphError::MalformedOffsets);
        }
        let node_count = offsets.len() - 1;
        for (i, e) in edges.iter().enumerate() {
            if e.target as usize >= node_count {
                return Err(CsrGraphError::TargetOutOfRange {
                    edge_index: i,
                    target: e.target,
                });
            }
        }
        Ok(Self { offsets, edges })
    }

    /// Builds a graph from a per-node adjacency list, one `Vec<EdgeRecord>` per node.
    pub fn from_adjacency(adjacency: Vec<Vec<EdgeRecord>>) -> Result<Self, CsrGraphError> {
        let mut offsets = Vec::with_capacity(adjacency.len() + 1);
        let mut edges = Vec::new();
        offsets.push(0);
        for list in &adjacency {
            edges.extend_from_slice(list);
            offsets.push(edges.len());
        }
        Self::from_raw(offsets, edges)
    }

    /// Number of nodes, `N`. Valid node ids are `0..node_count()`.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Index of the first outgoing edge of `u`, for use with [`CsrGraph::edge`].
    #[inline]
    pub fn edge_begin(&self, u: usize) -> usize {
        self.offsets[u]
    }

    /// Index one past the last outgoing edge of `u`.
    #[inline]
    pub fn edge_end(&self, u: usize) -> usize {
        self.offsets[u + 1]
    }

    /// Returns the edge record at flat index `i`, as produced by `edge_begin`/`edge_end`.
    #[inline]
    pub fn edge(&self, i: usize) -> EdgeRecord {
        self.edges[i]
    }

    /// Iterates the outgoing edges of `u` in CSR order.
    #[inline]
    pub fn edges_of(&self, u: usize) -> impl Iterator<Item = EdgeRecord> + '_ {
        self.edges[self.edge_begin(u)..self.edge_end(u)].iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(target: u32, w1: u32, w2: u32) -> EdgeRecord {
        EdgeRecord { target, w1, w2 }
    }

    #[test]
    fn builds_from_adjacency_and_iterates_in_order() {
        let g = CsrGraph::from_adjacency(vec![
            vec![edge(1, 1, 4), edge(2, 2, 1)],
            vec![edge(2, 1, 1)],
            vec![],
        ])
        .unwrap();

        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        let from_0: Vec<_> = g.edges_of(0).collect();
        assert_eq!(from_0, vec![edge(1, 1, 4), edge(2, 2, 1)]);
        assert_eq!(g.edge_begin(2), g.edge_end(2));
    }

    #[test]
    fn rejects_out_of_range_targets() {
        let err = CsrGraph::from_adjacency(vec![vec![edge(5, 1, 1)]]).unwrap_err();
        assert_eq!(
            err,
            CsrGraphError::TargetOutOfRange {
                edge_index: 0,
                target: 5
            }
        );
    }

    #[test]
    fn rejects_malformed_offsets() {
        let err = CsrGraph::from_raw(vec![0, 3, 1], vec![]).unwrap_err();
        assert_eq!(err, CsrGraphError::MalformedOffsets);
    }
}
