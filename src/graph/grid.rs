//! In-process grid graph generator, for scenario S5/S6 and the CLI's `grid:HxW`
//! pseudo-path — exercises the exact same [`CsrGraph`] construction path the file
//! loaders use, without touching the filesystem.

use rand::Rng;

use super::csr::{CsrGraph, CsrGraphError, EdgeRecord};

/// Builds a `height x width` grid graph: node `(r, c)` is `r * width + c`, with
/// directed edges to its right (`c + 1`) and down (`r + 1`) neighbors, each weighted
/// with two independently drawn costs in `[1, max_weight]`.
///
/// Node `0` (top-left) is the conventional source; node `height * width - 1`
/// (bottom-right) is the conventional "END" target used by S5/S6.
pub fn generate_grid(
    height: usize,
    width: usize,
    max_weight: u32,
    rng: &mut impl Rng,
) -> Result<CsrGraph, CsrGraphError> {
    assert!(height > 0 && width > 0, "grid dimensions must be positive");
    assert!(max_weight >= 1, "max_weight must allow at least weight 1");

    let node = |r: usize, c: usize| (r * width + c) as u32;
    let mut adjacency = vec![Vec::new(); height * width];

    for r in 0..height {
        for c in 0..width {
            let u = (r * width + c) as usize;
            if c + 1 < width {
                adjacency[u].push(EdgeRecord {
                    target: node(r, c + 1),
                    w1: rng.gen_range(1..=max_weight),
                    w2: rng.gen_range(1..=max_weight),
                });
            }
            if r + 1 < height {
                adjacency[u].push(EdgeRecord {
                    target: node(r + 1, c),
                    w1: rng.gen_range(1..=max_weight),
                    w2: rng.gen_range(1..=max_weight),
                });
            }
        }
    }

    CsrGraph::from_adjacency(adjacency)
}

/// The conventional "END" node of a `height x width` grid produced by
/// [`generate_grid`]: the bottom-right corner.
pub fn end_node(height: usize, width: usize) -> usize {
    height * width - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn generates_a_well_formed_grid() {
        let mut rng = SmallRng::seed_from_u64(42);
        let graph = generate_grid(3, 3, 10, &mut rng).unwrap();
        assert_eq!(graph.node_count(), 9);
        // Every interior node has exactly two outgoing edges; the bottom-right corner
        // (the end node) has none.
        assert_eq!(graph.edge_end(0) - graph.edge_begin(0), 2);
        assert_eq!(graph.edge_end(end_node(3, 3)) - graph.edge_begin(end_node(3, 3)), 0);
    }

    #[test]
    fn weights_stay_within_requested_bound() {
        let mut rng = SmallRng::seed_from_u64(7);
        let graph = generate_grid(5, 5, 10, &mut rng).unwrap();
        for u in 0..graph.node_count() {
            for e in graph.edges_of(u) {
                assert!((1..=10).contains(&e.w1));
                assert!((1..=10).contains(&e.w2));
            }
        }
    }
}
