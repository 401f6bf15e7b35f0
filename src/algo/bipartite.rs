/*!
# Bipartite Graph Algorithms

This module provides traits and algorithms for working with **bipartite graphs**.

Functionality includes:
- Defining and handling bipartitions of a graph
- Testing whether a graph is bipartite
- Computing a valid bipartition if one exists

Edges are considered without orientation, i.e. a directed graph is bipartite iff its underlying
undirected graph is. A self-loop joins a node to its own side and thus prevents any bipartition.
*/

use std::{collections::VecDeque, fmt::Debug, hash::Hash};

use log::debug;

use super::*;

/// A trait for representing a bipartition of the node set.
///
/// - Nodes in the set are considered to be on the **right** (1) side
/// - Nodes not in the set are considered to be on the **left** (0) side
pub trait Bipartition {
    /// Returns `true` if the node is on the left (0) side of the partition.
    fn is_on_left_side(&self, u: Node) -> bool;
}

impl Bipartition for NodeBitSet {
    #[inline]
    fn is_on_left_side(&self, u: Node) -> bool {
        !self.get_bit(u)
    }
}

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest {
    /// Tests whether the given candidate partition is a valid bipartition.
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjMatrix::new(6, false);
    /// g.connect_path(0..6);
    ///
    /// let mut odd = NodeBitSet::new(6);
    /// for u in [1, 3, 5] {
    ///     odd.set_bit(u);
    /// }
    /// assert!(g.is_bipartition(&odd));
    /// ```
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition;

    /// Computes a valid bipartition of the graph, if one exists.
    /// The smallest node of every connected component is put on the left side.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjMatrix::new(10, false);
    /// g.connect_path(0..10);
    ///
    /// let bip = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.cardinality(), 5);
    /// ```
    fn compute_bipartition(&self) -> Option<NodeBitSet>;

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjMatrix::new(5, false);
    /// g.connect_path(0..5);
    /// assert!(g.is_bipartite());
    ///
    /// g.add_edge(4, 0);
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList + AdjacencyTest,
{
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition,
    {
        self.edges(false)
            .all(|Edge(u, v)| bipartition.is_on_left_side(u) != bipartition.is_on_left_side(v))
    }

    fn compute_bipartition(&self) -> Option<NodeBitSet> {
        let bipartition = propose_possibly_illegal_bipartition(self);
        let valid = self.is_bipartition(&bipartition);
        debug!(
            "bipartition of {} nodes is {}",
            self.number_of_nodes(),
            if valid { "valid" } else { "invalid" }
        );
        valid.then_some(bipartition)
    }
}

/// Computes a candidate bipartition of the graph using BFS traversal.
///
/// Every BFS tree is 2-colored by depth and the search is restarted at the smallest unvisited
/// node until all nodes are reached.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition may be invalid
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> NodeBitSet
where
    G: AdjacencyTest,
{
    let mut bipartition = graph.vertex_bitset_unset();
    let mut visited = graph.vertex_bitset_unset();
    let mut queue = VecDeque::new();

    for root in graph.vertices() {
        if visited.set_bit(root) {
            continue;
        }

        queue.push_back(root);
        while let Some(u) = queue.pop_front() {
            let on_right = bipartition.get_bit(u);
            for v in graph.vertices() {
                if !graph.has_edge_either_way(u, v) || visited.set_bit(v) {
                    continue;
                }

                if !on_right {
                    bipartition.set_bit(v);
                }
                queue.push_back(v);
            }
        }
    }

    bipartition
}

/// Tests whether the graph spanned by an edge list is bipartite.
///
/// # Examples
/// ```
/// use cgraphs::algo::*;
///
/// assert!(bipartite_check([(1, 2), (1, 4), (2, 1), (2, 3), (3, 2), (3, 4), (4, 1)]));
/// assert!(!bipartite_check([(1, 2), (2, 3), (3, 1)]));
/// assert!(bipartite_check(Vec::<(char, char)>::new()));
/// ```
pub fn bipartite_check<L, I>(edges: I) -> bool
where
    L: Ord + Clone + Hash + Debug,
    I: IntoIterator<Item = (L, L)>,
{
    LabeledGraph::from_edges(edges, false).is_bipartite()
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    #[test]
    fn path() {
        for n in 1..10 {
            let mut graph = AdjMatrix::new(n, false);
            graph.connect_path(0..n);

            assert!(graph.is_bipartite());

            if n > 2 {
                let mut graph = graph.clone();
                graph.try_add_edge(1 - (n % 2), n - 1);
                assert!(!graph.is_bipartite());
            }
        }
    }

    #[test]
    fn cycles() {
        for n in 3..12 {
            let mut graph = AdjMatrix::new(n, false);
            graph.connect_cycle(0..n);
            assert_eq!(graph.is_bipartite(), n % 2 == 0);
        }
    }

    #[test]
    fn self_loop_is_not_bipartite() {
        assert!(!bipartite_check([(5, 1), (1, 1), (2, 1), (3, 2), (4, 5), (1, 2), (5, 5)]));
        assert!(!bipartite_check([("a", "a")]));
    }

    #[test]
    fn empty_graph_is_bipartite() {
        assert!(AdjMatrix::new(0, false).is_bipartite());
        assert!(AdjMatrix::new(4, true).is_bipartite());
        assert!(bipartite_check(Vec::<(u32, u32)>::new()));
    }

    #[test]
    fn every_component_is_partitioned() {
        let mut graph = AdjMatrix::new(7, false);
        graph.connect_path([0, 1, 2]);
        graph.connect_cycle([3, 4, 5, 6]);

        let bip = graph.compute_bipartition().unwrap();
        assert!(bip.is_on_left_side(0) && bip.is_on_left_side(3));
        assert_eq!(bip.iter_set_bits().collect::<Vec<_>>(), vec![1, 4, 6]);

        graph.connect_cycle([0, 3, 5]);
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn direction_is_ignored() {
        let graph = AdjMatrix::from_edges(4, true, [(0, 1), (2, 1), (2, 3)]);
        assert!(graph.is_bipartite());

        let graph = AdjMatrix::from_edges(3, true, [(0, 1), (2, 1), (2, 0)]);
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn random_bipartitions_are_valid() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in 1..30 {
            for p in [0.05, 0.1, 0.3] {
                for directed in [false, true] {
                    let graph = AdjMatrix::gnp_no_loops(rng, n, p, directed);
                    if let Some(bip) = graph.compute_bipartition() {
                        assert!(graph.is_bipartition(&bip));
                    }
                }
            }
        }
    }
}
