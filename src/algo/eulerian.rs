/*!
# Eulerian Circuits

An undirected graph has an Eulerian circuit, a closed walk using every edge exactly once, iff
every node has even degree and all edges lie in a single connected component. A self-loop adds
two to the degree of its node.

Circuits are built with Hierholzer's algorithm: starting at the smallest node with an edge, the
walk always continues along the unused edge to the smallest neighbor, and closed sub-walks found
on the way are spliced in where they start. The result is deterministic and lists the start node
at both ends.

Directed graphs are not supported and yield [`GraphError::Unsupported`].
*/

use std::{fmt::Debug, hash::Hash};

use log::debug;

use super::*;

/// Eulerian-circuit queries on an undirected graph.
pub trait EulerianCircuit: AdjacencyList + GraphType {
    /// Returns *true* if every degree is even and all edges are connected.
    /// Graphs without edges trivially have a circuit.
    ///
    /// # Errors
    /// Fails with [`GraphError::Unsupported`] on directed graphs.
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut graph = AdjMatrix::new(4, false);
    /// graph.connect_cycle(0..4);
    /// assert_eq!(graph.has_eulerian_circuit(), Ok(true));
    ///
    /// graph.add_edge(0, 2);
    /// assert_eq!(graph.has_eulerian_circuit(), Ok(false));
    ///
    /// assert!(AdjMatrix::new(4, true).has_eulerian_circuit().is_err());
    /// ```
    fn has_eulerian_circuit(&self) -> Result<bool> {
        if self.is_directed() {
            return Err(GraphError::Unsupported(
                "Eulerian circuits of directed graphs",
            ));
        }

        if let Some(u) = self.vertices().find(|&u| loop_degree_of(self, u) % 2 == 1) {
            debug!("node {u} has odd degree {}", loop_degree_of(self, u));
            return Ok(false);
        }

        let Some(start) = self.vertices_with_neighbors().next() else {
            return Ok(true);
        };

        let mut visited = self.vertex_bitset_unset();
        visited.set_bit(start);
        let mut stack = vec![start];
        while let Some(u) = stack.pop() {
            for v in self.neighbors_of(u) {
                if !visited.set_bit(v) {
                    stack.push(v);
                }
            }
        }

        let connected = self.vertices_with_neighbors().all(|u| visited.get_bit(u));
        if !connected {
            debug!("edges of the graph span more than one component");
        }
        Ok(connected)
    }

    /// Computes an Eulerian circuit as the sequence of visited nodes.
    ///
    /// The circuit starts and ends at the smallest node with an edge and has one entry more than
    /// the graph has edges. Graphs without edges yield `[0]`, the graph without nodes yields
    /// `None` as does every graph without a circuit.
    ///
    /// # Errors
    /// Fails with [`GraphError::Unsupported`] on directed graphs.
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::*};
    ///
    /// let graph = AdjMatrix::from_edges(5, false, [(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (3, 4)]);
    /// assert_eq!(graph.eulerian_circuit(), Ok(Some(vec![0, 1, 2, 0, 3, 4, 0])));
    /// ```
    fn eulerian_circuit(&self) -> Result<Option<Vec<Node>>> {
        if !self.has_eulerian_circuit()? {
            return Ok(None);
        }

        let Some(start) = self
            .vertices_with_neighbors()
            .next()
            .or_else(|| self.vertices().next())
        else {
            return Ok(None);
        };

        let mut unused: Vec<NodeBitSet> = self
            .vertices()
            .map(|u| {
                let mut row = self.vertex_bitset_unset();
                for v in self.neighbors_of(u) {
                    row.set_bit(v);
                }
                row
            })
            .collect();

        let mut walk = vec![start];
        let mut circuit = Vec::with_capacity(self.len() + 1);
        while let Some(&u) = walk.last() {
            let next = unused[u as usize].iter_set_bits().next();
            match next {
                Some(v) => {
                    unused[u as usize].clear_bit(v);
                    unused[v as usize].clear_bit(u);
                    walk.push(v);
                }
                None => {
                    circuit.push(u);
                    walk.pop();
                }
            }
        }

        circuit.reverse();
        Ok(Some(circuit))
    }
}

impl<G: AdjacencyList + GraphType> EulerianCircuit for G {}

/// Degree of `u` where a self-loop counts twice
fn loop_degree_of<G>(graph: &G, u: Node) -> NumNodes
where
    G: AdjacencyList,
{
    let self_loop = graph.neighbors_of(u).any(|v| v == u);
    graph.degree_of(u) + self_loop as NumNodes
}

/// Computes an Eulerian circuit of the undirected graph spanned by an edge list.
///
/// Returns the labels of the circuit starting and ending at the smallest label, or `None` if
/// some degree is odd, the edges are not connected or the list is empty.
///
/// # Examples
/// ```
/// use cgraphs::algo::*;
///
/// let edges = [(1, 2), (1, 3), (1, 4), (1, 5), (2, 3), (4, 5)];
/// assert_eq!(find_eulerian_circuit(edges), Ok(Some(vec![1, 2, 3, 1, 4, 5, 1])));
///
/// assert_eq!(find_eulerian_circuit([(1, 2), (2, 3)]), Ok(None));
/// ```
pub fn find_eulerian_circuit<L, I>(edges: I) -> Result<Option<Vec<L>>>
where
    L: Ord + Clone + Hash + Debug,
    I: IntoIterator<Item = (L, L)>,
{
    let graph = LabeledGraph::from_edges(edges, false);
    let circuit = graph.eulerian_circuit()?;
    Ok(circuit.map(|circuit| graph.labels_of(circuit).cloned().collect()))
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    /// Checks that `circuit` is closed and walks every edge of `graph` exactly once
    fn uses_every_edge_once(graph: &AdjMatrix, circuit: &[Node]) -> bool {
        let walked = circuit
            .windows(2)
            .map(|w| Edge(w[0], w[1]).normalized())
            .sorted()
            .collect_vec();

        circuit.first() == circuit.last()
            && walked.iter().all(|&Edge(u, v)| graph.has_edge(u, v))
            && walked == graph.edges(true).collect_vec()
    }

    #[test]
    fn triangle() {
        assert_eq!(
            find_eulerian_circuit([(1, 2), (2, 3), (3, 1)]),
            Ok(Some(vec![1, 2, 3, 1]))
        );
    }

    #[test]
    fn sub_walks_are_spliced() {
        let mut graph = AdjMatrix::new(6, false);
        graph.connect_cycle(0..5);
        graph.connect_cycle([0, 2, 5]);

        let circuit = graph.eulerian_circuit().unwrap().unwrap();
        assert_eq!(circuit, vec![0, 1, 2, 0, 4, 3, 2, 5, 0]);
        assert!(uses_every_edge_once(&graph, &circuit));
    }

    #[test]
    fn odd_degrees_or_disconnected_edges() {
        assert_eq!(find_eulerian_circuit([(1, 2)]), Ok(None));
        assert_eq!(
            find_eulerian_circuit([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]),
            Ok(None)
        );

        let mut graph = AdjMatrix::new(6, false);
        graph.connect_cycle(0..3);
        graph.connect_cycle(3..6);
        assert_eq!(graph.has_eulerian_circuit(), Ok(false));
        assert_eq!(graph.eulerian_circuit(), Ok(None));
    }

    #[test]
    fn isolated_nodes_are_skipped() {
        let mut graph = AdjMatrix::new(6, false);
        graph.connect_cycle([2, 4, 5]);
        assert_eq!(graph.eulerian_circuit(), Ok(Some(vec![2, 4, 5, 2])));
    }

    #[test]
    fn graphs_without_edges() {
        assert_eq!(AdjMatrix::new(3, false).eulerian_circuit(), Ok(Some(vec![0])));
        assert_eq!(AdjMatrix::new(0, false).eulerian_circuit(), Ok(None));
        assert_eq!(find_eulerian_circuit(Vec::<(u8, u8)>::new()), Ok(None));
    }

    #[test]
    fn self_loops_count_twice() {
        assert_eq!(find_eulerian_circuit([(1, 1)]), Ok(Some(vec![1, 1])));
        assert_eq!(
            find_eulerian_circuit([(1, 2), (2, 3), (3, 1), (2, 2)]),
            Ok(Some(vec![1, 2, 2, 3, 1]))
        );
    }

    #[test]
    fn directed_graphs_are_unsupported() {
        let graph = AdjMatrix::from_edges(3, true, [(0, 1), (1, 2), (2, 0)]);
        assert!(matches!(
            graph.eulerian_circuit(),
            Err(GraphError::Unsupported(_))
        ));
    }

    #[test]
    fn random_circuits_use_every_edge() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in 1..12 {
            for p in [0.3, 0.6, 0.9] {
                let graph = AdjMatrix::gnp_no_loops(rng, n, p, false);
                let has_circuit = graph.has_eulerian_circuit().unwrap();

                match graph.eulerian_circuit().unwrap() {
                    Some(circuit) => {
                        assert!(has_circuit);
                        if !graph.is_singleton_graph() {
                            assert!(uses_every_edge_once(&graph, &circuit));
                        }
                    }
                    None => assert!(!has_circuit),
                }
            }
        }
    }

    #[test]
    fn circuits_of_cycle_unions() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for n in 3..15 {
            let mut graph = AdjMatrix::new(n, false);
            graph.connect_cycle(random_permutation(rng, n));

            let circuit = graph.eulerian_circuit().unwrap().unwrap();
            assert_eq!(circuit.len(), n as usize + 1);
            assert!(uses_every_edge_once(&graph, &circuit));
        }
    }
}
