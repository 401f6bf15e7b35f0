/*!
# Hamiltonian Cycles

Backtracking search for a cycle that visits every vertex exactly once.

The cycle is anchored at rank `0`: as every cycle can be rotated to start at any of its vertices,
fixing the start loses no solutions. Slot `p` of the path then tries all ranks in ascending order
and accepts a rank if it is not on the path yet and an edge leads to it from slot `p - 1`. Once
all slots are filled, the last vertex must have an edge back to the start.

Results repeat the start vertex at the end, so a cycle through `n` vertices has `n + 1` entries.
Graphs with fewer than two vertices have no cycle in this sense. For directed graphs edges are
only followed in their direction.
*/

use std::{fmt::Debug, hash::Hash, ops::Range};

use log::debug;

use super::*;

/// The partial path explored by the [`Backtracker`]; position `p` is slot `p` of the path
struct CycleProblem<'a, G> {
    graph: &'a G,
    path: Vec<Node>,
    on_path: NodeBitSet,
}

impl<'a, G> CycleProblem<'a, G>
where
    G: AdjacencyTest,
{
    fn new(graph: &'a G) -> Self {
        let mut path = vec![INVALID_NODE; graph.len()];
        let mut on_path = graph.vertex_bitset_unset();

        path[0] = 0;
        on_path.set_bit(0);

        Self {
            graph,
            path,
            on_path,
        }
    }
}

impl<G> BacktrackProblem for CycleProblem<'_, G>
where
    G: AdjacencyTest,
{
    fn positions(&self) -> usize {
        self.path.len()
    }

    fn candidates(&self, _: usize) -> Range<u32> {
        self.graph.vertices()
    }

    fn is_valid(&self, position: usize, v: Node) -> bool {
        !self.on_path.get_bit(v) && self.graph.has_edge(self.path[position - 1], v)
    }

    fn assign(&mut self, position: usize, v: Node) {
        self.path[position] = v;
        self.on_path.set_bit(v);
    }

    fn unassign(&mut self, position: usize) {
        self.on_path.clear_bit(self.path[position]);
        self.path[position] = INVALID_NODE;
    }

    fn is_complete(&self) -> bool {
        let last = self.path[self.path.len() - 1];
        self.graph.has_edge(last, self.path[0])
    }
}

/// Hamiltonian-cycle queries on a graph.
pub trait HamiltonianCycle: AdjacencyTest + Sized {
    /// Searches a Hamiltonian cycle starting and ending at node `0`.
    ///
    /// Returns the `n + 1` nodes of the cycle or `None` if no cycle exists or the graph has
    /// fewer than two nodes.
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut graph = AdjMatrix::new(4, false);
    /// graph.connect_cycle([0, 2, 1, 3]);
    /// assert_eq!(graph.hamiltonian_cycle(), Some(vec![0, 2, 1, 3, 0]));
    ///
    /// let mut graph = AdjMatrix::new(4, false);
    /// graph.connect_path(0..4);
    /// assert_eq!(graph.hamiltonian_cycle(), None);
    /// ```
    fn hamiltonian_cycle(&self) -> Option<Vec<Node>> {
        if self.len() < 2 {
            debug!("{} vertices do not form a Hamiltonian cycle", self.len());
            return None;
        }

        let mut problem = CycleProblem::new(self);
        if !Backtracker::new().first_position(1).solve(&mut problem) {
            debug!("no Hamiltonian cycle through {} vertices", self.len());
            return None;
        }

        let mut cycle = problem.path;
        cycle.push(cycle[0]);
        Some(cycle)
    }

    /// Returns *true* if `cycle` lists every node exactly once followed by its first node again,
    /// and consecutive nodes are joined by edges
    fn is_hamiltonian_cycle(&self, cycle: &[Node]) -> bool {
        let n = self.len();
        if n < 2 || cycle.len() != n + 1 || cycle.first() != cycle.last() {
            return false;
        }

        let mut visited = self.vertex_bitset_unset();
        cycle[..n]
            .iter()
            .all(|&u| (u as usize) < n && !visited.set_bit(u))
            && cycle.windows(2).all(|w| self.has_edge(w[0], w[1]))
    }
}

impl<G: AdjacencyTest> HamiltonianCycle for G {}

/// Searches a Hamiltonian cycle and reports it by vertex label.
///
/// Returns the labels of the cycle starting and ending at the first vertex, or an empty `Vec`
/// if no cycle exists.
pub fn hamiltonian_cycle_of<L>(graph: &LabeledGraph<L>) -> Vec<L>
where
    L: Clone,
{
    graph
        .hamiltonian_cycle()
        .map(|cycle| graph.labels_of(cycle).cloned().collect())
        .unwrap_or_default()
}

/// Searches a Hamiltonian cycle in the graph spanned by an edge list.
///
/// The search starts at the smallest label. Returns an empty `Vec` if no cycle exists.
///
/// # Examples
/// ```
/// use cgraphs::algo::*;
///
/// assert_eq!(find_hamiltonian_cycle([(1, 2), (3, 2), (3, 1)], false), vec![1, 2, 3, 1]);
/// assert_eq!(find_hamiltonian_cycle([(1, 2), (3, 2), (3, 1)], true), Vec::<i32>::new());
/// ```
pub fn find_hamiltonian_cycle<L, I>(edges: I, directed: bool) -> Vec<L>
where
    L: Ord + Clone + Hash + Debug,
    I: IntoIterator<Item = (L, L)>,
{
    hamiltonian_cycle_of(&LabeledGraph::from_edges(edges, directed))
}

/// Searches a Hamiltonian cycle in a graph given as adjacency matrix rows and a vertex list.
///
/// # Errors
/// Fails if the matrix is malformed or does not match the vertex list.
pub fn hamiltonian_cycle_of_matrix<L, R, T>(rows: &[R], labels: Vec<L>) -> Result<Vec<L>>
where
    L: Ord + Clone + Hash + Debug,
    R: AsRef<[T]>,
    T: Copy + Into<u8>,
{
    let graph = LabeledGraph::try_from_matrix(rows, labels)?;
    Ok(hamiltonian_cycle_of(&graph))
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn triangle() {
        assert_eq!(
            find_hamiltonian_cycle([("c", "a"), ("b", "c"), ("a", "b")], false),
            vec!["a", "b", "c", "a"]
        );
    }

    #[test]
    fn path_has_no_cycle() {
        for n in 2..8 {
            let edges = (0..n - 1).map(|u| (u, u + 1)).collect_vec();
            let cycle = find_hamiltonian_cycle(edges, true);
            assert!(cycle.is_empty());
        }

        let edges = (0..5).map(|u| (u, u + 1)).collect_vec();
        assert!(find_hamiltonian_cycle(edges, false).is_empty());
    }

    #[test]
    fn single_edge_is_walked_back_and_forth() {
        assert_eq!(find_hamiltonian_cycle([(4, 7)], false), vec![4, 7, 4]);
        assert!(find_hamiltonian_cycle([(4, 7)], true).is_empty());
    }

    #[test]
    fn tiny_graphs() {
        assert!(find_hamiltonian_cycle([(1, 1)], false).is_empty());
        assert!(find_hamiltonian_cycle(Vec::<(u8, u8)>::new(), false).is_empty());
        assert_eq!(AdjMatrix::new(1, false).hamiltonian_cycle(), None);
    }

    #[test]
    fn directed_cycle() {
        let cycle = find_hamiltonian_cycle([(1, 3), (3, 2), (2, 4), (4, 1)], true);
        assert_eq!(cycle, vec![1, 3, 2, 4, 1]);

        let cycle = find_hamiltonian_cycle([(3, 1), (2, 3), (4, 2), (1, 4)], true);
        assert_eq!(cycle, vec![1, 4, 2, 3, 1]);
    }

    #[test]
    fn first_cycle_in_rank_order() {
        let mut graph = AdjMatrix::new(5, false);
        graph.connect_clique(0..5, false);
        assert_eq!(graph.hamiltonian_cycle(), Some(vec![0, 1, 2, 3, 4, 0]));
    }

    #[test]
    fn matrix_input() {
        let rows = [[0u8, 1, 1, 0], [1, 0, 1, 1], [1, 1, 0, 1], [0, 1, 1, 0]];
        assert_eq!(
            hamiltonian_cycle_of_matrix(&rows, vec!['w', 'x', 'y', 'z']),
            Ok(vec!['w', 'x', 'z', 'y', 'w'])
        );
        assert!(hamiltonian_cycle_of_matrix(&rows, vec!['w', 'x', 'y']).is_err());
    }

    #[test]
    fn petersen_graph_is_not_hamiltonian() {
        let mut graph = AdjMatrix::new(10, false);
        graph.connect_cycle(0..5);
        graph.connect_cycle([5, 7, 9, 6, 8]);
        for u in 0..5 {
            graph.add_edge(u, u + 5);
        }
        assert_eq!(graph.hamiltonian_cycle(), None);
    }

    #[test]
    fn random_cycles_are_valid() {
        init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in 2..10 {
            for p in [0.3, 0.5, 0.8] {
                for directed in [false, true] {
                    let graph = AdjMatrix::gnp_no_loops(rng, n, p, directed);
                    if let Some(cycle) = graph.hamiltonian_cycle() {
                        assert!(graph.is_hamiltonian_cycle(&cycle));
                        assert_eq!(cycle[0], 0);
                    }
                }
            }
        }
    }

    #[test]
    fn hidden_cycle_is_found() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);

        for n in 3..10 {
            let mut graph = AdjMatrix::gnp_no_loops(rng, n, 0.2, false);
            let order = random_permutation(rng, n);
            for (&u, &v) in order.iter().circular_tuple_windows() {
                graph.try_add_edge(u, v);
            }

            let cycle = graph.hamiltonian_cycle().unwrap();
            assert!(graph.is_hamiltonian_cycle(&cycle));
        }
    }
}
