/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**
- **Cliques**

Edges that already exist are kept, so substructures may overlap.

# Example

```rust
use cgraphs::{prelude::*, gens::*};

let mut g = AdjMatrix::new(5, true);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique([0, 2, 4], false);

assert_eq!(
    g.edges(false).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 0), Edge(2, 3), Edge(2, 4), Edge(3, 4), Edge(4, 0), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Implemented for all graphs that support edge insertion and type queries.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// # Example
    /// ```rust
    /// use cgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = AdjMatrix::new(4, false);
    /// g.connect_path([0, 1, 2, 3]);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(2, 1));
    /// assert!(!g.has_edge(3, 0));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
    /// node is connected back to the first. A single node receives a self-loop.
    ///
    /// # Example
    /// ```rust
    /// use cgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = AdjMatrix::new(3, true);
    /// g.connect_cycle([0, 1, 2]);
    ///
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 0));
    /// assert!(!g.has_edge(0, 2));
    /// ```
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph).
    ///
    /// - If `with_loops` is `true`, each node also gets a self-loop.
    /// - Directed graphs receive both orientations of every edge.
    fn connect_clique<C>(&mut self, nodes: C, with_loops: bool)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphType,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.try_add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.try_add_edge(prev, cur);
                prev = cur;
            }

            self.try_add_edge(prev, first);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C, with_loops: bool)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for &u in &nodes {
            for &v in &nodes {
                let e = Edge(u, v);
                if (!with_loops && e.is_loop()) || (self.is_undirected() && !e.is_normalized()) {
                    continue;
                }

                self.try_add_edge(u, v);
            }
        }
    }
}

/// Returns the edges of the `dim`-dimensional hypercube on the nodes `0..2^dim`.
/// Two nodes are adjacent iff their binary representations differ in exactly one bit.
/// Edges are normalized and sorted.
///
/// # Example
/// ```rust
/// use cgraphs::{prelude::*, gens::*};
///
/// assert_eq!(hypercube_edges(2), vec![Edge(0, 1), Edge(0, 2), Edge(1, 3), Edge(2, 3)]);
/// assert_eq!(hypercube_edges(4).len(), 32);
/// ```
pub fn hypercube_edges(dim: u32) -> Vec<Edge> {
    assert!(dim < Node::BITS);
    let n: Node = 1 << dim;
    (0..n)
        .flat_map(|u| (0..dim).map(move |bit| Edge(u, u ^ (1 << bit))))
        .filter(|e| e.is_normalized())
        .sorted()
        .collect()
}
