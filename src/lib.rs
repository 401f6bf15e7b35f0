/*!
`cgraphs` is a small library of classical, search-based graph algorithms for simple graphs given as
edge lists of labelled vertices or as `0/1` adjacency matrices:

- **Coloring** with `k` colors (3 by default) via backtracking,
- **Hamiltonian cycles** via backtracking,
- an **isomorphism filter** comparing graph invariants of increasing cost,
- **bipartiteness** tests via BFS 2-coloring,
- **Eulerian circuits** via Hierholzer's algorithm.

# Representation

We represent **nodes** as `u32` ranks in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

Labelled vertices are any totally ordered type. A [`LabeledGraph`](crate::repr::LabeledGraph)
sorts the distinct labels of an edge list, assigns rank `i` to the `i`-th smallest label and stores
the edges in an [`AdjMatrix`](crate::repr::AdjMatrix), a square bit matrix with one row per rank.

### Directed vs Undirected

We support both **directed** and **undirected** graphs:

- In an **undirected** graph, `Edge(u, v)` is stored as both `(u, v)` and `(v, u)`, so the matrix is symmetric.
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are considered distinct.

Matrices built from raw rows are undirected iff they are symmetric.

# Design

The search algorithms share a generic [`Backtracker`](crate::algo::Backtracker) that runs an
explicit stack instead of recursion and always tries candidates in ascending order, so results
are deterministic.

Algorithms with parameters are provided as configurable structs that one can alter to their needs
using the *Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
All functionality is also implemented via traits on the graph itself, making it usable without
configuring the algorithm beforehand.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and the graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as `graph.hamiltonian_cycle()` as well as functions working directly on edge lists,
- [`gens`] includes a random graph generator and deterministic substructures such as paths/cycles/cliques.

In most use-cases, `use cgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use cgraphs::algo::*;

let edges = [("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")];

assert_eq!(find_hamiltonian_cycle(edges, false), vec!["a", "b", "c", "d", "a"]);
assert_eq!(find_eulerian_circuit(edges), Ok(Some(vec!["a", "b", "c", "d", "a"])));
assert!(bipartite_check(edges));
```

Search outcomes such as "no coloring exists" are ordinary return values; [`GraphError`] is reserved
for malformed input and unsupported requests.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::{GraphError, Result};
pub use node::*;

/// `cgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
