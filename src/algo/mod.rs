/*!
# Graph Algorithms

This module provides the **search and test algorithms** built on top of the graph representations
in this crate. All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use cgraphs::algo::*;
```
and gain access to coloring, Hamiltonian cycles, the isomorphism filter, bipartiteness tests and
Eulerian circuits.

Most algorithms are provided as traits implemented on every suitable graph (e.g.
`graph.hamiltonian_cycle()`), with configurable structs where an algorithm has parameters
(e.g. [`ColoringSearch`]). In addition, every algorithm has a free function taking an edge list of
labelled vertices and reporting its result by label.
*/

mod backtrack;
mod bipartite;
mod coloring;
mod eulerian;
mod hamiltonian;
mod isomorphism;

use crate::prelude::*;

pub use backtrack::*;
pub use bipartite::*;
pub use coloring::*;
pub use eulerian::*;
pub use hamiltonian::*;
pub use isomorphism::*;
