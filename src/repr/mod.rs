/*!
# Graph Representations

- [`AdjMatrix`]: a square boolean matrix indexed by rank, one [`NodeBitSet`] per row.
- [`LabeledGraph`]: a vertex list of arbitrary ordered labels together with its [`AdjMatrix`].
  This is the usual entry point when a graph is given as an edge list.

Both implement the read-only traits of [`crate::ops`], so every algorithm accepts either.
*/

use crate::{error::*, ops::*, *};

mod labeled;
mod matrix;

pub use labeled::*;
pub use matrix::*;
