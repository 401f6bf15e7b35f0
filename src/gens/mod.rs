/*!
# Graph Generators

This module provides deterministic substructure generators and a seeded random graph model, mostly
used to set up instances for tests and examples.

Random generators follow a builder-style pattern. The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

In addition, the [`RandomGraph`] trait wraps the generators into constructors of whole
[`AdjMatrix`] instances that respect the directedness of the matrix.

Substructures (paths, cycles, cliques) are inserted into existing graphs via
[`GeneratorSubstructures`], and [`hypercube_edges`] lists the edges of a hypercube.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    /// Every unordered pair (ordered pair if `directed`) and every self-loop is included
    /// independently.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng;

    /// Creates a `G(n,p)` graph with no self-loops.
    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng;
}

impl RandomGraph for AdjMatrix {
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            directed,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .stream(rng)
                .filter(|e| directed || e.is_normalized()),
        )
    }

    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            directed,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .stream(rng)
                .filter(|e| !e.is_loop() && (directed || e.is_normalized())),
        )
    }
}
