/*!
# Isomorphism Filter

Decides whether two graphs *may* be isomorphic by comparing invariants of increasing cost:

1. [`FilterStage::VertexCount`]: both matrices have the same dimension,
2. [`FilterStage::EdgeCount`]: both matrices have the same number of set entries,
3. [`FilterStage::DegreeSequence`]: the sorted row sums coincide,
4. [`FilterStage::NeighborDegreeSignature`]: the sets of signatures
   `(degree, sorted degrees of all neighbors)` coincide.

The first failing stage proves that the graphs are not isomorphic. Passing all stages is only a
necessary condition: no bijection between the vertices is constructed, so graphs sharing all four
invariants are reported as isomorphic even if they are not (e.g. a hexagon and two disjoint
triangles). The comparison is purely structural; vertex labels are ignored.
*/

use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashSet;
use itertools::Itertools;
use log::debug;
use smallvec::SmallVec;

use super::*;

/// A stage of the [`IsomorphismFilter`], in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterStage {
    /// Number of vertices
    VertexCount,
    /// Number of set matrix entries
    EdgeCount,
    /// Multiset of vertex degrees
    DegreeSequence,
    /// Set of [`NeighborDegreeSignature`]s
    NeighborDegreeSignature,
}

/// Outcome of the [`IsomorphismFilter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsomorphismVerdict {
    /// All invariants coincide
    Plausible,
    /// The given stage proved that the graphs are not isomorphic
    Rejected(FilterStage),
}

impl IsomorphismVerdict {
    /// Returns *true* if no stage rejected the pair
    pub fn is_plausible(&self) -> bool {
        matches!(self, Self::Plausible)
    }

    /// Returns the stage that rejected the pair, if any
    pub fn rejected_at(&self) -> Option<FilterStage> {
        match self {
            Self::Plausible => None,
            Self::Rejected(stage) => Some(*stage),
        }
    }
}

/// Coarse invariant of a single vertex: its degree and the sorted degrees of its neighbors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NeighborDegreeSignature {
    /// Degree of the vertex
    pub degree: NumNodes,
    /// Degrees of all neighbors in ascending order
    pub neighbor_degrees: SmallVec<[NumNodes; 8]>,
}

impl NeighborDegreeSignature {
    /// Computes the signature of `u` given the degrees of all nodes
    /// ** Panics if `u >= n` or `degrees` has fewer than `n` entries **
    pub fn of<G>(graph: &G, degrees: &[NumNodes], u: Node) -> Self
    where
        G: AdjacencyList,
    {
        let mut neighbor_degrees: SmallVec<[NumNodes; 8]> = graph
            .neighbors_of(u)
            .map(|v| degrees[v as usize])
            .collect();
        neighbor_degrees.sort_unstable();

        Self {
            degree: degrees[u as usize],
            neighbor_degrees,
        }
    }
}

/// Returns the row sums of the adjacency matrix in rank order
pub fn degree_sequence<G>(graph: &G) -> Vec<NumNodes>
where
    G: AdjacencyList,
{
    graph.degrees().collect()
}

/// Returns the distinct [`NeighborDegreeSignature`]s of all vertices
pub fn neighbor_degree_signatures<G>(
    graph: &G,
    degrees: &[NumNodes],
) -> FxHashSet<NeighborDegreeSignature>
where
    G: AdjacencyList,
{
    graph
        .vertices()
        .map(|u| NeighborDegreeSignature::of(graph, degrees, u))
        .collect()
}

/// Fail-fast pipeline of isomorphism invariants.
///
/// # Examples
/// ```
/// use cgraphs::{prelude::*, algo::*};
///
/// let square = AdjMatrix::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let bowtie = AdjMatrix::from_edges(4, false, [(0, 1), (1, 2), (2, 0), (0, 3)]);
/// let crossed = AdjMatrix::from_edges(4, false, [(0, 2), (2, 1), (1, 3), (3, 0)]);
///
/// assert_eq!(IsomorphismFilter::check(&square, &crossed), IsomorphismVerdict::Plausible);
/// assert_eq!(
///     IsomorphismFilter::check(&square, &bowtie),
///     IsomorphismVerdict::Rejected(FilterStage::DegreeSequence)
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IsomorphismFilter;

impl IsomorphismFilter {
    /// Runs all stages on two graphs and reports the first one that fails
    pub fn check<G, H>(first: &G, second: &H) -> IsomorphismVerdict
    where
        G: AdjacencyList,
        H: AdjacencyList,
    {
        let verdict = Self::run(first, second);
        debug!("isomorphism filter: {verdict:?}");
        verdict
    }

    fn run<G, H>(first: &G, second: &H) -> IsomorphismVerdict
    where
        G: AdjacencyList,
        H: AdjacencyList,
    {
        use IsomorphismVerdict::*;

        if first.number_of_nodes() != second.number_of_nodes() {
            return Rejected(FilterStage::VertexCount);
        }

        let first_degrees = degree_sequence(first);
        let second_degrees = degree_sequence(second);

        let entries = |degrees: &[NumNodes]| degrees.iter().map(|&d| d as u64).sum::<u64>();
        if entries(&first_degrees) != entries(&second_degrees) {
            return Rejected(FilterStage::EdgeCount);
        }

        if !first_degrees.iter().sorted().eq(second_degrees.iter().sorted()) {
            return Rejected(FilterStage::DegreeSequence);
        }

        if neighbor_degree_signatures(first, &first_degrees)
            != neighbor_degree_signatures(second, &second_degrees)
        {
            return Rejected(FilterStage::NeighborDegreeSignature);
        }

        Plausible
    }

    /// Shorthand for `IsomorphismFilter::check(first, second).is_plausible()`
    pub fn is_plausibly_isomorphic<G, H>(first: &G, second: &H) -> bool
    where
        G: AdjacencyList,
        H: AdjacencyList,
    {
        Self::check(first, second).is_plausible()
    }
}

/// Isomorphism queries on a graph.
pub trait IsomorphismTest: AdjacencyList {
    /// Returns *true* if `other` passes all stages of the [`IsomorphismFilter`].
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut hexagon = AdjMatrix::new(6, false);
    /// hexagon.connect_cycle(0..6);
    ///
    /// let mut triangles = AdjMatrix::new(6, false);
    /// triangles.connect_cycle(0..3);
    /// triangles.connect_cycle(3..6);
    ///
    /// // Not isomorphic, but indistinguishable by the filter
    /// assert!(hexagon.is_isomorphic_to(&triangles));
    /// ```
    fn is_isomorphic_to<H>(&self, other: &H) -> bool
    where
        H: AdjacencyList,
    {
        IsomorphismFilter::is_plausibly_isomorphic(self, other)
    }
}

impl<G: AdjacencyList> IsomorphismTest for G {}

/// Checks two graphs given as edge lists for isomorphism.
///
/// # Examples
/// ```
/// use cgraphs::algo::*;
///
/// assert!(check_for_isomorphism([(1, 2), (2, 3)], [("a", "c"), ("b", "c")], false));
/// assert!(!check_for_isomorphism([(1, 2), (2, 3)], [("a", "b"), ("b", "c"), ("c", "a")], false));
/// ```
pub fn check_for_isomorphism<L, M, I, J>(first: I, second: J, directed: bool) -> bool
where
    L: Ord + Clone + Hash + Debug,
    M: Ord + Clone + Hash + Debug,
    I: IntoIterator<Item = (L, L)>,
    J: IntoIterator<Item = (M, M)>,
{
    let first = LabeledGraph::from_edges(first, directed);
    let second = LabeledGraph::from_edges(second, directed);
    first.is_isomorphic_to(&second)
}
