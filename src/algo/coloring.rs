/*!
# Vertex Coloring

Backtracking search for a proper vertex coloring with a fixed number of colors (three by default).

Vertices are colored in rank order; each vertex tries the colors `1..=k` in ascending order and
takes the first one not used by an already colored neighbor. A vertex is never compared against
itself, so a self-loop does not prevent a coloring. For directed graphs an edge constrains both
endpoints regardless of its orientation.

Two fixed policies shape the result of [`ColoringSearch`]:
- A graph with fewer than `k` vertices is reported as not colorable, without searching.
- With `fill_palette` enabled (the default), a coloring that uses exactly `k - 1` distinct colors
  gets its **last** vertex recolored to `k`. As color `k` is unused at that point, the coloring
  stays proper.
*/

use std::{fmt::Debug, hash::Hash, ops::Range};

use itertools::Itertools;
use log::debug;

use super::*;

/// Colors are `1..=k`; `0` marks an uncolored vertex
pub type Color = u32;

/// Value of an uncolored vertex
pub const UNCOLORED: Color = 0;

/// Configurable coloring search.
///
/// # Examples
/// ```
/// use cgraphs::{prelude::*, algo::*};
///
/// // A star: the center conflicts with every leaf, the leaves with nobody
/// let graph = AdjMatrix::from_edges(4, false, [(0, 1), (0, 2), (0, 3)]);
///
/// // Two colors suffice, so the last vertex is moved to the third color
/// assert_eq!(ColoringSearch::new().color(&graph), Some(vec![1, 2, 2, 3]));
/// assert_eq!(ColoringSearch::new().fill_palette(false).color(&graph), Some(vec![1, 2, 2, 2]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ColoringSearch {
    number_of_colors: Color,
    fill_palette: bool,
}

impl Default for ColoringSearch {
    fn default() -> Self {
        Self {
            number_of_colors: 3,
            fill_palette: true,
        }
    }
}

impl ColoringSearch {
    /// Creates a search for 3-colorings
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the number of available colors
    /// ** Panics if `k == 0` **
    pub fn number_of_colors(mut self, k: Color) -> Self {
        assert!(k > 0, "At least one color is required!");
        self.number_of_colors = k;
        self
    }

    /// Enables or disables recoloring the last vertex when only `k - 1` colors were used
    pub fn fill_palette(mut self, fill: bool) -> Self {
        self.fill_palette = fill;
        self
    }

    /// Searches a coloring of the graph's ranks.
    ///
    /// Returns `colors[u]` in `1..=k` for every node `u`, or `None` if the graph has fewer
    /// than `k` nodes or no proper coloring with `k` colors exists.
    pub fn color<G>(&self, graph: &G) -> Option<Vec<Color>>
    where
        G: AdjacencyTest,
    {
        let n = graph.len();
        if n < self.number_of_colors as usize {
            debug!(
                "{n} vertices cannot be colored with {} colors",
                self.number_of_colors
            );
            return None;
        }

        let mut problem = ColoringProblem {
            graph,
            colors: vec![UNCOLORED; n],
            number_of_colors: self.number_of_colors,
        };

        if !Backtracker::new().solve(&mut problem) {
            debug!(
                "no coloring with {} colors exists for {n} vertices",
                self.number_of_colors
            );
            return None;
        }

        let mut colors = problem.colors;
        if self.fill_palette
            && colors.iter().unique().count() as Color + 1 == self.number_of_colors
        {
            if let Some(last) = colors.last_mut() {
                *last = self.number_of_colors;
            }
        }

        Some(colors)
    }

    /// Searches a coloring and reports it per vertex label, in rank order
    pub fn color_labeled<L>(&self, graph: &LabeledGraph<L>) -> Option<VertexColoring<L>>
    where
        L: Clone,
    {
        let colors = self.color(graph)?;
        Some(VertexColoring {
            assignment: graph.labels().iter().cloned().zip(colors).collect(),
        })
    }
}

/// The partial coloring explored by the [`Backtracker`]; position `p` is node `p`
struct ColoringProblem<'a, G> {
    graph: &'a G,
    colors: Vec<Color>,
    number_of_colors: Color,
}

impl<G> BacktrackProblem for ColoringProblem<'_, G>
where
    G: AdjacencyTest,
{
    fn positions(&self) -> usize {
        self.colors.len()
    }

    fn candidates(&self, _: usize) -> Range<u32> {
        1..self.number_of_colors + 1
    }

    fn is_valid(&self, position: usize, color: Color) -> bool {
        let u = position as Node;
        self.graph
            .vertices()
            .filter(|&v| v != u && self.graph.has_edge_either_way(u, v))
            .all(|v| self.colors[v as usize] != color)
    }

    fn assign(&mut self, position: usize, color: Color) {
        self.colors[position] = color;
    }

    fn unassign(&mut self, position: usize) {
        self.colors[position] = UNCOLORED;
    }
}

/// A coloring reported per vertex label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexColoring<L> {
    assignment: Vec<(L, Color)>,
}

impl<L> VertexColoring<L> {
    /// Returns the `(label, color)` pairs in rank order
    pub fn into_vec(self) -> Vec<(L, Color)> {
        self.assignment
    }

    /// Returns the colors in rank order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.assignment.iter().map(|&(_, c)| c)
    }

    /// Returns the color of a vertex, if it is part of the coloring
    pub fn color_of(&self, label: &L) -> Option<Color>
    where
        L: PartialEq,
    {
        self.assignment
            .iter()
            .find_map(|(l, c)| (l == label).then_some(*c))
    }
}

/// Coloring-related queries on a graph.
pub trait Colorable: AdjacencyTest + Sized {
    /// Searches a 3-coloring with the default policies of [`ColoringSearch`].
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut graph = AdjMatrix::new(4, false);
    /// graph.connect_clique(0..4, false);
    /// assert_eq!(graph.three_coloring(), None);
    ///
    /// let mut graph = AdjMatrix::new(5, false);
    /// graph.connect_cycle(0..5);
    /// assert_eq!(graph.three_coloring(), Some(vec![1, 2, 1, 2, 3]));
    /// ```
    fn three_coloring(&self) -> Option<Vec<Color>> {
        ColoringSearch::new().color(self)
    }

    /// Returns *true* if every node has a color other than [`UNCOLORED`] and no edge between
    /// two distinct nodes joins equal colors
    fn is_proper_coloring(&self, colors: &[Color]) -> bool {
        colors.len() == self.len()
            && colors.iter().all(|&c| c != UNCOLORED)
            && self.vertices().all(|u| {
                self.vertices()
                    .filter(|&v| v != u && self.has_edge(u, v))
                    .all(|v| colors[u as usize] != colors[v as usize])
            })
    }
}

impl<G: AdjacencyTest> Colorable for G {}

/// Colors a graph given as adjacency matrix rows and a vertex list with three colors.
///
/// Returns the `(label, color)` pairs in the order of `labels`, or `Ok(None)` if coloring with
/// three colors is impossible (including graphs with fewer than three vertices).
///
/// # Errors
/// Fails if the matrix is malformed or does not match the vertex list.
///
/// # Examples
/// ```
/// use cgraphs::algo::*;
///
/// let rows = [[0u8, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 0]];
/// assert_eq!(
///     color_graph(&rows, vec!['a', 'b', 'c', 'd']),
///     Ok(Some(vec![('a', 1), ('b', 2), ('c', 2), ('d', 3)]))
/// );
/// ```
pub fn color_graph<L, R, T>(rows: &[R], labels: Vec<L>) -> Result<Option<Vec<(L, Color)>>>
where
    L: Ord + Clone + Hash + Debug,
    R: AsRef<[T]>,
    T: Copy + Into<u8>,
{
    let graph = LabeledGraph::try_from_matrix(rows, labels)?;
    Ok(ColoringSearch::new()
        .color_labeled(&graph)
        .map(VertexColoring::into_vec))
}
