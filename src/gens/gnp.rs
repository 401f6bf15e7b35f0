use super::*;

fn is_valid_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

/// `G(n,p)` graphs generate every possible edge in a graph with `n` nodes with probability `p`
/// independent from each other.
///
/// The stream draws one coin per ordered pair `(u, v)` in lexicographic order, self-loops
/// included. Filtering normalized edges or loops is up to the caller.
///
/// # Examples
/// ```
/// use cgraphs::{prelude::*, gens::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(1);
/// assert_eq!(Gnp::new().nodes(4).prob(1.0).generate(rng).len(), 16);
/// assert!(Gnp::new().nodes(4).prob(0.0).generate(rng).is_empty());
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(is_valid_probability(prob));
        self.p = Some(prob);
        self
    }

    fn probability(&self) -> f64 {
        self.p.expect("Probability of Gnp was not set!")
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let n = self.n;
        let p = if n == 0 { 0.0 } else { self.probability() };

        (0..n)
            .flat_map(move |u| (0..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn edges_are_sorted_and_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1, 5, 20] {
            let edges = Gnp::new().nodes(n).prob(0.4).generate(rng);
            assert!(edges.is_sorted());
            assert!(edges.iter().all(|&Edge(u, v)| u < n && v < n));
        }
    }

    #[test]
    fn random_graphs_respect_directedness() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in 1..20 {
            let graph = AdjMatrix::gnp(rng, n, 0.5, false);
            assert!(graph.is_undirected() && graph.is_symmetric());

            let graph = AdjMatrix::gnp_no_loops(rng, n, 0.5, true);
            assert!(graph.is_directed());
            assert!(graph.vertices().all(|u| !graph.has_self_loop(u)));
        }
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = Gnp::new().nodes(3).prob(1.5);
    }
}
