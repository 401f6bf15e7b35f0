/*!
# Backtracking Engine

A generic exhaustive search with pruning over a fixed sequence of positions.
Each position receives one candidate out of an ascending range; a candidate is only assigned if
it is valid with respect to all earlier assignments. If no candidate of a position leads to a
solution, its assignment is undone and the search resumes at the previous position.

The search is driven by an explicit stack of frames instead of recursion, so the depth is only
bounded by the heap. The trial order is the same as for the recursive formulation: positions are
filled in ascending order and candidates are tried in ascending order, hence the first solution
found is deterministic.

The coloring ([`super::coloring`]) and Hamiltonian-cycle ([`super::hamiltonian`]) searches are
both instances of [`BacktrackProblem`].
*/

use std::ops::Range;

use log::{debug, trace};

/// A constraint-satisfaction problem that can be solved by [`Backtracker`].
///
/// The problem owns its partial assignment; the engine only decides which candidate is
/// assigned to or removed from which position.
pub trait BacktrackProblem {
    /// Returns the number of positions; positions are `0..self.positions()`
    fn positions(&self) -> usize;

    /// Returns the candidates of a position in the order they are tried
    fn candidates(&self, position: usize) -> Range<u32>;

    /// Returns *true* if `candidate` may be assigned to `position` given the current
    /// assignment of all earlier positions
    fn is_valid(&self, position: usize, candidate: u32) -> bool;

    /// Assigns `candidate` to `position`
    fn assign(&mut self, position: usize, candidate: u32);

    /// Removes the assignment of `position`
    fn unassign(&mut self, position: usize);

    /// Final check once all positions are assigned.
    /// If it fails, the search continues with the next candidate of the last position.
    fn is_complete(&self) -> bool {
        true
    }
}

/// Counters of a single backtracking run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of candidates that were assigned
    pub assignments: u64,
    /// Number of assignments that were undone
    pub backtracks: u64,
}

/// One level of the explicit search stack
struct Frame {
    position: usize,
    remaining: Range<u32>,
    assigned: bool,
}

/// Depth-first search with rollback over a [`BacktrackProblem`].
///
/// # Examples
/// ```
/// use std::ops::Range;
/// use cgraphs::algo::*;
///
/// /// Find a strictly increasing sequence of length 3 over `0..4` summing to 6
/// struct Increasing(Vec<u32>);
///
/// impl BacktrackProblem for Increasing {
///     fn positions(&self) -> usize { 3 }
///     fn candidates(&self, _: usize) -> Range<u32> { 0..4 }
///     fn is_valid(&self, position: usize, candidate: u32) -> bool {
///         position == 0 || self.0[position - 1] < candidate
///     }
///     fn assign(&mut self, position: usize, candidate: u32) { self.0[position] = candidate; }
///     fn unassign(&mut self, position: usize) { self.0[position] = 0; }
///     fn is_complete(&self) -> bool { self.0.iter().sum::<u32>() == 6 }
/// }
///
/// let mut problem = Increasing(vec![0; 3]);
/// assert!(Backtracker::new().solve(&mut problem));
/// assert_eq!(problem.0, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Backtracker {
    first_position: usize,
    stats: SearchStats,
}

impl Backtracker {
    /// Creates a new engine starting at position `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the first position to be searched.
    /// Positions before it are assumed to be fixed by the problem itself.
    pub fn first_position(mut self, position: usize) -> Self {
        self.first_position = position;
        self
    }

    /// Returns the counters of the last call to [`Backtracker::solve`]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches for a complete assignment.
    ///
    /// Returns *true* if one was found; the problem then holds this assignment.
    /// Otherwise every assignment made during the search has been undone.
    pub fn solve<P>(&mut self, problem: &mut P) -> bool
    where
        P: BacktrackProblem,
    {
        self.stats = SearchStats::default();
        let end = problem.positions();

        let solved = if self.first_position >= end {
            problem.is_complete()
        } else {
            self.run(problem, end)
        };

        debug!(
            "backtracking over {} positions finished (solved: {solved}, assignments: {}, backtracks: {})",
            end.saturating_sub(self.first_position),
            self.stats.assignments,
            self.stats.backtracks
        );

        solved
    }

    fn run<P>(&mut self, problem: &mut P, end: usize) -> bool
    where
        P: BacktrackProblem,
    {
        let mut stack = Vec::with_capacity(end - self.first_position);
        stack.push(Frame {
            position: self.first_position,
            remaining: problem.candidates(self.first_position),
            assigned: false,
        });

        while let Some(frame) = stack.last_mut() {
            let position = frame.position;

            if frame.assigned {
                problem.unassign(position);
                frame.assigned = false;
                self.stats.backtracks += 1;
            }

            let Some(candidate) = frame
                .remaining
                .by_ref()
                .find(|&candidate| problem.is_valid(position, candidate))
            else {
                stack.pop();
                continue;
            };

            trace!("assign {candidate} to position {position}");
            problem.assign(position, candidate);
            frame.assigned = true;
            self.stats.assignments += 1;

            let next = position + 1;
            if next < end {
                stack.push(Frame {
                    position: next,
                    remaining: problem.candidates(next),
                    assigned: false,
                });
            } else if problem.is_complete() {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Places `n` non-attacking queens, one per row
    struct Queens {
        columns: Vec<Option<u32>>,
    }

    impl BacktrackProblem for Queens {
        fn positions(&self) -> usize {
            self.columns.len()
        }

        fn candidates(&self, _: usize) -> Range<u32> {
            0..self.columns.len() as u32
        }

        fn is_valid(&self, position: usize, candidate: u32) -> bool {
            self.columns[..position]
                .iter()
                .enumerate()
                .all(|(row, column)| {
                    let column = column.unwrap();
                    column != candidate
                        && column.abs_diff(candidate) as usize != position - row
                })
        }

        fn assign(&mut self, position: usize, candidate: u32) {
            self.columns[position] = Some(candidate);
        }

        fn unassign(&mut self, position: usize) {
            self.columns[position] = None;
        }
    }

    #[test]
    fn queens_first_solution() {
        let mut queens = Queens {
            columns: vec![None; 8],
        };
        let mut engine = Backtracker::new();
        assert!(engine.solve(&mut queens));
        assert_eq!(
            queens.columns.iter().map(|c| c.unwrap()).collect::<Vec<_>>(),
            vec![0, 4, 7, 5, 2, 6, 1, 3]
        );
        assert!(engine.stats().backtracks > 0);
        assert!(engine.stats().assignments > engine.stats().backtracks);
    }

    #[test]
    fn unsolvable_rolls_back() {
        for n in [2, 3] {
            let mut queens = Queens {
                columns: vec![None; n],
            };
            let mut engine = Backtracker::new();
            assert!(!engine.solve(&mut queens));
            assert!(queens.columns.iter().all(Option::is_none));
            assert_eq!(engine.stats().assignments, engine.stats().backtracks);
        }
    }

    #[test]
    fn nothing_to_search() {
        let mut queens = Queens { columns: vec![] };
        assert!(Backtracker::new().solve(&mut queens));

        let mut queens = Queens {
            columns: vec![Some(0)],
        };
        let mut engine = Backtracker::new().first_position(1);
        assert!(engine.solve(&mut queens));
        assert_eq!(engine.stats(), SearchStats::default());
    }
}
