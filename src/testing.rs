use rand::{Rng, seq::SliceRandom};

use crate::prelude::*;

/// Installs `env_logger` in test mode; later calls are ignored
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Returns the ranks `0..n` in uniformly random order
pub(crate) fn random_permutation<R: Rng>(rng: &mut R, n: NumNodes) -> Vec<Node> {
    let mut nodes: Vec<Node> = (0..n).collect();
    nodes.shuffle(rng);
    nodes
}
