/*!
# Node Representation

Algorithms work on **ranks**: the position of a vertex label in the sorted vertex list of its graph.
We choose `Node = u32` as the graphs handled by backtracking searches are tiny, and a compact index
keeps per-vertex working buffers small.
*/

use bitvec::prelude::*;

/// Nodes are ranks from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid; marks unfilled slots of a partial path
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Fixed-size set of nodes `0..n`, used for matrix rows and visited-sets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeBitSet {
    bits: BitVec,
}

impl NodeBitSet {
    /// Creates an empty set over the nodes `0..n`
    pub fn new(n: NumNodes) -> Self {
        Self {
            bits: bitvec![0; n as usize],
        }
    }

    /// Inserts `u` and returns *true* if it was contained before
    /// ** Panics if `u >= n` **
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.bits.replace(u as usize, true)
    }

    /// Removes `u` and returns *true* if it was contained before
    /// ** Panics if `u >= n` **
    pub fn clear_bit(&mut self, u: Node) -> bool {
        self.bits.replace(u as usize, false)
    }

    /// ** Panics if `u >= n` **
    pub fn get_bit(&self, u: Node) -> bool {
        self.bits[u as usize]
    }

    /// Returns the number of contained nodes
    pub fn cardinality(&self) -> NumNodes {
        self.bits.count_ones() as NumNodes
    }

    /// Returns the contained nodes in ascending order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.bits.iter_ones().map(|u| u as Node)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_and_clear() {
        let mut set = NodeBitSet::new(70);
        assert!(!set.set_bit(3));
        assert!(set.set_bit(3));
        assert!(!set.set_bit(69));

        assert!(set.get_bit(69));
        assert_eq!(set.cardinality(), 2);
        assert_eq!(set.iter_set_bits().collect::<Vec<_>>(), vec![3, 69]);

        assert!(set.clear_bit(3));
        assert!(!set.clear_bit(3));
        assert_eq!(set.iter_set_bits().collect::<Vec<_>>(), vec![69]);
    }
}
