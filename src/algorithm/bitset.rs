use bitvec::prelude::*;
use std::fmt;

/// Fixed-size mask over row-major lattice indices
///
/// Used to mark occupied tiles so growth sampling can draw only from free
/// ones. Indices past the mask length are ignored.
#[derive(Clone, Debug)]
pub struct TileMask {
    bits: BitVec,
}

impl TileMask {
    /// Create a mask with no tiles marked
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![0; len],
        }
    }

    /// Mark a tile index
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Number of tile indices covered by the mask
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Test if the mask covers no tiles
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Count marked tiles
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Indices of all unmarked tiles in ascending order
    pub fn free_indices(&self) -> Vec<usize> {
        self.bits.iter_zeros().collect()
    }

    /// Build a mask from an iterator of marked indices
    pub fn from_indices<I>(indices: I, len: usize) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut mask = Self::new(len);
        for index in indices {
            mask.insert(index);
        }
        mask
    }
}

impl fmt::Display for TileMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileMask({}/{} marked)", self.count(), self.len())
    }
}
