//! Uniform selection among equally scored moves

use rand::{seq::SliceRandom, Rng};

use crate::WIDTH;

/// The columns sharing the best score seen so far at a search node
#[derive(Copy, Clone, Debug)]
pub struct TieSet {
    size: usize,
    columns: [usize; WIDTH],
}

impl Default for TieSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TieSet {
    pub fn new() -> Self {
        Self {
            size: 0,
            columns: [0; WIDTH],
        }
    }

    /// Discards the current members, leaving `column` as the only one
    pub fn reset(&mut self, column: usize) {
        self.columns[0] = column;
        self.size = 1;
    }

    /// Adds a column that ties with the current members
    pub fn push(&mut self, column: usize) {
        // a node has at most WIDTH children, each pushed at most once
        debug_assert!(self.size < WIDTH, "tie set overflow");
        self.columns[self.size] = column;
        self.size += 1;
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.columns[..self.size]
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Picks one member uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        self.as_slice().choose(rng).copied()
    }
}
