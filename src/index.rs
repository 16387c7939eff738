use crate::error::Result;
use std::fmt::Debug;

/// An online structure that counts the distinct substrings of the string
/// pushed into it so far.
///
/// Implemented by [`SuffixAutomaton`](crate::SuffixAutomaton) and
/// [`SuffixTree`](crate::SuffixTree), which give identical answers.
/// [`StreamController`](crate::StreamController) drives either through this
/// trait.
pub trait SubstringIndex {
    /// Alphabet symbol type.
    type Symbol: Copy + Debug;

    /// Appends one symbol and returns how many new distinct substrings it
    /// introduced.
    ///
    /// On error nothing has been modified.
    fn push(&mut self, symbol: Self::Symbol) -> Result<u64>;

    /// Number of distinct non-empty substrings of the string so far.
    fn distinct_substrings(&self) -> u64;

    /// Number of symbols pushed since construction or the last reset.
    fn len(&self) -> usize;

    /// Discards the current string, keeping allocations for the next one.
    fn reset(&mut self);

    /// Returns structural statistics.
    fn stats(&self) -> IndexStats;

    /// Returns true if nothing has been pushed since the last reset.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes every symbol in order and returns the resulting total.
    ///
    /// Stops at the first rejected symbol.
    fn extend<I: IntoIterator<Item = Self::Symbol>>(&mut self, iter: I) -> Result<u64>
    where
        Self: Sized,
    {
        for symbol in iter {
            self.push(symbol)?;
        }
        Ok(self.distinct_substrings())
    }
}

/// Structural statistics of a substring index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of symbols pushed
    pub input_length: usize,
    /// States (automaton) or nodes (tree), root included
    pub nodes: usize,
    /// Clone states (automaton) or internal split nodes (tree)
    pub splits: usize,
    /// Running distinct-substring count
    pub distinct_substrings: u64,
}

impl IndexStats {
    /// Average number of nodes allocated per input symbol.
    pub fn nodes_per_symbol(&self) -> f64 {
        if self.input_length == 0 {
            0.0
        } else {
            self.nodes as f64 / self.input_length as f64
        }
    }
}
