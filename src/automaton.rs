use crate::alphabet::{Lowercase, Transitions};
use crate::config::IndexConfig;
use crate::counter::SubstringCounter;
use crate::error::{IndexError, Result};
use crate::index::{IndexStats, SubstringIndex};
use crate::state::{StateId, StateTable};
use tracing::{debug, trace, warn};

/// Online suffix automaton that counts distinct substrings.
///
/// Each state is one endpos-equivalence class; the suffix links form a tree
/// rooted at [`StateId::ROOT`]. Appending a symbol creates one state for the
/// whole string and, when an existing class must be split, one clone. The
/// new state contributes `length(cur) - length(link(cur))` fresh substrings,
/// which is exactly what the running counter needs.
///
/// # Example
///
/// ```
/// use substrings_rs::SuffixAutomaton;
///
/// let mut sam = SuffixAutomaton::new();
/// assert_eq!(sam.push(b'a').unwrap(), 1);
/// assert_eq!(sam.push(b'b').unwrap(), 2);
/// assert_eq!(sam.push(b'a').unwrap(), 2);
/// assert_eq!(sam.distinct_substrings(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct SuffixAutomaton<A = Lowercase> {
    pub(crate) table: StateTable<A>,

    /// State holding the whole string processed so far
    last: StateId,

    counter: SubstringCounter,

    /// Number of symbols pushed since the last reset
    length: usize,

    /// Number of clone states created since the last reset
    clones: usize,
}

impl SuffixAutomaton<Lowercase> {
    /// Creates an automaton over `b'a'..=b'z'` sized with the default config.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }
}

impl<A: Transitions> SuffixAutomaton<A> {
    /// Creates an empty automaton sized for `config`.
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            table: StateTable::new(config.state_capacity()),
            last: StateId::ROOT,
            counter: SubstringCounter::new(),
            length: 0,
            clones: 0,
        }
    }

    /// Appends one symbol and returns the number of new distinct substrings.
    ///
    /// Rejects symbols outside the alphabet and refuses to start an
    /// extension that might not fit in the state table. In both cases the
    /// automaton is unchanged.
    pub fn push(&mut self, symbol: A::Symbol) -> Result<u64> {
        if !A::admits(symbol) {
            warn!(?symbol, "rejecting symbol outside the alphabet");
            return Err(IndexError::InvalidSymbol(format!("{:?}", symbol)));
        }

        // One extension allocates at most `cur` and a clone.
        if let Err(err) = self.table.ensure_headroom(2) {
            warn!(states = self.table.len(), "state table full");
            return Err(err);
        }

        let delta = self.extend_with(symbol)?;
        self.counter.add(delta);
        self.length += 1;

        trace!(length = self.length, delta, "extended suffix automaton");
        Ok(delta)
    }

    /// Pushes every symbol in order and returns the resulting total.
    pub fn extend<I: IntoIterator<Item = A::Symbol>>(&mut self, iter: I) -> Result<u64> {
        SubstringIndex::extend(self, iter)
    }

    fn extend_with(&mut self, symbol: A::Symbol) -> Result<u64> {
        let table = &mut self.table;
        let cur_length = table.length(self.last) + 1;
        let cur = table.create_state(cur_length)?;

        // Give every suffix of the old string that lacks `symbol` an edge to
        // `cur`, stopping at the first one that already has it.
        let mut p = Some(self.last);
        let found = loop {
            let Some(state) = p else {
                break None;
            };
            if let Some(q) = table.transition(state, symbol) {
                break Some((state, q));
            }
            table.set_transition(state, symbol, cur);
            p = table.link(state);
        };

        match found {
            None => table.set_link(cur, StateId::ROOT),
            Some((p, q)) if table.length(p) + 1 == table.length(q) => table.set_link(cur, q),
            Some((p, q)) => {
                let clone_length = table.length(p) + 1;
                let clone = table.create_state(clone_length)?;
                if let Some(parent) = table.link(q) {
                    table.set_link(clone, parent);
                }
                table.clone_transitions(q, clone);

                let mut walk = Some(p);
                while let Some(state) = walk {
                    if table.transition(state, symbol) != Some(q) {
                        break;
                    }
                    table.set_transition(state, symbol, clone);
                    walk = table.link(state);
                }

                table.set_link(q, clone);
                table.set_link(cur, clone);
                self.clones += 1;
            }
        }

        self.last = cur;
        let parent_length = table.link(cur).map_or(0, |link| table.length(link));
        Ok((table.length(cur) - parent_length) as u64)
    }

    /// Number of distinct non-empty substrings of the string so far.
    pub fn distinct_substrings(&self) -> u64 {
        self.counter.total()
    }

    /// Number of symbols pushed since construction or the last reset.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of states, root included.
    pub fn state_count(&self) -> usize {
        self.table.len()
    }

    /// Number of clone states created by splits.
    pub fn clone_count(&self) -> usize {
        self.clones
    }

    /// Returns true if `pattern` occurs as a substring of the string so far.
    ///
    /// The empty pattern is always contained.
    pub fn contains(&self, pattern: &[A::Symbol]) -> bool {
        let mut state = StateId::ROOT;
        for &symbol in pattern {
            if !A::admits(symbol) {
                return false;
            }
            match self.table.transition(state, symbol) {
                Some(next) => state = next,
                None => return false,
            }
        }
        true
    }

    /// Discards the current string.
    ///
    /// Only the states created since the previous reset are touched.
    pub fn reset(&mut self) {
        let discarded = self.table.clear();
        self.last = StateId::ROOT;
        self.counter.reset();
        self.length = 0;
        self.clones = 0;
        debug!(discarded, "reset suffix automaton");
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            input_length: self.length,
            nodes: self.table.len(),
            splits: self.clones,
            distinct_substrings: self.counter.total(),
        }
    }
}

impl<A: Transitions> SubstringIndex for SuffixAutomaton<A> {
    type Symbol = A::Symbol;

    fn push(&mut self, symbol: A::Symbol) -> Result<u64> {
        SuffixAutomaton::push(self, symbol)
    }

    fn distinct_substrings(&self) -> u64 {
        SuffixAutomaton::distinct_substrings(self)
    }

    fn len(&self) -> usize {
        SuffixAutomaton::len(self)
    }

    fn reset(&mut self) {
        SuffixAutomaton::reset(self)
    }

    fn stats(&self) -> IndexStats {
        SuffixAutomaton::stats(self)
    }
}

impl Default for SuffixAutomaton<Lowercase> {
    fn default() -> Self {
        Self::new()
    }
}
