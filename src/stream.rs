use crate::automaton::SuffixAutomaton;
use crate::error::Result;
use crate::index::SubstringIndex;
use tracing::debug;

/// One step of the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<S> {
    /// Append a symbol to the current string.
    Append(S),
    /// Report the distinct-substring count of the current string.
    Query,
    /// Discard the current string and start an independent one.
    NewString,
}

/// Drives one long-lived substring index across a stream of independent
/// strings.
///
/// Queries may arrive at any point, including before the first append of a
/// string, and are answered in the order received.
///
/// # Example
///
/// ```
/// use substrings_rs::{Event, StreamController};
///
/// let mut controller: StreamController = StreamController::default();
/// let answers = controller
///     .process([
///         Event::Append(b'a'),
///         Event::Append(b'b'),
///         Event::Query,
///         Event::Append(b'a'),
///         Event::Query,
///     ])
///     .unwrap();
/// assert_eq!(answers, vec![3, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct StreamController<I = SuffixAutomaton> {
    index: I,

    /// Number of strings started, the initial one included
    strings: usize,
}

impl<I: SubstringIndex> StreamController<I> {
    /// Takes ownership of `index`, discarding anything already pushed into it.
    pub fn new(mut index: I) -> Self {
        index.reset();
        Self { index, strings: 1 }
    }

    /// Appends a symbol to the current string and returns its delta.
    pub fn append(&mut self, symbol: I::Symbol) -> Result<u64> {
        self.index.push(symbol)
    }

    /// Distinct-substring count of the current string.
    pub fn query(&self) -> u64 {
        self.index.distinct_substrings()
    }

    /// Starts a new independent string.
    pub fn reset(&mut self) {
        self.index.reset();
        self.strings += 1;
        debug!(strings = self.strings, "starting new string");
    }

    /// Applies one event, returning the answer for queries.
    pub fn handle(&mut self, event: Event<I::Symbol>) -> Result<Option<u64>> {
        match event {
            Event::Append(symbol) => {
                self.append(symbol)?;
                Ok(None)
            }
            Event::Query => Ok(Some(self.query())),
            Event::NewString => {
                self.reset();
                Ok(None)
            }
        }
    }

    /// Applies every event in order and collects the query answers.
    ///
    /// Stops at the first failing event; answers produced before it are
    /// discarded along with the error.
    pub fn process<E>(&mut self, events: E) -> Result<Vec<u64>>
    where
        E: IntoIterator<Item = Event<I::Symbol>>,
    {
        let mut answers = Vec::new();
        for event in events {
            if let Some(answer) = self.handle(event)? {
                answers.push(answer);
            }
        }
        Ok(answers)
    }

    /// Number of strings started so far, the current one included.
    pub fn strings(&self) -> usize {
        self.strings
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn into_inner(self) -> I {
        self.index
    }
}

impl Default for StreamController<SuffixAutomaton> {
    fn default() -> Self {
        Self::new(SuffixAutomaton::new())
    }
}
