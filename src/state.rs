use crate::alphabet::Transitions;
use crate::error::{IndexError, Result};

/// Dense index of a state inside a [`StateTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) u32);

impl StateId {
    /// The root state, representing the empty string.
    pub const ROOT: StateId = StateId(0);

    /// Returns the position of this state in its table.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single automaton state.
///
/// Represents one endpos-equivalence class: all substrings of lengths
/// `length(link) + 1 ..= length` that end at the same set of positions.
#[derive(Debug, Clone)]
pub(crate) struct State<A> {
    /// Length of the longest substring in the class.
    pub length: usize,
    /// Suffix link. `None` only for the root.
    pub link: Option<StateId>,
    pub transitions: A,
}

impl<A: Transitions> State<A> {
    fn new(length: usize) -> Self {
        Self {
            length,
            link: None,
            transitions: A::default(),
        }
    }
}

/// Append-only storage for automaton states.
///
/// Holds the root from construction onward. `clear` truncates back to the
/// root, so the cost of a reset is proportional to the states created since
/// the previous one and the allocation is reused by the next string.
#[derive(Debug, Clone)]
pub struct StateTable<A> {
    states: Vec<State<A>>,
    capacity: usize,
}

impl<A: Transitions> StateTable<A> {
    /// Creates a table holding only the root and accepting at most
    /// `capacity` states in total.
    pub fn new(capacity: usize) -> Self {
        // Ids are u32 and u32::MAX marks an absent dense transition.
        let capacity = capacity.clamp(1, u32::MAX as usize);
        Self {
            states: vec![State::new(0)],
            capacity,
        }
    }

    /// Fails unless `additional` more states fit.
    pub fn ensure_headroom(&self, additional: usize) -> Result<()> {
        if self.states.len() + additional > self.capacity {
            return Err(IndexError::ResourceExhausted {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Allocates a state with the given length, no link and no transitions.
    pub fn create_state(&mut self, length: usize) -> Result<StateId> {
        self.ensure_headroom(1)?;
        let id = StateId(self.states.len() as u32);
        self.states.push(State::new(length));
        Ok(id)
    }

    #[inline]
    pub fn length(&self, id: StateId) -> usize {
        self.states[id.index()].length
    }

    #[inline]
    pub fn link(&self, id: StateId) -> Option<StateId> {
        self.states[id.index()].link
    }

    #[inline]
    pub fn set_link(&mut self, id: StateId, parent: StateId) {
        debug_assert!(
            self.length(parent) < self.length(id),
            "suffix link must point to a shorter state"
        );
        self.states[id.index()].link = Some(parent);
    }

    #[inline]
    pub fn transition(&self, id: StateId, symbol: A::Symbol) -> Option<StateId> {
        self.states[id.index()].transitions.get(symbol)
    }

    #[inline]
    pub fn set_transition(&mut self, id: StateId, symbol: A::Symbol, child: StateId) {
        self.states[id.index()].transitions.set(symbol, child);
    }

    /// Overwrites the transitions of `to` with a copy of those of `from`.
    pub fn clone_transitions(&mut self, from: StateId, to: StateId) {
        let copy = self.states[from.index()].transitions.clone();
        self.states[to.index()].transitions = copy;
    }

    /// Number of transitions leaving `id`.
    pub fn out_degree(&self, id: StateId) -> usize {
        self.states[id.index()].transitions.len()
    }

    /// Drops every state except the root and empties the root's transitions.
    ///
    /// Returns the number of states discarded.
    pub fn clear(&mut self) -> usize {
        let discarded = self.states.len() - 1;
        self.states.truncate(1);
        self.states[0] = State::new(0);
        discarded
    }

    /// Number of states, root included.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: the root is never removed.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Maximum number of states, root included.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over every state id in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = StateId> {
        (0..self.states.len() as u32).map(StateId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Lowercase;

    #[test]
    fn test_new_holds_root() {
        let table = StateTable::<Lowercase>::new(8);
        assert_eq!(table.len(), 1);
        assert_eq!(table.length(StateId::ROOT), 0);
        assert_eq!(table.link(StateId::ROOT), None);
        assert_eq!(table.out_degree(StateId::ROOT), 0);
    }

    #[test]
    fn test_create_and_link() {
        let mut table = StateTable::<Lowercase>::new(8);
        let a = table.create_state(1).unwrap();
        let ab = table.create_state(2).unwrap();

        assert_eq!(a, StateId(1));
        assert_eq!(ab, StateId(2));
        assert_eq!(table.link(ab), None);

        table.set_link(ab, a);
        table.set_link(a, StateId::ROOT);
        assert_eq!(table.link(ab), Some(a));
        assert_eq!(table.link(a), Some(StateId::ROOT));
    }

    #[test]
    fn test_capacity_exhausted() {
        let mut table = StateTable::<Lowercase>::new(2);
        table.create_state(1).unwrap();

        assert_eq!(
            table.create_state(2),
            Err(IndexError::ResourceExhausted { capacity: 2 })
        );
        assert_eq!(table.len(), 2);
        assert!(table.ensure_headroom(0).is_ok());
        assert!(table.ensure_headroom(1).is_err());
    }

    #[test]
    fn test_clone_transitions_copies_by_value() {
        let mut table = StateTable::<Lowercase>::new(8);
        let q = table.create_state(2).unwrap();
        let target = table.create_state(3).unwrap();
        let clone = table.create_state(1).unwrap();

        table.set_transition(q, b'a', target);
        table.clone_transitions(q, clone);
        assert_eq!(table.transition(clone, b'a'), Some(target));

        table.set_transition(clone, b'b', q);
        assert_eq!(table.transition(q, b'b'), None);
        assert_eq!(table.out_degree(q), 1);
        assert_eq!(table.out_degree(clone), 2);
    }

    #[test]
    fn test_clear_keeps_fresh_root() {
        let mut table = StateTable::<Lowercase>::new(8);
        let a = table.create_state(1).unwrap();
        table.set_transition(StateId::ROOT, b'a', a);

        assert_eq!(table.clear(), 1);
        assert_eq!(table.len(), 1);
        assert_eq!(table.transition(StateId::ROOT, b'a'), None);

        // Freshly allocated states do not inherit anything from before the clear.
        let again = table.create_state(1).unwrap();
        assert_eq!(again, a);
        assert_eq!(table.out_degree(again), 0);
        assert_eq!(table.link(again), None);
    }
}
