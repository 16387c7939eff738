use crate::state::StateId;
use ahash::AHashMap as HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Outgoing transitions of a single state, keyed by alphabet symbol.
///
/// The table type doubles as the alphabet definition: `admits` decides which
/// symbols an index will accept. Cloning must produce an independent value so
/// that a cloned state's transitions can diverge from the original's.
pub trait Transitions: Clone + Default + Debug {
    /// Symbol type labelling transitions.
    type Symbol: Copy + Eq + Hash + Debug;

    /// Returns true if `symbol` belongs to this alphabet.
    fn admits(symbol: Self::Symbol) -> bool;

    /// Returns the target of the transition on `symbol`, if present.
    ///
    /// `symbol` must be admitted by the alphabet.
    fn get(&self, symbol: Self::Symbol) -> Option<StateId>;

    /// Sets or replaces the transition on `symbol`.
    fn set(&mut self, symbol: Self::Symbol, target: StateId);

    /// Number of transitions present.
    fn len(&self) -> usize;

    /// Returns true if there are no transitions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const ABSENT: u32 = u32::MAX;
const LOWERCASE_LETTERS: usize = 26;

/// Dense table over the lowercase ASCII letters `b'a'..=b'z'`.
///
/// One fixed slot per letter: lookups are a single index and cloning is a
/// 26-word copy.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Lowercase {
    next: [u32; LOWERCASE_LETTERS],
}

impl Lowercase {
    #[inline]
    fn slot(symbol: u8) -> usize {
        debug_assert!(Self::admits(symbol), "symbol outside a..=z");
        (symbol - b'a') as usize
    }
}

impl Default for Lowercase {
    fn default() -> Self {
        Self {
            next: [ABSENT; LOWERCASE_LETTERS],
        }
    }
}

impl Debug for Lowercase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.next
                    .iter()
                    .enumerate()
                    .filter(|&(_, &t)| t != ABSENT)
                    .map(|(i, &t)| (char::from(b'a' + i as u8), t)),
            )
            .finish()
    }
}

impl Transitions for Lowercase {
    type Symbol = u8;

    #[inline]
    fn admits(symbol: u8) -> bool {
        symbol.is_ascii_lowercase()
    }

    #[inline]
    fn get(&self, symbol: u8) -> Option<StateId> {
        let target = self.next[Self::slot(symbol)];
        (target != ABSENT).then_some(StateId(target))
    }

    #[inline]
    fn set(&mut self, symbol: u8, target: StateId) {
        self.next[Self::slot(symbol)] = target.0;
    }

    fn len(&self) -> usize {
        self.next.iter().filter(|&&t| t != ABSENT).count()
    }
}

/// Hashed table for arbitrary alphabets.
///
/// Admits every value of `T`. Memory and clone cost scale with the number of
/// transitions actually present rather than with the alphabet size.
#[derive(Clone, Debug)]
pub struct Sparse<T> {
    next: HashMap<T, StateId>,
}

impl<T> Default for Sparse<T> {
    fn default() -> Self {
        Self {
            next: HashMap::default(),
        }
    }
}

impl<T: Copy + Eq + Hash + Debug> Transitions for Sparse<T> {
    type Symbol = T;

    #[inline]
    fn admits(_symbol: T) -> bool {
        true
    }

    #[inline]
    fn get(&self, symbol: T) -> Option<StateId> {
        self.next.get(&symbol).copied()
    }

    #[inline]
    fn set(&mut self, symbol: T, target: StateId) {
        self.next.insert(symbol, target);
    }

    fn len(&self) -> usize {
        self.next.len()
    }
}
