//! # substrings-rs - Online Distinct-Substring Counting
//!
//! Counts the distinct substrings of a string revealed one symbol at a time,
//! answering after every prefix.
//!
//! Two interchangeable structures implement [`SubstringIndex`]:
//! 1. **[`SuffixAutomaton`]**: each new symbol adds `length(cur) - length(link(cur))`
//!    substrings, read straight off the new state and its suffix link
//! 2. **[`SuffixTree`]**: Ukkonen's construction, adding
//!    `len - depth(active point)` substrings per symbol
//!
//! [`StreamController`] owns one index across a stream of independent strings,
//! applying append / query / new-string events in order.
//!
//! ## Example
//!
//! ```
//! use substrings_rs::{Event, StreamController, SuffixAutomaton};
//!
//! let mut controller = StreamController::new(SuffixAutomaton::new());
//! let answers = controller
//!     .process([
//!         Event::Append(b'a'),
//!         Event::Append(b'a'),
//!         Event::Query,
//!         Event::NewString,
//!         Event::Append(b'b'),
//!         Event::Append(b'b'),
//!         Event::Query,
//!     ])
//!     .unwrap();
//! assert_eq!(answers, vec![2, 2]);
//! ```
//!
//! ## Alphabets
//!
//! Transition tables are a type parameter. [`Lowercase`] is a dense 26-slot
//! table over `b'a'..=b'z'`; [`Sparse`] hashes arbitrary symbols.
//!
//! ```
//! use substrings_rs::{IndexConfig, Sparse, SuffixAutomaton};
//!
//! let mut sam = SuffixAutomaton::<Sparse<char>>::with_config(IndexConfig::new());
//! assert_eq!(sam.extend("ÀÁÀ".chars()).unwrap(), 5);
//! ```
//!
//! ## Performance
//!
//! - O(1) amortized time per symbol for either structure
//! - At most `2n + 1` states or nodes for a string of length `n`
//! - `reset` only touches what the previous string allocated

mod alphabet;
mod automaton;
mod config;
mod counter;
mod error;
mod index;
mod state;
mod stream;
mod suffix_tree;


pub use alphabet::{Lowercase, Sparse, Transitions};
pub use automaton::SuffixAutomaton;
pub use config::{IndexConfig, DEFAULT_MAX_STRING_LEN};
pub use counter::SubstringCounter;
pub use error::{IndexError, Result};
pub use index::{IndexStats, SubstringIndex};
pub use state::{StateId, StateTable};
pub use stream::{Event, StreamController};
pub use suffix_tree::SuffixTree;
