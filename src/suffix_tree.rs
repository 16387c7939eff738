use crate::alphabet::{Lowercase, Transitions};
use crate::config::IndexConfig;
use crate::counter::SubstringCounter;
use crate::error::{IndexError, Result};
use crate::index::{IndexStats, SubstringIndex};
use crate::state::StateId;
use tracing::{debug, trace, warn};

/// A node of the suffix tree together with the edge leading into it.
#[derive(Debug, Clone)]
struct Node<A> {
    /// Text position of the first symbol on the incoming edge
    start: usize,
    /// Exclusive end of the incoming edge. `None` for leaves, whose edges
    /// grow with the text.
    end: Option<usize>,
    /// String depth at the top of the incoming edge
    parent_depth: usize,
    /// Suffix link of an internal node; unset links lead to the root
    link: Option<StateId>,
    /// Children keyed by the first symbol of their edge
    children: A,
}

impl<A: Transitions> Node<A> {
    fn new(start: usize, end: Option<usize>, parent_depth: usize) -> Self {
        Self {
            start,
            end,
            parent_depth,
            link: None,
            children: A::default(),
        }
    }
}

/// Position in the tree where the next pending suffix will be inserted.
#[derive(Debug, Clone, Copy)]
struct ActivePoint {
    node: StateId,
    /// Text position naming the outgoing edge of `node`
    edge: usize,
    /// Number of symbols matched along that edge
    length: usize,
}

impl ActivePoint {
    const fn root() -> Self {
        Self {
            node: StateId::ROOT,
            edge: 0,
            length: 0,
        }
    }
}

/// Online suffix tree (Ukkonen) that counts distinct substrings.
///
/// Gives the same answers as [`SuffixAutomaton`](crate::SuffixAutomaton).
/// Suffixes not yet made explicit are tracked by the active point and the
/// remainder; after each symbol every suffix longer than the active point is
/// a leaf and therefore new, so the delta is
/// `len - (depth(active node) + active length)`.
///
/// # Example
///
/// ```
/// use substrings_rs::SuffixTree;
///
/// let mut tree = SuffixTree::new();
/// assert_eq!(tree.extend(b"abac".iter().copied()).unwrap(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct SuffixTree<A: Transitions = Lowercase> {
    nodes: Vec<Node<A>>,
    text: Vec<A::Symbol>,
    active: ActivePoint,
    /// Suffixes of the text still waiting to be made explicit
    remainder: usize,
    counter: SubstringCounter,
    /// Internal nodes created by edge splits
    splits: usize,
    max_len: usize,
    capacity: usize,
}

impl SuffixTree<Lowercase> {
    /// Creates a tree over `b'a'..=b'z'` sized with the default config.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }
}

impl<A: Transitions> SuffixTree<A> {
    /// Creates an empty tree sized for `config`.
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            nodes: vec![Node::new(0, Some(0), 0)],
            text: Vec::new(),
            active: ActivePoint::root(),
            remainder: 0,
            counter: SubstringCounter::new(),
            splits: 0,
            max_len: config.string_len_limit(),
            capacity: config.state_capacity().min(u32::MAX as usize),
        }
    }

    /// Appends one symbol and returns the number of new distinct substrings.
    ///
    /// A string of `n` symbols never needs more than `2n + 1` nodes, so the
    /// length limit is checked up front and the tree is unchanged on error.
    pub fn push(&mut self, symbol: A::Symbol) -> Result<u64> {
        if !A::admits(symbol) {
            warn!(?symbol, "rejecting symbol outside the alphabet");
            return Err(IndexError::InvalidSymbol(format!("{:?}", symbol)));
        }
        if self.text.len() >= self.max_len {
            warn!(length = self.text.len(), "suffix tree at its length limit");
            return Err(IndexError::ResourceExhausted {
                capacity: self.capacity,
            });
        }

        self.text.push(symbol);
        self.remainder += 1;
        self.insert_pending(symbol);

        let delta = (self.text.len() - self.active_depth()) as u64;
        self.counter.add(delta);

        trace!(
            length = self.text.len(),
            remainder = self.remainder,
            delta,
            "extended suffix tree"
        );
        Ok(delta)
    }

    /// Pushes every symbol in order and returns the resulting total.
    pub fn extend<I: IntoIterator<Item = A::Symbol>>(&mut self, iter: I) -> Result<u64> {
        SubstringIndex::extend(self, iter)
    }

    /// Makes pending suffixes explicit until one is already present.
    fn insert_pending(&mut self, symbol: A::Symbol) {
        let end = self.text.len();
        let mut needs_link: Option<StateId> = None;

        while self.remainder > 0 {
            if self.active.length == 0 {
                self.active.edge = end - 1;
            }
            let edge_symbol = self.text[self.active.edge];
            let active_node = self.active.node;

            match self.node(active_node).children.get(edge_symbol) {
                None => {
                    let parent_depth = self.depth(active_node);
                    let leaf = self.create_node(end - 1, None, parent_depth);
                    self.node_mut(active_node).children.set(edge_symbol, leaf);
                    if let Some(pending) = needs_link.take() {
                        self.node_mut(pending).link = Some(active_node);
                    }
                }
                Some(child) => {
                    let edge_length = self.edge_length(child);
                    if self.active.length >= edge_length {
                        self.active.edge += edge_length;
                        self.active.length -= edge_length;
                        self.active.node = child;
                        continue;
                    }

                    let child_start = self.node(child).start;
                    let existing = self.text[child_start + self.active.length];
                    if existing == symbol {
                        // Already present: this suffix and all shorter ones stay implicit.
                        self.active.length += 1;
                        if let Some(pending) = needs_link.take() {
                            self.node_mut(pending).link = Some(active_node);
                        }
                        break;
                    }

                    let length = self.active.length;
                    let parent_depth = self.depth(active_node);
                    let split_depth = parent_depth + length;
                    let split =
                        self.create_node(child_start, Some(child_start + length), parent_depth);
                    self.node_mut(active_node).children.set(edge_symbol, split);

                    let leaf = self.create_node(end - 1, None, split_depth);
                    let moved = self.node_mut(child);
                    moved.start += length;
                    moved.parent_depth = split_depth;

                    let split_node = self.node_mut(split);
                    split_node.children.set(symbol, leaf);
                    split_node.children.set(existing, child);

                    if let Some(pending) = needs_link.replace(split) {
                        self.node_mut(pending).link = Some(split);
                    }
                    self.splits += 1;
                }
            }

            self.remainder -= 1;
            if self.active.node == StateId::ROOT && self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = end - self.remainder;
            } else if self.active.node != StateId::ROOT {
                self.active.node = self.node(self.active.node).link.unwrap_or(StateId::ROOT);
            }
        }
    }

    fn create_node(&mut self, start: usize, end: Option<usize>, parent_depth: usize) -> StateId {
        debug_assert!(self.nodes.len() < self.capacity, "node capacity exceeded");
        let id = StateId(self.nodes.len() as u32);
        self.nodes.push(Node::new(start, end, parent_depth));
        id
    }

    #[inline]
    fn node(&self, id: StateId) -> &Node<A> {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: StateId) -> &mut Node<A> {
        &mut self.nodes[id.index()]
    }

    fn edge_length(&self, id: StateId) -> usize {
        let node = self.node(id);
        node.end.unwrap_or(self.text.len()) - node.start
    }

    /// String depth at the bottom of the edge into `id`.
    fn depth(&self, id: StateId) -> usize {
        self.node(id).parent_depth + self.edge_length(id)
    }

    /// Length of the longest suffix that is still implicit.
    fn active_depth(&self) -> usize {
        self.depth(self.active.node) + self.active.length
    }

    /// Number of distinct non-empty substrings of the string so far.
    pub fn distinct_substrings(&self) -> u64 {
        self.counter.total()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Discards the current string, touching only nodes created since the
    /// previous reset.
    pub fn reset(&mut self) {
        let discarded = self.nodes.len() - 1;
        self.nodes.truncate(1);
        self.nodes[0] = Node::new(0, Some(0), 0);
        self.text.clear();
        self.active = ActivePoint::root();
        self.remainder = 0;
        self.counter.reset();
        self.splits = 0;
        debug!(discarded, "reset suffix tree");
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            input_length: self.text.len(),
            nodes: self.nodes.len(),
            splits: self.splits,
            distinct_substrings: self.counter.total(),
        }
    }
}

impl<A: Transitions> SubstringIndex for SuffixTree<A> {
    type Symbol = A::Symbol;

    fn push(&mut self, symbol: A::Symbol) -> Result<u64> {
        SuffixTree::push(self, symbol)
    }

    fn distinct_substrings(&self) -> u64 {
        SuffixTree::distinct_substrings(self)
    }

    fn len(&self) -> usize {
        SuffixTree::len(self)
    }

    fn reset(&mut self) {
        SuffixTree::reset(self)
    }

    fn stats(&self) -> IndexStats {
        SuffixTree::stats(self)
    }
}

impl Default for SuffixTree<Lowercase> {
    fn default() -> Self {
        Self::new()
    }
}
