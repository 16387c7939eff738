/// Default maximum length of a single string, matching the limits the
/// counting problem declares for its input.
pub const DEFAULT_MAX_STRING_LEN: usize = 300_000;

/// Sizing for a substring index.
///
/// Every extension creates at most two automaton states (or tree nodes), so
/// a string of `n` characters never needs more than `2n + 1` of them, root
/// included.
///
/// # Example
///
/// ```
/// use substrings_rs::IndexConfig;
///
/// let config = IndexConfig::new().max_string_len(1_000);
/// assert_eq!(config.state_capacity(), 2_001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    max_string_len: usize,
}

impl IndexConfig {
    /// Creates a config with [`DEFAULT_MAX_STRING_LEN`].
    pub fn new() -> Self {
        Self {
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }

    /// Sets the longest single string the index must accept.
    pub fn max_string_len(mut self, len: usize) -> Self {
        self.max_string_len = len;
        self
    }

    /// Returns the configured maximum string length.
    pub fn string_len_limit(&self) -> usize {
        self.max_string_len
    }

    /// Number of states (or tree nodes) to allow, root included.
    pub fn state_capacity(&self) -> usize {
        self.max_string_len.saturating_mul(2).saturating_add(1)
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new()
    }
}
