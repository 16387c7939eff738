/// Running count of distinct substrings.
///
/// Fed by the per-character delta of an extension. The count of a growing
/// prefix never shrinks, so there is no way to subtract; only `reset`
/// returns it to zero for a new string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstringCounter {
    total: u64,
}

impl SubstringCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, delta: u64) {
        self.total += delta;
    }

    /// Current total. Has no side effects.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn reset(&mut self) {
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates() {
        let mut counter = SubstringCounter::new();
        assert_eq!(counter.total(), 0);

        counter.add(1);
        counter.add(2);
        counter.add(0);
        assert_eq!(counter.total(), 3);
        assert_eq!(counter.total(), 3);

        counter.reset();
        assert_eq!(counter.total(), 0);
    }
}
