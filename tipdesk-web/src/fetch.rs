//! Request-generation fencing for overlapping page fetches.

use std::cell::Cell;

/// Monotone fetch generation owned by one view.
///
/// Every new request takes the next generation; a response is applied
/// only while its generation is still the latest, so a slow earlier
/// response can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct FetchGeneration(Cell<u64>);

impl FetchGeneration {
    /// Start a new request; supersedes all in-flight ones.
    pub fn begin(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    /// Whether a response for `generation` is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        self.0.get() == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generations_are_monotone() {
        let fence = FetchGeneration::default();
        let first = fence.begin();
        let second = fence.begin();

        assert!(second > first);
    }

    #[test]
    fn test_latest_generation_is_current() {
        let fence = FetchGeneration::default();
        let generation = fence.begin();

        assert!(fence.is_current(generation));
    }

    #[test]
    fn test_superseded_generation_is_stale() {
        let fence = FetchGeneration::default();
        let first = fence.begin();
        let second = fence.begin();

        // The slow first response must be discarded; the second applies.
        assert!(!fence.is_current(first));
        assert!(fence.is_current(second));
    }
}
