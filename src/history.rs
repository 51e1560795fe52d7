use std::{borrow::Cow, collections::VecDeque, num::NonZeroUsize};

use tracing::warn;

use crate::traits::command::Command;

/// Most slots reserved up front for a limited history.
const MAX_INITIAL_CAPACITY: usize = 64;

/// LIFO record of executed, not-yet-undone commands.
///
/// Entries are kept in execution order with the most recent at the back.
/// Apart from [`History::pop`] the only removals are evictions of the oldest
/// entries when a limit is set.
#[derive(Debug)]
pub struct History<C> {
    entries: VecDeque<C>,
    limit: Option<NonZeroUsize>,
}

impl<C> History<C> {
    #[must_use]
    pub fn new(limit: Option<NonZeroUsize>) -> Self {
        let entries = match limit {
            Some(limit) => VecDeque::with_capacity(limit.get().min(MAX_INITIAL_CAPACITY)),
            None => VecDeque::new(),
        };

        Self { entries, limit }
    }

    #[must_use]
    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an executed command, evicting the oldest entries if the limit
    /// would be exceeded.
    pub fn push(&mut self, command: C) {
        if let Some(limit) = self.limit {
            let evicted = self.evict_to(limit.get() - 1);
            if evicted > 0 {
                warn!(
                    evicted,
                    limit = limit.get(),
                    "history limit reached, oldest commands dropped"
                );
            }
        }

        self.entries.push_back(command);
    }

    pub fn pop(&mut self) -> Option<C> {
        self.entries.pop_back()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&C> {
        self.entries.back()
    }

    /// Iterates from the most recently executed command to the oldest.
    pub fn iter(&self) -> impl Iterator<Item = &C> + '_ {
        self.entries.iter().rev()
    }

    pub fn set_limit(&mut self, limit: Option<NonZeroUsize>) {
        self.limit = limit;

        if let Some(limit) = limit {
            let evicted = self.evict_to(limit.get());
            if evicted > 0 {
                warn!(
                    evicted,
                    limit = limit.get(),
                    "history limit lowered, oldest commands dropped"
                );
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn evict_to(&mut self, len: usize) -> usize {
        let mut evicted = 0;
        while self.entries.len() > len {
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }
}

impl<C: Command> History<C> {
    /// Descriptions in undo order, most recent first.
    #[must_use]
    pub fn descriptions(&self) -> Vec<Cow<'_, str>> {
        self.iter().map(|command| command.description()).collect()
    }
}

impl<C> Default for History<C> {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let history = History::<i32>::new(NonZeroUsize::new(5));

        assert!(history.is_empty());
        assert_eq!(history.limit(), NonZeroUsize::new(5));
    }

    #[test]
    fn test_huge_limit_does_not_preallocate() {
        let mut history = History::new(NonZeroUsize::new(usize::MAX));
        history.push(1);
        history.push(2);

        assert_eq!(history.limit(), NonZeroUsize::new(usize::MAX));
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn test_lifo_order() {
        let mut history = History::default();
        history.push(1);
        history.push(2);
        history.push(3);

        assert_eq!(history.peek(), Some(&3));
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(history.pop(), Some(3));
        assert_eq!(history.pop(), Some(2));
        assert_eq!(history.pop(), Some(1));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut history = History::default();
        for i in 0..1_000 {
            history.push(i);
        }

        assert_eq!(history.len(), 1_000);
        assert!(history.limit().is_none());
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = History::new(NonZeroUsize::new(2));
        history.push(1);
        history.push(2);
        history.push(3);

        assert_eq!(history.len(), 2);
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn test_set_limit_with_existing_entries() {
        let mut history = History::default();
        for i in 0..5 {
            history.push(i);
        }

        history.set_limit(NonZeroUsize::new(3));
        assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2]);

        history.set_limit(None);
        history.push(5);
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_clear() {
        let mut history = History::default();
        history.push("a");
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }
}
