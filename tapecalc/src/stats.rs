use strum::{EnumCount, IntoEnumIterator};

use crate::{Action, ActionTrace};

/// Per-action counts over one or more traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionStats {
    counts: [usize; Action::COUNT],
}

impl Default for ActionStats {
    fn default() -> Self {
        Self {
            counts: [0; Action::COUNT],
        }
    }
}

impl ActionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_trace(trace: &ActionTrace) -> Self {
        let mut stats = Self::new();
        stats.record_trace(trace);
        stats
    }

    pub fn record(&mut self, action: Action) {
        self.counts[action.id() as usize] += 1;
    }

    pub fn record_trace(&mut self, trace: &ActionTrace) {
        for &action in trace {
            self.record(action);
        }
    }

    pub fn count(&self, action: Action) -> usize {
        self.counts[action.id() as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of single-cell cursor moves.
    pub fn moves(&self) -> usize {
        self.iter()
            .filter(|(action, _)| action.is_move())
            .map(|(_, count)| count)
            .sum()
    }

    /// Number of digit writes, including pass-through copies.
    pub fn writes(&self) -> usize {
        self.iter()
            .filter(|(action, _)| action.digit_value().is_some())
            .map(|(_, count)| count)
            .sum()
    }

    /// Actions that occurred at least once, in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, usize)> + '_ {
        Action::iter()
            .map(|action| (action, self.count(action)))
            .filter(|&(_, count)| count > 0)
    }
}
