use std::{fmt, iter, slice};

use crate::Action;

/// Append-only log of the actions taken while building an episode.
///
/// Insertion order is the order in which the primitive state changes happened,
/// and is the supervision target for the sequence model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTrace {
    actions: Vec<Action>,
}

impl ActionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Appends `count` copies of `action`.
    pub fn repeat(&mut self, action: Action, count: usize) {
        self.actions.extend(iter::repeat(action).take(count));
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    pub fn iter(&self) -> slice::Iter<'_, Action> {
        self.actions.iter()
    }

    /// Token strings in trace order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.actions.iter().map(|action| action.token())
    }

    /// Integer ids in trace order.
    pub fn ids(&self) -> Vec<u8> {
        self.actions.iter().map(|action| action.id()).collect()
    }
}

impl<'a> IntoIterator for &'a ActionTrace {
    type Item = &'a Action;
    type IntoIter = slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ActionTrace {
    /// Space-separated tokens.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(action.token())?;
        }
        Ok(())
    }
}
