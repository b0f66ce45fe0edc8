use super::Record;
use serde::Deserialize;
use serde::Serialize;
use std::collections::VecDeque;

/// Newest-first log of applied settlements.
///
/// Records are only ever pushed to the front; the log empties only on a
/// full reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(VecDeque<Record>);

impl History {
    pub fn push(&mut self, record: Record) {
        self.0.push_front(record);
    }
    pub fn latest(&self) -> Option<&Record> {
        self.0.front()
    }
    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Record;
    type IntoIter = std::collections::vec_deque::Iter<'a, Record>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
