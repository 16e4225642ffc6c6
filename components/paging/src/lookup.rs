use std::collections::BTreeSet;

#[cfg(any(test, feature = "mock"))]
use mockall::automock;

use crate::error::LookupError;

/// Seq ids start from 1 in every conversation.
pub const FIRST_SEQ_ID: i64 = 1;

/// Narrow view of message storage needed to assemble a page.
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait MessageLookup {
    /// Test if a message with the given seq id is stored and visible.
    fn exists(&self, seq_id: i64) -> Result<bool, LookupError>;

    /// Seq id of the latest message in the stream, or 0 if the stream is empty.
    fn last_seq_id(&self) -> Result<i64, LookupError>;
}

/// Lookup over an in-memory set of seq ids.
#[derive(Debug, Default, Clone)]
pub struct MemoryLookup {
    seq_ids: BTreeSet<i64>,
}

impl MemoryLookup {
    pub fn insert(&mut self, seq_id: i64) -> bool {
        self.seq_ids.insert(seq_id)
    }

    pub fn len(&self) -> usize {
        self.seq_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq_ids.is_empty()
    }
}

impl FromIterator<i64> for MemoryLookup {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        Self {
            seq_ids: iter.into_iter().collect(),
        }
    }
}

impl MessageLookup for MemoryLookup {
    fn exists(&self, seq_id: i64) -> Result<bool, LookupError> {
        Ok(self.seq_ids.contains(&seq_id))
    }

    fn last_seq_id(&self) -> Result<i64, LookupError> {
        Ok(self.seq_ids.last().copied().unwrap_or(0))
    }
}
