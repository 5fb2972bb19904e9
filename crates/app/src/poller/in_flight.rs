//! Abort handles of the requests a slot is still waiting on.

use std::collections::BTreeMap;

use tokio::task::AbortHandle;

/// Outstanding requests of one slot, keyed by sequence number.
#[derive(Debug, Default)]
pub(crate) struct InFlight {
    handles: BTreeMap<u64, AbortHandle>,
}

impl InFlight {
    pub(crate) fn track(&mut self, sequence: u64, handle: AbortHandle) {
        self.handles.insert(sequence, handle);
    }

    /// Forget `sequence` once its task has produced an outcome.
    pub(crate) fn settle(&mut self, sequence: u64) {
        self.handles.remove(&sequence);
    }

    /// Abort every request older than `sequence`, which has just been
    /// applied. Their responses could only be rejected as stale.
    ///
    /// Returns how many requests were aborted.
    pub(crate) fn supersede(&mut self, sequence: u64) -> usize {
        let newer = self.handles.split_off(&sequence);
        let older = std::mem::replace(&mut self.handles, newer);
        for handle in older.values() {
            handle.abort();
        }
        older.len()
    }

    /// Forget every request. The caller aborts the tasks.
    pub(crate) fn clear(&mut self) {
        self.handles.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }
}
