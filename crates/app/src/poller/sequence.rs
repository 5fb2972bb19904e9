//! Per-slot request numbering.

/// Hands out monotonic sequence numbers and remembers the last one applied.
///
/// A response is accepted only when it is newer than the last accepted one,
/// so a slow response can never overwrite fresher data.
#[derive(Debug, Default)]
pub(crate) struct SequenceTracker {
    issued: u64,
    applied: u64,
}

impl SequenceTracker {
    /// Reserve the next sequence number for an outgoing request.
    pub(crate) fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Record `sequence` as applied if it is newer than the current value.
    ///
    /// Returns `false` for stale responses.
    pub(crate) fn accept(&mut self, sequence: u64) -> bool {
        if sequence <= self.applied {
            return false;
        }
        self.applied = sequence;
        true
    }
}
