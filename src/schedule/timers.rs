use std::collections::BTreeMap;

use crate::foundation::core::Millis;

/// Handle to one scheduled entry in a [`TimerQueue`].
///
/// Ordering is `(deadline, sequence)`: entries sharing a deadline fire in the order they were
/// scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId {
    deadline: Millis,
    seq: u64,
}

impl TimerId {
    /// Instant at which the entry becomes due.
    pub fn deadline(self) -> Millis {
        self.deadline
    }
}

/// One-shot, cancellable timers on the virtual UI clock.
///
/// Nothing fires on its own: owners poll [`TimerQueue::pop_due`] with the current instant. An
/// entry that was cancelled (or the whole queue dropped) can therefore never be observed again.
#[derive(Debug)]
pub struct TimerQueue<T> {
    next_seq: u64,
    pending: BTreeMap<TimerId, T>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: Millis, payload: T) -> TimerId {
        let id = TimerId {
            deadline,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.insert(id, payload);
        id
    }

    /// Cancel a pending entry. Cancelling a fired or already-cancelled id returns `None`.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.pending.remove(&id)
    }

    /// Drop every pending entry, returning how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    /// Remove and return the earliest entry whose deadline is `<= now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(TimerId, T)> {
        let (&first, _) = self.pending.first_key_value()?;
        if first.deadline > now {
            return None;
        }
        self.pending.pop_first()
    }

    /// Deadline of the earliest pending entry.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.keys().next().map(|id| id.deadline)
    }

    /// Whether `id` is still waiting to fire.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/timers.rs"]
mod tests;
