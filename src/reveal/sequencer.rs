use crate::foundation::core::Millis;
use crate::foundation::error::{UnveilError, UnveilResult};
use crate::reveal::stage::RevealStage;
use crate::schedule::observe::{Observers, SubscriptionId};
use crate::schedule::timers::TimerQueue;

/// Fixed timeline, as offsets from the start instant.
pub const REVEAL_TIMELINE: [(Millis, RevealStep); 5] = [
    (Millis(500), RevealStep::Advance(RevealStage::Unfolded)),
    (Millis(1500), RevealStep::Advance(RevealStage::Filled)),
    (Millis(2500), RevealStep::Advance(RevealStage::Glowing)),
    (Millis(3500), RevealStep::Advance(RevealStage::Open)),
    (Millis(4500), RevealStep::Complete),
];

/// A scheduled transition on the reveal timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// Move to the given stage.
    Advance(RevealStage),
    /// Fire the completion callback.
    Complete,
}

/// Observable change produced by [`RevealSequencer::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "stage", rename_all = "snake_case")]
pub enum RevealEvent {
    /// The stage counter moved.
    Stage(RevealStage),
    /// The completion callback fired.
    Completed,
}

/// One-shot, cancellable five-stage reveal timeline.
pub struct RevealSequencer {
    stage: RevealStage,
    completed: bool,
    started_at: Option<Millis>,
    timers: TimerQueue<RevealStep>,
    on_complete: Option<Box<dyn FnOnce()>>,
    observers: Observers<RevealEvent>,
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RevealSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealSequencer")
            .field("stage", &self.stage)
            .field("completed", &self.completed)
            .field("started_at", &self.started_at)
            .field("pending", &self.timers.len())
            .finish()
    }
}

impl RevealSequencer {
    /// A sequencer parked at [`RevealStage::Folded`] with nothing scheduled.
    pub fn new() -> Self {
        Self {
            stage: RevealStage::Folded,
            completed: false,
            started_at: None,
            timers: TimerQueue::new(),
            on_complete: None,
            observers: Observers::default(),
        }
    }

    /// Schedule the whole timeline relative to `now`.
    ///
    /// `on_complete` runs exactly once, from the [`RevealSequencer::advance`] call that reaches
    /// `now + 4500ms`, unless the sequencer is cancelled or dropped first.
    #[tracing::instrument(skip(self, on_complete))]
    pub fn start(&mut self, now: Millis, on_complete: impl FnOnce() + 'static) -> UnveilResult<()> {
        if self.started_at.is_some() {
            return Err(UnveilError::state("reveal sequencer already started"));
        }
        self.started_at = Some(now);
        self.on_complete = Some(Box::new(on_complete));
        for (offset, step) in REVEAL_TIMELINE {
            self.timers.schedule(now.after(offset), step);
        }
        tracing::debug!(pending = self.timers.len(), "reveal timeline scheduled");
        Ok(())
    }

    /// Fire every transition due at or before `now`, in timeline order.
    pub fn advance(&mut self, now: Millis) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        while let Some((id, step)) = self.timers.pop_due(now) {
            let event = match step {
                RevealStep::Advance(next) => {
                    if next <= self.stage {
                        continue;
                    }
                    self.stage = next;
                    tracing::debug!(stage = %next, at = %id.deadline(), "reveal stage");
                    RevealEvent::Stage(next)
                }
                RevealStep::Complete => {
                    if self.completed {
                        continue;
                    }
                    self.completed = true;
                    tracing::info!(at = %id.deadline(), "reveal completed");
                    if let Some(cb) = self.on_complete.take() {
                        cb();
                    }
                    RevealEvent::Completed
                }
            };
            self.observers.notify(&event);
            events.push(event);
        }
        events
    }

    /// Cancel all transitions that have not fired yet. Returns how many were dropped.
    ///
    /// The completion callback is released without being called.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.timers.cancel_all();
        self.on_complete = None;
        if dropped > 0 {
            tracing::debug!(dropped, stage = %self.stage, "reveal cancelled");
        }
        dropped
    }

    /// Current stage.
    pub fn stage(&self) -> RevealStage {
        self.stage
    }

    /// True once the completion callback has fired.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Started and still has transitions pending.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && !self.timers.is_empty()
    }

    /// Start instant, if started.
    pub fn started_at(&self) -> Option<Millis> {
        self.started_at
    }

    /// Instant of the next pending transition.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// Observe stage and completion events.
    pub fn subscribe(&mut self, f: impl FnMut(&RevealEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(f)
    }

    /// Stop observing.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl Drop for RevealSequencer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/sequencer.rs"]
mod tests;
