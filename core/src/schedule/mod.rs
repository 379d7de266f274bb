//! Deferred action queue.
//!
//! Replaces runtime timers with an explicit due-time queue: interactions
//! push actions with a due timestamp, and the session executes everything
//! due on each `tick`. Actions with equal due times run in push order.

use chrono::NaiveDateTime;
use questline_types::LogLevel;

/// A side effect whose execution is deferred to a later tick.
#[derive(Debug, Clone, PartialEq)]
pub enum DeferredAction {
    /// Quest completion payout: reward XP, toast, and log entry, delayed
    /// so the progress bar can finish filling first.
    QuestPayout { quest_id: String },

    /// A single line of the simulated test-suite output.
    LogLine { message: String, level: LogLevel },

    /// Final step of the simulated test suite: result line, achievement,
    /// and quest tick.
    SuiteFinish { tests: usize },
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: NaiveDateTime,
    seq: u64,
    action: DeferredAction,
}

/// Due-time-ordered queue of deferred actions.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an action for execution at `due`.
    pub fn push(&mut self, due: NaiveDateTime, action: DeferredAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { due, seq, action });
    }

    /// Remove and return every action due at or before `now`, ordered by
    /// due time (push order for ties).
    pub fn take_due(&mut self, now: NaiveDateTime) -> Vec<DeferredAction> {
        let mut due: Vec<Scheduled> = Vec::new();
        self.pending.retain(|entry| {
            if entry.due <= now {
                due.push(entry.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.action).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
