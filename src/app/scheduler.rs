//! Deferred tasks on a plugin-relative clock.
//!
//! Zellij's `set_timeout` cannot be cancelled and its `Timer` event carries no
//! token, so tasks are tracked here instead. Every scheduled task produces one
//! wakeup request; whenever a `Timer` event arrives, everything whose deadline
//! has passed is drained in deadline order. Cancellation is left to the task
//! owner (see the debounce generation check in the search view).
//!
//! Time is a [`Duration`] since plugin load, supplied by the caller, which keeps
//! the scheduler deterministic under test.

use std::time::Duration;

/// Work to perform once a deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Quiet period elapsed for a search view's input.
    Debounce {
        view: u64,
        /// Input generation at scheduling time; stale if the view has moved on.
        generation: u64,
    },
    /// Entrance transition for a loaded details view.
    Reveal { view: u64 },
    /// Exit transition finished; navigate back to search.
    FinishExit { view: u64 },
}

#[derive(Debug, Clone)]
struct Pending {
    deadline: Duration,
    order: u64,
    task: Task,
}

/// Deadline-ordered task queue.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
    next_order: u64,
    outstanding_wakeups: usize,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` to run `delay` after `now`.
    ///
    /// Returns the delay the host timer should be armed with.
    pub fn schedule(&mut self, now: Duration, delay: Duration, task: Task) -> Duration {
        let order = self.next_order;
        self.next_order += 1;
        self.pending.push(Pending {
            deadline: now + delay,
            order,
            task,
        });
        self.outstanding_wakeups += 1;

        tracing::trace!(?task, deadline_ms = (now + delay).as_millis(), "task scheduled");
        delay
    }

    /// Removes and returns every task due at `now`, earliest first.
    ///
    /// Called once per host timer event. If tasks remain but no host timer is
    /// still armed (a timer fired a little early), the second element carries
    /// the delay to re-arm with.
    pub fn take_due(&mut self, now: Duration) -> (Vec<Task>, Option<Duration>) {
        self.outstanding_wakeups = self.outstanding_wakeups.saturating_sub(1);

        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.deadline <= now);
        self.pending = rest;
        due.sort_by_key(|p| (p.deadline, p.order));

        let rearm = if self.outstanding_wakeups == 0 {
            self.next_deadline().map(|deadline| {
                self.outstanding_wakeups += 1;
                deadline.saturating_sub(now)
            })
        } else {
            None
        };

        (due.into_iter().map(|p| p.task).collect(), rearm)
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.deadline).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
