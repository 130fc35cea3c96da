// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot timers driven by an external clock.
//!
//! Both layer managers replace "call me back later" closures with explicit
//! tasks stored here. The owner feeds the current [`Instant`] on every frame
//! tick and pops whatever is due. Keeping the clock outside the queue makes
//! the managers deterministic under test: a test simply advances `now`.
//!
//! # Ordering
//!
//! - Tasks fire in deadline order.
//! - Tasks sharing a deadline fire in the order they were scheduled.
//! - A task scheduled while a tick is firing never runs in that same tick,
//!   even with a zero delay. It waits for the next frame, like an animation
//!   frame callback would.

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Deadline offset used when `now + delay` does not fit in an [`Instant`].
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Handle to a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Snapshot of the scheduling sequence taken at the start of a tick.
///
/// Only tasks scheduled before the horizon are eligible in that tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon(u64);

/// Ordered set of pending one-shot tasks.
#[derive(Debug)]
pub struct Timers<T> {
    pending: BTreeMap<(Instant, u64), T>,
    deadlines: HashMap<u64, Instant>,
    next_seq: u64,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Timers<T> {
    /// Creates an empty timer queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to fire once `delay` has elapsed after `now`.
    ///
    /// A delay too large for the platform clock saturates to a deadline far
    /// in the future instead of overflowing.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;

        let deadline = now
            .checked_add(delay)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);
        self.pending.insert((deadline, seq), task);
        self.deadlines.insert(seq, deadline);
        TimerId(seq)
    }

    /// Cancels a pending task, returning it if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let deadline = self.deadlines.remove(&id.0)?;
        self.pending.remove(&(deadline, id.0))
    }

    /// Returns whether the task behind `id` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id.0)
    }

    /// Marks the start of a tick. Pass the result to [`Self::pop_due`].
    #[must_use]
    pub fn horizon(&self) -> Horizon {
        Horizon(self.next_seq)
    }

    /// Removes and returns the earliest task due at `now` that was scheduled
    /// before `horizon`.
    pub fn pop_due(&mut self, now: Instant, horizon: Horizon) -> Option<(TimerId, T)> {
        let key = self
            .pending
            .range(..=(now, u64::MAX))
            .map(|(key, _)| *key)
            .find(|(_, seq)| *seq < horizon.0)?;

        self.deadlines.remove(&key.1);
        self.pending
            .remove(&key)
            .map(|task| (TimerId(key.1), task))
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` when nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.deadlines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn drain_at<T>(timers: &mut Timers<T>, now: Instant) -> Vec<T> {
        let horizon = timers.horizon();
        let mut fired = Vec::new();
        while let Some((_, task)) = timers.pop_due(now, horizon) {
            fired.push(task);
        }
        fired
    }

    #[test]
    fn new_queue_is_empty() {
        let timers: Timers<u8> = Timers::new();
        assert!(timers.is_empty());
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn tasks_fire_in_deadline_order() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(t0, ms(300), "late");
        timers.schedule(t0, ms(100), "early");
        timers.schedule(t0, ms(200), "middle");

        assert_eq!(drain_at(&mut timers, t0 + ms(300)), vec!["early", "middle", "late"]);
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(t0, ms(50), 1);
        timers.schedule(t0, ms(50), 2);
        timers.schedule(t0, ms(50), 3);

        assert_eq!(drain_at(&mut timers, t0 + ms(50)), vec![1, 2, 3]);
    }

    #[test]
    fn tasks_not_yet_due_stay_pending() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(t0, ms(100), "a");

        assert!(drain_at(&mut timers, t0 + ms(99)).is_empty());
        assert_eq!(timers.len(), 1);
        assert_eq!(drain_at(&mut timers, t0 + ms(100)), vec!["a"]);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        let id = timers.schedule(t0, ms(10), "cancelled");
        timers.schedule(t0, ms(10), "kept");

        assert_eq!(timers.cancel(id), Some("cancelled"));
        assert!(!timers.is_pending(id));
        assert_eq!(drain_at(&mut timers, t0 + ms(10)), vec!["kept"]);
    }

    #[test]
    fn cancel_after_fire_returns_none() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        let id = timers.schedule(t0, ms(0), ());
        drain_at(&mut timers, t0);

        assert_eq!(timers.cancel(id), None);
    }

    #[test]
    fn tasks_scheduled_during_a_tick_wait_for_the_next_one() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(t0, ms(0), "first");

        let horizon = timers.horizon();
        let (_, task) = timers.pop_due(t0, horizon).expect("first task is due");
        assert_eq!(task, "first");

        // Zero-delay follow-up scheduled from inside the tick.
        timers.schedule(t0, ms(0), "follow-up");
        assert!(timers.pop_due(t0, horizon).is_none());

        assert_eq!(drain_at(&mut timers, t0), vec!["follow-up"]);
    }

    #[test]
    fn next_deadline_reports_earliest_task() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(t0, ms(500), ());
        timers.schedule(t0, ms(20), ());

        assert_eq!(timers.next_deadline(), Some(t0 + ms(20)));
    }

    #[test]
    fn clear_drops_everything() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        let id = timers.schedule(t0, ms(5), ());
        timers.clear();

        assert!(timers.is_empty());
        assert!(!timers.is_pending(id));
    }

    #[test]
    fn oversized_delay_saturates_instead_of_overflowing() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        let id = timers.schedule(t0, Duration::MAX, "never");
        timers.schedule(t0, ms(10), "soon");

        assert!(timers.is_pending(id));
        assert_eq!(drain_at(&mut timers, t0 + ms(10)), vec!["soon"]);
        assert!(timers.is_pending(id));
        assert_eq!(timers.cancel(id), Some("never"));
    }
}
