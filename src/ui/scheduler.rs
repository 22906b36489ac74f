// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Virtual-time timer queue
//!
//! Every deferred action on the page (autoplay, debounce, simulated
//! latency, fades, chat replies) is a timer in one queue. The queue has its
//! own millisecond clock that only moves when the owner advances it, so a
//! whole page session can be replayed deterministically.
//!
//! Timers due at the same instant fire in the order they were scheduled.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle to a scheduled timer
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimerId(u64);

/// Pending timers ordered by deadline
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: u64,
    next_id: u64,
    /// (deadline, id) → task
    pending: BTreeMap<(u64, TimerId), T>,
    /// id → deadline, for cancellation
    deadlines: HashMap<TimerId, u64>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue at time zero
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        Duration::from_millis(self.now)
    }

    /// Schedules `task` to fire after `delay`
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let deadline = self.now.saturating_add(delay.as_millis() as u64);
        self.pending.insert((deadline, id), task);
        self.deadlines.insert(id, deadline);
        id
    }

    /// Cancels a pending timer
    ///
    /// Returns the task if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let deadline = self.deadlines.remove(&id)?;
        self.pending.remove(&(deadline, id))
    }

    /// Returns true if the timer is still pending
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Time until the earliest pending timer, if any
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .keys()
            .next()
            .map(|(deadline, _)| Duration::from_millis(deadline.saturating_sub(self.now)))
    }

    /// Pops the earliest timer due at or before `until`
    ///
    /// The clock moves to that timer's deadline. Returns `None` when no
    /// timer is due; the clock is then left unchanged.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let until = until.as_millis() as u64;
        let (&(deadline, id), _) = self.pending.iter().next()?;
        if deadline > until {
            return None;
        }

        let task = self.pending.remove(&(deadline, id))?;
        self.deadlines.remove(&id);
        self.now = self.now.max(deadline);
        Some((id, task))
    }

    /// Moves the clock forward to `to` (never backwards)
    pub fn set_now(&mut self, to: Duration) {
        self.now = self.now.max(to.as_millis() as u64);
    }
}

/// Holder for "the" timer of one purpose
///
/// Arming a slot cancels whatever it held before, so only the most recent
/// request survives (last writer wins, no queuing).
#[derive(Debug, Default)]
pub struct TimerSlot {
    current: Option<TimerId>,
}

impl TimerSlot {
    /// Creates an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the previous timer and schedules a new one
    pub fn arm<T>(&mut self, queue: &mut TimerQueue<T>, delay: Duration, task: T) -> TimerId {
        self.clear(queue);
        let id = queue.schedule(delay, task);
        self.current = Some(id);
        id
    }

    /// Cancels the held timer, if any
    pub fn clear<T>(&mut self, queue: &mut TimerQueue<T>) {
        if let Some(id) = self.current.take() {
            queue.cancel(id);
        }
    }

    /// Returns true if `id` is the timer this slot holds
    ///
    /// Controllers use this to ignore a fired timer that was superseded.
    pub fn holds(&self, id: TimerId) -> bool {
        self.current == Some(id)
    }

    /// Forgets the held timer after it fired
    pub fn fired(&mut self, id: TimerId) {
        if self.holds(id) {
            self.current = None;
        }
    }

    /// Returns true if the held timer is still pending
    pub fn is_armed<T>(&self, queue: &TimerQueue<T>) -> bool {
        self.current.is_some_and(|id| queue.is_pending(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::from_millis(30), "late");
        queue.schedule(Duration::from_millis(10), "early");
        queue.schedule(Duration::from_millis(10), "early-second");

        let until = Duration::from_millis(100);
        let fired: Vec<_> = std::iter::from_fn(|| queue.pop_due(until))
            .map(|(_, task)| task)
            .collect();

        assert_eq!(fired, vec!["early", "early-second", "late"]);
        assert_eq!(queue.now(), Duration::from_millis(30));
    }

    #[test]
    fn test_not_due_yet() {
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::from_millis(50), ());

        assert!(queue.pop_due(Duration::from_millis(49)).is_none());
        assert_eq!(queue.now(), Duration::ZERO);
        assert_eq!(queue.next_due_in(), Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(Duration::from_millis(10), 1);

        assert_eq!(queue.cancel(id), Some(1));
        assert_eq!(queue.cancel(id), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_slot_last_writer_wins() {
        let mut queue = TimerQueue::new();
        let mut slot = TimerSlot::new();

        let first = slot.arm(&mut queue, Duration::from_millis(300), "a");
        let second = slot.arm(&mut queue, Duration::from_millis(300), "b");

        assert!(!queue.is_pending(first));
        assert!(slot.holds(second));
        assert_eq!(queue.len(), 1);
        assert_eq!(
            queue.pop_due(Duration::from_secs(1)).map(|(_, t)| t),
            Some("b")
        );
    }
}
