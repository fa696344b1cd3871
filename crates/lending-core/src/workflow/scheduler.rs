//! Deterministic timer wheel driven by explicit `advance` calls.
//!
//! Nothing here reads the wall clock. Callers feed elapsed time in, then
//! drain due firings one at a time with [`Scheduler::poll`]. Firings come out
//! in due-time order (ties broken by scheduling order), and the scheduler
//! clock sits at each firing's due time while the caller handles it, so work
//! scheduled from inside a handler is timed relative to that firing.

use std::time::Duration;

/// Repeating tasks never run faster than this, even if asked for a zero period
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Firing<K> {
    pub task: TaskId,
    pub kind: K,
}

#[derive(Debug, Clone)]
struct ScheduledTask<K> {
    id: TaskId,
    kind: K,
    due: Duration,
    period: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct Scheduler<K> {
    tasks: Vec<ScheduledTask<K>>,
    next_id: u64,
    now: Duration,
    horizon: Duration,
}

impl<K: Clone> Scheduler<K> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            now: Duration::ZERO,
            horizon: Duration::ZERO,
        }
    }

    /// Current scheduler time
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Fire `kind` every `period`, first after one full period
    pub fn schedule_repeating(&mut self, kind: K, period: Duration) -> TaskId {
        let period = period.max(MIN_PERIOD);
        self.insert(kind, period, Some(period))
    }

    /// Fire `kind` once after `delay`
    pub fn schedule_once(&mut self, kind: K, delay: Duration) -> TaskId {
        self.insert(kind, delay, None)
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Move the horizon forward; due tasks are then drained with [`Self::poll`]
    pub fn advance(&mut self, elapsed: Duration) {
        self.horizon += elapsed;
    }

    /// Pop the next task due at or before the horizon
    pub fn poll(&mut self) -> Option<Firing<K>> {
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= self.horizon)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i);

        let Some(index) = index else {
            self.now = self.horizon;
            return None;
        };

        let task = &mut self.tasks[index];
        self.now = task.due;
        let firing = Firing {
            task: task.id,
            kind: task.kind.clone(),
        };
        match task.period {
            Some(period) => task.due += period,
            None => {
                self.tasks.remove(index);
            }
        }
        Some(firing)
    }

    fn insert(&mut self, kind: K, delay: Duration, period: Option<Duration>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            kind,
            due: self.now + delay,
            period,
        });
        id
    }
}

impl<K: Clone> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}
