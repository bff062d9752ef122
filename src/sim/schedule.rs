//! Deferred events keyed by simulation time
//!
//! The frame clock is the sum of every `dt` handed to `advance`, so a delay
//! measured against it tracks real elapsed time without reading the system
//! clock. Due events are popped once per frame, oldest due time first.

/// Work that can be deferred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Return the player to the center and clear the not-alive flag
    RespawnPlayer,
}

/// Handle for cancelling a scheduled event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventHandle(u64);

#[derive(Debug, Clone)]
struct ScheduledEvent {
    handle: EventHandle,
    due_ms: f64,
    action: ScheduledAction,
}

/// Pending deferred events
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<ScheduledEvent>,
    next_handle: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire once the clock reaches `due_ms`
    pub fn schedule(&mut self, due_ms: f64, action: ScheduledAction) -> EventHandle {
        let handle = EventHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(ScheduledEvent {
            handle,
            due_ms,
            action,
        });
        handle
    }

    /// Drop a pending event. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: EventHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| e.handle != handle);
        self.pending.len() != before
    }

    pub fn is_pending(&self, handle: EventHandle) -> bool {
        self.pending.iter().any(|e| e.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every event due at `now_ms`, in due order.
    /// Ties keep scheduling order.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<ScheduledAction> {
        let mut due: Vec<ScheduledEvent> = Vec::new();
        self.pending.retain(|e| {
            if e.due_ms <= now_ms {
                due.push(e.clone());
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| {
            a.due_ms
                .partial_cmp(&b.due_ms)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        due.into_iter().map(|e| e.action).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_fires_at_due_time() {
        let mut sched = Scheduler::new();
        let handle = sched.schedule(2000.0, ScheduledAction::RespawnPlayer);

        assert!(sched.drain_due(1999.9).is_empty());
        assert!(sched.is_pending(handle));

        let fired = sched.drain_due(2000.0);
        assert_eq!(fired, vec![ScheduledAction::RespawnPlayer]);
        assert!(sched.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut sched = Scheduler::new();
        let a = sched.schedule(10.0, ScheduledAction::RespawnPlayer);
        let b = sched.schedule(20.0, ScheduledAction::RespawnPlayer);

        assert!(sched.cancel(a));
        assert!(!sched.cancel(a));
        assert_eq!(sched.len(), 1);
        assert!(sched.is_pending(b));

        assert_eq!(sched.drain_due(100.0).len(), 1);
        assert!(!sched.is_pending(b));
    }

    #[test]
    fn test_drain_leaves_later_events_pending() {
        let mut sched = Scheduler::new();
        let late = sched.schedule(50.0, ScheduledAction::RespawnPlayer);
        let early = sched.schedule(5.0, ScheduledAction::RespawnPlayer);

        assert_eq!(sched.drain_due(10.0).len(), 1);
        assert!(!sched.is_pending(early));
        assert!(sched.is_pending(late));
        assert_eq!(sched.drain_due(60.0).len(), 1);
        assert!(sched.is_empty());
    }
}
