use crate::rigid_body::BodyId;

use super::change::ChangeSet;

/// A deferred change owned by the scheduler until it fires
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledEvent {
    pub body: BodyId,
    pub change: ChangeSet,
    /// Serial of the animation player waiting on this event. Firing it
    /// lets that player start its next frame, provided the body still
    /// runs the same player.
    pub resumes_animation: Option<u64>,
}

#[derive(Clone, Debug)]
struct Pending {
    remaining: u32,
    event: ScheduledEvent,
}

/// Countdown queue of scheduled change-sets.
///
/// Every [`tick`](Scheduler::tick) decrements all counts; events whose
/// count reaches zero are returned in the order they were scheduled. A
/// delay of 0 or 1 fires on the next tick.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: u32, event: ScheduledEvent) {
        self.pending.push(Pending { remaining: delay, event });
    }

    pub fn tick(&mut self) -> Vec<ScheduledEvent> {
        let mut due = Vec::new();
        let mut kept = Vec::with_capacity(self.pending.len());
        for mut p in self.pending.drain(..) {
            p.remaining = p.remaining.saturating_sub(1);
            if p.remaining == 0 {
                due.push(p.event);
            } else {
                kept.push(p);
            }
        }
        self.pending = kept;
        due
    }

    /// Drop every event targeting `body`; returns how many were dropped.
    pub fn cancel_body(&mut self, body: BodyId) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| p.event.body != body);
        before - self.pending.len()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::change::{FieldOp, ScalarField};

    fn event(body: BodyId, dx: f64) -> ScheduledEvent {
        ScheduledEvent {
            body,
            change: ChangeSet::new().with_scalar(ScalarField::X, FieldOp::Add, dx),
            resumes_animation: None,
        }
    }

    #[test]
    fn fires_after_delay_in_schedule_order() {
        let mut s = Scheduler::new();
        s.schedule(3, event(1, 1.0));
        s.schedule(1, event(2, 2.0));
        s.schedule(3, event(3, 3.0));

        let first = s.tick();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].body, 2);

        assert!(s.tick().is_empty());

        let third: Vec<BodyId> = s.tick().into_iter().map(|e| e.body).collect();
        assert_eq!(third, vec![1, 3]);
        assert!(s.is_empty());
    }

    #[test]
    fn zero_delay_fires_next_tick() {
        let mut s = Scheduler::new();
        s.schedule(0, event(9, 0.5));
        assert_eq!(s.tick().len(), 1);
        assert!(s.tick().is_empty());
    }

    #[test]
    fn cancel_body_drops_only_its_events() {
        let mut s = Scheduler::new();
        s.schedule(5, event(1, 1.0));
        s.schedule(5, event(2, 1.0));
        s.schedule(2, event(1, 1.0));
        assert_eq!(s.cancel_body(1), 2);
        assert_eq!(s.len(), 1);
    }
}
