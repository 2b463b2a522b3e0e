//! Active contact points, keyed by platform touch id.

use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

/// Platform touch identifier, stable for the lifetime of one contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TouchId(pub i64);

/// Id lists are small: ten fingers cover almost every real surface.
pub type TouchIds = SmallVec<[TouchId; 10]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Touch {
    pub id: TouchId,
    pub position: Vec2,
    pub arrival_time: Duration,
    pub last_update: Duration,
}

/// Membership changes reported back to the selection engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Membership {
    /// The registry went from empty to non-empty.
    FirstArrival(TouchId),
    Arrival(TouchId),
    Departure { id: TouchId, remaining: usize },
}

#[derive(Debug, Default)]
pub struct TouchRegistry {
    touches: FnvHashMap<TouchId, Touch>,
}

impl TouchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new touch or move an existing one.
    pub fn upsert(&mut self, id: TouchId, position: Vec2, now: Duration) -> Option<Membership> {
        if let Some(t) = self.touches.get_mut(&id) {
            t.position = position;
            t.last_update = now;
            return None;
        }
        let was_empty = self.touches.is_empty();
        self.touches.insert(
            id,
            Touch {
                id,
                position,
                arrival_time: now,
                last_update: now,
            },
        );
        Some(if was_empty {
            Membership::FirstArrival(id)
        } else {
            Membership::Arrival(id)
        })
    }

    /// Update the position of a known touch; unknown ids are ignored.
    pub fn update(&mut self, id: TouchId, position: Vec2, now: Duration) -> bool {
        match self.touches.get_mut(&id) {
            Some(t) => {
                t.position = position;
                t.last_update = now;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TouchId) -> Option<Membership> {
        self.touches.remove(&id).map(|_| Membership::Departure {
            id,
            remaining: self.touches.len(),
        })
    }

    /// Drop touches that have not been updated within `threshold`.
    ///
    /// Guards against platforms that lose touch-end events.
    pub fn prune_stale(&mut self, now: Duration, threshold: Duration) -> SmallVec<[Membership; 4]> {
        let mut stale: TouchIds = self
            .touches
            .values()
            .filter(|t| now.saturating_sub(t.last_update) > threshold)
            .map(|t| t.id)
            .collect();
        stale.sort_unstable();
        stale.into_iter().filter_map(|id| self.remove(id)).collect()
    }

    pub fn clear(&mut self) {
        self.touches.clear();
    }

    pub fn get(&self, id: TouchId) -> Option<&Touch> {
        self.touches.get(&id)
    }

    pub fn contains(&self, id: TouchId) -> bool {
        self.touches.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.touches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    /// Active ids in ascending order.
    pub fn ids(&self) -> TouchIds {
        let mut ids: TouchIds = self.touches.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Id → position view for drawing, in id order.
    pub fn snapshot(&self) -> Vec<(TouchId, Vec2)> {
        let mut out: Vec<(TouchId, Vec2)> =
            self.touches.values().map(|t| (t.id, t.position)).collect();
        out.sort_unstable_by_key(|(id, _)| *id);
        out
    }
}
