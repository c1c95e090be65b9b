//! Mutable log state
//!
//! [`LogState`] owns everything a run accumulates: the id allocator, the
//! object store, the emitted events and O2O records, and the sampler.
//! Handlers receive it by `&mut` and never hold on to it.

use ocelgen_core::{Activity, Event, Object, ObjectRelationship, Timestamp};

use crate::allocator::IdAllocator;
use crate::sampler::Sampler;
use crate::store::ObjectStore;

/// Collections and counters for one run
#[derive(Debug)]
pub struct LogState {
    /// Identifier counters
    pub ids: IdAllocator,
    /// Object collection
    pub store: ObjectStore,
    /// Random source
    pub sampler: Sampler,
    events: Vec<Event>,
    relationships: Vec<ObjectRelationship>,
}

impl LogState {
    /// Create empty state
    pub fn new(pad_width: usize, seed: u64) -> Self {
        Self {
            ids: IdAllocator::new(pad_width),
            store: ObjectStore::new(),
            sampler: Sampler::new(seed),
            events: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Start a new event with a freshly allocated id
    pub fn new_event(&mut self, activity: Activity, at: Timestamp) -> Event {
        Event::new(self.ids.next_event_id(), activity, at)
    }

    /// Append a finished event
    pub fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Append an O2O record
    pub fn push_relationship(&mut self, relationship: ObjectRelationship) {
        self.relationships.push(relationship);
    }

    /// Events emitted so far
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// O2O records emitted so far
    pub fn relationships(&self) -> &[ObjectRelationship] {
        &self.relationships
    }

    /// Consume the state into (events, objects, relationships)
    pub fn into_parts(self) -> (Vec<Event>, Vec<Object>, Vec<ObjectRelationship>) {
        (self.events, self.store.into_objects(), self.relationships)
    }
}
