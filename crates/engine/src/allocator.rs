//! Identifier allocation
//!
//! One monotonically increasing counter per entity kind: events,
//! relationships, and one per object type. Counters start at 1 and are
//! never reset; a fresh allocator comes only with a fresh builder.
//!
//! | Entity | Format | Example |
//! |--------|--------|---------|
//! | Event | `e{n}` | `e17` |
//! | Object (allocated) | `{prefix}-{n:0pad}` | `pat-004` |
//! | Object (trace-scoped) | `{prefix}-{trace:0pad}-{k}` | `test-004-2` |
//! | O2O relationship | `or{n}` | `or3` |

use ocelgen_core::{ObjectId, ObjectType};

/// Which counter to advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    /// Event ids
    Event,
    /// Per-type object ids
    Object(ObjectType),
    /// O2O relationship ids
    Relationship,
}

/// Issues collision-free identifiers
#[derive(Debug, Clone)]
pub struct IdAllocator {
    pad_width: usize,
    events: u64,
    objects: [u64; ObjectType::ALL.len()],
    relationships: u64,
}

impl IdAllocator {
    /// Create an allocator; `pad_width` is the zero-pad width of object sequence numbers
    pub fn new(pad_width: usize) -> Self {
        Self {
            pad_width,
            events: 0,
            objects: [0; ObjectType::ALL.len()],
            relationships: 0,
        }
    }

    /// Zero-pad width of object sequence numbers
    pub fn pad_width(&self) -> usize {
        self.pad_width
    }

    /// Advance a counter and return its new value (first call returns 1)
    pub fn next(&mut self, counter: Counter) -> u64 {
        let slot = match counter {
            Counter::Event => &mut self.events,
            Counter::Object(t) => &mut self.objects[t.index()],
            Counter::Relationship => &mut self.relationships,
        };
        *slot += 1;
        *slot
    }

    /// Last value handed out for a counter (0 if never advanced)
    pub fn peek(&self, counter: Counter) -> u64 {
        match counter {
            Counter::Event => self.events,
            Counter::Object(t) => self.objects[t.index()],
            Counter::Relationship => self.relationships,
        }
    }

    /// Render an allocated object id
    pub fn format_object_id(&self, object_type: ObjectType, n: u64) -> ObjectId {
        ObjectId::new(format!(
            "{}-{:0width$}",
            object_type.id_prefix(),
            n,
            width = self.pad_width
        ))
    }

    /// Render a trace-scoped object id from the trace index and the
    /// 1-based position of the object within its trace
    pub fn format_trace_scoped_id(
        &self,
        object_type: ObjectType,
        trace: usize,
        k: usize,
    ) -> ObjectId {
        ObjectId::new(format!(
            "{}-{:0width$}-{}",
            object_type.id_prefix(),
            trace,
            k,
            width = self.pad_width
        ))
    }

    /// Render an event id
    pub fn format_event_id(n: u64) -> String {
        format!("e{}", n)
    }

    /// Render an O2O relationship id
    pub fn format_relationship_id(n: u64) -> String {
        format!("or{}", n)
    }

    /// Allocate the next object id of a type
    pub fn next_object_id(&mut self, object_type: ObjectType) -> ObjectId {
        let n = self.next(Counter::Object(object_type));
        self.format_object_id(object_type, n)
    }

    /// Allocate the next event id
    pub fn next_event_id(&mut self) -> String {
        Self::format_event_id(self.next(Counter::Event))
    }

    /// Allocate the next O2O relationship id
    pub fn next_relationship_id(&mut self) -> String {
        Self::format_relationship_id(self.next(Counter::Relationship))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_one_and_are_independent() {
        let mut ids = IdAllocator::new(3);
        assert_eq!(ids.next(Counter::Event), 1);
        assert_eq!(ids.next(Counter::Event), 2);
        assert_eq!(ids.next(Counter::Object(ObjectType::Patient)), 1);
        assert_eq!(ids.next(Counter::Object(ObjectType::Encounter)), 1);
        assert_eq!(ids.next(Counter::Object(ObjectType::Patient)), 2);
        assert_eq!(ids.next(Counter::Relationship), 1);
        assert_eq!(ids.peek(Counter::Event), 2);
        assert_eq!(ids.peek(Counter::Object(ObjectType::Dose)), 0);
    }

    #[test]
    fn test_object_id_padding() {
        let mut ids = IdAllocator::new(3);
        assert_eq!(ids.next_object_id(ObjectType::Patient), "pat-001");
        assert_eq!(ids.next_object_id(ObjectType::TreatmentPlan), "plan-001");
        assert_eq!(ids.format_object_id(ObjectType::Diagnosis, 1234), "dx-1234");

        let wide = IdAllocator::new(5);
        assert_eq!(wide.format_object_id(ObjectType::Encounter, 7), "enc-00007");
    }

    #[test]
    fn test_event_and_relationship_ids_unpadded() {
        let mut ids = IdAllocator::new(3);
        assert_eq!(ids.next_event_id(), "e1");
        assert_eq!(ids.next_relationship_id(), "or1");
        for _ in 0..8 {
            ids.next_event_id();
        }
        assert_eq!(ids.next_event_id(), "e10");
    }

    #[test]
    fn test_trace_scoped_ids() {
        let ids = IdAllocator::new(3);
        assert_eq!(ids.format_trace_scoped_id(ObjectType::Test, 4, 2), "test-004-2");
        assert_eq!(ids.format_trace_scoped_id(ObjectType::Dose, 12, 1), "med-012-1");
    }

    #[test]
    fn test_no_repeats() {
        let mut ids = IdAllocator::new(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next_object_id(ObjectType::Test)));
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        proptest! {
            #[test]
            fn allocated_and_trace_scoped_ids_never_collide(
                pad in 1usize..6,
                traces in 1usize..40,
                per_trace in 1usize..5,
            ) {
                let mut ids = IdAllocator::new(pad);
                let mut seen = HashSet::new();
                for trace in 1..=traces {
                    for object_type in ObjectType::ALL {
                        prop_assert!(seen.insert(ids.next_object_id(object_type)));
                    }
                    for k in 1..=per_trace {
                        for object_type in [ObjectType::Test, ObjectType::Dose] {
                            let id = ids.format_trace_scoped_id(object_type, trace, k);
                            prop_assert!(seen.insert(id));
                        }
                    }
                }
            }
        }
    }
}
