//! Object factory and attribute store
//!
//! Owns the global object collection. Objects are kept in creation order
//! (which is also their output order) and found through an id → slot
//! index, so lookups do not depend on how recently an object was made.
//!
//! All mutation is append-only: [`ObjectStore::append_attribute`] adds a
//! history entry and nothing ever removes one.

use std::collections::HashMap;

use ocelgen_core::{
    AttributeEntry, AttributeValue, Error, Object, ObjectId, ObjectType, Result, Timestamp,
};

use crate::allocator::IdAllocator;

/// The global object collection
#[derive(Debug, Default)]
pub struct ObjectStore {
    objects: Vec<Object>,
    index: HashMap<ObjectId, usize>,
}

impl ObjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id for `object_type`, register the object with its
    /// initial attribute snapshot, and return the id
    pub fn create_object(
        &mut self,
        ids: &mut IdAllocator,
        object_type: ObjectType,
        initial: Vec<AttributeEntry>,
    ) -> Result<ObjectId> {
        let id = ids.next_object_id(object_type);
        self.insert_object(id.clone(), object_type, initial)?;
        Ok(id)
    }

    /// Register an object whose id was minted by the caller
    ///
    /// Used for trace-scoped ids. Registering an id twice is an internal
    /// consistency failure.
    pub fn insert_object(
        &mut self,
        id: ObjectId,
        object_type: ObjectType,
        initial: Vec<AttributeEntry>,
    ) -> Result<()> {
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateObject(id.to_string()));
        }
        self.index.insert(id.clone(), self.objects.len());
        self.objects.push(Object::new(id, object_type, initial));
        Ok(())
    }

    /// Append one entry to an object's attribute history
    pub fn append_attribute(
        &mut self,
        id: &ObjectId,
        name: &str,
        time: Timestamp,
        value: impl Into<AttributeValue>,
    ) -> Result<()> {
        let object = self.get_mut(id)?;
        object.push(AttributeEntry::new(name, time, value));
        Ok(())
    }

    /// Append several entries, in order, to one object
    pub fn append_attributes<I>(&mut self, id: &ObjectId, time: Timestamp, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'static str, AttributeValue)>,
    {
        let object = self.get_mut(id)?;
        for (name, value) in entries {
            object.push(AttributeEntry::new(name, time, value));
        }
        Ok(())
    }

    /// Current value of an attribute, or `None` if it was never set
    ///
    /// Fails only if the object itself does not exist.
    pub fn current_attribute(&self, id: &ObjectId, name: &str) -> Result<Option<AttributeValue>> {
        Ok(self.get(id)?.current(name).cloned())
    }

    /// Current value of an attribute that every object of its type carries
    ///
    /// A missing entry means the object was built incompletely, which is
    /// reported the same way as a dangling id.
    pub fn required_attribute(&self, id: &ObjectId, name: &str) -> Result<AttributeValue> {
        self.current_attribute(id, name)?
            .ok_or_else(|| Error::ObjectNotFound(format!("{} (no {} attribute)", id, name)))
    }

    /// Look up an object
    pub fn get(&self, id: &ObjectId) -> Result<&Object> {
        self.index
            .get(id)
            .map(|&slot| &self.objects[slot])
            .ok_or_else(|| Error::ObjectNotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &ObjectId) -> Result<&mut Object> {
        match self.index.get(id) {
            Some(&slot) => Ok(&mut self.objects[slot]),
            None => Err(Error::ObjectNotFound(id.to_string())),
        }
    }

    /// Check whether an id is registered
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in creation order
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Consume the store, yielding objects in creation order
    pub fn into_objects(self) -> Vec<Object> {
        self.objects
    }
}
