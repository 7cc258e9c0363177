//! Primitive sink trait and an in-memory drawable registry.

use std::collections::HashMap;

use crate::primitive::PrimitiveList;

/// The output collaborator: accepts named primitive lists and
/// registers/replaces a drawable object under each name.
///
/// Re-emission under an existing name replaces the prior object, so a
/// repeated render with an unchanged selection is idempotent.
pub trait PrimitiveSink {
    /// Registers `primitives` under `name`, replacing any prior object
    /// with the same name.
    fn load(&mut self, name: &str, primitives: PrimitiveList);

    /// Removes the object registered under `name`, if any.
    fn delete(&mut self, name: &str);
}

/// In-memory registry of named drawables.
///
/// Hosts that bridge to a real renderer implement [`PrimitiveSink`]
/// themselves; this registry serves embedding and tests.
#[derive(Default)]
pub struct DrawableRegistry {
    drawables: HashMap<String, PrimitiveList>,
}

impl DrawableRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a drawable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PrimitiveList> {
        self.drawables.get(name)
    }

    /// Checks if a drawable with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.drawables.contains_key(name)
    }

    /// Removes a drawable by name, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<PrimitiveList> {
        self.drawables.remove(name)
    }

    /// Removes all drawables from the registry.
    pub fn clear(&mut self) {
        self.drawables.clear();
    }

    /// Returns an iterator over all (name, drawable) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PrimitiveList)> {
        self.drawables.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the registered names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.drawables.keys().map(String::as_str)
    }

    /// Returns the number of registered drawables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}

impl PrimitiveSink for DrawableRegistry {
    fn load(&mut self, name: &str, primitives: PrimitiveList) {
        if self.drawables.insert(name.to_string(), primitives).is_some() {
            log::debug!("replaced drawable '{name}'");
        }
    }

    fn delete(&mut self, name: &str) {
        if self.drawables.remove(name).is_some() {
            log::debug!("deleted drawable '{name}'");
        }
    }
}
