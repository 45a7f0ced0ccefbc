use crate::entity::{Category, Classified};
use crate::error::Result;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Opaque cursor to one entity inside a loaded document.
///
/// Handles are minted by an inspector and only that inspector can look
/// inside them. They are cheap to clone and carry identity, not value:
/// the engine never compares or copies the underlying entity.
#[derive(Clone)]
pub struct EntityHandle(Rc<dyn Any>);

impl EntityHandle {
    pub fn new<T: 'static>(inner: T) -> Self {
        EntityHandle(Rc::new(inner))
    }

    pub fn downcast<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EntityHandle(..)")
    }
}

/// The single contract the navigation core needs from an introspection
/// collaborator: classify an entity once, resolve a child by category and
/// key, and render a value preview.
pub trait Inspect {
    /// Classify the entity behind `handle`. Called once per node.
    fn classify(&self, handle: &EntityHandle) -> Result<Classified>;

    /// Resolve the child named `key` inside `category`. An `Err` here means
    /// the child exists in the listing but cannot be accessed; the engine
    /// absorbs it into a sentinel node.
    fn resolve(&self, handle: &EntityHandle, category: Category, key: &str) -> Result<EntityHandle>;

    /// Multi-line value preview, budgeted to `max_lines`. Must not fail:
    /// unreadable entities render as a placeholder.
    fn preview(&self, handle: &EntityHandle, max_lines: usize) -> String;
}

impl fmt::Debug for dyn Inspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Inspect(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_downcasts_to_its_own_type_only() {
        let handle = EntityHandle::new(42u32);
        assert_eq!(handle.downcast::<u32>(), Some(&42));
        assert!(handle.downcast::<String>().is_none());
    }

    #[test]
    fn cloned_handles_share_the_entity() {
        let handle = EntityHandle::new(String::from("root"));
        let clone = handle.clone();
        let a = handle.downcast::<String>().unwrap() as *const String;
        let b = clone.downcast::<String>().unwrap() as *const String;
        assert_eq!(a, b);
    }
}
