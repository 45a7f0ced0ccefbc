use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use treescope_types::{Category, EntityHandle, EntityKind, Inspect};

/// Type label carried by nodes whose classification failed outright.
pub const INSPECT_FAILED: &str = "inspection failed";

/// Type label carried by sentinel children whose access failed.
pub const ACCESS_FAILED: &str = "access error";

/// Immutable-after-construction snapshot of one inspected entity: its
/// classification, its per-category child name lists, and a lazy cache of
/// child nodes.
///
/// The cache is referentially stable: asking for the same `(category, key)`
/// twice returns the same `Rc<Node>` instance for the lifetime of this node.
pub struct Node {
    handle: EntityHandle,
    name: String,
    path: String,
    kind: EntityKind,
    type_label: String,
    repr: String,
    len: Option<usize>,
    categories: Vec<(Category, Vec<String>)>,
    children: RefCell<HashMap<(Category, String), Rc<Node>>>,
}

impl Node {
    /// Classify `handle` once. Inspector failure is absorbed: the node comes
    /// back with empty categories and a sentinel type label, never an error,
    /// so the browser stays usable on a dead entity.
    pub fn classify(
        inspector: &dyn Inspect,
        handle: EntityHandle,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Rc<Node> {
        let name = name.into();
        let path = path.into();
        match inspector.classify(&handle) {
            Ok(c) => Rc::new(Node {
                handle,
                name,
                path,
                kind: c.kind,
                type_label: c.type_label,
                repr: c.repr,
                len: c.len,
                categories: c.categories,
                children: RefCell::new(HashMap::new()),
            }),
            Err(err) => Rc::new(Node {
                handle,
                name,
                path,
                kind: EntityKind::Error,
                type_label: INSPECT_FAILED.to_string(),
                repr: err.to_string(),
                len: None,
                categories: Vec::new(),
                children: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Return the cached child for `(category, key)`, creating it on first
    /// access. A failed resolve yields a sentinel node that is displayed
    /// dimmed but can never be descended into.
    pub fn child(&self, inspector: &dyn Inspect, category: Category, key: &str) -> Rc<Node> {
        if let Some(hit) = self.children.borrow().get(&(category, key.to_string())) {
            return Rc::clone(hit);
        }

        let path = self.child_path(category, key);
        let node = match inspector.resolve(&self.handle, category, key) {
            Ok(handle) => Node::classify(inspector, handle, key, path),
            Err(err) => Rc::new(Node {
                handle: self.handle.clone(),
                name: key.to_string(),
                path,
                kind: EntityKind::Error,
                type_label: ACCESS_FAILED.to_string(),
                repr: err.to_string(),
                len: None,
                categories: Vec::new(),
                children: RefCell::new(HashMap::new()),
            }),
        };

        self.children
            .borrow_mut()
            .insert((category, key.to_string()), Rc::clone(&node));
        node
    }

    fn child_path(&self, category: Category, key: &str) -> String {
        match category {
            Category::Indexed => format!("{}[{}]", self.path, key),
            _ => format!("{}.{}", self.path, key),
        }
    }

    /// A child is a valid descent target only if it is not a sentinel, not
    /// null, not callable, and has at least one non-empty category.
    pub fn is_enterable(&self) -> bool {
        !matches!(
            self.kind,
            EntityKind::Error | EntityKind::Null | EntityKind::Callable
        ) && self.categories.iter().any(|(_, names)| !names.is_empty())
    }

    pub fn handle(&self) -> &EntityHandle {
        &self.handle
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dotted access path from the root, e.g. `config.servers[2].host`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn repr(&self) -> &str {
        &self.repr
    }

    pub fn len(&self) -> Option<usize> {
        self.len
    }

    pub fn names(&self, category: Category) -> &[String] {
        self.categories
            .iter()
            .find(|(cat, _)| *cat == category)
            .map(|(_, names)| names.as_slice())
            .unwrap_or(&[])
    }

    /// The category tags this node exposes, in inspector order.
    pub fn category_tags(&self) -> Vec<Category> {
        self.categories.iter().map(|(cat, _)| *cat).collect()
    }
}
