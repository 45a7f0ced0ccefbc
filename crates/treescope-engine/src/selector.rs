use crate::node::Node;
use treescope_types::Category;

/// Tracks which child category is active for one node. Exactly one category
/// is active at a time; toggling cycles through the node's categories in
/// inspector order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSelector {
    categories: Vec<Category>,
    active: usize,
}

impl ViewSelector {
    /// Selector for `node`, starting on the first category that has
    /// entries (falling back to the first category, if any).
    pub fn for_node(node: &Node) -> Self {
        let categories = node.category_tags();
        let active = categories
            .iter()
            .position(|cat| !node.names(*cat).is_empty())
            .unwrap_or(0);
        ViewSelector { categories, active }
    }

    pub fn active(&self) -> Option<Category> {
        self.categories.get(self.active).copied()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn toggle(&mut self) {
        if !self.categories.is_empty() {
            self.active = (self.active + 1) % self.categories.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Sample, SampleInspector, sample_root};

    #[test]
    fn toggle_cycles_through_categories() {
        let inspector = SampleInspector;
        let root = sample_root(Sample::obj(vec![
            ("a", Sample::Int(1)),
            ("_b", Sample::Int(2)),
        ]));
        let node = crate::node::Node::classify(&inspector, root, "root", "root");

        let mut selector = ViewSelector::for_node(&node);
        assert_eq!(selector.active(), Some(Category::Public));
        selector.toggle();
        assert_eq!(selector.active(), Some(Category::Private));
        selector.toggle();
        assert_eq!(selector.active(), Some(Category::Public));
    }

    #[test]
    fn starts_on_first_non_empty_category() {
        let inspector = SampleInspector;
        let root = sample_root(Sample::obj(vec![("_hidden", Sample::Int(1))]));
        let node = crate::node::Node::classify(&inspector, root, "root", "root");

        let selector = ViewSelector::for_node(&node);
        assert_eq!(selector.active(), Some(Category::Private));
    }

    #[test]
    fn scalar_node_has_no_active_category() {
        let inspector = SampleInspector;
        let node = crate::node::Node::classify(&inspector, sample_root(Sample::Int(3)), "root", "root");
        let mut selector = ViewSelector::for_node(&node);
        assert_eq!(selector.active(), None);
        selector.toggle();
        assert_eq!(selector.active(), None);
    }
}
