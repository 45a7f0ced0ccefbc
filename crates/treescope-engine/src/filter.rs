use crate::node::Node;
use std::collections::BTreeSet;
use std::rc::Rc;
use treescope_types::{Category, Inspect, PredicateKind};

/// Enabled type predicates plus a substring pattern.
///
/// Composition: a child is visible when its name contains the pattern
/// (case-insensitive) AND it satisfies at least one enabled predicate.
/// With zero predicates enabled the predicate term is vacuously true, so
/// the pattern alone narrows the view. Filtering is pure: it derives a view
/// from the node's full child list and never owns which children exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    enabled: BTreeSet<PredicateKind>,
    pattern: String,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, kind: PredicateKind) {
        if !self.enabled.remove(&kind) {
            self.enabled.insert(kind);
        }
    }

    pub fn is_enabled(&self, kind: PredicateKind) -> bool {
        self.enabled.contains(&kind)
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Disable all predicates and empty the pattern, restoring the full
    /// unfiltered view.
    pub fn clear(&mut self) {
        self.enabled.clear();
        self.pattern.clear();
    }

    pub fn is_narrowing(&self) -> bool {
        !self.enabled.is_empty() || !self.pattern.is_empty()
    }

    fn admits(&self, name: &str, node: &Node) -> bool {
        if !self.pattern.is_empty() {
            let needle = self.pattern.to_lowercase();
            if !name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        self.enabled.is_empty() || self.enabled.iter().any(|p| p.matches(node.kind()))
    }

    /// The filtered `(key, child)` sequence for one category, preserving
    /// the category's original ordering. Side-effect-free on the node
    /// beyond populating its child cache.
    pub fn apply(
        &self,
        node: &Node,
        inspector: &dyn Inspect,
        category: Category,
    ) -> Vec<(String, Rc<Node>)> {
        node.names(category)
            .iter()
            .map(|name| (name.clone(), node.child(inspector, category, name)))
            .filter(|(name, child)| self.admits(name, child))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Sample, SampleInspector, sample_root};

    fn fixture() -> Rc<Node> {
        let inspector = SampleInspector;
        let root = sample_root(Sample::obj(vec![
            ("alpha", Sample::Int(1)),
            ("beta", Sample::Int(2)),
            ("gamma", Sample::str("text")),
            ("basket", Sample::Seq(vec![Sample::Int(3)])),
            ("flag", Sample::Bool(true)),
        ]));
        Node::classify(&inspector, root, "root", "root")
    }

    #[test]
    fn no_filters_shows_everything_in_order() {
        let node = fixture();
        let rows = FilterSet::new().apply(&node, &SampleInspector, Category::Public);
        let names: Vec<&str> = rows.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["alpha", "basket", "beta", "flag", "gamma"]);
    }

    #[test]
    fn pattern_only_mode_matches_names_case_insensitively() {
        let node = fixture();
        let mut filters = FilterSet::new();
        filters.set_pattern("G");

        let rows = filters.apply(&node, &SampleInspector, Category::Public);
        let names: Vec<&str> = rows.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["flag", "gamma"]);
    }

    #[test]
    fn predicates_compose_with_or() {
        let node = fixture();
        let mut filters = FilterSet::new();
        filters.toggle(PredicateKind::IsInt);
        filters.toggle(PredicateKind::IsBool);

        let rows = filters.apply(&node, &SampleInspector, Category::Public);
        let names: Vec<&str> = rows.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "flag"]);
    }

    #[test]
    fn pattern_ands_with_predicates() {
        let node = fixture();
        let mut filters = FilterSet::new();
        filters.toggle(PredicateKind::IsInt);
        filters.set_pattern("a");

        // "flag" and "gamma" match the pattern but fail the predicate term.
        let rows = filters.apply(&node, &SampleInspector, Category::Public);
        let names: Vec<&str> = rows.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn apply_is_idempotent() {
        let node = fixture();
        let mut filters = FilterSet::new();
        filters.toggle(PredicateKind::IsInt);
        filters.set_pattern("a");

        let first = filters.apply(&node, &SampleInspector, Category::Public);
        let second = filters.apply(&node, &SampleInspector, Category::Public);

        assert_eq!(first.len(), second.len());
        for ((name_a, node_a), (name_b, node_b)) in first.iter().zip(second.iter()) {
            assert_eq!(name_a, name_b);
            assert!(Rc::ptr_eq(node_a, node_b));
        }
    }

    #[test]
    fn clear_restores_full_view() {
        let node = fixture();
        let mut filters = FilterSet::new();
        filters.toggle(PredicateKind::IsStr);
        filters.set_pattern("ga");
        assert!(filters.is_narrowing());

        filters.clear();
        assert!(!filters.is_narrowing());
        assert_eq!(filters.apply(&node, &SampleInspector, Category::Public).len(), 5);
    }

    #[test]
    fn sentinel_children_match_no_type_predicate() {
        let inspector = SampleInspector;
        let root = sample_root(Sample::obj(vec![
            ("ok", Sample::Int(1)),
            ("gone", Sample::Missing),
        ]));
        let node = Node::classify(&inspector, root, "root", "root");

        let mut filters = FilterSet::new();
        filters.toggle(PredicateKind::IsInt);
        let rows = filters.apply(&node, &inspector, Category::Public);
        let names: Vec<&str> = rows.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["ok"]);

        // Without predicates the sentinel is still listed (dimmed).
        filters.clear();
        assert_eq!(filters.apply(&node, &inspector, Category::Public).len(), 2);
    }
}
