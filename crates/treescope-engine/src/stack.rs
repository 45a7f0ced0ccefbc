use crate::filter::FilterSet;
use crate::node::Node;
use crate::selector::ViewSelector;
use crate::viewport::Viewport;
use std::collections::BTreeMap;
use std::rc::Rc;
use treescope_types::Category;

/// One saved navigation state: the node being browsed plus its filter set,
/// active category, and per-category viewports.
#[derive(Clone)]
pub struct Frame {
    pub node: Rc<Node>,
    pub filters: FilterSet,
    pub selector: ViewSelector,
    pub viewports: BTreeMap<Category, Viewport>,
}

impl Frame {
    /// Fresh frame for a newly entered node: empty filters, default
    /// category, viewports at the top.
    pub fn for_node(node: Rc<Node>) -> Self {
        let selector = ViewSelector::for_node(&node);
        let viewports = node
            .category_tags()
            .into_iter()
            .map(|cat| (cat, Viewport::default()))
            .collect();
        Frame {
            node,
            filters: FilterSet::new(),
            selector,
            viewports,
        }
    }

    pub fn viewport(&self, category: Category) -> Viewport {
        self.viewports.get(&category).copied().unwrap_or_default()
    }

    pub fn viewport_mut(&mut self, category: Category) -> &mut Viewport {
        self.viewports.entry(category).or_default()
    }
}

/// Ordered history of frames. The bottom frame is the root and is never
/// popped; the top frame is the state currently being browsed.
pub struct NavStack {
    frames: Vec<Frame>,
}

impl NavStack {
    pub fn new(root: Frame) -> Self {
        NavStack { frames: vec![root] }
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Remove and return the top frame, unless it is the root. The frame
    /// below resumes exactly as it was saved.
    pub fn pop(&mut self) -> Option<Frame> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Truncate the stack to frames `[0..=depth]`, returning the frame that
    /// sat just above the jump target if any was discarded. Deeper history
    /// is lost; re-descending recreates it.
    pub fn jump_to(&mut self, depth: usize) -> Option<Frame> {
        if depth + 1 >= self.frames.len() {
            return None;
        }
        let mut discarded = self.frames.split_off(depth + 1);
        Some(discarded.remove(0))
    }

    pub fn top(&self) -> &Frame {
        self.frames.last().expect("stack always holds the root frame")
    }

    pub fn top_mut(&mut self) -> &mut Frame {
        self.frames.last_mut().expect("stack always holds the root frame")
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::testing::{Sample, SampleInspector, sample_root};

    fn frame(label: &str) -> Frame {
        let inspector = SampleInspector;
        let root = sample_root(Sample::obj(vec![("x", Sample::Int(1))]));
        Frame::for_node(Node::classify(&inspector, root, label, label))
    }

    #[test]
    fn root_frame_is_never_popped() {
        let mut stack = NavStack::new(frame("root"));
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn pop_returns_the_pushed_frame() {
        let mut stack = NavStack::new(frame("root"));
        stack.push(frame("child"));

        let popped = stack.pop().expect("frame above root");
        assert_eq!(popped.node.name(), "child");
        assert_eq!(stack.top().node.name(), "root");
    }

    #[test]
    fn jump_truncates_and_returns_first_discarded() {
        let mut stack = NavStack::new(frame("root"));
        stack.push(frame("a"));
        stack.push(frame("b"));
        stack.push(frame("c"));

        let discarded = stack.jump_to(1).expect("frames above depth 1");
        assert_eq!(discarded.node.name(), "b");
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top().node.name(), "a");
    }

    #[test]
    fn jump_to_current_top_discards_nothing() {
        let mut stack = NavStack::new(frame("root"));
        stack.push(frame("a"));

        assert!(stack.jump_to(1).is_none());
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn restored_frame_keeps_viewport_fields() {
        let mut stack = NavStack::new(frame("root"));

        let mut child = frame("child");
        child
            .viewport_mut(treescope_types::Category::Public)
            .move_down(5, 2);
        let saved = child.viewport(treescope_types::Category::Public);
        stack.push(child);

        let restored = stack.pop().expect("frame above root");
        assert_eq!(restored.viewport(treescope_types::Category::Public), saved);
    }
}
