use crate::view::{ViewId, ViewTree};

/// Depth-first pre-order traversal over the subtree rooted at `root`,
/// root included, children in their stored order. Lazy: nodes are
/// produced one at a time from an explicit stack, so arbitrarily deep
/// trees cost heap proportional to the pending frontier and never touch
/// the call stack. Trees built through [`ViewTree::attach`] are acyclic,
/// so the walk always terminates. Each call re-walks the tree from
/// scratch.
#[must_use]
pub fn walk(tree: &ViewTree, root: ViewId) -> Dfs<'_> {
    let mut stack = Vec::new();
    if tree.contains(root) {
        stack.push(root);
    }
    Dfs { tree, stack }
}

/// [`walk`] restricted to views satisfying `predicate`. An empty match
/// set yields an empty sequence, not an error.
pub fn walk_matching<'a, P>(
    tree: &'a ViewTree,
    root: ViewId,
    predicate: P,
) -> impl Iterator<Item = ViewId> + 'a
where
    P: Fn(&ViewTree, ViewId) -> bool + 'a,
{
    walk(tree, root).filter(move |&id| predicate(tree, id))
}

pub struct Dfs<'a> {
    tree: &'a ViewTree,
    stack: Vec<ViewId>,
}

impl Iterator for Dfs<'_> {
    type Item = ViewId;

    fn next(&mut self) -> Option<ViewId> {
        let id = self.stack.pop()?;
        for &child in self.tree.children(id).iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
