use crate::color::Color;
use crate::error::{Result, TreeError};
use serde::{Deserialize, Serialize};

/// Handle to a view owned by a [`ViewTree`]. Views are created by the
/// surrounding framework when a screen is composed and never destroyed
/// while the screen lives, so handles stay valid for the tree's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewKind {
    Layout,
    Label,
    Edit,
    Button,
}

impl ViewKind {
    /// Capability query standing in for an "is a text widget" runtime type
    /// check: labels, edit fields and buttons all carry user-visible text.
    #[must_use]
    pub const fn shows_text(self) -> bool {
        matches!(self, Self::Label | Self::Edit | Self::Button)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Layout => "Layout",
            Self::Label => "Label",
            Self::Edit => "Edit",
            Self::Button => "Button",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct View {
    pub kind: ViewKind,
    pub text: String,
    pub background: Option<Color>,
    pub visible: bool,
    children: Vec<ViewId>,
    parent: Option<ViewId>,
}

impl View {
    fn new(kind: ViewKind) -> Self {
        Self {
            kind,
            text: String::new(),
            background: None,
            visible: true,
            children: Vec::new(),
            parent: None,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[ViewId] {
        &self.children
    }
}

/// Arena of views forming the screen hierarchy. Structure is fixed before
/// event dispatch starts; afterwards only view attributes mutate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewTree {
    views: Vec<View>,
    focused: Option<ViewId>,
}

const NO_CHILDREN: &[ViewId] = &[];

impl ViewTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_view(&mut self, kind: ViewKind) -> ViewId {
        let id = ViewId(self.views.len());
        self.views.push(View::new(kind));
        id
    }

    /// Makes `child` the last child of `parent`. Fails on unknown ids, a
    /// child that already has a parent, or an edge that would close a
    /// cycle, so every well-formed tree is finite and acyclic.
    pub fn attach(&mut self, parent: ViewId, child: ViewId) -> Result<()> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownView(parent));
        }
        if !self.contains(child) {
            return Err(TreeError::UnknownView(child));
        }
        if self.views[child.0].parent.is_some() {
            return Err(TreeError::AlreadyAttached { child });
        }
        if child == parent || self.is_ancestor(child, parent) {
            return Err(TreeError::CycleDetected { parent, child });
        }

        self.views[child.0].parent = Some(parent);
        self.views[parent.0].children.push(child);
        Ok(())
    }

    fn is_ancestor(&self, candidate: ViewId, of: ViewId) -> bool {
        let mut current = self.views[of.0].parent;
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.views[id.0].parent;
        }
        false
    }

    #[must_use]
    pub fn get(&self, id: ViewId) -> Option<&View> {
        self.views.get(id.0)
    }

    fn view_mut(&mut self, id: ViewId) -> Result<&mut View> {
        self.views.get_mut(id.0).ok_or(TreeError::UnknownView(id))
    }

    #[must_use]
    pub fn contains(&self, id: ViewId) -> bool {
        id.0 < self.views.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    #[must_use]
    pub fn kind(&self, id: ViewId) -> Option<ViewKind> {
        self.get(id).map(|v| v.kind)
    }

    #[must_use]
    pub fn children(&self, id: ViewId) -> &[ViewId] {
        self.get(id).map_or(NO_CHILDREN, |v| &v.children)
    }

    #[must_use]
    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.get(id).and_then(|v| v.parent)
    }

    #[must_use]
    pub fn text(&self, id: ViewId) -> &str {
        self.get(id).map_or("", |v| v.text.as_str())
    }

    pub fn set_text(&mut self, id: ViewId, text: &str) -> Result<()> {
        self.view_mut(id)?.text = text.to_string();
        Ok(())
    }

    #[must_use]
    pub fn background(&self, id: ViewId) -> Option<Color> {
        self.get(id).and_then(|v| v.background)
    }

    pub fn set_background(&mut self, id: ViewId, color: Color) -> Result<()> {
        self.view_mut(id)?.background = Some(color);
        Ok(())
    }

    #[must_use]
    pub fn is_visible(&self, id: ViewId) -> bool {
        self.get(id).is_some_and(|v| v.visible)
    }

    pub fn set_visible(&mut self, id: ViewId, visible: bool) -> Result<()> {
        self.view_mut(id)?.visible = visible;
        Ok(())
    }

    pub fn request_focus(&mut self, id: ViewId) -> Result<()> {
        if !self.contains(id) {
            return Err(TreeError::UnknownView(id));
        }
        self.focused = Some(id);
        Ok(())
    }

    #[must_use]
    pub fn focused(&self) -> Option<ViewId> {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_attach() {
        let mut tree = ViewTree::new();
        let root = tree.add_view(ViewKind::Layout);
        let label = tree.add_view(ViewKind::Label);
        let edit = tree.add_view(ViewKind::Edit);

        tree.attach(root, label).unwrap();
        tree.attach(root, edit).unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.children(root), &[label, edit]);
        assert_eq!(tree.parent(label), Some(root));
        assert_eq!(tree.parent(root), None);
        assert!(tree.children(label).is_empty());
    }

    #[test]
    fn test_attach_unknown_view() {
        let mut tree = ViewTree::new();
        let root = tree.add_view(ViewKind::Layout);
        let bogus = ViewId(42);

        assert_eq!(
            tree.attach(root, bogus),
            Err(TreeError::UnknownView(bogus))
        );
        assert_eq!(
            tree.attach(bogus, root),
            Err(TreeError::UnknownView(bogus))
        );
    }

    #[test]
    fn test_attach_rejects_second_parent() {
        let mut tree = ViewTree::new();
        let a = tree.add_view(ViewKind::Layout);
        let b = tree.add_view(ViewKind::Layout);
        let child = tree.add_view(ViewKind::Label);

        tree.attach(a, child).unwrap();
        assert_eq!(
            tree.attach(b, child),
            Err(TreeError::AlreadyAttached { child })
        );
    }

    #[test]
    fn test_attach_rejects_cycles() {
        let mut tree = ViewTree::new();
        let a = tree.add_view(ViewKind::Layout);
        let b = tree.add_view(ViewKind::Layout);
        let c = tree.add_view(ViewKind::Layout);

        tree.attach(a, b).unwrap();
        tree.attach(b, c).unwrap();

        assert_eq!(
            tree.attach(a, a),
            Err(TreeError::CycleDetected { parent: a, child: a })
        );
        assert_eq!(
            tree.attach(c, a),
            Err(TreeError::CycleDetected { parent: c, child: a })
        );
    }

    #[test]
    fn test_attribute_mutation() {
        let mut tree = ViewTree::new();
        let label = tree.add_view(ViewKind::Label);

        assert_eq!(tree.text(label), "");
        tree.set_text(label, "hello").unwrap();
        assert_eq!(tree.text(label), "hello");

        assert_eq!(tree.background(label), None);
        tree.set_background(label, Color::CYAN).unwrap();
        assert_eq!(tree.background(label), Some(Color::CYAN));

        assert!(tree.is_visible(label));
        tree.set_visible(label, false).unwrap();
        assert!(!tree.is_visible(label));

        let bogus = ViewId(9);
        assert_eq!(tree.set_text(bogus, "x"), Err(TreeError::UnknownView(bogus)));
        assert!(!tree.is_visible(bogus));
        assert_eq!(tree.text(bogus), "");
    }

    #[test]
    fn test_focus() {
        let mut tree = ViewTree::new();
        let edit = tree.add_view(ViewKind::Edit);

        assert_eq!(tree.focused(), None);
        tree.request_focus(edit).unwrap();
        assert_eq!(tree.focused(), Some(edit));

        let bogus = ViewId(3);
        assert_eq!(
            tree.request_focus(bogus),
            Err(TreeError::UnknownView(bogus))
        );
        assert_eq!(tree.focused(), Some(edit));
    }

    #[test]
    fn test_shows_text_capability() {
        assert!(ViewKind::Label.shows_text());
        assert!(ViewKind::Edit.shows_text());
        assert!(ViewKind::Button.shows_text());
        assert!(!ViewKind::Layout.shows_text());
    }
}
