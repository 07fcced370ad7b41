use crate::keyboard::SoftKeyboard;
use crate::view::{ViewId, ViewTree};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Everything a click handler may touch: the view hierarchy and the
/// soft-keyboard collaborator.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Screen {
    pub tree: ViewTree,
    pub keyboard: SoftKeyboard,
}

impl Screen {
    #[must_use]
    pub fn new(tree: ViewTree) -> Self {
        Self {
            tree,
            keyboard: SoftKeyboard::new(),
        }
    }
}

pub type ClickHandler = Box<dyn FnMut(&mut Screen, ViewId)>;

/// Synchronous click dispatcher. Clicks are processed strictly in
/// delivery order, one at a time; a handler always runs to completion
/// before the next click is looked at. Several views may share one
/// handler, which is how a component owning state subscribes a whole
/// set of views without globals.
#[derive(Default)]
pub struct ClickRouter {
    handlers: Vec<ClickHandler>,
    routes: HashMap<ViewId, usize>,
    queue: VecDeque<ViewId>,
}

impl ClickRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<H>(&mut self, id: ViewId, handler: H)
    where
        H: FnMut(&mut Screen, ViewId) + 'static,
    {
        self.subscribe_all([id], handler);
    }

    pub fn subscribe_all<I, H>(&mut self, ids: I, handler: H)
    where
        I: IntoIterator<Item = ViewId>,
        H: FnMut(&mut Screen, ViewId) + 'static,
    {
        let slot = self.handlers.len();
        self.handlers.push(Box::new(handler));
        for id in ids {
            self.routes.insert(id, slot);
        }
    }

    #[must_use]
    pub fn is_subscribed(&self, id: ViewId) -> bool {
        self.routes.contains_key(&id)
    }

    /// Delivers one click and drains anything already queued.
    pub fn click(&mut self, screen: &mut Screen, id: ViewId) {
        self.queue.push_back(id);
        self.drain(screen);
    }

    /// Delivers a scripted sequence of clicks in order.
    pub fn click_sequence<I>(&mut self, screen: &mut Screen, ids: I)
    where
        I: IntoIterator<Item = ViewId>,
    {
        self.queue.extend(ids);
        self.drain(screen);
    }

    fn drain(&mut self, screen: &mut Screen) {
        while let Some(id) = self.queue.pop_front() {
            match self.routes.get(&id) {
                Some(&slot) => (self.handlers[slot])(screen, id),
                None => log::debug!("Click on unsubscribed view {id:?} dropped"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_click_routing() {
        let mut tree = ViewTree::new();
        let a = tree.add_view(ViewKind::Button);
        let b = tree.add_view(ViewKind::Button);
        let mut screen = Screen::new(tree);

        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut router = ClickRouter::new();
        let log = Rc::clone(&hits);
        router.subscribe_all([a, b], move |_, id| log.borrow_mut().push(id));

        assert!(router.is_subscribed(a));
        router.click(&mut screen, a);
        router.click(&mut screen, b);
        router.click(&mut screen, a);

        assert_eq!(*hits.borrow(), vec![a, b, a]);
    }

    #[test]
    fn test_unsubscribed_click_is_dropped() {
        let mut tree = ViewTree::new();
        let a = tree.add_view(ViewKind::Button);
        let mut screen = Screen::new(tree);

        let mut router = ClickRouter::new();
        assert!(!router.is_subscribed(a));
        router.click(&mut screen, a);
    }

    #[test]
    fn test_sequence_preserves_order() {
        let mut tree = ViewTree::new();
        let a = tree.add_view(ViewKind::Button);
        let b = tree.add_view(ViewKind::Button);
        let mut screen = Screen::new(tree);

        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut router = ClickRouter::new();
        let log = Rc::clone(&hits);
        router.subscribe_all([a, b], move |_, id| log.borrow_mut().push(id));

        router.click_sequence(&mut screen, [b, a, b]);
        assert_eq!(*hits.borrow(), vec![b, a, b]);
    }

    #[test]
    fn test_handler_mutates_screen() {
        let mut tree = ViewTree::new();
        let button = tree.add_view(ViewKind::Button);
        let mut screen = Screen::new(tree);

        let mut router = ClickRouter::new();
        router.subscribe(button, |screen, id| {
            let _ = screen.tree.set_text(id, "clicked");
        });

        router.click(&mut screen, button);
        assert_eq!(screen.tree.text(button), "clicked");
    }
}
