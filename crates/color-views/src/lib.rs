//! Color-my-views: assigns every text-bearing view in a hierarchy a
//! palette color round-robin and swaps displayed and assigned colors
//! on click.
//!
//! Click semantics are swap-on-click: a click paints the mapped color
//! and the color it displaced becomes the new mapped color, so two
//! clicks in a row restore the view's original background.

use indexmap::IndexMap;
use view_tree::{walk_matching, ClickRouter, Color, ViewId, ViewKind, ViewTree};

/// Stock palette: dark gray, cyan, yellow, magenta, coral, green, blue.
pub const DEFAULT_PALETTE: [Color; 7] = [
    Color::DARK_GRAY,
    Color::CYAN,
    Color::YELLOW,
    Color::MAGENTA,
    Color::CORAL,
    Color::GREEN,
    Color::BLUE,
];

/// Predicate used by the demo screen: any text-bearing view, plus the
/// root layout itself.
pub fn colorable(root_layout: ViewId) -> impl Fn(&ViewTree, ViewId) -> bool {
    move |tree, id| id == root_layout || tree.kind(id).is_some_and(ViewKind::shows_text)
}

/// Owns the view-to-color assignment map. Built once per screen by
/// walking the hierarchy; afterwards mutated only by clicks.
pub struct ColorCycler {
    assigned: IndexMap<ViewId, Color>,
}

impl ColorCycler {
    /// Walks the subtree under `root` and maps the i-th matching view
    /// (walker order) to `palette[i % palette.len()]`. The displayed
    /// backgrounds are untouched until the first click.
    pub fn assign<P>(tree: &ViewTree, root: ViewId, palette: &[Color], predicate: P) -> Self
    where
        P: Fn(&ViewTree, ViewId) -> bool,
    {
        let mut assigned = IndexMap::new();

        if palette.is_empty() {
            log::warn!("Empty palette, no color assignments made");
            return Self { assigned };
        }

        for (i, id) in walk_matching(tree, root, predicate).enumerate() {
            assigned.insert(id, palette[i % palette.len()]);
        }

        Self { assigned }
    }

    /// Views holding an assignment, in walker order.
    pub fn views(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.assigned.keys().copied()
    }

    #[must_use]
    pub fn assigned_color(&self, id: ViewId) -> Option<Color> {
        self.assigned.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Swap-on-click: paint the mapped color, remember the displaced
    /// one. Touches exactly one view's background.
    pub fn handle_click(&mut self, tree: &mut ViewTree, id: ViewId) {
        let Some(&assigned) = self.assigned.get(&id) else {
            log::warn!("Click on {id:?} which has no color assignment");
            return;
        };

        let previous = tree.background(id);
        let _ = tree.set_background(id, assigned);
        if let Some(previous) = previous {
            self.assigned.insert(id, previous);
        }
    }
}

/// Builds the cycler for the subtree under `root` and subscribes every
/// matched view, moving the assignment map into the click handler.
pub fn attach<P>(
    tree: &ViewTree,
    root: ViewId,
    palette: &[Color],
    predicate: P,
    router: &mut ClickRouter,
) where
    P: Fn(&ViewTree, ViewId) -> bool,
{
    let mut cycler = ColorCycler::assign(tree, root, palette, predicate);
    let subscribed: Vec<ViewId> = cycler.views().collect();
    router.subscribe_all(subscribed, move |screen, id| {
        cycler.handle_click(&mut screen.tree, id);
    });
}
