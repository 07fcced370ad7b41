use crate::view::ViewId;
use serde::{Deserialize, Serialize};

/// In-memory stand-in for the input-method collaborator. The real
/// framework owns the keyboard; the core only requests show/hide, so
/// tracking the requested state is enough for the apps and their tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftKeyboard {
    visible: bool,
    target: Option<ViewId>,
}

impl SoftKeyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, target: ViewId) {
        self.visible = true;
        self.target = Some(target);
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.target = None;
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn target(&self) -> Option<ViewId> {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_hide() {
        let mut keyboard = SoftKeyboard::new();
        assert!(!keyboard.is_visible());
        assert_eq!(keyboard.target(), None);

        keyboard.show(ViewId(3));
        assert!(keyboard.is_visible());
        assert_eq!(keyboard.target(), Some(ViewId(3)));

        keyboard.hide();
        assert!(!keyboard.is_visible());
        assert_eq!(keyboard.target(), None);
    }
}
