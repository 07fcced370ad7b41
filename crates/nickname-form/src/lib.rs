//! Nickname form: a two-state toggle between an editable text field and
//! a read-only label.
//!
//! In `Editing` the field and its done button are visible; submitting a
//! non-blank nickname shows the trimmed text on the label and hides the
//! keyboard. Clicking the label reopens the form with an empty field and
//! the keyboard back up. Blank input never leaves `Editing`.

use view_tree::{ClickRouter, Result, Screen, TreeError, ViewId, ViewTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Displayed,
}

pub struct NicknameForm {
    edit: ViewId,
    done: ViewId,
    label: ViewId,
    state: FormState,
}

impl NicknameForm {
    /// Wires the form over three existing views and puts the screen in
    /// the initial `Editing` configuration: field and button visible,
    /// label hidden.
    pub fn new(
        tree: &mut ViewTree,
        edit: ViewId,
        done: ViewId,
        label: ViewId,
    ) -> Result<Self> {
        for id in [edit, done, label] {
            if !tree.contains(id) {
                return Err(TreeError::UnknownView(id));
            }
        }

        tree.set_visible(edit, true)?;
        tree.set_visible(done, true)?;
        tree.set_visible(label, false)?;

        Ok(Self {
            edit,
            done,
            label,
            state: FormState::Editing,
        })
    }

    #[must_use]
    pub const fn state(&self) -> FormState {
        self.state
    }

    /// Routes a click to the transition matching the current state.
    /// Anything else (a click on the hidden control, should the
    /// framework ever deliver one) is ignored.
    pub fn handle_click(&mut self, screen: &mut Screen, id: ViewId) {
        match self.state {
            FormState::Editing if id == self.done => self.submit(screen),
            FormState::Displayed if id == self.label => self.reopen(screen),
            _ => {}
        }
    }

    fn submit(&mut self, screen: &mut Screen) {
        let text = screen.tree.text(self.edit).to_string();

        if text.trim().is_empty() {
            // All-whitespace input collapses to empty; truly empty input
            // is left alone. Either way the form stays in Editing.
            if !text.is_empty() {
                let _ = screen.tree.set_text(self.edit, "");
            }
            return;
        }

        let _ = screen.tree.set_text(self.label, text.trim());
        let _ = screen.tree.set_visible(self.edit, false);
        let _ = screen.tree.set_visible(self.done, false);
        let _ = screen.tree.set_visible(self.label, true);
        screen.keyboard.hide();
        self.state = FormState::Displayed;
    }

    fn reopen(&mut self, screen: &mut Screen) {
        let _ = screen.tree.set_text(self.edit, "");
        let _ = screen.tree.set_visible(self.edit, true);
        let _ = screen.tree.set_visible(self.done, true);
        let _ = screen.tree.set_visible(self.label, false);
        let _ = screen.tree.request_focus(self.edit);
        screen.keyboard.show(self.edit);
        self.state = FormState::Editing;
    }

    /// Subscribes the done button and the label, moving the form into
    /// the shared click handler.
    pub fn attach(self, router: &mut ClickRouter) {
        let mut form = self;
        router.subscribe_all([form.done, form.label], move |screen, id| {
            form.handle_click(screen, id);
        });
    }
}
