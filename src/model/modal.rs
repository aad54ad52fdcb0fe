//! Modal stack for overlays drawn above the current screen

/// An overlay displayed on top of the current route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
}

/// A stack of modal overlays
///
/// Modals are drawn bottom to top; only the top modal receives input.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal unless the same modal is already open
    pub fn push(&mut self, modal: Modal) {
        if !self.contains(modal) {
            self.stack.push(modal);
        }
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<Modal> {
        self.stack.last().copied()
    }

    pub fn contains(&self, modal: Modal) -> bool {
        self.stack.contains(&modal)
    }

    /// Modals in draw order
    pub fn iter(&self) -> impl Iterator<Item = Modal> + '_ {
        self.stack.iter().copied()
    }
}
