//! Explicit sign-in context threaded through every gated operation.

/// The slot identifying the signed-in user by position in the user
/// collection, or empty when no one is signed in. Positions stay valid for
/// the life of the process because users are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<usize>,
}

impl Session {
    /// Starts with no user signed in.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub(crate) fn set(&mut self, index: usize) {
        self.current = Some(index);
    }

    pub(crate) fn current(&self) -> Option<usize> {
        self.current
    }

    /// Clears the slot unconditionally. Safe to call when already signed out.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
