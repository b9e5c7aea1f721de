//! Cart drawer visibility.

/// Two-state drawer: starts closed, no animating state is modelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Open the drawer. Returns whether the state changed.
    pub fn open(&mut self) -> bool {
        let changed = !self.is_open();
        *self = Self::Open;
        changed
    }

    /// Close the drawer. Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        let changed = self.is_open();
        *self = Self::Closed;
        changed
    }
}
