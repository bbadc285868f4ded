//! Bridges menu change notifications to the runtime's redraw flag.

use std::cell::Cell;
use std::rc::Rc;

use sidemenu::{MenuEntry, MenuView};
use tracing::trace;

/// Shared "needs redraw" flag.
///
/// Every model the UI renders (menu, content area, notifications) holds a
/// clone and marks it; the runtime clears it after drawing.
#[derive(Debug, Clone, Default)]
pub struct DirtyFlag(Rc<Cell<bool>>);

impl DirtyFlag {
    pub fn mark(&self) {
        self.0.set(true);
    }

    /// Returns the flag and resets it.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }

    pub fn is_dirty(&self) -> bool {
        self.0.get()
    }
}

/// [`MenuView`] that schedules a redraw for every change of the side menu.
#[derive(Debug, Clone)]
pub struct DirtyFlagView {
    dirty: DirtyFlag,
}

impl DirtyFlagView {
    pub fn new(dirty: DirtyFlag) -> Self {
        Self { dirty }
    }
}

impl MenuView for DirtyFlagView {
    fn refresh_all(&self) {
        trace!("menu tree refresh");
        self.dirty.mark();
    }

    fn refresh_item(&self, entry: &MenuEntry) {
        trace!(entry = %entry.id(), "menu entry refresh");
        self.dirty.mark();
    }

    fn refresh_user_menu(&self) {
        self.dirty.mark();
    }

    fn refresh_header(&self) {
        self.dirty.mark();
    }
}
