//! Contracts between the menu model and the front-ends around it.

use crate::entry::MenuEntry;

/// Observer notified whenever the visible state of a [`SideMenu`](crate::SideMenu) changes.
///
/// Every method has an empty default so renderers only implement the parts
/// they care about. Notifications are delivered after the menu released its
/// internal borrows, so implementations may read the menu freely.
pub trait MenuView {
    /// The navigation tree changed shape (entry added, removed or cleared).
    fn refresh_all(&self) {}

    /// A single entry was handed out for mutation and should be redrawn.
    fn refresh_item(&self, _entry: &MenuEntry) {}

    /// The user drop-down items changed.
    fn refresh_user_menu(&self) {}

    /// Caption, user name/icon or visibility flags changed.
    fn refresh_header(&self) {}
}

/// Performs a view transition to a named navigation state.
pub trait Navigator {
    fn navigate_to(&self, navigation_state: &str);
}
