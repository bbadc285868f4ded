//! Registration handles returned when an entry is added to a menu.
//!
//! A [`MenuRegistration`] is the capability callers keep to select, extend,
//! inspect or remove the entry later on. Cloning a registration clones the
//! handle, not the entry: every clone observes the same removal state.
//!
//! Once `remove()` ran (directly, through the removal of an ancestor, or
//! through `clear_menu`/`clear_user_menu`), every further operation on the
//! handle panics.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::entry::{Icon, MenuClickHandler, MenuEntry};
use crate::error::{Result, SideMenuError};
use crate::menu::{MenuModel, SideMenu};

/// Which surface of the side menu a registration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
    /// Entry of the hierarchical navigation tree.
    Tree,
    /// Item of the flat user drop-down menu.
    UserMenu,
}

struct RegistrationInner {
    entry: MenuEntry,
    kind: RegistrationKind,
    menu: Weak<RefCell<MenuModel>>,
    removed: Cell<bool>,
}

/// Handle bound to exactly one [`MenuEntry`].
#[derive(Clone)]
pub struct MenuRegistration {
    inner: Rc<RegistrationInner>,
}

impl MenuRegistration {
    pub(crate) fn new(entry: MenuEntry, kind: RegistrationKind, menu: Weak<RefCell<MenuModel>>) -> Self {
        Self {
            inner: Rc::new(RegistrationInner {
                entry,
                kind,
                menu,
                removed: Cell::new(false),
            }),
        }
    }

    /// Runs the entry's current click handler. Does nothing when no handler is bound.
    ///
    /// # Panics
    /// If the registration was removed.
    pub fn select(&self) {
        self.ensure_live();
        self.inner.entry.click();
    }

    /// Removes the entry from its menu.
    ///
    /// For tree entries every descendant is removed as well and their
    /// registrations become invalid. User menu items only detach themselves.
    ///
    /// # Panics
    /// If the registration was already removed. Removal is not idempotent.
    pub fn remove(&self) {
        self.ensure_live();
        if let Some(menu) = self.owner() {
            match self.inner.kind {
                RegistrationKind::Tree => menu.remove_tree_entry(&self.inner.entry),
                RegistrationKind::UserMenu => menu.remove_user_item(&self.inner.entry),
            }
        }
        self.mark_removed();
    }

    /// Adds a sub menu entry below this one.
    ///
    /// # Errors
    /// - [`SideMenuError::DuplicateEntry`] when a direct child already uses `text`.
    /// - [`SideMenuError::NotATreeEntry`] for user menu items.
    /// - [`SideMenuError::MenuDropped`] when the owning menu no longer exists.
    ///
    /// # Panics
    /// If the registration was removed.
    pub fn add_sub_menu(&self, text: impl Into<String>, click_handler: Option<MenuClickHandler>) -> Result<MenuRegistration> {
        self.add_sub_menu_inner(text.into(), None, click_handler)
    }

    /// Same as [`add_sub_menu`](Self::add_sub_menu) with an icon.
    pub fn add_sub_menu_with_icon(
        &self,
        text: impl Into<String>,
        icon: Icon,
        click_handler: Option<MenuClickHandler>,
    ) -> Result<MenuRegistration> {
        self.add_sub_menu_inner(text.into(), Some(icon), click_handler)
    }

    fn add_sub_menu_inner(&self, text: String, icon: Option<Icon>, click_handler: Option<MenuClickHandler>) -> Result<MenuRegistration> {
        self.ensure_live();
        if self.inner.kind != RegistrationKind::Tree {
            return Err(SideMenuError::NotATreeEntry {
                text: self.inner.entry.text(),
            });
        }
        let menu = self.owner().ok_or_else(|| SideMenuError::MenuDropped {
            text: self.inner.entry.text(),
        })?;
        menu.add_tree_item(Some(&self.inner.entry), text, icon, click_handler)
    }

    /// Returns the live entry so callers can change its text, icon or handler.
    ///
    /// The owning view is asked to redraw the entry first.
    ///
    /// # Panics
    /// If the registration was removed.
    pub fn menu_entry(&self) -> MenuEntry {
        self.ensure_live();
        if let Some(menu) = self.owner() {
            match self.inner.kind {
                RegistrationKind::Tree => menu.notify(|view| view.refresh_item(&self.inner.entry)),
                RegistrationKind::UserMenu => menu.notify(|view| view.refresh_user_menu()),
            }
        }
        self.inner.entry.clone()
    }

    /// Looks up the registration of the direct child labelled `text`.
    ///
    /// Returns the very handle that `add_sub_menu` produced for that child.
    /// User menu items have no children and always return `None`.
    ///
    /// # Panics
    /// If the registration was removed.
    pub fn sub_menu(&self, text: &str) -> Option<MenuRegistration> {
        self.ensure_live();
        if self.inner.kind != RegistrationKind::Tree {
            return None;
        }
        self.owner()?.find_child_registration(Some(&self.inner.entry), text)
    }

    pub fn kind(&self) -> RegistrationKind {
        self.inner.kind
    }

    pub fn is_removed(&self) -> bool {
        self.inner.removed.get()
    }

    /// Whether both values are the same handle.
    pub fn ptr_eq(&self, other: &MenuRegistration) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Borrows the entry without asking the view to redraw it.
    ///
    /// Meant for renderers reading the menu; use [`menu_entry`](Self::menu_entry)
    /// to change the entry.
    ///
    /// # Panics
    /// If the registration was removed.
    pub fn entry(&self) -> &MenuEntry {
        self.ensure_live();
        &self.inner.entry
    }

    pub(crate) fn mark_removed(&self) {
        self.inner.removed.set(true);
    }

    fn owner(&self) -> Option<SideMenu> {
        self.inner.menu.upgrade().map(SideMenu::from_model)
    }

    fn ensure_live(&self) {
        assert!(
            !self.inner.removed.get(),
            "Actions on an already removed menu entry '{}'",
            self.inner.entry.text()
        );
    }
}

impl fmt::Debug for MenuRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuRegistration")
            .field("entry", &self.inner.entry)
            .field("kind", &self.inner.kind)
            .field("removed", &self.inner.removed.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::click_handler;

    #[test]
    fn detached_registration_reports_dropped_menu() {
        let registration = {
            let menu = SideMenu::new();
            menu.add_menu_item("orphan", None).expect("add root")
        };
        let error = registration.add_sub_menu("child", None).expect_err("menu is gone");
        assert_eq!(error, SideMenuError::MenuDropped { text: "orphan".into() });
        assert!(registration.sub_menu("child").is_none());
    }

    #[test]
    fn user_menu_items_cannot_hold_children() {
        let menu = SideMenu::new();
        let settings = menu.add_user_menu_item("Settings", None);
        let error = settings.add_sub_menu("Advanced", None).expect_err("not a tree entry");
        assert!(matches!(error, SideMenuError::NotATreeEntry { .. }));
        assert!(settings.sub_menu("Advanced").is_none());
        assert_eq!(settings.kind(), RegistrationKind::UserMenu);
    }

    #[test]
    fn removal_state_is_shared_between_clones() {
        let menu = SideMenu::new();
        let registration = menu.add_menu_item("item", click_handler(|| {})).expect("add root");
        let alias = registration.clone();
        registration.remove();
        assert!(alias.is_removed());
        assert!(alias.ptr_eq(&registration));
    }

    #[test]
    #[should_panic(expected = "already removed")]
    fn menu_entry_on_removed_registration_panics() {
        let menu = SideMenu::new();
        let registration = menu.add_menu_item("item", None).expect("add root");
        registration.remove();
        let _ = registration.menu_entry();
    }
}
