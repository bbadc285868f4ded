//! The side menu controller.
//!
//! [`SideMenu`] owns two independent surfaces:
//! - the navigation tree: root entries with nested sub menus, unique labels
//!   per parent, cascading removal;
//! - the user drop-down: a flat list of items below the user header, no
//!   uniqueness checks.
//!
//! All state lives behind one `Rc<RefCell<_>>` and is meant to be driven from
//! a single UI thread. Click handlers always run with no borrow held, so they
//! may add, select or remove entries of the same menu.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::entry::{EntryId, Icon, MenuClickHandler, MenuEntry};
use crate::error::{Result, SideMenuError};
use crate::registration::{MenuRegistration, RegistrationKind};
use crate::store::{EntryStore, MenuRow};
use crate::view::{MenuView, Navigator};

/// Title shown at the top of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCaption {
    pub text: String,
    pub logo: Option<Icon>,
}

/// Header of the user drop-down: portrait, name and visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserHeader {
    pub name: String,
    pub icon: Option<Icon>,
    pub visible: bool,
}

impl Default for UserHeader {
    fn default() -> Self {
        Self {
            name: String::new(),
            icon: None,
            visible: true,
        }
    }
}

#[derive(Default)]
pub(crate) struct MenuModel {
    store: EntryStore,
    registrations: HashMap<EntryId, MenuRegistration>,
    user_items: Vec<MenuRegistration>,
    user_header: UserHeader,
    caption: Option<MenuCaption>,
    menu_visible: bool,
    navigator: Option<Rc<dyn Navigator>>,
    view: Option<Rc<dyn MenuView>>,
}

impl MenuModel {
    /// Removes `entry`, its descendants and their registrations.
    ///
    /// Children are snapshotted before recursing so the walk never observes a
    /// list it is modifying.
    fn cascade_remove(&mut self, entry: &MenuEntry) {
        let children = self.store.children_of(Some(entry)).to_vec();
        for child in &children {
            if self.registrations.contains_key(&child.id()) {
                self.cascade_remove(child);
            }
        }
        self.store.remove(entry);
        if let Some(registration) = self.registrations.remove(&entry.id()) {
            registration.mark_removed();
        }
    }
}

/// Hierarchical side navigation menu with a separate user drop-down.
///
/// Cloning a `SideMenu` yields another handle to the same menu.
#[derive(Clone, Default)]
pub struct SideMenu {
    model: Rc<RefCell<MenuModel>>,
}

/// Weak counterpart of [`SideMenu`]; does not keep the menu alive.
#[derive(Clone, Default)]
pub struct WeakSideMenu {
    model: Weak<RefCell<MenuModel>>,
}

impl WeakSideMenu {
    /// The menu, unless every strong handle was dropped.
    pub fn upgrade(&self) -> Option<SideMenu> {
        self.model.upgrade().map(SideMenu::from_model)
    }
}

impl fmt::Debug for WeakSideMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakSideMenu").field("alive", &(self.model.strong_count() > 0)).finish()
    }
}

impl SideMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_model(model: Rc<RefCell<MenuModel>>) -> Self {
        Self { model }
    }

    /// Non-owning handle, for click handlers stored inside this menu.
    pub fn downgrade(&self) -> WeakSideMenu {
        WeakSideMenu {
            model: Rc::downgrade(&self.model),
        }
    }

    /// Adds a root level entry. The handler runs when the entry is clicked or selected.
    ///
    /// # Errors
    /// [`SideMenuError::DuplicateEntry`] when another root entry uses `text`.
    pub fn add_menu_item(&self, text: impl Into<String>, click_handler: Option<MenuClickHandler>) -> Result<MenuRegistration> {
        self.add_tree_item(None, text.into(), None, click_handler)
    }

    /// Adds a root level entry with an icon.
    pub fn add_menu_item_with_icon(
        &self,
        text: impl Into<String>,
        icon: Icon,
        click_handler: Option<MenuClickHandler>,
    ) -> Result<MenuRegistration> {
        self.add_tree_item(None, text.into(), Some(icon), click_handler)
    }

    /// Adds a root level entry that navigates to `navigation_state` when clicked.
    pub fn add_navigation(&self, text: impl Into<String>, navigation_state: impl Into<String>) -> Result<MenuRegistration> {
        let handler = self.navigation_handler(navigation_state.into());
        self.add_tree_item(None, text.into(), None, Some(handler))
    }

    /// Adds a root level navigation entry with an icon.
    pub fn add_navigation_with_icon(
        &self,
        text: impl Into<String>,
        icon: Icon,
        navigation_state: impl Into<String>,
    ) -> Result<MenuRegistration> {
        let handler = self.navigation_handler(navigation_state.into());
        self.add_tree_item(None, text.into(), Some(icon), Some(handler))
    }

    /// Appends an item to the user drop-down. Labels are not deduplicated.
    pub fn add_user_menu_item(&self, text: impl Into<String>, click_handler: Option<MenuClickHandler>) -> MenuRegistration {
        self.push_user_item(text.into(), None, click_handler)
    }

    /// Appends an item with an icon to the user drop-down.
    pub fn add_user_menu_item_with_icon(
        &self,
        text: impl Into<String>,
        icon: Icon,
        click_handler: Option<MenuClickHandler>,
    ) -> MenuRegistration {
        self.push_user_item(text.into(), Some(icon), click_handler)
    }

    /// Removes every entry of the navigation tree. The user menu is untouched.
    ///
    /// All tree registrations become invalid.
    pub fn clear_menu(&self) {
        {
            let mut model = self.model.borrow_mut();
            for (_, registration) in model.registrations.drain() {
                registration.mark_removed();
            }
            model.store.clear();
        }
        debug!("cleared navigation menu");
        self.notify(|view| view.refresh_all());
    }

    /// Removes every item of the user drop-down. All its registrations become invalid.
    pub fn clear_user_menu(&self) {
        {
            let mut model = self.model.borrow_mut();
            for registration in model.user_items.drain(..) {
                registration.mark_removed();
            }
        }
        debug!("cleared user menu");
        self.notify(|view| view.refresh_user_menu());
    }

    /// Sets the menu title, dropping any previous title and logo.
    pub fn set_menu_caption(&self, text: impl Into<String>) {
        self.replace_caption(MenuCaption {
            text: text.into(),
            logo: None,
        });
    }

    /// Sets the menu title together with a logo.
    pub fn set_menu_caption_with_logo(&self, text: impl Into<String>, logo: Icon) {
        self.replace_caption(MenuCaption {
            text: text.into(),
            logo: Some(logo),
        });
    }

    pub fn menu_caption(&self) -> Option<MenuCaption> {
        self.model.borrow().caption.clone()
    }

    pub fn set_user_name(&self, name: impl Into<String>) {
        self.model.borrow_mut().user_header.name = name.into();
        self.notify(|view| view.refresh_header());
    }

    pub fn set_user_icon(&self, icon: Option<Icon>) {
        self.model.borrow_mut().user_header.icon = icon;
        self.notify(|view| view.refresh_header());
    }

    /// Shows or hides the whole user menu: portrait, name and drop-down.
    pub fn set_user_menu_visible(&self, visible: bool) {
        self.model.borrow_mut().user_header.visible = visible;
        self.notify(|view| view.refresh_header());
    }

    pub fn is_user_menu_visible(&self) -> bool {
        self.model.borrow().user_header.visible
    }

    pub fn user_header(&self) -> UserHeader {
        self.model.borrow().user_header.clone()
    }

    /// Flips the expanded state used by narrow layouts. Returns the new state.
    pub fn toggle_menu_visible(&self) -> bool {
        let visible = {
            let mut model = self.model.borrow_mut();
            model.menu_visible = !model.menu_visible;
            model.menu_visible
        };
        self.notify(|view| view.refresh_header());
        visible
    }

    pub fn is_menu_visible(&self) -> bool {
        self.model.borrow().menu_visible
    }

    /// Installs the adapter used by navigation entries.
    pub fn set_navigator(&self, navigator: Rc<dyn Navigator>) {
        self.model.borrow_mut().navigator = Some(navigator);
    }

    /// Installs the observer notified about visual changes.
    pub fn set_view(&self, view: Rc<dyn MenuView>) {
        self.model.borrow_mut().view = Some(view);
    }

    /// The navigation tree flattened depth-first, ready for rendering.
    pub fn rows(&self) -> Vec<MenuRow> {
        self.model.borrow().store.rows()
    }

    /// Registrations of the root entries in insertion order.
    pub fn root_items(&self) -> Vec<MenuRegistration> {
        let model = self.model.borrow();
        model
            .store
            .children_of(None)
            .iter()
            .filter_map(|entry| model.registrations.get(&entry.id()).cloned())
            .collect()
    }

    /// Registrations of the user drop-down items in insertion order.
    pub fn user_menu_items(&self) -> Vec<MenuRegistration> {
        self.model.borrow().user_items.clone()
    }

    /// Translates a tree entry back into its registration.
    pub fn registration_for(&self, entry: &MenuEntry) -> Option<MenuRegistration> {
        self.model.borrow().registrations.get(&entry.id()).cloned()
    }

    /// Dispatches a click coming from a rendered row. Returns whether a handler ran.
    pub fn activate(&self, entry: &MenuEntry) -> bool {
        debug!(entry = %entry.id(), text = %entry.text(), "menu entry activated");
        entry.click()
    }

    /// Number of entries in the navigation tree.
    pub fn len(&self) -> usize {
        self.model.borrow().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn add_tree_item(
        &self,
        parent: Option<&MenuEntry>,
        text: String,
        icon: Option<Icon>,
        click_handler: Option<MenuClickHandler>,
    ) -> Result<MenuRegistration> {
        let registration = {
            let mut model = self.model.borrow_mut();
            if model.store.find_child(parent, &text).is_some() {
                return Err(SideMenuError::DuplicateEntry { text });
            }
            let entry = MenuEntry::new(text, icon, click_handler);
            model.store.add(parent, entry.clone());
            let registration = MenuRegistration::new(entry.clone(), RegistrationKind::Tree, Rc::downgrade(&self.model));
            model.registrations.insert(entry.id(), registration.clone());
            debug!(
                entry = %entry.id(),
                parent = ?parent.map(MenuEntry::id),
                text = %entry.text(),
                "added menu entry"
            );
            registration
        };
        self.notify(|view| view.refresh_all());
        Ok(registration)
    }

    pub(crate) fn remove_tree_entry(&self, entry: &MenuEntry) {
        let removed = {
            let mut model = self.model.borrow_mut();
            let before = model.store.len();
            model.cascade_remove(entry);
            before - model.store.len()
        };
        debug!(entry = %entry.id(), removed, "removed menu entry with descendants");
        self.notify(|view| view.refresh_all());
    }

    pub(crate) fn remove_user_item(&self, entry: &MenuEntry) {
        self.model
            .borrow_mut()
            .user_items
            .retain(|registration| registration.entry() != entry);
        debug!(entry = %entry.id(), "removed user menu item");
        self.notify(|view| view.refresh_user_menu());
    }

    pub(crate) fn find_child_registration(&self, parent: Option<&MenuEntry>, text: &str) -> Option<MenuRegistration> {
        let model = self.model.borrow();
        let child = model.store.find_child(parent, text)?;
        model.registrations.get(&child.id()).cloned()
    }

    /// Calls `notify` on the installed view once the model borrow is released.
    pub(crate) fn notify(&self, notify: impl FnOnce(&dyn MenuView)) {
        let view = self.model.borrow().view.clone();
        if let Some(view) = view {
            notify(view.as_ref());
        }
    }

    fn push_user_item(&self, text: String, icon: Option<Icon>, click_handler: Option<MenuClickHandler>) -> MenuRegistration {
        let entry = MenuEntry::new(text, icon, click_handler);
        let registration = MenuRegistration::new(entry.clone(), RegistrationKind::UserMenu, Rc::downgrade(&self.model));
        self.model.borrow_mut().user_items.push(registration.clone());
        debug!(entry = %entry.id(), text = %entry.text(), "added user menu item");
        self.notify(|view| view.refresh_user_menu());
        registration
    }

    fn replace_caption(&self, caption: MenuCaption) {
        self.model.borrow_mut().caption = Some(caption);
        self.notify(|view| view.refresh_header());
    }

    fn navigation_handler(&self, navigation_state: String) -> MenuClickHandler {
        let menu = Rc::downgrade(&self.model);
        Rc::new(move || {
            let Some(model) = menu.upgrade() else {
                return;
            };
            let navigator = model.borrow().navigator.clone();
            match navigator {
                Some(navigator) => {
                    debug!(navigation_state = %navigation_state, "navigating");
                    navigator.navigate_to(&navigation_state);
                }
                None => warn!(navigation_state = %navigation_state, "no navigator installed; ignoring navigation"),
            }
        })
    }
}

impl fmt::Debug for SideMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.model.borrow();
        f.debug_struct("SideMenu")
            .field("entries", &model.store.len())
            .field("user_items", &model.user_items.len())
            .field("caption", &model.caption)
            .field("user_header", &model.user_header)
            .field("menu_visible", &model.menu_visible)
            .finish()
    }
}
