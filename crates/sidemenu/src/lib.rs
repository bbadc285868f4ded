//! # Side menu
//!
//! A reusable side navigation menu model: a tree of menu entries (root items
//! with nested sub menus), a separate flat user drop-down, and registration
//! handles that let calling code select, extend or remove any entry later on.
//!
//! Rendering is left to front-ends. They observe the menu through
//! [`MenuView`], read it through [`SideMenu::rows`] and feed clicks back with
//! [`SideMenu::activate`]. Navigation entries delegate to a [`Navigator`].
//!
//! ```ignore
//! use sidemenu::{SideMenu, click_handler};
//!
//! let menu = SideMenu::new();
//! let parent = menu.add_menu_item("Tree item", None)?;
//! let child = parent.add_sub_menu("sub item", click_handler(|| println!("clicked")))?;
//! child.select();
//! parent.remove(); // also removes "sub item"
//! ```

mod entry;
mod error;
mod menu;
mod registration;
mod store;
mod view;

pub use entry::{EntryId, Icon, MenuClickHandler, MenuEntry, click_handler};
pub use error::{Result, SideMenuError};
pub use menu::{MenuCaption, SideMenu, UserHeader, WeakSideMenu};
pub use registration::{MenuRegistration, RegistrationKind};
pub use store::MenuRow;
pub use view::{MenuView, Navigator};
