//! Side menu column component.
//!
//! Renders a [`sidemenu::SideMenu`]: the caption, the user header with its
//! drop-down, the responsive "Menu" toggle and the navigation tree indented
//! by depth. It supports:
//! - Keyboard navigation (Up/Down/Home/End/Enter) in the tree and the drop-down
//! - Mouse activation of rows, user items, the header and the toggle
//! - Theming via `ui::theme::theme_helpers`
//!
//! The component only reports activations as `Effect`s; the application runs
//! the bound handlers once input routing is finished.

mod side_menu_component;
mod state;

pub use side_menu_component::{SideMenuComponent, icon_text};
pub use state::SideMenuState;
