//! UI components: side menu column, content area, hint bar.

pub mod component;
pub mod content;
pub mod hint_bar;
pub mod side_menu;

pub(crate) use component::Component;
pub use component::find_target_index_by_mouse_position;
pub use content::ContentComponent;
pub use hint_bar::HintBarComponent;
pub use side_menu::SideMenuComponent;
