//! Layout rules for the side menu application.
//!
//! Wide terminals show the menu column next to the content. Narrow terminals
//! behave like a collapsed responsive menu: the column takes the whole width
//! while it is toggled visible and disappears otherwise.
use ratatui::prelude::*;

use crate::app::App;

/// Terminals narrower than this use the collapsible menu.
pub const NARROW_WIDTH: u16 = 70;
/// Width of the menu column on wide terminals.
pub const MENU_WIDTH: u16 = 32;
/// Height of the status strip (notification line plus hints).
pub const STATUS_HEIGHT: u16 = 2;

/// Areas produced by [`MainLayout::responsive_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub menu: Rect,
    pub content: Rect,
    pub status: Rect,
}

pub(crate) struct MainLayout;

impl MainLayout {
    /// Splits the screen into menu column, content area and status strip.
    ///
    /// A hidden region gets an empty rectangle.
    pub fn responsive_layout(size: Rect, app: &App) -> MainAreas {
        let [body, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)]).areas(size);

        if Self::is_narrow(size) {
            let (menu, content) = if app.menu.is_menu_visible() {
                (body, Rect::default())
            } else {
                (Rect::default(), body)
            };
            return MainAreas { menu, content, status };
        }

        let [menu, content] = Layout::horizontal([
            Constraint::Length(MENU_WIDTH), // Side menu column
            Constraint::Min(1),             // Content
        ])
        .areas(body);
        MainAreas { menu, content, status }
    }

    pub fn is_narrow(size: Rect) -> bool {
        size.width < NARROW_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;

    #[test]
    fn wide_screens_show_both_columns() {
        let app = App::new(Box::new(DraculaTheme::new()));
        let areas = MainLayout::responsive_layout(Rect::new(0, 0, 120, 40), &app);
        assert_eq!(areas.menu.width, MENU_WIDTH);
        assert_eq!(areas.content.x, MENU_WIDTH);
        assert_eq!(areas.status.height, STATUS_HEIGHT);
        assert_eq!(areas.status.y, 38);
    }

    #[test]
    fn narrow_screens_follow_the_menu_toggle() {
        let app = App::new(Box::new(DraculaTheme::new()));
        let size = Rect::new(0, 0, 50, 20);

        let collapsed = MainLayout::responsive_layout(size, &app);
        assert!(collapsed.menu.is_empty());
        assert_eq!(collapsed.content.width, 50);

        app.menu.toggle_menu_visible();
        let expanded = MainLayout::responsive_layout(size, &app);
        assert_eq!(expanded.menu.width, 50);
        assert!(expanded.content.is_empty());
    }
}
