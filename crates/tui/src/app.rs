//! Application state for the side menu TUI.
//!
//! `App` ties together the menu model, the content area, notifications and
//! the per-component view state. Components never run menu handlers while
//! they are handling input; they return [`Effect`]s that `App` applies once
//! the event has been routed, so handlers are free to reshape the menu.

use std::rc::Rc;
use std::time::Instant;

use sidemenu::{MenuClickHandler, MenuEntry, MenuRegistration, SideMenu};
use tracing::debug;

use crate::content::ContentArea;
use crate::navigator::ViewNavigator;
use crate::notifications::Notifications;
use crate::ui::components::content::ContentViewState;
use crate::ui::components::side_menu::SideMenuState;
use crate::ui::theme::Theme;
use crate::view::{DirtyFlag, DirtyFlagView};

/// Side effects requested by components.
#[derive(Clone)]
pub enum Effect {
    /// Leave the event loop.
    Quit,
    /// A tree row was activated.
    ActivateEntry(MenuEntry),
    /// A user menu item was activated.
    SelectRegistration(MenuRegistration),
    /// A content button was pressed.
    PressButton(MenuClickHandler),
    /// Expand or collapse the menu column on narrow terminals.
    ToggleMenu,
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quit => f.write_str("Quit"),
            Self::ActivateEntry(entry) => f.debug_tuple("ActivateEntry").field(entry).finish(),
            Self::SelectRegistration(registration) => f.debug_tuple("SelectRegistration").field(registration).finish(),
            Self::PressButton(_) => f.write_str("PressButton"),
            Self::ToggleMenu => f.write_str("ToggleMenu"),
        }
    }
}

/// Region receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusRegion {
    #[default]
    Menu,
    UserMenu,
    Content,
}

pub struct App {
    pub menu: SideMenu,
    pub content: ContentArea,
    pub notifications: Notifications,
    pub navigator: Rc<ViewNavigator>,
    pub theme: Box<dyn Theme>,
    pub side_menu: SideMenuState,
    pub content_view: ContentViewState,
    pub focus: FocusRegion,
    pub dirty: DirtyFlag,
    pub should_quit: bool,
}

impl App {
    pub fn new(theme: Box<dyn Theme>) -> Self {
        let dirty = DirtyFlag::default();
        let menu = SideMenu::new();
        menu.set_view(Rc::new(DirtyFlagView::new(dirty.clone())));
        let content = ContentArea::new(dirty.clone());
        let notifications = Notifications::new(dirty.clone());
        let navigator = Rc::new(ViewNavigator::new(content.clone(), notifications.clone()));
        menu.set_navigator(navigator.clone());
        dirty.mark();

        Self {
            menu,
            content,
            notifications,
            navigator,
            theme,
            side_menu: SideMenuState::default(),
            content_view: ContentViewState::default(),
            focus: FocusRegion::default(),
            dirty,
            should_quit: false,
        }
    }

    /// Runs the effects returned by a component, in order.
    pub fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            debug!(?effect, "applying effect");
            match effect {
                Effect::Quit => self.should_quit = true,
                Effect::ActivateEntry(entry) => {
                    self.menu.activate(&entry);
                }
                Effect::SelectRegistration(registration) => {
                    // The item may have been dropped by an earlier effect of the same batch.
                    if !registration.is_removed() {
                        registration.select();
                    }
                }
                Effect::PressButton(handler) => handler(),
                Effect::ToggleMenu => {
                    self.menu.toggle_menu_visible();
                }
            }
            self.dirty.mark();
        }
        self.normalize_focus();
    }

    /// Moves keyboard focus to the next (or previous) region that is currently shown.
    pub fn cycle_focus(&mut self, forward: bool) {
        let order = [FocusRegion::Menu, FocusRegion::UserMenu, FocusRegion::Content];
        let current = order.iter().position(|region| *region == self.focus).unwrap_or_default();
        for step in 1..=order.len() {
            let index = if forward {
                (current + step) % order.len()
            } else {
                (current + 2 * order.len() - step) % order.len()
            };
            let candidate = order[index];
            if self.can_focus(candidate) {
                self.focus = candidate;
                break;
            }
        }
        self.side_menu.user_menu_open = self.focus == FocusRegion::UserMenu;
        self.dirty.mark();
    }

    /// Drops expired notifications.
    pub fn tick(&mut self, now: Instant) {
        self.notifications.expire(now);
    }

    /// Falls back to the menu tree when handlers hid the focused region.
    fn normalize_focus(&mut self) {
        if !self.can_focus(self.focus) {
            self.focus = FocusRegion::Menu;
        }
        if self.focus != FocusRegion::UserMenu {
            self.side_menu.user_menu_open = false;
        }
    }

    fn can_focus(&self, region: FocusRegion) -> bool {
        match region {
            FocusRegion::Menu => true,
            FocusRegion::UserMenu => self.menu.is_user_menu_visible(),
            FocusRegion::Content => self.content.button_count() > 0,
        }
    }
}
