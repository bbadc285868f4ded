//! The demo menu shown by the `sidemenu-demo` binary.
//!
//! It exercises the whole registration API: navigation entries, handlers
//! that replace the content, entries that rename or remove themselves, a
//! nested tree that grows and shrinks from content buttons, and the user
//! drop-down.

use std::cell::{Cell, RefCell};
use std::fmt::Write as _;
use std::rc::Rc;

use anyhow::{Context, Result};
use sidemenu::{Icon, MenuEntry, MenuRegistration, Navigator, SideMenu, WeakSideMenu, click_handler};
use sidemenu_util::UserPreferences;
use tracing::{info, warn};

use crate::app::App;
use crate::content::{ContentArea, ContentBlock};
use crate::notifications::Notifications;
use crate::ui::components::side_menu::icon_text;

pub const MENU_CAPTION: &str = "SideMenu Add-on";
pub const LOGO: &str = "images/linux-penguin.png";
pub const DEFAULT_USER_NAME: &str = "Guest";

/// Settings applied when the demo menu is built.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub user_name: String,
    pub show_logo: bool,
    /// Theme name; `None` picks the default.
    pub theme: Option<String>,
    /// Store receiving the logo toggle. Nothing is persisted without one.
    pub preferences: Option<Rc<UserPreferences>>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            show_logo: true,
            theme: None,
            preferences: None,
        }
    }
}

type Slot = Rc<RefCell<Option<MenuRegistration>>>;

/// Fills the menu, views and user drop-down of `app`.
pub fn build_demo(app: &App, options: &DemoOptions) -> Result<()> {
    let menu = app.menu.clone();
    let content = app.content.clone();
    let notifications = app.notifications.clone();

    app.navigator.add_view("", vec![ContentBlock::label("Initial view")]);
    app.navigator.add_view("Foo", vec![ContentBlock::label("Foo!")]);
    // Navigation and plain entries share the menu, so the initial state is entered by hand.
    app.navigator.navigate_to("");

    let logo_visible = Rc::new(Cell::new(options.show_logo));
    set_caption(&menu, logo_visible.get());

    menu.add_navigation("Initial View", "")
        .context("adding the initial view entry")?;
    menu.add_navigation_with_icon("Secondary View", Icon::glyph("✚"), "Foo")
        .context("adding the secondary view entry")?;

    let target = content.clone();
    menu.add_menu_item(
        "My Menu Entry",
        click_handler(move || target.set_content(ContentBlock::label("A layout"))),
    )?;
    let target = content.clone();
    menu.add_menu_item_with_icon(
        "Entry With Icon",
        Icon::glyph("♿"),
        click_handler(move || target.set_content(ContentBlock::label("Another layout"))),
    )?
    .select();

    add_user_menu_toggle(&menu)?;
    add_self_removing_entry(&menu)?;
    init_tree_menu(&menu, &content, &notifications)?;
    set_user(&menu, &notifications, options, logo_visible);

    info!(entries = menu.len(), "demo menu ready");
    Ok(())
}

fn set_caption(menu: &SideMenu, with_logo: bool) {
    if with_logo {
        menu.set_menu_caption_with_logo(MENU_CAPTION, Icon::resource(LOGO));
    } else {
        menu.set_menu_caption(MENU_CAPTION);
    }
}

fn add_user_menu_toggle(menu: &SideMenu) -> Result<()> {
    let toggle = menu.add_menu_item_with_icon("Hide user menu", Icon::glyph("☺"), None)?;
    let handle = toggle.clone();
    let owner = menu.downgrade();
    toggle.menu_entry().set_click_handler(click_handler(move || {
        let Some(owner) = owner.upgrade() else {
            return;
        };
        owner.set_user_menu_visible(!owner.is_user_menu_visible());
        let verb = if owner.is_user_menu_visible() { "Hide" } else { "Show" };
        handle.menu_entry().set_text(format!("{verb} user menu"));
    }));
    Ok(())
}

fn add_self_removing_entry(menu: &SideMenu) -> Result<()> {
    let slot: Slot = Rc::default();
    let target = slot.clone();
    let registration = menu.add_menu_item(
        "Remove this menu item",
        click_handler(move || {
            let registration = target.borrow_mut().take();
            if let Some(registration) = registration {
                registration.remove();
            }
        }),
    )?;
    *slot.borrow_mut() = Some(registration);
    Ok(())
}

fn init_tree_menu(menu: &SideMenu, content: &ContentArea, notifications: &Notifications) -> Result<()> {
    let toast = notifications.clone();
    let parent = menu.add_menu_item("Tree item", click_handler(move || toast.show("Parent!")))?;

    let sub_sub_item: Slot = Rc::default();
    let owner = menu.downgrade();
    let content = content.clone();
    let notifications = notifications.clone();
    let tree_root = parent.clone();
    parent.add_sub_menu(
        "sub item",
        click_handler(move || {
            notifications.show("Sub item!");
            add_tree_buttons(&owner, &content, &notifications, &tree_root, &sub_sub_item);
        }),
    )?;
    Ok(())
}

fn add_tree_buttons(menu: &WeakSideMenu, content: &ContentArea, notifications: &Notifications, parent: &MenuRegistration, slot: &Slot) {
    let (parent, target, toast) = (parent.clone(), slot.clone(), notifications.clone());
    content.add_component(ContentBlock::button("Add sub sub item", move || {
        let sub_menu = if parent.is_removed() { None } else { parent.sub_menu("sub item") };
        let Some(sub_menu) = sub_menu else {
            toast.show_error("Sub menu not available.");
            return;
        };
        let inception = toast.clone();
        match sub_menu.add_sub_menu("sub sub item", click_handler(move || inception.show("Inception!"))) {
            Ok(registration) => *target.borrow_mut() = Some(registration),
            Err(error) => toast.show_error(error.to_string()),
        }
    }));

    let target = slot.clone();
    content.add_component(ContentBlock::button("Select sub sub item", move || {
        let registration = target.borrow().clone();
        if let Some(registration) = registration.filter(|registration| !registration.is_removed()) {
            registration.select();
        }
    }));

    let target = slot.clone();
    content.add_component(ContentBlock::button("Remove sub sub item", move || {
        let registration = target.borrow_mut().take();
        if let Some(registration) = registration.filter(|registration| !registration.is_removed()) {
            registration.remove();
        }
    }));

    let (owner, toast) = (menu.clone(), notifications.clone());
    content.add_component(ContentBlock::button("Clear and re-add a tree menu item", move || {
        let Some(owner) = owner.upgrade() else {
            return;
        };
        owner.clear_menu();
        let reborn = toast.clone();
        if let Err(error) = owner.add_menu_item("Reborn", click_handler(move || reborn.show("Reborn!"))) {
            toast.show_error(error.to_string());
        }
    }));
}

fn set_user(menu: &SideMenu, notifications: &Notifications, options: &DemoOptions, logo_visible: Rc<Cell<bool>>) {
    menu.set_user_name(options.user_name.clone());
    menu.set_user_icon(Some(Icon::glyph("♂")));

    menu.clear_user_menu();
    let toast = notifications.clone();
    menu.add_user_menu_item_with_icon(
        "Settings",
        Icon::glyph("⚙"),
        click_handler(move || toast.show_tray("Showing settings")),
    );
    let toast = notifications.clone();
    menu.add_user_menu_item("Sign out", click_handler(move || toast.show_tray("Logging out..")));

    let logo_item = menu.add_user_menu_item(logo_toggle_label(logo_visible.get()), None);
    let (owner, handle, preferences) = (menu.downgrade(), logo_item.clone(), options.preferences.clone());
    logo_item.menu_entry().set_click_handler(click_handler(move || {
        let Some(owner) = owner.upgrade() else {
            return;
        };
        let visible = !logo_visible.get();
        logo_visible.set(visible);
        set_caption(&owner, visible);
        handle.menu_entry().set_text(logo_toggle_label(visible));
        if let Some(preferences) = preferences.as_ref()
            && let Err(error) = preferences.set_show_logo(visible)
        {
            warn!(error = %error, "failed to persist logo preference");
        }
    }));
}

fn logo_toggle_label(logo_visible: bool) -> &'static str {
    if logo_visible { "Hide logo" } else { "Show logo" }
}

/// Plain text rendering of a menu: caption, tree indented by depth, user menu.
pub fn outline(menu: &SideMenu) -> String {
    let mut text = String::new();
    if let Some(caption) = menu.menu_caption() {
        match caption.logo.as_ref() {
            Some(logo) => {
                let _ = writeln!(text, "{} [{}]", caption.text, logo.as_text());
            }
            None => {
                let _ = writeln!(text, "{}", caption.text);
            }
        }
    }
    for row in menu.rows() {
        let _ = writeln!(text, "{}{}", "  ".repeat(row.depth + 1), entry_label(&row.entry));
    }

    let header = menu.user_header();
    if header.visible {
        let _ = writeln!(text, "User menu ({}):", header.name);
        for item in menu.user_menu_items() {
            let _ = writeln!(text, "  {}", entry_label(item.entry()));
        }
    }
    text
}

fn entry_label(entry: &MenuEntry) -> String {
    match entry.icon() {
        Some(icon) => format!("{} {}", icon_text(&icon), entry.text()),
        None => entry.text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;

    fn demo_app() -> App {
        let app = App::new(Box::new(DraculaTheme::new()));
        build_demo(&app, &DemoOptions::default()).expect("demo builds");
        app
    }

    fn labels(app: &App) -> Vec<String> {
        app.menu.rows().iter().map(|row| row.entry.text()).collect()
    }

    fn root(app: &App, text: &str) -> MenuRegistration {
        app.menu
            .root_items()
            .into_iter()
            .find(|registration| registration.entry().has_text(text))
            .expect("root entry exists")
    }

    fn press(app: &App, caption: &str) {
        let index = app
            .content
            .blocks()
            .iter()
            .filter(|block| block.is_button())
            .position(|block| block.caption() == caption)
            .expect("button exists");
        let handler = app.content.button_handler(index).expect("handler");
        handler();
    }

    #[test]
    fn initial_menu_matches_the_demo() {
        let app = demo_app();
        assert_eq!(
            labels(&app),
            vec![
                "Initial View",
                "Secondary View",
                "My Menu Entry",
                "Entry With Icon",
                "Hide user menu",
                "Remove this menu item",
                "Tree item",
                "sub item",
            ]
        );
        // "Entry With Icon" was selected during setup.
        assert_eq!(app.content.blocks()[0].caption(), "Another layout");
        assert_eq!(app.navigator.current_state().as_deref(), Some(""));
        assert_eq!(app.menu.user_menu_items().len(), 3);
        assert_eq!(app.menu.user_header().name, DEFAULT_USER_NAME);
    }

    #[test]
    fn navigation_entry_switches_views() {
        let app = demo_app();
        root(&app, "Secondary View").select();
        assert_eq!(app.navigator.current_state().as_deref(), Some("Foo"));
        assert_eq!(app.content.blocks()[0].caption(), "Foo!");
    }

    #[test]
    fn user_menu_toggle_renames_itself() {
        let app = demo_app();
        let toggle = root(&app, "Hide user menu");
        toggle.select();
        assert!(!app.menu.is_user_menu_visible());
        assert_eq!(toggle.entry().text(), "Show user menu");
        toggle.select();
        assert!(app.menu.is_user_menu_visible());
        assert_eq!(toggle.entry().text(), "Hide user menu");
    }

    #[test]
    fn self_removing_entry_disappears() {
        let app = demo_app();
        let entry = root(&app, "Remove this menu item");
        entry.select();
        assert!(entry.is_removed());
        assert!(!labels(&app).contains(&"Remove this menu item".to_string()));
    }

    #[test]
    fn tree_buttons_grow_and_shrink_the_tree() {
        let app = demo_app();
        let sub_item = root(&app, "Tree item").sub_menu("sub item").expect("sub item");
        sub_item.select();
        assert_eq!(app.content.button_count(), 4);

        press(&app, "Add sub sub item");
        assert!(labels(&app).contains(&"sub sub item".to_string()));

        press(&app, "Add sub sub item");
        let last = app.notifications.history().pop().expect("notification");
        assert_eq!(last.message, "Duplicate menu entry. 'sub sub item' already exists");

        press(&app, "Select sub sub item");
        let last = app.notifications.history().pop().expect("notification");
        assert_eq!(last.message, "Inception!");

        press(&app, "Remove sub sub item");
        assert!(!labels(&app).contains(&"sub sub item".to_string()));
        press(&app, "Remove sub sub item");
    }

    #[test]
    fn clear_and_re_add_leaves_only_reborn() {
        let app = demo_app();
        root(&app, "Tree item").sub_menu("sub item").expect("sub item").select();
        press(&app, "Clear and re-add a tree menu item");
        assert_eq!(labels(&app), vec!["Reborn"]);

        press(&app, "Add sub sub item");
        let last = app.notifications.history().pop().expect("notification");
        assert_eq!(last.message, "Sub menu not available.");
    }

    #[test]
    fn demo_handlers_do_not_keep_the_menu_alive() {
        let app = demo_app();
        root(&app, "Tree item").sub_menu("sub item").expect("sub item").select();
        let menu = app.menu.downgrade();
        drop(app);
        assert!(menu.upgrade().is_none());
    }

    #[test]
    fn logo_toggle_updates_caption_and_preferences() {
        let app = App::new(Box::new(DraculaTheme::new()));
        let preferences = Rc::new(UserPreferences::ephemeral());
        let options = DemoOptions {
            preferences: Some(preferences.clone()),
            ..DemoOptions::default()
        };
        build_demo(&app, &options).expect("demo builds");

        let logo_item = app
            .menu
            .user_menu_items()
            .into_iter()
            .find(|item| item.entry().has_text("Hide logo"))
            .expect("logo toggle");
        logo_item.select();

        assert!(app.menu.menu_caption().expect("caption").logo.is_none());
        assert!(!preferences.show_logo());
        assert_eq!(logo_item.entry().text(), "Show logo");
    }

    #[test]
    fn outline_lists_tree_and_user_menu() {
        let app = demo_app();
        let text = outline(&app.menu);
        assert!(text.starts_with("SideMenu Add-on [images/linux-penguin.png]\n"));
        assert!(text.contains("\n  Tree item\n    sub item\n"));
        assert!(text.contains("User menu (Guest):\n  ⚙ Settings\n  Sign out\n  Hide logo\n"));
    }
}
