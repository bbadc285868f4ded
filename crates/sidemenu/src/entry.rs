//! Menu entries: the data behind every row of the side menu.
//!
//! A [`MenuEntry`] is a shared, mutable record (label, icon, click handler).
//! Cloning an entry yields another reference to the same record, and two
//! entries compare equal only when they are the same record, regardless of
//! their text.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Callback executed when a menu entry is clicked or selected.
pub type MenuClickHandler = Rc<dyn Fn()>;

/// Wraps a closure into the optional handler shape accepted by the menu API.
///
/// ```ignore
/// menu.add_menu_item("Settings", click_handler(|| println!("clicked")))?;
/// ```
pub fn click_handler(handler: impl Fn() + 'static) -> Option<MenuClickHandler> {
    Some(Rc::new(handler))
}

/// Process-unique identity of a [`MenuEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    fn next() -> Self {
        Self(NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value, mostly useful for logging.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Image reference shown next to a menu label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Icon {
    /// A short symbol rendered inline with the label (e.g. "⚙").
    Glyph(String),
    /// A named image resource (e.g. "images/penguin.png").
    Resource(String),
}

impl Icon {
    pub fn glyph(symbol: impl Into<String>) -> Self {
        Self::Glyph(symbol.into())
    }

    pub fn resource(name: impl Into<String>) -> Self {
        Self::Resource(name.into())
    }

    /// Text used by front-ends that cannot display images.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Glyph(symbol) => symbol,
            Self::Resource(name) => name,
        }
    }
}

struct EntryData {
    text: String,
    icon: Option<Icon>,
    click_handler: Option<MenuClickHandler>,
}

/// One node of the navigation tree or one item of the user menu.
#[derive(Clone)]
pub struct MenuEntry {
    id: EntryId,
    data: Rc<RefCell<EntryData>>,
}

impl MenuEntry {
    pub(crate) fn new(text: impl Into<String>, icon: Option<Icon>, click_handler: Option<MenuClickHandler>) -> Self {
        Self {
            id: EntryId::next(),
            data: Rc::new(RefCell::new(EntryData {
                text: text.into(),
                icon,
                click_handler,
            })),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Current label of the entry.
    pub fn text(&self) -> String {
        self.data.borrow().text.clone()
    }

    /// Replaces the label.
    ///
    /// Sibling uniqueness is only checked when an entry is added; renaming an
    /// entry onto the label of one of its siblings is accepted.
    pub fn set_text(&self, text: impl Into<String>) {
        self.data.borrow_mut().text = text.into();
    }

    /// Exact, case-sensitive label comparison.
    pub fn has_text(&self, text: &str) -> bool {
        self.data.borrow().text == text
    }

    pub fn icon(&self) -> Option<Icon> {
        self.data.borrow().icon.clone()
    }

    pub fn set_icon(&self, icon: Option<Icon>) {
        self.data.borrow_mut().icon = icon;
    }

    /// Handler currently bound to the entry. The returned `Rc` is detached from
    /// the entry, so it can be called while the entry is being mutated.
    pub fn click_handler(&self) -> Option<MenuClickHandler> {
        self.data.borrow().click_handler.clone()
    }

    pub fn set_click_handler(&self, click_handler: Option<MenuClickHandler>) {
        self.data.borrow_mut().click_handler = click_handler;
    }

    /// Runs the bound handler, if any. Returns whether a handler ran.
    pub(crate) fn click(&self) -> bool {
        match self.click_handler() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl PartialEq for MenuEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MenuEntry {}

impl std::hash::Hash for MenuEntry {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.borrow();
        f.debug_struct("MenuEntry")
            .field("id", &self.id)
            .field("text", &data.text)
            .field("icon", &data.icon)
            .field("has_click_handler", &data.click_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn entries_with_equal_text_are_distinct() {
        let first = MenuEntry::new("item", None, None);
        let second = MenuEntry::new("item", None, None);
        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }

    #[test]
    fn setters_mutate_every_clone() {
        let entry = MenuEntry::new("before", None, None);
        let alias = entry.clone();
        alias.set_text("after");
        alias.set_icon(Some(Icon::glyph("*")));
        assert_eq!(entry.text(), "after");
        assert!(entry.has_text("after"));
        assert!(!entry.has_text("After"));
        assert_eq!(entry.icon(), Some(Icon::Glyph("*".into())));
    }

    #[test]
    fn click_runs_current_handler() {
        let clicks = Rc::new(Cell::new(0));
        let entry = MenuEntry::new("item", None, None);
        assert!(!entry.click());

        let counter = clicks.clone();
        entry.set_click_handler(click_handler(move || counter.set(counter.get() + 1)));
        assert!(entry.click());
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn icon_serializes_with_kind_tag() {
        let json = serde_json::to_value(Icon::resource("images/logo.png")).expect("serialize icon");
        assert_eq!(json, serde_json::json!({"kind": "resource", "value": "images/logo.png"}));
    }
}
