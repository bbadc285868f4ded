//! View navigation for navigation menu entries.

use std::cell::RefCell;

use indexmap::IndexMap;
use sidemenu::Navigator;
use tracing::{info, warn};

use crate::content::{ContentArea, ContentBlock};
use crate::notifications::Notifications;

/// [`Navigator`] that swaps the content area to the blocks registered for a
/// navigation state.
#[derive(Debug)]
pub struct ViewNavigator {
    content: ContentArea,
    notifications: Notifications,
    views: RefCell<IndexMap<String, Vec<ContentBlock>>>,
    current_state: RefCell<Option<String>>,
}

impl ViewNavigator {
    pub fn new(content: ContentArea, notifications: Notifications) -> Self {
        Self {
            content,
            notifications,
            views: RefCell::default(),
            current_state: RefCell::default(),
        }
    }

    /// Registers (or replaces) the view displayed for `navigation_state`.
    pub fn add_view(&self, navigation_state: impl Into<String>, blocks: Vec<ContentBlock>) {
        self.views.borrow_mut().insert(navigation_state.into(), blocks);
    }

    pub fn current_state(&self) -> Option<String> {
        self.current_state.borrow().clone()
    }
}

impl Navigator for ViewNavigator {
    fn navigate_to(&self, navigation_state: &str) {
        let blocks = self.views.borrow().get(navigation_state).cloned();
        match blocks {
            Some(blocks) => {
                info!(navigation_state, "switching view");
                self.content.set_blocks(blocks);
                *self.current_state.borrow_mut() = Some(navigation_state.to_string());
            }
            None => {
                warn!(navigation_state, "no view registered for navigation state");
                self.notifications
                    .show_error(format!("No view registered for '{navigation_state}'"));
            }
        }
    }
}
