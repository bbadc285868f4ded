//! # Side menu terminal front-end
//!
//! This library renders a [`sidemenu::SideMenu`] in a terminal using the
//! Ratatui framework and runs the demo menu on top of it.
//!
//! ## Key Features
//!
//! - Side menu column with caption, user drop-down and an indented tree
//! - Content area that menu handlers replace or extend
//! - Status line with notifications and key hints
//! - Keyboard and mouse navigation
//! - Dracula and Nord themes
//!
//! ## Architecture
//!
//! The menu model, the content area and the notifications are shared,
//! single-threaded handles. Components translate input into `Effect`s; the
//! application applies them once routing is over, which lets menu handlers
//! add, rename or remove entries freely. Every change marks a shared dirty
//! flag and the runtime redraws only then.

pub mod app;
pub mod content;
pub mod demo;
pub mod navigator;
pub mod notifications;
pub mod ui;
pub mod view;

use anyhow::Result;

pub use app::{App, Effect, FocusRegion};
pub use content::{ContentArea, ContentBlock};
pub use demo::{DemoOptions, build_demo, outline};
pub use navigator::ViewNavigator;
pub use notifications::{Notification, NotificationKind, Notifications};
pub use view::{DirtyFlag, DirtyFlagView};

/// Runs the demo menu in the terminal until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or restored, or when
/// the demo menu cannot be built.
pub async fn run(options: DemoOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
