//! Content area component.
//!
//! Draws whatever the current view put into the shared
//! [`ContentArea`](crate::content::ContentArea): labels as plain lines and
//! buttons as bordered boxes that can be focused, cycled and pressed.

mod content_component;
mod state;

pub use content_component::ContentComponent;
pub use state::ContentViewState;
