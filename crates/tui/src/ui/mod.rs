//! UI rendering module for the TUI application.
//!
//! This module provides the components, layout, theming and the event loop
//! that draw a side menu next to its content area.

pub mod components;
pub mod layout;
pub mod main_component;
pub mod runtime;
pub mod theme;
