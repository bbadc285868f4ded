//! Component system for the side menu TUI.
//!
//! Components are self-contained UI elements that handle their own input and
//! rendering while integrating with the application through a consistent
//! interface. They never mutate the menu from inside an input handler;
//! instead they report [`Effect`]s that `App` applies afterwards.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::{App, Effect};

/// A trait representing a UI component with its own state and behavior.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: `handle_key_events()` while the component owns focus,
///    `handle_mouse_events()` for pointer input inside its last rendered area.
/// 2. **Rendering**: `render()` draws the component and records the areas used
///    later for mouse hit testing.
/// 3. **Hints**: `get_hint_spans()` feeds the hint bar while focused.
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    ///
    /// # Returns
    ///
    /// Vector of effects that the application should process
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events targeting this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing and
    /// recording layout used by mouse handling.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while the component is focused.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}

/// Returns the index of the area containing `(x, y)`, provided the point lies
/// inside `container`.
pub fn find_target_index_by_mouse_position(container: &Rect, areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    let inside = |area: &Rect| x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height;
    if !inside(container) {
        return None;
    }
    areas.iter().position(inside)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_testing_respects_container_and_rows() {
        let container = Rect::new(0, 0, 20, 10);
        let rows = vec![Rect::new(1, 1, 18, 1), Rect::new(1, 2, 18, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 2), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 5), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 30, 1), None);
    }
}
