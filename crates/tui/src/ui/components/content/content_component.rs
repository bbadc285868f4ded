use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Effect, FocusRegion};
use crate::content::ContentBlock;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::theme_helpers as th;

const BUTTON_HEIGHT: u16 = 3;
const BUTTON_PADDING: u16 = 4;

/// Renders the blocks of the content area and lets the user press buttons.
#[derive(Debug, Default)]
pub struct ContentComponent;

impl ContentComponent {
    pub fn new() -> Self {
        Self
    }

    fn press(app: &App, index: usize) -> Vec<Effect> {
        app.content
            .button_handler(index)
            .map(|handler| vec![Effect::PressButton(handler)])
            .unwrap_or_default()
    }
}

impl Component for ContentComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let button_count = app.content.button_count();
        match key.code {
            KeyCode::Down | KeyCode::Right => app.content_view.cycle(true, button_count),
            KeyCode::Up | KeyCode::Left => app.content_view.cycle(false, button_count),
            KeyCode::Enter | KeyCode::Char(' ') => return Self::press(app, app.content_view.selected_button),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let state = &app.content_view;
        let Some(index) = find_target_index_by_mouse_position(&state.last_area, &state.button_areas, mouse.column, mouse.row)
        else {
            return Vec::new();
        };
        app.content_view.selected_button = index;
        app.focus = FocusRegion::Content;
        Self::press(app, index)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let blocks = app.content.blocks();
        app.content_view.clamp(app.content.button_count());

        let theme = &*app.theme;
        let focused = app.focus == FocusRegion::Content;
        let block = th::block(theme, None, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let bottom = inner.y + inner.height;
        let mut cursor = inner.y;
        let mut button_areas = Vec::new();
        for content_block in &blocks {
            if cursor >= bottom {
                break;
            }
            match content_block {
                ContentBlock::Label(text) => {
                    let line_area = Rect::new(inner.x, cursor, inner.width, 1);
                    let paragraph = Paragraph::new(Line::from(Span::styled(text.as_str(), theme.text_primary_style())))
                        .wrap(Wrap { trim: true });
                    frame.render_widget(paragraph, line_area);
                    cursor += 1;
                }
                ContentBlock::Button { caption, .. } => {
                    let width = (caption.width() as u16 + BUTTON_PADDING).min(inner.width);
                    let height = BUTTON_HEIGHT.min(bottom - cursor);
                    let button_area = Rect::new(inner.x, cursor, width, height);
                    let selected = focused && button_areas.len() == app.content_view.selected_button;
                    th::render_button(frame, button_area, caption, focused, selected, theme);
                    button_areas.push(button_area);
                    cursor += height;
                }
            }
        }

        app.content_view.last_area = area;
        app.content_view.button_areas = button_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.theme, &[(" Enter", " Press button"), (" ↑/↓", " Next button")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;
    use ratatui::{Terminal, backend::TestBackend};
    use std::cell::Cell;
    use std::rc::Rc;

    fn app() -> App {
        App::new(Box::new(DraculaTheme::new()))
    }

    fn draw(app: &mut App, component: &mut ContentComponent) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 14)).expect("terminal");
        terminal
            .draw(|frame| component.render(frame, frame.area(), app))
            .expect("draw");
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_labels_and_buttons() {
        let mut app = app();
        app.content.add_component(ContentBlock::label("Welcome"));
        app.content.add_component(ContentBlock::button("Add", || {}));
        app.content.add_component(ContentBlock::button("Remove", || {}));

        let screen = draw(&mut app, &mut ContentComponent::new());

        assert!(screen.contains("Welcome"));
        assert!(screen.contains("Add"));
        assert!(screen.contains("Remove"));
        assert_eq!(app.content_view.button_areas.len(), 2);
        assert_eq!(app.content_view.button_areas[1].y, app.content_view.button_areas[0].y + BUTTON_HEIGHT);
    }

    #[test]
    fn enter_presses_the_selected_button() {
        let mut app = app();
        let presses = Rc::new(Cell::new(0));
        let counter = presses.clone();
        app.content.add_component(ContentBlock::button("First", || {}));
        app.content
            .add_component(ContentBlock::button("Second", move || counter.set(counter.get() + 1)));
        app.focus = FocusRegion::Content;

        let mut component = ContentComponent::new();
        component.handle_key_events(&mut app, KeyEvent::from(KeyCode::Down));
        let effects = component.handle_key_events(&mut app, KeyEvent::from(KeyCode::Enter));
        app.apply_effects(effects);

        assert_eq!(presses.get(), 1);
    }

    #[test]
    fn clicking_a_button_focuses_content() {
        let mut app = app();
        let presses = Rc::new(Cell::new(0));
        let counter = presses.clone();
        app.content.add_component(ContentBlock::label("Pick one"));
        app.content
            .add_component(ContentBlock::button("Only", move || counter.set(counter.get() + 1)));
        let mut component = ContentComponent::new();
        draw(&mut app, &mut component);

        let button = app.content_view.button_areas[0];
        let effects = component.handle_mouse_events(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: button.x + 1,
                row: button.y + 1,
                modifiers: crossterm::event::KeyModifiers::NONE,
            },
        );
        app.apply_effects(effects);

        assert_eq!(app.focus, FocusRegion::Content);
        assert_eq!(presses.get(), 1);
    }
}
