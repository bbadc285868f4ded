use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    prelude::*,
    style::Style,
    widgets::Paragraph,
};

use super::components::{Component, ContentComponent, HintBarComponent, SideMenuComponent};
use super::layout::MainLayout;
use crate::app::{App, Effect, FocusRegion};

/// Root component: owns the side menu, content and status components and
/// routes input between them.
#[derive(Debug, Default)]
pub struct MainView {
    pub side_menu_view: SideMenuComponent,
    pub content_view: ContentComponent,
    pub hint_bar_view: HintBarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    fn toggle_user_menu(app: &mut App) {
        if !app.menu.is_user_menu_visible() {
            return;
        }
        let open = !app.side_menu.user_menu_open;
        app.side_menu.user_menu_open = open;
        app.focus = if open { FocusRegion::UserMenu } else { FocusRegion::Menu };
        app.dirty.mark();
    }

    /// Hints of the focused component as owned spans.
    fn focused_hints(&self, app: &App) -> Vec<Span<'static>> {
        let spans = match app.focus {
            FocusRegion::Menu | FocusRegion::UserMenu => self.side_menu_view.get_hint_spans(app),
            FocusRegion::Content => self.content_view.get_hint_spans(app),
        };
        spans
            .into_iter()
            .map(|span| Span::styled(span.content.into_owned(), span.style))
            .collect()
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Effect::Quit];
        }
        match key.code {
            KeyCode::Char('q') => return vec![Effect::Quit],
            KeyCode::Tab => {
                app.cycle_focus(true);
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.cycle_focus(false);
                return Vec::new();
            }
            KeyCode::Char('m') => return vec![Effect::ToggleMenu],
            KeyCode::Char('u') => {
                Self::toggle_user_menu(app);
                return Vec::new();
            }
            _ => {}
        }

        app.dirty.mark();
        match app.focus {
            FocusRegion::Menu | FocusRegion::UserMenu => self.side_menu_view.handle_key_events(app, key),
            FocusRegion::Content => self.content_view.handle_key_events(app, key),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        effects.extend(self.side_menu_view.handle_mouse_events(app, mouse));
        effects.extend(self.content_view.handle_mouse_events(app, mouse));
        if !effects.is_empty() {
            app.dirty.mark();
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the entire background with the theme's background color for consistency
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let areas = MainLayout::responsive_layout(area, app);

        if !areas.menu.is_empty() {
            self.side_menu_view.render(frame, areas.menu, app);
        } else {
            app.side_menu.last_area = Rect::default();
        }
        if !areas.content.is_empty() {
            self.content_view.render(frame, areas.content, app);
        } else {
            app.content_view.last_area = Rect::default();
        }

        let hints = self.focused_hints(app);
        self.hint_bar_view.set_hints(hints);
        self.hint_bar_view.render(frame, areas.status, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        self.focused_hints(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentBlock;
    use crate::ui::theme::DraculaTheme;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(Box::new(DraculaTheme::new()))
    }

    #[test]
    fn global_keys_are_handled_before_components() {
        let mut app = app();
        let mut view = MainView::new();
        assert!(matches!(
            view.handle_key_events(&mut app, KeyEvent::from(KeyCode::Char('q'))).as_slice(),
            [Effect::Quit]
        ));
        assert!(matches!(
            view.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .as_slice(),
            [Effect::Quit]
        ));

        view.handle_key_events(&mut app, KeyEvent::from(KeyCode::Char('u')));
        assert_eq!(app.focus, FocusRegion::UserMenu);
        assert!(app.side_menu.user_menu_open);
        view.handle_key_events(&mut app, KeyEvent::from(KeyCode::Char('u')));
        assert_eq!(app.focus, FocusRegion::Menu);
    }

    #[test]
    fn user_toggle_ignored_when_header_hidden() {
        let mut app = app();
        app.menu.set_user_menu_visible(false);
        MainView::new().handle_key_events(&mut app, KeyEvent::from(KeyCode::Char('u')));
        assert_eq!(app.focus, FocusRegion::Menu);
        assert!(!app.side_menu.user_menu_open);
    }

    #[test]
    fn keys_reach_the_focused_content() {
        let mut app = app();
        app.content.add_component(ContentBlock::button("A", || {}));
        app.content.add_component(ContentBlock::button("B", || {}));
        let mut view = MainView::new();
        view.handle_key_events(&mut app, KeyEvent::from(KeyCode::Tab));
        view.handle_key_events(&mut app, KeyEvent::from(KeyCode::Tab));
        assert_eq!(app.focus, FocusRegion::Content);

        view.handle_key_events(&mut app, KeyEvent::from(KeyCode::Down));
        assert_eq!(app.content_view.selected_button, 1);
    }

    #[test]
    fn renders_menu_content_and_status() {
        let mut app = app();
        app.menu.set_menu_caption("SideMenu Add-on");
        app.menu.add_menu_item("Home", None).expect("add root");
        app.content.set_content(ContentBlock::label("Hello from content"));
        let mut view = MainView::new();

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("terminal");
        terminal
            .draw(|frame| view.render(frame, frame.area(), &mut app))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        let screen: String = (0..20u16)
            .flat_map(|y| (0..100u16).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();

        assert!(screen.contains("SideMenu Add-on"));
        assert!(screen.contains("Home"));
        assert!(screen.contains("Hello from content"));
        assert!(screen.contains("Hints:"));
    }
}
