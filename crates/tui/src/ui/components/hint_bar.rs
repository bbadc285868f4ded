//! Status strip at the bottom of the screen.
//!
//! The first line shows the latest live notification, the second one the key
//! hints of the focused component followed by the global shortcuts.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::notifications::NotificationKind;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct HintBarComponent {
    hints: Vec<Span<'static>>,
}

impl HintBarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the hints of the focused component.
    pub fn set_hints(&mut self, hints: Vec<Span<'static>>) {
        self.hints = hints;
    }
}

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme;
        let [message_area, hints_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(rect);

        if let Some(notification) = app.notifications.current(Instant::now()) {
            let style = match notification.kind {
                NotificationKind::Humanized => theme.status_info(),
                NotificationKind::Tray => theme.text_secondary_style(),
                NotificationKind::Error => theme.status_error(),
            };
            let line = Line::from(vec![
                Span::styled(notification.shown_at.format("%H:%M:%S ").to_string(), theme.text_muted_style()),
                Span::styled(notification.message, style),
            ]);
            frame.render_widget(Paragraph::new(line), message_area);
        }

        let mut spans = vec![Span::styled("Hints: ", theme.text_muted_style())];
        spans.extend(self.hints.iter().cloned());
        spans.extend(th::build_hint_spans(
            theme,
            &[(" Tab", " Next region "), ("m", " Menu "), ("u", " User menu "), ("q", " Quit ")],
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.text_muted_style()), hints_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::NordTheme;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn shows_latest_notification_and_hints() {
        let mut app = App::new(Box::new(NordTheme::new()));
        app.notifications.show_error("Duplicate menu entry. 'x' already exists");
        let mut component = HintBarComponent::new();
        component.set_hints(vec![Span::raw("Enter select")]);

        let mut terminal = Terminal::new(TestBackend::new(100, 2)).expect("terminal");
        terminal
            .draw(|frame| component.render(frame, frame.area(), &mut app))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        let line = |y: u16| (0..100u16).map(|x| buffer[(x, y)].symbol()).collect::<String>();

        assert!(line(0).contains("Duplicate menu entry"));
        assert!(line(1).contains("Enter select"));
        assert!(line(1).contains("Quit"));
    }
}
