use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};
use sidemenu::{Icon, MenuRow};

use crate::app::{App, Effect, FocusRegion};
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::theme_helpers as th;

const INDENT: &str = "  ";
const IMAGE_MARKER: &str = "▣";

/// Text used for an icon in a terminal: glyphs verbatim, images as a marker.
pub fn icon_text(icon: &Icon) -> &str {
    match icon {
        Icon::Glyph(symbol) => symbol,
        Icon::Resource(_) => IMAGE_MARKER,
    }
}

/// Renders the caption, user menu, toggle and navigation tree of a side menu.
#[derive(Debug, Default)]
pub struct SideMenuComponent;

impl SideMenuComponent {
    pub fn new() -> Self {
        Self
    }

    fn handle_tree_keys(app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let rows = app.menu.rows();
        let state = &mut app.side_menu;
        match key.code {
            KeyCode::Down => state.cycle_row(true, rows.len()),
            KeyCode::Up => state.cycle_row(false, rows.len()),
            KeyCode::Home => state.selected_row = 0,
            KeyCode::End => state.selected_row = rows.len().saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(row) = rows.get(state.selected_row) {
                    return vec![Effect::ActivateEntry(row.entry.clone())];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_user_menu_keys(app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let items = app.menu.user_menu_items();
        let state = &mut app.side_menu;
        match key.code {
            KeyCode::Down => state.cycle_user_item(true, items.len()),
            KeyCode::Up => state.cycle_user_item(false, items.len()),
            KeyCode::Esc => {
                state.user_menu_open = false;
                app.focus = FocusRegion::Menu;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(item) = items.get(state.selected_user_item) {
                    return vec![Effect::SelectRegistration(item.clone())];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn row_line<'a>(app: &App, row: &MenuRow, selected: bool) -> Line<'a> {
        let theme = &*app.theme;
        let mut spans = vec![Span::raw(INDENT.repeat(row.depth))];
        if let Some(icon) = row.entry.icon() {
            spans.push(Span::styled(format!("{} ", icon_text(&icon)), theme.accent_primary_style()));
        }
        spans.push(Span::raw(row.entry.text()));
        let style = if selected {
            theme.selection_style().add_modifier(Modifier::BOLD)
        } else {
            theme.text_primary_style()
        };
        Line::from(spans).style(style)
    }

    fn render_line(frame: &mut Frame, line: Line<'_>, area: Rect) {
        if area.height > 0 {
            frame.render_widget(Paragraph::new(line), area);
        }
    }
}

impl Component for SideMenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match app.focus {
            FocusRegion::Menu => Self::handle_tree_keys(app, key),
            FocusRegion::UserMenu => Self::handle_user_menu_keys(app, key),
            FocusRegion::Content => Vec::new(),
        }
    }

    /// Maps a left click to the row, user item, header or toggle below the pointer.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let (x, y) = (mouse.column, mouse.row);
        let state = &app.side_menu;
        let container = state.last_area;

        if let Some(index) = find_target_index_by_mouse_position(&container, &state.row_areas, x, y) {
            let rows = app.menu.rows();
            app.side_menu.selected_row = index;
            app.focus = FocusRegion::Menu;
            return rows
                .get(index)
                .map(|row| vec![Effect::ActivateEntry(row.entry.clone())])
                .unwrap_or_default();
        }
        if let Some(index) = find_target_index_by_mouse_position(&container, &state.user_item_areas, x, y) {
            let items = app.menu.user_menu_items();
            app.side_menu.selected_user_item = index;
            return items
                .get(index)
                .map(|item| vec![Effect::SelectRegistration(item.clone())])
                .unwrap_or_default();
        }
        if find_target_index_by_mouse_position(&container, &[state.header_area], x, y).is_some() {
            let open = !state.user_menu_open;
            app.side_menu.user_menu_open = open;
            app.focus = if open { FocusRegion::UserMenu } else { FocusRegion::Menu };
            app.dirty.mark();
            return Vec::new();
        }
        if find_target_index_by_mouse_position(&container, &[state.toggle_area], x, y).is_some() {
            return vec![Effect::ToggleMenu];
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let rows = app.menu.rows();
        let user_items = app.menu.user_menu_items();
        let header = app.menu.user_header();
        app.side_menu.clamp(rows.len(), user_items.len());

        let theme = &*app.theme;
        let focused = matches!(app.focus, FocusRegion::Menu | FocusRegion::UserMenu);
        let block = th::block(theme, None, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut cursor = inner.y;
        let bottom = inner.y + inner.height;
        let mut next_line = || {
            if cursor >= bottom {
                return Rect::new(inner.x, bottom, inner.width, 0);
            }
            let line = Rect::new(inner.x, cursor, inner.width, 1);
            cursor += 1;
            line
        };

        if let Some(caption) = app.menu.menu_caption() {
            let mut spans = Vec::new();
            if let Some(logo) = caption.logo.as_ref() {
                spans.push(Span::styled(format!("{} ", icon_text(logo)), theme.accent_primary_style()));
            }
            spans.push(Span::styled(caption.text.clone(), theme.accent_emphasis_style()));
            Self::render_line(frame, Line::from(spans), next_line());
            next_line();
        }

        let mut header_area = Rect::default();
        let mut user_item_areas = Vec::new();
        if header.visible {
            header_area = next_line();
            let arrow = if app.side_menu.user_menu_open { "▴" } else { "▾" };
            let mut spans = Vec::new();
            if let Some(icon) = header.icon.as_ref() {
                spans.push(Span::raw(format!("{} ", icon_text(icon))));
            }
            spans.push(Span::styled(header.name.clone(), theme.text_secondary_style().add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {arrow}"), theme.text_muted_style()));
            let header_style = if app.focus == FocusRegion::UserMenu {
                theme.selection_style()
            } else {
                theme.text_primary_style()
            };
            Self::render_line(frame, Line::from(spans).style(header_style), header_area);

            if app.side_menu.user_menu_open {
                for (index, item) in user_items.iter().enumerate() {
                    let item_area = next_line();
                    let entry = item.entry();
                    let selected = app.focus == FocusRegion::UserMenu && index == app.side_menu.selected_user_item;
                    let mut spans = vec![Span::raw(INDENT)];
                    if let Some(icon) = entry.icon() {
                        spans.push(Span::styled(format!("{} ", icon_text(&icon)), theme.accent_primary_style()));
                    }
                    spans.push(Span::raw(entry.text()));
                    let style = if selected {
                        theme.selection_style()
                    } else {
                        theme.text_primary_style()
                    };
                    Self::render_line(frame, Line::from(spans).style(style), item_area);
                    user_item_areas.push(item_area);
                }
            }
        }

        let toggle_area = next_line();
        Self::render_line(
            frame,
            Line::from(Span::styled("☰ Menu", theme.text_muted_style())),
            toggle_area,
        );
        next_line();

        let mut row_areas = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let row_area = next_line();
            let selected = app.focus == FocusRegion::Menu && index == app.side_menu.selected_row;
            Self::render_line(frame, Self::row_line(app, row, selected), row_area);
            row_areas.push(row_area);
        }

        let state = &mut app.side_menu;
        state.last_area = area;
        state.header_area = header_area;
        state.toggle_area = toggle_area;
        state.row_areas = row_areas;
        state.user_item_areas = user_item_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let hints: &[(&str, &str)] = match app.focus {
            FocusRegion::UserMenu => &[(" Enter", " Run item"), (" ↑/↓", " Navigate"), (" Esc", " Close")],
            _ => &[(" Enter", " Select entry"), (" ↑/↓", " Navigate"), (" u", " User menu")],
        };
        th::build_hint_spans(&*app.theme, hints)
    }
}
