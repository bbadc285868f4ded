use ratatui::layout::Rect;

/// View state of the side menu column.
///
/// Selection indices are positions in the flattened tree (`SideMenu::rows`)
/// and in the user drop-down; they are clamped on every render because menu
/// handlers may add or remove entries at any time.
#[derive(Debug, Default, Clone)]
pub struct SideMenuState {
    /// Index of the highlighted tree row.
    pub selected_row: usize,
    /// Index of the highlighted user drop-down item.
    pub selected_user_item: usize,
    /// Whether the user drop-down is expanded.
    pub user_menu_open: bool,
    /// Last rendered area of the whole column; used for mouse hit testing.
    pub last_area: Rect,
    /// Area of the user header line.
    pub header_area: Rect,
    /// Area of the "Menu" toggle line.
    pub toggle_area: Rect,
    /// Per-row areas of the tree, in row order.
    pub row_areas: Vec<Rect>,
    /// Per-item areas of the expanded drop-down.
    pub user_item_areas: Vec<Rect>,
}

impl SideMenuState {
    /// Keeps both selections within the current item counts.
    pub fn clamp(&mut self, row_count: usize, user_item_count: usize) {
        self.selected_row = clamp_index(self.selected_row, row_count);
        self.selected_user_item = clamp_index(self.selected_user_item, user_item_count);
    }

    /// Moves the tree selection, wrapping around at both ends.
    pub fn cycle_row(&mut self, forward: bool, row_count: usize) {
        self.selected_row = cycle_index(self.selected_row, row_count, forward);
    }

    /// Moves the drop-down selection, wrapping around at both ends.
    pub fn cycle_user_item(&mut self, forward: bool, user_item_count: usize) {
        self.selected_user_item = cycle_index(self.selected_user_item, user_item_count, forward);
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index.min(len - 1) }
}

fn cycle_index(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let ordinal = if forward { 1 } else { len - 1 };
    (index + ordinal) % len
}
