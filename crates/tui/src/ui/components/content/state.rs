use ratatui::layout::Rect;

/// View state of the content area.
#[derive(Debug, Default, Clone)]
pub struct ContentViewState {
    /// Index among the buttons (labels are skipped).
    pub selected_button: usize,
    pub last_area: Rect,
    /// Areas of the rendered buttons, in button order.
    pub button_areas: Vec<Rect>,
}

impl ContentViewState {
    pub fn clamp(&mut self, button_count: usize) {
        self.selected_button = if button_count == 0 {
            0
        } else {
            self.selected_button.min(button_count - 1)
        };
    }

    pub fn cycle(&mut self, forward: bool, button_count: usize) {
        if button_count == 0 {
            self.selected_button = 0;
            return;
        }
        let step = if forward { 1 } else { button_count - 1 };
        self.selected_button = (self.selected_button + step) % button_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_and_clamp_limits() {
        let mut state = ContentViewState::default();
        state.cycle(false, 3);
        assert_eq!(state.selected_button, 2);
        state.cycle(true, 3);
        assert_eq!(state.selected_button, 0);

        state.selected_button = 7;
        state.clamp(2);
        assert_eq!(state.selected_button, 1);
        state.clamp(0);
        assert_eq!(state.selected_button, 0);
    }
}
