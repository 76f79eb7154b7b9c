use crate::{tui::widgets::DUR_WIDTH, ui_state::UiState};
use ratatui::{
    layout::Rect,
    style::Stylize,
    text::Text,
    widgets::{StatefulWidget, Widget},
};

pub struct Timer;
impl StatefulWidget for Timer {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        if area.width < DUR_WIDTH * 2 + 6 {
            return;
        }

        let theme = &state.theme;
        let player_state = state.playback.lock().unwrap();

        if !player_state.has_track() {
            return;
        }

        let x_pos = area.x + area.width - DUR_WIDTH - 3;

        Text::from(player_state.elapsed_display.as_str())
            .fg(theme.text_faded)
            .left_aligned()
            .render(Rect::new(area.x + 2, area.y, DUR_WIDTH, 1), buf);

        Text::from(player_state.duration_display.as_str())
            .fg(theme.text_faded)
            .right_aligned()
            .render(Rect::new(x_pos, area.y, DUR_WIDTH, 1), buf);
    }
}
