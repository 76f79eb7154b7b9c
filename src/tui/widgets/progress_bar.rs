use crate::ui_state::UiState;
use ratatui::{
    style::Stylize,
    widgets::{Block, LineGauge, Padding, StatefulWidget, Widget},
};

pub struct ProgressBar;

impl StatefulWidget for ProgressBar {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;
        let player_state = state.playback.lock().unwrap();

        if !player_state.has_track() {
            return;
        }

        let elapsed = player_state.elapsed.as_secs_f64();
        let duration = player_state.total().as_secs_f64();

        // A parked session can sit exactly on the total; the gauge
        // itself only accepts [0, 1].
        let ratio = match duration > 0.0 {
            true => (elapsed / duration).clamp(0.0, 1.0),
            false => 0.0,
        };

        let gauge = LineGauge::default()
            .block(Block::new().bg(theme.bg).padding(Padding {
                left: 2,
                right: 3,
                top: area.height / 2,
                bottom: 0,
            }))
            .filled_style(theme.progress)
            .unfilled_style(theme.progress_faded)
            .filled_symbol("━")
            .unfilled_symbol("─")
            .label("")
            .ratio(ratio);

        gauge.render(area, buf);
    }
}
