use crate::{
    player::PlaybackState,
    tui::widgets::{PAUSE_ICON, PLAY_ICON},
    ui_state::UiState,
};
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
    widgets::{StatefulWidget, Widget},
};

pub struct Transport;
impl StatefulWidget for Transport {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;

        let [status_area, hint_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let status = {
            let player_state = state.playback.lock().unwrap();
            match player_state.state {
                PlaybackState::Playing => format!("{PLAY_ICON} playing"),
                PlaybackState::Paused => format!("{PAUSE_ICON} paused"),
                PlaybackState::Stopped => String::new(),
            }
        };

        Line::from(status)
            .fg(theme.highlight)
            .centered()
            .render(status_area, buf);

        let hints = format!(
            " [space] play/pause ✧ [←/→] ±{}s ✧ [0-9] scrub ✧ [o] audiobook ✧ [d] document ✧ [r] reader ✧ [q] quit ",
            state.skip_secs()
        );
        Line::from(hints)
            .fg(theme.text_faded)
            .centered()
            .render(hint_area, buf);
    }
}
