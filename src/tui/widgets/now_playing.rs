use crate::ui_state::UiState;
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
    widgets::{StatefulWidget, Widget},
};

pub struct NowPlaying;
impl StatefulWidget for NowPlaying {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;
        let player_state = state.playback.lock().unwrap();

        let [_, title_area, meta_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        match &player_state.track {
            Some(track) => {
                Line::from(track.title.clone())
                    .bold()
                    .fg(theme.text)
                    .centered()
                    .render(title_area, buf);

                Line::from(format!("{} ✧ {}", track.duration_str(), track.format))
                    .fg(theme.text_faded)
                    .centered()
                    .render(meta_area, buf);
            }
            None => {
                Line::from("No audiobook loaded")
                    .fg(theme.text_faded)
                    .centered()
                    .render(title_area, buf);

                Line::from("press 'o' to pick one")
                    .fg(theme.text_faded)
                    .centered()
                    .render(meta_area, buf);
            }
        }
    }
}
