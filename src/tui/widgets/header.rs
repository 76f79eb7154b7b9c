use crate::ui_state::UiState;
use ratatui::{
    style::Stylize,
    text::Line,
    widgets::{StatefulWidget, Widget},
};

pub struct Header;
impl StatefulWidget for Header {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        Line::from(" hark ")
            .bold()
            .fg(state.theme.highlight)
            .centered()
            .render(area, buf);
    }
}
