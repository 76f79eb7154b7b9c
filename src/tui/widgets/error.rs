use crate::{tui::widgets::POPUP_PADDING, ui_state::UiState};
use ratatui::{
    layout::Alignment,
    style::{Style, Stylize},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget, Wrap},
};

pub struct ErrorMsg;
impl StatefulWidget for ErrorMsg {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let err_str = state.get_error().unwrap_or("No error to display");

        Paragraph::new(err_str)
            .wrap(Wrap { trim: true })
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::new().fg(state.theme.error))
                    .title(" Something went wrong ")
                    .title_bottom(" Press <Esc> to clear ")
                    .title_alignment(Alignment::Center)
                    .padding(POPUP_PADDING),
            )
            .fg(state.theme.text)
            .bg(state.theme.bg)
            .render(area, buf);
    }
}
