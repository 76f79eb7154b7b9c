use crate::ui_state::UiState;
use ratatui::{
    layout::Alignment,
    style::{Style, Stylize},
    text::{Line, Text},
    widgets::{Block, BorderType, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};

pub struct ReaderPage;
impl StatefulWidget for ReaderPage {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let theme = &state.theme;
        let Some(document) = &state.document else {
            return;
        };

        let position = format!(" {}/{} ", document.scroll() + 1, document.line_count().max(1));

        let block = Block::bordered()
            .title(format!(" {} ", document.title))
            .title_alignment(Alignment::Center)
            .title_bottom(" [j/k] scroll ✧ [g/G] top/bottom ✧ [r] player ✧ [o] open ")
            .title_bottom(Line::from(position).right_aligned())
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(theme.border))
            .padding(Padding::horizontal(2));

        let inner = block.inner(area);
        block.render(area, buf);

        let text = Text::from_iter(document.lines().iter().map(|line| Line::from(line.as_str())));
        let scroll = document.scroll().min(u16::MAX as usize) as u16;

        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .fg(theme.text)
            .render(inner, buf);
    }
}
