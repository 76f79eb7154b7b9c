use crate::{
    picker::PickTarget,
    tui::widgets::{POPUP_PADDING, SELECTOR},
    ui_state::{PopupType, UiState},
};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::{
        Block, BorderType, HighlightSpacing, List, Paragraph, StatefulWidget, Widget, Wrap,
    },
};

pub struct PickerPopup;
impl StatefulWidget for PickerPopup {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let entering_path = state.popup.current == PopupType::PathEntry;

        let title = match state.picker.target() {
            PickTarget::Audiobook => " Pick an audiobook ",
            PickTarget::Document => " Pick a document ",
        };
        let help = match entering_path {
            true => " [Enter] go / [Esc] cancel ",
            false => " [Enter] select / [bksp] up / [.] hidden / [/] path / [Esc] cancel ",
        };

        let block = Block::bordered()
            .title(title)
            .title_bottom(help)
            .title_alignment(Alignment::Center)
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(state.theme.border))
            .bg(state.theme.bg)
            .padding(POPUP_PADDING);

        let inner = block.inner(area);
        block.render(area, buf);

        let [location, entry_line, listing] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(if entering_path { 2 } else { 0 }),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Line::from(state.picker.cwd().to_string_lossy().into_owned())
            .fg(state.theme.text_faded)
            .render(location, buf);

        if entering_path {
            state.popup.input.render(entry_line, buf);
        }

        if state.picker.entries.is_empty() {
            let empty_msg = format!("No {}s in this directory.", state.picker.target().noun());
            Paragraph::new(empty_msg)
                .wrap(Wrap { trim: true })
                .fg(state.theme.text_faded)
                .centered()
                .render(listing, buf);
            return;
        }

        let items: Vec<Line> = state
            .picker
            .entries
            .iter()
            .map(|entry| match entry.is_dir {
                true => Line::from(format!("{}/", entry.name)).fg(state.theme.highlight),
                false => Line::from(entry.name.clone()).fg(state.theme.text),
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::new().fg(state.theme.bg).bg(state.theme.highlight))
            .highlight_symbol(SELECTOR)
            .highlight_spacing(HighlightSpacing::Always);

        StatefulWidget::render(list, listing, buf, &mut state.picker.selection);
    }
}
