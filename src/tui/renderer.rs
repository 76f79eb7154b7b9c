use super::{
    AppLayout,
    widgets::{ErrorMsg, Header, NowPlaying, PickerPopup, ProgressBar, ReaderPage, Timer, Transport},
};
use crate::{
    UiState,
    ui_state::{Mode, PopupType},
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    widgets::{Block, Clear, StatefulWidget, Widget},
};

pub fn render(f: &mut Frame, state: &mut UiState) {
    Block::new()
        .bg(state.theme.bg)
        .render(f.area(), f.buffer_mut());

    match state.get_mode() {
        Mode::Reader => ReaderPage.render(f.area(), f.buffer_mut(), state),
        _ => {
            let layout = AppLayout::new(f.area());

            Header.render(layout.header, f.buffer_mut(), state);
            NowPlaying.render(layout.now_playing, f.buffer_mut(), state);
            ProgressBar.render(layout.progress, f.buffer_mut(), state);
            Timer.render(layout.timer, f.buffer_mut(), state);
            Transport.render(layout.transport, f.buffer_mut(), state);
        }
    }

    if state.popup.is_open() {
        let popup_rect = match &state.popup.current {
            PopupType::Picker | PopupType::PathEntry => centered_rect(60, 70, f.area()),
            PopupType::Error(_) => centered_rect(40, 30, f.area()),
            _ => centered_rect(30, 30, f.area()),
        };

        Clear.render(popup_rect, f.buffer_mut());
        match &state.popup.current {
            PopupType::Picker | PopupType::PathEntry => {
                PickerPopup.render(popup_rect, f.buffer_mut(), state)
            }
            PopupType::Error(_) => ErrorMsg.render(popup_rect, f.buffer_mut(), state),
            _ => (),
        }
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
