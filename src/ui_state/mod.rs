mod mode;
mod popup;
mod theme;
mod ui_state;

pub use mode::Mode;
pub use popup::{PopupState, PopupType};
pub use theme::Theme;
pub use ui_state::UiState;

fn new_textarea(placeholder: &str) -> tui_textarea::TextArea<'static> {
    let mut input = tui_textarea::TextArea::default();
    input.set_cursor_line_style(ratatui::style::Style::default());
    input.set_placeholder_text(format!(" {placeholder}: "));

    input
}
