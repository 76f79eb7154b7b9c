use crate::ui_state::new_textarea;
use tui_textarea::TextArea;

#[derive(PartialEq)]
pub enum PopupType {
    None,
    Picker,
    PathEntry,
    Error(String),
}

pub struct PopupState {
    pub current: PopupType,
    pub input: TextArea<'static>,
}

impl PopupState {
    pub(crate) fn new() -> PopupState {
        PopupState {
            current: PopupType::None,
            input: new_textarea("Enter path to directory"),
        }
    }

    pub(super) fn open(&mut self, popup: PopupType) {
        if matches!(popup, PopupType::PathEntry) {
            self.input.select_all();
            self.input.cut();
        }
        self.current = popup
    }

    pub fn is_open(&self) -> bool {
        self.current != PopupType::None
    }

    pub(super) fn close(&mut self) {
        self.current = PopupType::None;
        self.input.select_all();
        self.input.cut();
    }
}
