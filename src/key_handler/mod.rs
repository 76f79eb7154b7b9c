mod action;

pub use action::handle_key_event;
pub use action::next_event;

use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

const X: KeyModifiers = KeyModifiers::NONE;
const S: KeyModifiers = KeyModifiers::SHIFT;
const C: KeyModifiers = KeyModifiers::CONTROL;

const SCROLL_MID: usize = 5;
const SCROLL_XTRA: usize = 20;

#[derive(PartialEq, Eq)]
pub enum Action {
    // Transport
    TogglePause,
    Stop,
    SkipForward(u64),
    SkipBack(u64),
    SeekPercent(u8),

    // Screens & popups
    OpenAudiobookPicker,
    OpenDocumentPicker,
    OpenReader,
    OpenPlayer,
    ClosePopup,

    // Picker
    PickerScroll(Director),
    PickerSelect,
    PickerAscend,
    PickerToggleHidden,
    PickerPathEntry,
    PickerPathConfirm,
    PickerInput(KeyEvent),

    // Reader
    ReaderScroll(Director),

    // Errors, convenience & other
    SoftReset,
    QUIT,
}

#[derive(PartialEq, Eq, Copy, Clone)]
pub enum Director {
    Up(usize),
    Down(usize),
    Top,
    Bottom,
}

pub enum InputContext {
    Player,
    Reader,
    Picker,
    PathEntry,
    ErrorPopup,
}
