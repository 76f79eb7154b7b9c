use crate::{REFRESH_RATE, key_handler::*, ui_state::UiState};
use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

use KeyCode::*;

pub fn handle_key_event(key_event: KeyEvent, state: &UiState) -> Option<Action> {
    if let Some(action) = global_commands(&key_event) {
        return Some(action);
    }

    match state.get_input_context() {
        InputContext::Player => handle_player_screen(&key_event, state),
        InputContext::Reader => handle_reader_screen(&key_event),
        InputContext::Picker => handle_picker(&key_event),
        InputContext::PathEntry => handle_path_entry(key_event),
        InputContext::ErrorPopup => handle_error_popup(&key_event),
    }
}

// Works on every screen, even while a popup is up.
fn global_commands(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (C, Char('c')) => Some(Action::QUIT),
        (X, Esc) => Some(Action::SoftReset),
        (C, Char(' ')) => Some(Action::TogglePause),
        _ => None,
    }
}

fn handle_player_screen(key: &KeyEvent, state: &UiState) -> Option<Action> {
    match (key.modifiers, key.code) {
        // TRANSPORT
        (X, Char(' ')) => Some(Action::TogglePause),
        (C, Char('s')) => Some(Action::Stop),

        (X, Right) | (X, Char('l')) => Some(Action::SkipForward(state.skip_secs())),
        (X, Left) | (X, Char('h')) => Some(Action::SkipBack(state.skip_secs())),
        (S, Right) | (S, Char('L')) => Some(Action::SkipForward(state.skip_secs_large())),
        (S, Left) | (S, Char('H')) => Some(Action::SkipBack(state.skip_secs_large())),

        // Scrub straight to a tenth of the book.
        (X, Char(c @ '0'..='9')) => Some(Action::SeekPercent(c.to_digit(10)? as u8 * 10)),

        // NAVIGATION
        (X, Char('o')) => Some(Action::OpenAudiobookPicker),
        (X, Char('d')) => Some(Action::OpenDocumentPicker),
        (X, Char('r')) | (X, Tab) => Some(Action::OpenReader),
        (X, Char('q')) => Some(Action::QUIT),

        _ => None,
    }
}

fn handle_reader_screen(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        // The audiobook keeps playing under the reader.
        (X, Char(' ')) => Some(Action::TogglePause),

        // SCROLLING
        (X, Down) | (X, Char('j')) => Some(Action::ReaderScroll(Director::Down(1))),
        (X, Up) | (X, Char('k')) => Some(Action::ReaderScroll(Director::Up(1))),
        (X, Char('d')) => Some(Action::ReaderScroll(Director::Down(SCROLL_MID))),
        (X, Char('u')) => Some(Action::ReaderScroll(Director::Up(SCROLL_MID))),
        (S, Char('D')) => Some(Action::ReaderScroll(Director::Down(SCROLL_XTRA))),
        (S, Char('U')) => Some(Action::ReaderScroll(Director::Up(SCROLL_XTRA))),
        (X, Char('g')) => Some(Action::ReaderScroll(Director::Top)),
        (S, Char('G')) => Some(Action::ReaderScroll(Director::Bottom)),

        (X, Char('o')) => Some(Action::OpenDocumentPicker),
        (X, Char('r')) | (X, Tab) => Some(Action::OpenPlayer),
        (X, Char('q')) => Some(Action::QUIT),

        _ => None,
    }
}

fn handle_picker(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Down) | (X, Char('j')) => Some(Action::PickerScroll(Director::Down(1))),
        (X, Up) | (X, Char('k')) => Some(Action::PickerScroll(Director::Up(1))),
        (X, Char('d')) => Some(Action::PickerScroll(Director::Down(SCROLL_MID))),
        (X, Char('u')) => Some(Action::PickerScroll(Director::Up(SCROLL_MID))),
        (X, Char('g')) => Some(Action::PickerScroll(Director::Top)),
        (S, Char('G')) => Some(Action::PickerScroll(Director::Bottom)),

        (X, Enter) | (X, Char('l')) => Some(Action::PickerSelect),
        (X, Backspace) | (X, Char('h')) | (X, Char('-')) => Some(Action::PickerAscend),
        (X, Char('.')) => Some(Action::PickerToggleHidden),
        (X, Char('/')) => Some(Action::PickerPathEntry),

        _ => None,
    }
}

fn handle_path_entry(key: KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Enter) => Some(Action::PickerPathConfirm),
        _ => Some(Action::PickerInput(key)),
    }
}

fn handle_error_popup(key: &KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (X, Enter) => Some(Action::ClosePopup),
        _ => None,
    }
}

pub fn next_event() -> Result<Option<Event>> {
    match event::poll(Duration::from_millis(REFRESH_RATE))? {
        true => Ok(Some(event::read()?)),
        false => Ok(None),
    }
}
