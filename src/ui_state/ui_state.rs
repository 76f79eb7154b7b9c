use super::{Mode, PopupState, PopupType, Theme};
use crate::{
    config::Settings,
    key_handler::{Director, InputContext},
    picker::{FilePicker, PickTarget},
    player::{PlaybackState, PlayerState},
    reader::Document,
};
use anyhow::{Error, Result, anyhow};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

pub struct UiState {
    // Backend modules
    pub playback: Arc<Mutex<PlayerState>>,
    pub(crate) settings: Settings,

    // Screens
    pub picker: FilePicker,
    pub document: Option<Document>,

    // Visual elements
    pub(crate) theme: Theme,
    pub(crate) popup: PopupState,
    mode: Mode,
}

impl UiState {
    pub fn new(settings: Settings, player_state: Arc<Mutex<PlayerState>>) -> Self {
        let picker = FilePicker::new(settings.start_dir());
        UiState {
            playback: player_state,
            settings,
            picker,
            document: None,
            theme: Theme::set_generic_theme(),
            popup: PopupState::new(),
            mode: Mode::default(),
        }
    }
}

impl UiState {
    pub fn get_mode(&self) -> &Mode {
        &self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_error(&mut self, e: Error) {
        self.popup.open(PopupType::Error(e.to_string()));
    }

    pub fn get_error(&self) -> Option<&str> {
        match &self.popup.current {
            PopupType::Error(e) => Some(e.as_str()),
            _ => None,
        }
    }

    /// Pull a failure out of the player thread into the error popup.
    pub fn check_player_error(&mut self) {
        let error = {
            let mut state = self.playback.lock().unwrap();
            state.player_error.take()
        };
        if let Some(e) = error {
            self.set_error(e);
        }
    }

    pub fn soft_reset(&mut self) {
        if self.popup.is_open() {
            self.popup.close();
            return;
        }

        if self.get_mode() == Mode::Reader {
            self.mode = Mode::Player;
        }
    }

    pub fn get_input_context(&self) -> InputContext {
        match &self.popup.current {
            PopupType::Picker => return InputContext::Picker,
            PopupType::PathEntry => return InputContext::PathEntry,
            PopupType::Error(_) => return InputContext::ErrorPopup,
            PopupType::None => (),
        }

        match self.mode {
            Mode::Reader => InputContext::Reader,
            _ => InputContext::Player,
        }
    }
}

// ==========
//   POPUPS
// ==========
impl UiState {
    pub fn open_picker(&mut self, target: PickTarget) -> Result<()> {
        self.picker.open(target)?;
        self.popup.open(PopupType::Picker);
        Ok(())
    }

    pub fn close_popup(&mut self) {
        self.popup.close();
    }

    pub fn begin_path_entry(&mut self) {
        self.popup.open(PopupType::PathEntry);
    }

    /// Hand the typed path to the picker and fall back into browsing.
    /// An empty line is just a cancel.
    pub fn confirm_path_entry(&mut self) -> Result<()> {
        let input = self
            .popup
            .input
            .lines()
            .first()
            .cloned()
            .unwrap_or_default();
        self.popup.open(PopupType::Picker);

        if input.trim().is_empty() {
            return Ok(());
        }
        self.picker.jump_to(&input)
    }
}

// ==========
//   READER
// ==========
impl UiState {
    pub fn open_document(&mut self, document: Document) {
        self.document = Some(document);
        self.mode = Mode::Reader;
    }

    pub fn show_reader(&mut self) -> Result<()> {
        match self.document.is_some() {
            true => {
                self.mode = Mode::Reader;
                Ok(())
            }
            false => Err(anyhow!("No document open. Press 'd' to pick one.")),
        }
    }

    pub fn scroll_document(&mut self, director: Director) {
        if let Some(document) = &mut self.document {
            document.scroll_by(director);
        }
    }
}

// =====================
//   PLAYBACK SNAPSHOT
// =====================
impl UiState {
    pub fn skip_secs(&self) -> u64 {
        self.settings.skip_secs
    }

    pub fn skip_secs_large(&self) -> u64 {
        self.settings.skip_secs_large
    }

    pub fn has_track(&self) -> bool {
        self.playback.lock().unwrap().has_track()
    }

    pub fn is_paused(&self) -> bool {
        self.playback.lock().unwrap().state == PlaybackState::Paused
    }

    pub fn total_duration(&self) -> Duration {
        self.playback.lock().unwrap().total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui() -> UiState {
        UiState::new(
            Settings::default(),
            Arc::new(Mutex::new(PlayerState::default())),
        )
    }

    #[test]
    fn a_fresh_session_has_nothing_loaded() {
        let state = ui();
        assert!(!state.has_track());
        assert!(!state.is_paused());
        assert_eq!(state.total_duration(), Duration::ZERO);
    }

    #[test]
    fn popups_decide_the_input_context() {
        let mut state = ui();
        assert!(matches!(state.get_input_context(), InputContext::Player));

        state.set_error(anyhow!("boom"));
        assert!(matches!(
            state.get_input_context(),
            InputContext::ErrorPopup
        ));
        assert_eq!(state.get_error(), Some("boom"));
    }

    #[test]
    fn soft_reset_closes_the_popup_before_leaving_the_reader() {
        let mut state = ui();
        state.open_document(Document::from_text(
            "notes.pdf".into(),
            "/tmp/notes.pdf".into(),
            "hello",
        ));
        state.set_error(anyhow!("boom"));

        state.soft_reset();
        assert!(!state.popup.is_open());
        assert!(state.get_mode() == &Mode::Reader);

        state.soft_reset();
        assert!(state.get_mode() == &Mode::Player);
    }

    #[test]
    fn the_reader_needs_an_open_document() {
        let mut state = ui();
        assert!(state.show_reader().is_err());
        assert!(state.get_mode() == &Mode::Player);

        state.open_document(Document::from_text(
            "notes.pdf".into(),
            "/tmp/notes.pdf".into(),
            "hello",
        ));
        assert!(state.get_mode() == &Mode::Reader);
    }

    #[test]
    fn transport_steps_come_from_settings() {
        let mut settings = Settings::default();
        settings.skip_secs = 10;
        settings.skip_secs_large = 120;

        let state = UiState::new(settings, Arc::new(Mutex::new(PlayerState::default())));
        assert_eq!(state.skip_secs(), 10);
        assert_eq!(state.skip_secs_large(), 120);
    }

    #[test]
    fn an_empty_path_entry_is_a_cancel() {
        let mut state = ui();
        state.begin_path_entry();
        assert!(matches!(
            state.get_input_context(),
            InputContext::PathEntry
        ));

        state.confirm_path_entry().unwrap();
        assert!(matches!(state.get_input_context(), InputContext::Picker));
    }
}
