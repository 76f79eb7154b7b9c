use crate::{
    Settings,
    domain::Track,
    import,
    key_handler::{self, Action},
    picker::PickTarget,
    player::PlayerController,
    reader::Document,
    tui,
    ui_state::{Mode, UiState},
};
use anyhow::Result;
use ratatui::crossterm::event::{Event, KeyEventKind};
use std::{path::Path, sync::Arc};

pub struct Hark {
    ui: UiState,
    player: PlayerController,
}

impl Hark {
    pub fn new() -> Self {
        // A broken config file should not keep the app from starting;
        // run on defaults and tell the user.
        let (settings, settings_error) = match Settings::load() {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::default(), Some(e)),
        };

        let player = PlayerController::new();
        let mut ui = UiState::new(settings, player.get_shared_state());

        if let Some(e) = settings_error {
            ui.set_error(e);
        }

        Hark { ui, player }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        // MAIN ROUTINE
        loop {
            self.ui.check_player_error();

            match key_handler::next_event()? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_handler::handle_key_event(key, &self.ui) {
                        if let Err(e) = self.handle_action(action) {
                            self.ui.set_error(e);
                        }
                    }
                }
                _ => (),
            }

            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.get_mode() == Mode::QUIT {
                break;
            }
        }

        self.player.shutdown()?;
        ratatui::restore();

        Ok(())
    }
}

impl Hark {
    #[rustfmt::skip]
    fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Transport
            Action::TogglePause     => self.player.toggle_playback()?,
            Action::Stop            => self.player.stop()?,
            Action::SkipForward(s)  => self.player.skip_forward(s)?,
            Action::SkipBack(s)     => self.player.skip_back(s)?,
            Action::SeekPercent(p)  => self.seek_percent(p)?,

            // Screens & popups
            Action::OpenAudiobookPicker => self.ui.open_picker(PickTarget::Audiobook)?,
            Action::OpenDocumentPicker  => self.ui.open_picker(PickTarget::Document)?,
            Action::OpenReader      => self.ui.show_reader()?,
            Action::OpenPlayer      => self.ui.set_mode(Mode::Player),
            Action::ClosePopup      => self.ui.close_popup(),

            // Picker
            Action::PickerScroll(d)    => self.ui.picker.scroll(d),
            Action::PickerSelect       => self.confirm_pick()?,
            Action::PickerAscend       => self.ui.picker.ascend()?,
            Action::PickerToggleHidden => self.ui.picker.toggle_hidden()?,
            Action::PickerPathEntry    => self.ui.begin_path_entry(),
            Action::PickerPathConfirm  => self.ui.confirm_path_entry()?,
            Action::PickerInput(key)   => { self.ui.popup.input.input(key); }

            // Reader
            Action::ReaderScroll(d) => self.ui.scroll_document(d),

            Action::SoftReset       => self.ui.soft_reset(),
            Action::QUIT            => self.ui.set_mode(Mode::QUIT),
        }
        Ok(())
    }
}

impl Hark {
    /// A resolved pick either descends the browser in place or hands a
    /// file to the right screen.
    fn confirm_pick(&mut self) -> Result<()> {
        let Some(path) = self.ui.picker.enter()? else {
            return Ok(());
        };

        self.ui.close_popup();
        match self.ui.picker.target() {
            PickTarget::Audiobook => self.load_audiobook(&path),
            PickTarget::Document => self.open_document(&path),
        }
    }

    /// The session plays an app-private copy of the picked file, so
    /// the original is released as soon as the copy lands.
    fn load_audiobook(&mut self, source: &Path) -> Result<()> {
        let staged = import::stage_audiobook(source)?;
        let track = Arc::new(Track::load(&staged)?);
        self.player.load(track)
    }

    fn open_document(&mut self, path: &Path) -> Result<()> {
        let document = Document::load(path)?;
        self.ui.open_document(document);
        Ok(())
    }

    fn seek_percent(&mut self, percent: u8) -> Result<()> {
        let total = self.ui.total_duration();
        if total.is_zero() {
            return Ok(());
        }

        self.player
            .seek_to(total.mul_f64(f64::from(percent) / 100.0))
    }
}
