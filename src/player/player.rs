use super::{PlaybackState, PlayerState, position};
use crate::{DurationStyle, domain::Track, get_readable_duration};
use anyhow::{Error, Result, anyhow};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

pub struct Player {
    sink: Sink,
    pub(crate) shared_state: Arc<Mutex<PlayerState>>,
    last_refresh: Instant,
    _stream: OutputStream,
}

impl Player {
    pub(crate) fn new(shared_state: Arc<Mutex<PlayerState>>) -> Self {
        let _stream = OutputStreamBuilder::open_default_stream().expect("Cannot open stream");
        let sink = Sink::connect_new(_stream.mixer());
        Player {
            sink,
            shared_state,
            last_refresh: Instant::now(),
            _stream,
        }
    }

    /// Open a track through the decoder and leave it pre-buffered but
    /// paused. The running session is only replaced once the decoder
    /// has accepted the file, so a failed load keeps whatever was
    /// playing before.
    pub(crate) fn load_track(&mut self, track: &Arc<Track>) -> Result<()> {
        let file = std::fs::File::open(&track.path)?;
        let source = Decoder::try_from(file)?;

        self.sink.clear();
        self.sink.append(source);

        let mut state = self
            .shared_state
            .lock()
            .expect("Poisoned playback state lock");
        state.track = Some(Arc::clone(track));
        state.state = PlaybackState::Paused;
        state.player_error = None;
        state.duration_display = get_readable_duration(track.duration, DurationStyle::Compact);
        Self::set_elapsed(&mut state, Duration::ZERO);

        Ok(())
    }

    /// No track, no-op. Otherwise pause when playing, resume when
    /// paused; resuming after the track ran out restarts it from the
    /// beginning.
    pub(crate) fn toggle_playback(&mut self) -> Result<()> {
        let mut state = self
            .shared_state
            .lock()
            .expect("Poisoned playback state lock");

        if !state.has_track() {
            return Ok(());
        }

        match state.state {
            PlaybackState::Playing => {
                self.sink.pause();
                state.state = PlaybackState::Paused;
            }
            _ => {
                if self.sink.empty() {
                    self.reload_source(&state)?;
                    Self::set_elapsed(&mut state, Duration::ZERO);
                }
                self.sink.play();
                state.state = PlaybackState::Playing;
                self.last_refresh = Instant::now();
            }
        }

        Ok(())
    }

    pub(crate) fn skip_forward(&mut self, secs: u64) -> Result<()> {
        let mut state = self
            .shared_state
            .lock()
            .expect("Poisoned playback state lock");
        if !state.has_track() {
            return Ok(());
        }

        let target = position::skip_target(self.current_pos(&state), secs, state.total());
        self.seek_session(&mut state, target)
    }

    pub(crate) fn skip_back(&mut self, secs: u64) -> Result<()> {
        let mut state = self
            .shared_state
            .lock()
            .expect("Poisoned playback state lock");
        if !state.has_track() {
            return Ok(());
        }

        let target = position::rewind_target(self.current_pos(&state), secs);
        self.seek_session(&mut state, target)
    }

    pub(crate) fn seek_to(&mut self, target: Duration) -> Result<()> {
        let mut state = self
            .shared_state
            .lock()
            .expect("Poisoned playback state lock");
        if !state.has_track() {
            return Ok(());
        }

        let target = position::clamp_seek(target, state.total());
        self.seek_session(&mut state, target)
    }

    pub(crate) fn stop(&mut self) {
        self.sink.stop();

        let mut state = self
            .shared_state
            .lock()
            .expect("Poisoned playback state lock");
        state.track = None;
        state.state = PlaybackState::Stopped;
        state.elapsed = Duration::default();
        state.last_elapsed_secs = 0;
        state.elapsed_display.clear();
        state.duration_display.clear();
    }

    /// The once-per-second position poll. Runs only while playing;
    /// pause and teardown leave the last published elapsed untouched.
    pub(crate) fn update_elapsed(&mut self) {
        if self.last_refresh.elapsed() < super::POLL_INTERVAL {
            return;
        }

        if let Ok(mut state) = self.shared_state.lock() {
            if state.state == PlaybackState::Playing {
                self.last_refresh = Instant::now();
                let new_elapsed = self.sink.get_pos();
                state.elapsed = new_elapsed;

                let secs = new_elapsed.as_secs();
                if secs != state.last_elapsed_secs {
                    state.last_elapsed_secs = secs;
                    state.elapsed_display =
                        get_readable_duration(new_elapsed, DurationStyle::Compact);
                }
            }
        }
    }

    /// The engine drains when a track plays to its end. The session
    /// stays loaded: elapsed pins to the total and playback pauses, so
    /// the next toggle starts the book over.
    pub(crate) fn finish_if_drained(&mut self) {
        if let Ok(mut state) = self.shared_state.lock() {
            if state.state == PlaybackState::Playing && self.sink.empty() {
                let total = state.total();
                Self::set_elapsed(&mut state, total);
                state.state = PlaybackState::Paused;
            }
        }
    }

    pub(crate) fn record_error(&self, e: Error) {
        if let Ok(mut state) = self.shared_state.lock() {
            state.player_error = Some(e);
        }
    }

    fn seek_session(&self, state: &mut PlayerState, target: Duration) -> Result<()> {
        let total = state.total();

        // Seeking onto the very end is the same as draining: park the
        // session at the total rather than asking the decoder for a
        // position it cannot produce.
        if target >= total && !total.is_zero() {
            self.sink.clear();
            state.state = PlaybackState::Paused;
            Self::set_elapsed(state, total);
            return Ok(());
        }

        if self.sink.empty() {
            self.reload_source(state)?;
        }

        self.sink
            .try_seek(target)
            .map_err(|e| anyhow!("Seek failed: {e}"))?;
        Self::set_elapsed(state, self.sink.get_pos());

        Ok(())
    }

    /// Re-arm the sink with the loaded track after it drained or was
    /// parked at the end. Leaves the sink paused unless playback is
    /// active.
    fn reload_source(&self, state: &PlayerState) -> Result<()> {
        let track = state
            .track
            .as_ref()
            .ok_or_else(|| anyhow!("No audiobook loaded"))?;

        let file = std::fs::File::open(&track.path)?;
        self.sink.append(Decoder::try_from(file)?);

        if state.state != PlaybackState::Playing {
            self.sink.pause();
        }

        Ok(())
    }

    /// Engine position when the engine still holds the source; the
    /// last published position once it has drained.
    fn current_pos(&self, state: &PlayerState) -> Duration {
        match self.sink.empty() {
            true => state.elapsed,
            false => self.sink.get_pos(),
        }
    }

    // Skips and seeks publish immediately instead of waiting for the
    // next poll tick.
    fn set_elapsed(state: &mut PlayerState, elapsed: Duration) {
        state.elapsed = elapsed;
        state.last_elapsed_secs = elapsed.as_secs();
        state.elapsed_display = get_readable_duration(elapsed, DurationStyle::Compact);
    }
}
