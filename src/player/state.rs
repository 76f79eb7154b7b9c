use crate::domain::Track;
use anyhow::Error;
use std::{sync::Arc, time::Duration};

pub struct PlayerState {
    pub track: Option<Arc<Track>>,
    pub state: PlaybackState,
    pub elapsed: Duration,

    pub last_elapsed_secs: u64,
    pub elapsed_display: String,
    pub duration_display: String,

    pub player_error: Option<Error>,
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState {
            track: None,
            state: PlaybackState::Stopped,
            elapsed: Duration::default(),

            last_elapsed_secs: 0,
            elapsed_display: String::with_capacity(11),
            duration_display: String::with_capacity(11),

            player_error: None,
        }
    }
}

impl PlayerState {
    pub fn has_track(&self) -> bool {
        self.track.is_some()
    }

    /// Total duration of the loaded track; zero when nothing is loaded.
    pub fn total(&self) -> Duration {
        self.track
            .as_ref()
            .map(|t| t.duration)
            .unwrap_or_default()
    }
}

#[derive(PartialEq, Copy, Clone)]
pub enum PlaybackState {
    Playing,
    Paused,
    Stopped,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FileType;
    use std::path::PathBuf;

    #[test]
    fn an_empty_session_reports_a_zero_total() {
        let state = PlayerState::default();
        assert!(!state.has_track());
        assert_eq!(state.total(), Duration::ZERO);
        assert!(state.state == PlaybackState::Stopped);
    }

    #[test]
    fn the_total_is_the_loaded_tracks_duration() {
        let track = Track {
            title: "The Hobbit".into(),
            path: PathBuf::from("/books/hobbit.m4a"),
            duration: Duration::from_secs(11 * 3600),
            format: FileType::M4A,
        };

        let state = PlayerState {
            track: Some(Arc::new(track)),
            ..PlayerState::default()
        };
        assert!(state.has_track());
        assert_eq!(state.total(), Duration::from_secs(11 * 3600));
    }
}
