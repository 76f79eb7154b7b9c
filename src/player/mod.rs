mod controller;
mod player;
mod position;
mod state;

pub use controller::PlayerController;
pub use player::Player;
pub use state::{PlaybackState, PlayerState};

use crate::domain::Track;
use std::{sync::Arc, time::Duration};

/// Elapsed-time refreshes are deliberately coarse; the UI only ever
/// shows whole seconds.
pub(crate) const POLL_INTERVAL: Duration = Duration::from_secs(1);

pub enum PlayerCommand {
    Load(Arc<Track>),
    TogglePlayback,
    SkipForward(u64),
    SkipBack(u64),
    SeekTo(Duration),
    Stop,
    Shutdown,
}
