mod error;
mod header;
mod now_playing;
mod picker;
mod progress_bar;
mod reader;
mod timer;
mod transport;

pub use error::ErrorMsg;
pub use header::Header;
pub use now_playing::NowPlaying;
pub use picker::PickerPopup;
pub use progress_bar::ProgressBar;
pub use reader::ReaderPage;
pub use timer::Timer;
pub use transport::Transport;

const DUR_WIDTH: u16 = 9;
const PLAY_ICON: &str = "▶";
const PAUSE_ICON: &str = "⏸";
const SELECTOR: &str = "▸ ";

static POPUP_PADDING: ratatui::widgets::Padding = ratatui::widgets::Padding {
    left: 2,
    right: 2,
    top: 1,
    bottom: 1,
};
