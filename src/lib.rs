use anyhow::{Result, anyhow};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub mod app_core;
pub mod config;
pub mod domain;
pub mod import;
pub mod key_handler;
pub mod picker;
pub mod player;
pub mod reader;
pub mod tui;
pub mod ui_state;

pub use config::Settings;
pub use player::PlayerController;
pub use ui_state::UiState;

// ~30fps
pub const REFRESH_RATE: u64 = 33;

pub enum DurationStyle {
    Clean,
    Compact,
}

/// Audiobooks run long, so both styles grow an hour field once a
/// duration crosses the hour mark.
pub fn get_readable_duration(duration: Duration, style: DurationStyle) -> String {
    let mut secs = duration.as_secs();
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    secs %= 60;

    match style {
        DurationStyle::Clean => match (hours, mins) {
            (0, 0) => format!("{secs:02}s"),
            (0, _) => format!("{mins}m {secs:02}s"),
            _ => format!("{hours}h {mins:02}m"),
        },
        DurationStyle::Compact => match hours {
            0 => format!("{mins}:{secs:02}"),
            _ => format!("{hours}:{mins:02}:{secs:02}"),
        },
    }
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;

    if path_str == "~" {
        return Ok(home);
    }

    if path_str.starts_with("~/") || path_str.starts_with(r"~\") {
        return Ok(home.join(&path_str[2..]));
    }

    Err(anyhow!("Error reading directory with tilde (~)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_compact_under_an_hour() {
        let dur = Duration::from_secs(5 * 60 + 7);
        assert_eq!(get_readable_duration(dur, DurationStyle::Compact), "5:07");
    }

    #[test]
    fn duration_compact_over_an_hour() {
        let dur = Duration::from_secs(2 * 3600 + 4 * 60 + 9);
        assert_eq!(
            get_readable_duration(dur, DurationStyle::Compact),
            "2:04:09"
        );
    }

    #[test]
    fn duration_clean_styles() {
        assert_eq!(
            get_readable_duration(Duration::from_secs(42), DurationStyle::Clean),
            "42s"
        );
        assert_eq!(
            get_readable_duration(Duration::from_secs(3 * 60 + 4), DurationStyle::Clean),
            "3m 04s"
        );
        assert_eq!(
            get_readable_duration(
                Duration::from_secs(11 * 3600 + 3 * 60),
                DurationStyle::Clean
            ),
            "11h 03m"
        );
    }

    #[test]
    fn expand_tilde_passes_plain_paths_through() {
        let plain = PathBuf::from("/tmp/books");
        assert_eq!(expand_tilde(&plain).unwrap(), plain);
    }

    #[test]
    fn expand_tilde_rejects_mid_path_tilde() {
        assert!(expand_tilde("~user/books").is_err());
    }
}
