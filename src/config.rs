use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_DIRECTORY: &str = "hark";
const CONFIG_FILE: &str = "config.toml";

const DEFAULT_SKIP_SECS: u64 = 15;
const DEFAULT_SKIP_SECS_LARGE: u64 = 60;

#[derive(Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Transport step for the plain skip/rewind keys, in seconds.
    pub skip_secs: u64,
    pub skip_secs_large: u64,
    /// Where the picker starts browsing. Falls back to the platform
    /// audio directory, then home.
    pub start_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            skip_secs: DEFAULT_SKIP_SECS,
            skip_secs_large: DEFAULT_SKIP_SECS_LARGE,
            start_dir: None,
        }
    }
}

impl Settings {
    /// A missing config file yields the defaults; a malformed one is an
    /// error the caller surfaces at startup.
    pub fn load() -> Result<Settings> {
        let Some(path) = Self::config_path() else {
            return Ok(Settings::default());
        };
        if !path.exists() {
            return Ok(Settings::default());
        }
        Self::load_from_file(path)
    }

    pub(crate) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let file_str = std::fs::read_to_string(path.as_ref())?;
        let settings = toml::from_str::<Settings>(&file_str)?;
        Ok(settings)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY).join(CONFIG_FILE))
    }

    pub fn start_dir(&self) -> PathBuf {
        self.start_dir
            .clone()
            .or_else(dirs::audio_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_transport_steps() {
        let settings = Settings::default();
        assert_eq!(settings.skip_secs, 15);
        assert_eq!(settings.skip_secs_large, 60);
        assert!(settings.start_dir.is_none());
    }

    #[test]
    fn a_partial_file_keeps_the_remaining_defaults() {
        let settings = toml::from_str::<Settings>("skip_secs = 30\n").unwrap();
        assert_eq!(settings.skip_secs, 30);
        assert_eq!(settings.skip_secs_large, 60);
    }

    #[test]
    fn a_full_file_parses() {
        let toml_str = "skip_secs = 10\nskip_secs_large = 90\nstart_dir = \"/books\"\n";
        let settings = toml::from_str::<Settings>(toml_str).unwrap();
        assert_eq!(settings.skip_secs, 10);
        assert_eq!(settings.skip_secs_large, 90);
        assert_eq!(settings.start_dir, Some(PathBuf::from("/books")));
    }

    #[test]
    fn a_malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"skip_secs = \"not a number\"").unwrap();

        assert!(Settings::load_from_file(&path).is_err());
    }

    #[test]
    fn an_explicit_start_dir_wins() {
        let settings = Settings {
            start_dir: Some(PathBuf::from("/books")),
            ..Settings::default()
        };
        assert_eq!(settings.start_dir(), PathBuf::from("/books"));
    }
}
