use std::{
    collections::HashSet,
    fmt::Display,
    path::Path,
    sync::LazyLock,
};

static LEGAL_EXTENSION: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["mp3", "m4a", "flac", "ogg", "wav"]));

#[allow(clippy::upper_case_acronyms)]
#[derive(Default, Debug, PartialEq, Copy, Clone)]
pub enum FileType {
    MP3,
    M4A,
    OGG,
    WAV,
    FLAC,
    #[default]
    ERR,
}

impl From<&str> for FileType {
    fn from(str: &str) -> Self {
        match str {
            "mp3" => Self::MP3,
            "m4a" => Self::M4A,
            "ogg" => Self::OGG,
            "flac" => Self::FLAC,
            "wav" => Self::WAV,
            _ => Self::ERR,
        }
    }
}

impl Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            FileType::MP3 => write!(f, "mp3"),
            FileType::M4A => write!(f, "m4a"),
            FileType::OGG => write!(f, "ogg"),
            FileType::WAV => write!(f, "wav"),
            FileType::FLAC => write!(f, "flac"),
            FileType::ERR => write!(f, "???"),
        }
    }
}

impl FileType {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match normalized_extension(path.as_ref()) {
            Some(ext) => FileType::from(ext.as_str()),
            None => FileType::ERR,
        }
    }
}

pub fn is_audio_file(path: &Path) -> bool {
    match normalized_extension(path) {
        Some(ext) => LEGAL_EXTENSION.contains(ext.as_str()),
        None => false,
    }
}

fn normalized_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
}
