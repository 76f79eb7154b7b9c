use super::FileType;
use crate::{DurationStyle, get_readable_duration};
use anyhow::{Result, anyhow};
use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};
use lofty::probe::Probe;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// A single loaded audiobook. The session owns exactly one of these at a
/// time; loading a new one replaces it wholesale.
pub struct Track {
    pub title: String,
    pub path: PathBuf,
    pub duration: Duration,
    pub format: FileType,
}

impl Track {
    /// Probe a local audio file for its duration and display title.
    /// Fails on unsupported extensions and on files the tag reader
    /// cannot parse; the caller reports that as a load error.
    pub fn load<P: AsRef<Path>>(path_raw: P) -> Result<Track> {
        let path = path_raw.as_ref();

        let format = FileType::from_path(path);
        if format == FileType::ERR {
            return Err(anyhow!("Unsupported file type: {}", path.display()));
        }

        let tagged = Probe::open(path)?.guess_file_type()?.read()?;
        let duration = tagged.properties().duration();

        let title = tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .and_then(|tag| tag.title().map(|t| t.to_string()))
            .unwrap_or_else(|| title_from_stem(path));

        Ok(Track {
            title,
            path: path.to_path_buf(),
            duration,
            format,
        })
    }

    pub fn duration_str(&self) -> String {
        get_readable_duration(self.duration, DurationStyle::Clean)
    }
}

fn title_from_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("Untitled"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Write};

    #[test]
    fn load_rejects_unsupported_extensions() {
        let err = Track::load("/books/notes.pdf").unwrap_err();
        assert!(err.to_string().contains("Unsupported file type"));
    }

    #[test]
    fn load_fails_on_unparseable_audio() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.mp3");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"this is not an mp3 stream").unwrap();

        assert!(Track::load(&path).is_err());
    }

    #[test]
    fn title_falls_back_to_file_stem() {
        let path = PathBuf::from("/books/The Hobbit.m4a");
        assert_eq!(title_from_stem(&path), "The Hobbit");
    }
}
