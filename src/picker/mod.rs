use crate::{domain::is_audio_file, expand_tilde, key_handler::Director};
use anyhow::{Result, anyhow};
use ratatui::widgets::ListState;
use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};

#[derive(Copy, Clone, PartialEq)]
pub enum PickTarget {
    Audiobook,
    Document,
}

impl PickTarget {
    fn matches(&self, path: &Path) -> bool {
        match self {
            PickTarget::Audiobook => is_audio_file(path),
            PickTarget::Document => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf")),
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            PickTarget::Audiobook => "audiobook",
            PickTarget::Document => "document",
        }
    }
}

pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Modal directory browser. Lists subdirectories plus files matching
/// the current target; cancelling it leaves every other piece of state
/// untouched.
pub struct FilePicker {
    cwd: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub selection: ListState,
    target: PickTarget,
    show_hidden: bool,
}

impl FilePicker {
    pub fn new(start_dir: PathBuf) -> Self {
        FilePicker {
            cwd: start_dir,
            entries: Vec::new(),
            selection: ListState::default(),
            target: PickTarget::Audiobook,
            show_hidden: false,
        }
    }

    pub fn open(&mut self, target: PickTarget) -> Result<()> {
        self.target = target;
        self.refresh()?;
        self.select_first();
        Ok(())
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn target(&self) -> PickTarget {
        self.target
    }

    pub fn scroll(&mut self, director: Director) {
        let len = self.entries.len();
        if len == 0 {
            self.selection.select(None);
            return;
        }

        let current = self.selection.selected().unwrap_or(0);
        let next = match director {
            Director::Up(n) => current.saturating_sub(n),
            Director::Down(n) => (current + n).min(len - 1),
            Director::Top => 0,
            Director::Bottom => len - 1,
        };
        self.selection.select(Some(next));
    }

    /// Descend into a selected directory, or resolve a selected file.
    /// Only a file resolution closes the picker.
    pub fn enter(&mut self) -> Result<Option<PathBuf>> {
        let Some(index) = self.selection.selected() else {
            return Ok(None);
        };
        let Some(entry) = self.entries.get(index) else {
            return Ok(None);
        };

        if !entry.is_dir {
            return Ok(Some(entry.path.clone()));
        }

        let next = entry.path.clone();
        self.entries = read_entries(&next, self.target, self.show_hidden)?;
        self.cwd = next;
        self.select_first();
        Ok(None)
    }

    pub fn ascend(&mut self) -> Result<()> {
        let Some(parent) = self.cwd.parent().map(Path::to_path_buf) else {
            return Ok(());
        };

        let came_from = self.cwd.clone();
        self.entries = read_entries(&parent, self.target, self.show_hidden)?;
        self.cwd = parent;

        // Land on the directory we just left.
        let position = self.entries.iter().position(|e| e.path == came_from);
        match position {
            Some(i) => self.selection.select(Some(i)),
            None => self.select_first(),
        }
        Ok(())
    }

    pub fn toggle_hidden(&mut self) -> Result<()> {
        self.show_hidden = !self.show_hidden;
        self.refresh()?;
        self.select_first();
        Ok(())
    }

    /// Free-form path entry; accepts `~` and rejects anything that is
    /// not a readable directory, leaving the listing as it was.
    pub fn jump_to(&mut self, input: &str) -> Result<()> {
        let expanded = expand_tilde(input.trim())?;
        let canon = expanded
            .canonicalize()
            .map_err(|_| anyhow!("Path does not exist: {}", expanded.display()))?;

        if !canon.is_dir() {
            return Err(anyhow!("Not a directory: {}", canon.display()));
        }

        self.entries = read_entries(&canon, self.target, self.show_hidden)?;
        self.cwd = canon;
        self.select_first();
        Ok(())
    }

    pub fn selected_entry(&self) -> Option<&PickerEntry> {
        self.selection.selected().and_then(|i| self.entries.get(i))
    }

    fn refresh(&mut self) -> Result<()> {
        self.entries = read_entries(&self.cwd, self.target, self.show_hidden)?;
        Ok(())
    }

    fn select_first(&mut self) {
        match self.entries.is_empty() {
            true => self.selection.select(None),
            false => self.selection.select(Some(0)),
        }
    }
}

fn read_entries(dir: &Path, target: PickTarget, show_hidden: bool) -> Result<Vec<PickerEntry>> {
    let read = fs::read_dir(dir)
        .map_err(|e| anyhow!("Could not read directory {}: {e}", dir.display()))?;

    let mut entries = Vec::new();
    for entry in read.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if !show_hidden && name.starts_with('.') {
            continue;
        }

        let is_dir = path.is_dir();
        if !is_dir && !target.matches(&path) {
            continue;
        }

        entries.push(PickerEntry { name, path, is_dir });
    }

    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("series")).unwrap();
        fs::write(tmp.path().join("b.mp3"), "").unwrap();
        fs::write(tmp.path().join("A.m4a"), "").unwrap();
        fs::write(tmp.path().join("notes.pdf"), "").unwrap();
        fs::write(tmp.path().join("cover.png"), "").unwrap();
        fs::write(tmp.path().join(".hidden.mp3"), "").unwrap();
        tmp
    }

    fn names(picker: &FilePicker) -> Vec<&str> {
        picker.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn audiobook_listing_is_dirs_first_then_audio_only() {
        let tmp = fixture();
        let mut picker = FilePicker::new(tmp.path().to_path_buf());
        picker.open(PickTarget::Audiobook).unwrap();

        assert_eq!(names(&picker), vec!["series", "A.m4a", "b.mp3"]);
        assert_eq!(picker.selection.selected(), Some(0));
    }

    #[test]
    fn document_listing_only_offers_pdfs() {
        let tmp = fixture();
        let mut picker = FilePicker::new(tmp.path().to_path_buf());
        picker.open(PickTarget::Document).unwrap();

        assert_eq!(names(&picker), vec!["series", "notes.pdf"]);
    }

    #[test]
    fn hidden_files_stay_out_until_toggled_in() {
        let tmp = fixture();
        let mut picker = FilePicker::new(tmp.path().to_path_buf());
        picker.open(PickTarget::Audiobook).unwrap();
        assert!(!names(&picker).contains(&".hidden.mp3"));

        picker.toggle_hidden().unwrap();
        assert!(names(&picker).contains(&".hidden.mp3"));
    }

    #[test]
    fn entering_a_directory_descends_and_entering_a_file_resolves() {
        let tmp = fixture();
        fs::write(tmp.path().join("series").join("one.mp3"), "").unwrap();

        let mut picker = FilePicker::new(tmp.path().to_path_buf());
        picker.open(PickTarget::Audiobook).unwrap();

        // "series" sorts first.
        assert_eq!(picker.enter().unwrap(), None);
        assert_eq!(picker.cwd(), tmp.path().join("series"));

        let picked = picker.enter().unwrap();
        assert_eq!(picked, Some(tmp.path().join("series").join("one.mp3")));
    }

    #[test]
    fn ascending_reselects_the_directory_we_left() {
        let tmp = fixture();
        let mut picker = FilePicker::new(tmp.path().join("series"));
        picker.open(PickTarget::Audiobook).unwrap();

        picker.ascend().unwrap();
        assert_eq!(picker.cwd(), tmp.path());
        assert_eq!(picker.selected_entry().unwrap().name, "series");
    }

    #[test]
    fn jump_rejects_files_and_missing_paths() {
        let tmp = fixture();
        let mut picker = FilePicker::new(tmp.path().to_path_buf());
        picker.open(PickTarget::Audiobook).unwrap();

        let file = tmp.path().join("b.mp3");
        assert!(picker.jump_to(&file.to_string_lossy()).is_err());
        assert!(picker.jump_to("/definitely/not/a/real/path").is_err());
        // The listing survives both rejections.
        assert_eq!(picker.cwd(), tmp.path());
        assert!(!picker.entries.is_empty());
    }

    #[test]
    fn scrolling_clamps_to_the_listing() {
        let tmp = fixture();
        let mut picker = FilePicker::new(tmp.path().to_path_buf());
        picker.open(PickTarget::Audiobook).unwrap();

        picker.scroll(Director::Down(50));
        assert_eq!(picker.selection.selected(), Some(2));
        picker.scroll(Director::Up(50));
        assert_eq!(picker.selection.selected(), Some(0));
        picker.scroll(Director::Bottom);
        assert_eq!(picker.selection.selected(), Some(2));
        picker.scroll(Director::Top);
        assert_eq!(picker.selection.selected(), Some(0));
    }
}
