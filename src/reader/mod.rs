use crate::key_handler::Director;
use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

/// An open document on the reader screen. Text is extracted once at
/// load; the screen just scrolls over it. Shares nothing with the
/// playback session.
pub struct Document {
    pub title: String,
    pub path: PathBuf,
    lines: Vec<String>,
    scroll: usize,
}

impl Document {
    pub fn load(path: &Path) -> Result<Document> {
        let text = pdf_extract::extract_text(path)
            .map_err(|e| anyhow!("Could not read document {}: {e}", path.display()))?;

        let title = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("Untitled"));

        Ok(Self::from_text(title, path.to_path_buf(), &text))
    }

    pub(crate) fn from_text(title: String, path: PathBuf, text: &str) -> Document {
        let mut lines = Vec::new();
        let mut blank_run = 0;

        for raw in text.lines() {
            let line = raw.trim_end();
            match line.is_empty() {
                true => {
                    // Extracted PDFs tend to carry page-break padding;
                    // collapse runs of blanks to a single separator.
                    blank_run += 1;
                    if blank_run > 1 {
                        continue;
                    }
                }
                false => blank_run = 0,
            }
            lines.push(line.to_string());
        }

        Document {
            title,
            path,
            lines,
            scroll: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_by(&mut self, director: Director) {
        let last = self.lines.len().saturating_sub(1);
        self.scroll = match director {
            Director::Up(n) => self.scroll.saturating_sub(n),
            Director::Down(n) => (self.scroll + n).min(last),
            Director::Top => 0,
            Director::Bottom => last,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::from_text("test.pdf".into(), PathBuf::from("/tmp/test.pdf"), text)
    }

    #[test]
    fn blank_runs_collapse_to_one_separator() {
        let document = doc("first page\n\n\n\n\nsecond page\n");
        assert_eq!(document.lines(), ["first page", "", "second page"]);
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let document = doc("a line   \nanother\t\n");
        assert_eq!(document.lines(), ["a line", "another"]);
    }

    #[test]
    fn scrolling_clamps_to_the_document() {
        let mut document = doc("one\ntwo\nthree\nfour\n");

        document.scroll_by(Director::Down(2));
        assert_eq!(document.scroll(), 2);
        document.scroll_by(Director::Down(50));
        assert_eq!(document.scroll(), 3);
        document.scroll_by(Director::Up(50));
        assert_eq!(document.scroll(), 0);
        document.scroll_by(Director::Bottom);
        assert_eq!(document.scroll(), 3);
        document.scroll_by(Director::Top);
        assert_eq!(document.scroll(), 0);
    }

    #[test]
    fn an_empty_document_stays_at_zero() {
        let mut document = doc("");
        document.scroll_by(Director::Down(5));
        assert_eq!(document.scroll(), 0);
        assert_eq!(document.line_count(), 0);
    }
}
