mod filetype;
mod track;

pub use filetype::{FileType, is_audio_file};
pub use track::Track;
