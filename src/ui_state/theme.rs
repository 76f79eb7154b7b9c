use ratatui::style::Color;

const DARK_GRAY: Color = Color::Rgb(26, 27, 32);
const DARK_WHITE: Color = Color::Rgb(214, 210, 196);
const MID_GRAY: Color = Color::Rgb(96, 98, 106);
const AMBER: Color = Color::Rgb(224, 164, 62);
const AMBER_FADED: Color = Color::Rgb(122, 94, 46);
const RUST_RED: Color = Color::Rgb(190, 74, 58);

pub struct Theme {
    pub bg: Color,
    pub text: Color,
    pub text_faded: Color,
    pub highlight: Color,
    pub border: Color,
    pub progress: Color,
    pub progress_faded: Color,
    pub error: Color,
}

impl Theme {
    pub fn set_generic_theme() -> Theme {
        Theme {
            bg: DARK_GRAY,
            text: DARK_WHITE,
            text_faded: MID_GRAY,
            highlight: AMBER,
            border: AMBER_FADED,
            progress: RUST_RED,
            progress_faded: MID_GRAY,
            error: RUST_RED,
        }
    }
}
