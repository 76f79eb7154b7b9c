use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub now_playing: Rect,
    pub progress: Rect,
    pub timer: Rect,
    pub transport: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [header, now_playing, progress, timer, transport] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .areas(area);

        AppLayout {
            header,
            now_playing,
            progress,
            timer,
            transport,
        }
    }
}
