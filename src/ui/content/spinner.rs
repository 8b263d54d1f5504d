//! Default loading view: an indeterminate spinner.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::{HEADER_TEXT, STATUS_OK};

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner {
    animation_tick: u8,
}

impl Spinner {
    pub fn new(animation_tick: u8) -> Self {
        Self { animation_tick }
    }

    pub fn frame(&self) -> &'static str {
        SPINNER_FRAMES[(self.animation_tick as usize) % SPINNER_FRAMES.len()]
    }

    fn line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{} ", self.frame()), Style::default().fg(STATUS_OK)),
            Span::styled(LOADING_LABEL, Style::default().fg(HEADER_TEXT)),
        ])
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let middle = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_wraps_around() {
        assert_eq!(Spinner::new(0).frame(), "⠋");
        assert_eq!(Spinner::new(10).frame(), "⠋");
        assert_eq!(Spinner::new(11).frame(), "⠙");
    }

    #[test]
    fn renders_label_in_the_middle_row() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        Spinner::default().render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("Loading..."), "row was {row:?}");
        assert!(row.contains('⠋'));
    }
}
