use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::PLACEHOLDER_BG;

/// Blank view shown before anything has been requested.
///
/// Paints the area instead of leaving it untouched so stale cells from a
/// previous state never show through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placeholder;

impl Widget for Placeholder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(PLACEHOLDER_BG))
            .render(area, buf);
    }
}
