use crate::ui::content::LoadTag;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    title: &'static str,
}

impl Header {
    pub fn new(title: &'static str) -> Self {
        Self { title }
    }

    pub fn widget(&self, tag: LoadTag) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_color = match tag {
            LoadTag::Failed => STATUS_ERROR,
            LoadTag::Idle => HEADER_SEPARATOR,
            LoadTag::Loading | LoadTag::Success => STATUS_OK,
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.title, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(tag.to_string(), Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
