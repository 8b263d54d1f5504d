use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};
use serde::{Deserialize, Serialize};

use crate::ui::theme::ACCENT_PINK;

/// Article shown by the demo screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Article {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The article the scripted demo source loads.
    pub fn sample() -> Self {
        Self::new("success loaded", "this is a successfully result")
    }
}

/// Success view for an [`Article`]: title above body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    article: Article,
}

impl ArticleView {
    pub fn new(article: Article) -> Self {
        Self { article }
    }

    pub fn article(&self) -> &Article {
        &self.article
    }
}

impl Widget for ArticleView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(ACCENT_PINK);
        let lines = vec![
            Line::styled(self.article.title, style.add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::styled(self.article.body, style),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::uniform(1)))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_json() {
        let article: Article =
            serde_json::from_str(r#"{"title": "Hello", "body": "World"}"#).unwrap();
        assert_eq!(article, Article::new("Hello", "World"));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let article: Article = serde_json::from_str(r#"{"title": "Only title"}"#).unwrap();
        assert_eq!(article.body, "");
    }

    #[test]
    fn renders_title_and_body() {
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        ArticleView::new(Article::sample()).render(area, &mut buf);

        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
        }
        assert!(text.contains("success loaded"));
        assert!(text.contains("this is a successfully result"));
    }
}
