//! Standard error view with an optional Retry control.

use std::fmt;
use std::sync::Arc;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::error::PageError;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, STATUS_ERROR};

/// Label of the retry control.
pub const RETRY_LABEL: &str = " Retry ";

/// Callback invoked when the Retry control is activated.
pub type RetryHandler = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ErrorView {
    error: PageError,
    retry: Option<RetryHandler>,
}

impl fmt::Debug for ErrorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorView")
            .field("error", &self.error)
            .field("has_retry", &self.retry.is_some())
            .finish()
    }
}

impl ErrorView {
    pub fn new(error: PageError, retry: Option<RetryHandler>) -> Self {
        Self { error, retry }
    }

    pub fn error(&self) -> &PageError {
        &self.error
    }

    pub fn message(&self) -> &'static str {
        self.error.description()
    }

    /// True when the Retry control is shown.
    pub fn has_retry(&self) -> bool {
        self.retry.is_some()
    }

    /// Activate the Retry control.
    ///
    /// Invokes the handler once and returns `true`; without a handler the
    /// control is absent and nothing happens.
    pub fn activate_retry(&self) -> bool {
        match &self.retry {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            self.message(),
            Style::default().fg(STATUS_ERROR),
        ))];
        if self.has_retry() {
            let button_style = Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD);
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(RETRY_LABEL, button_style)));
        }
        lines
    }
}

impl Widget for ErrorView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = (lines.len() as u16).min(area.height);
        let top = area.y + area.height.saturating_sub(height) / 2;
        let inner = Rect {
            y: top,
            height,
            ..area
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
