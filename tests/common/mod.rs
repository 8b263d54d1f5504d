//! Shared test utilities and test doubles.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_content::source::{LoadCell, LoadSource};
use async_content::ui::content::{LoadIntent, LoadState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;

/// Source whose state is driven by the test, counting `load()` calls.
///
/// `load()` only records the call; the state changes only through `push`.
pub struct ManualSource<T> {
    cell: LoadCell<T>,
    loads: AtomicUsize,
}

impl<T> ManualSource<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            cell: LoadCell::new(),
            loads: AtomicUsize::new(0),
        }
    }

    /// Apply `intent` as the owner of the state.
    pub fn push(&self, intent: LoadIntent<T>) {
        let ticket = self.cell.ticket();
        self.cell.apply(&ticket, intent);
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn subscriber_count(&self) -> usize {
        self.cell.subscriber_count()
    }
}

impl<T> LoadSource for ManualSource<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    type Output = T;

    fn state(&self) -> LoadState<T> {
        self.cell.snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.cell.subscribe()
    }

    fn load(&self) {
        self.loads.fetch_add(1, Ordering::SeqCst);
    }
}

/// Render a widget into a fresh buffer of the given size.
pub fn render_to_buffer<W: Widget>(widget: W, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buf
}

/// All symbols of a buffer, row by row.
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
