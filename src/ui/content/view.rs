//! State-driven rendering of asynchronously loaded content.

use std::sync::Arc;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use tokio::sync::watch;

use crate::source::LoadSource;

use super::error_view::{ErrorView, RetryHandler};
use super::placeholder::Placeholder;
use super::spinner::Spinner;
use super::state::{LoadState, LoadTag};

/// What gets drawn for a given load state.
#[derive(Debug)]
pub enum ContentView<L, C> {
    Placeholder(Placeholder),
    Loading(L),
    Failed(ErrorView),
    Success(C),
}

impl<L, C> ContentView<L, C> {
    /// The load state this view was produced for.
    pub fn tag(&self) -> LoadTag {
        match self {
            ContentView::Placeholder(_) => LoadTag::Idle,
            ContentView::Loading(_) => LoadTag::Loading,
            ContentView::Failed(_) => LoadTag::Failed,
            ContentView::Success(_) => LoadTag::Success,
        }
    }
}

impl<L: Widget, C: Widget> Widget for ContentView<L, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            ContentView::Placeholder(placeholder) => placeholder.render(area, buf),
            ContentView::Loading(loading) => loading.render(area, buf),
            ContentView::Failed(error) => error.render(area, buf),
            ContentView::Success(content) => content.render(area, buf),
        }
    }
}

/// Map a load state to the view for it.
///
/// Total over every state and free of side effects: `reload` is only wired
/// into the error view's Retry control, never called here.
pub fn render_state<T, L, C>(
    state: LoadState<T>,
    render_loading: impl FnOnce() -> L,
    render_success: impl FnOnce(T) -> C,
    reload: RetryHandler,
) -> ContentView<L, C> {
    match state {
        LoadState::Idle => ContentView::Placeholder(Placeholder),
        LoadState::Loading => ContentView::Loading(render_loading()),
        LoadState::Failed(error) => ContentView::Failed(ErrorView::new(error, Some(reload))),
        LoadState::Success(value) => ContentView::Success(render_success(value)),
    }
}

/// View bound to a [`LoadSource`].
///
/// Subscribes to the source once on construction and holds the subscription
/// until dropped. Never mutates the source's state; the only way it reaches
/// the source is the Retry control, which calls [`LoadSource::load`].
pub struct AsyncContentView<S, F, C>
where
    S: LoadSource,
{
    source: Arc<S>,
    subscription: watch::Receiver<LoadState<S::Output>>,
    loading: F,
    content: C,
}

impl<S, C, CW> AsyncContentView<S, fn() -> Spinner, C>
where
    S: LoadSource,
    C: Fn(S::Output) -> CW,
{
    /// Bind `source` with the default spinner as loading view.
    pub fn new(source: Arc<S>, content: C) -> Self {
        Self::with_loading(source, Spinner::default as fn() -> Spinner, content)
    }
}

impl<S, F, LW, C, CW> AsyncContentView<S, F, C>
where
    S: LoadSource,
    F: Fn() -> LW,
    C: Fn(S::Output) -> CW,
{
    pub fn with_loading(source: Arc<S>, loading: F, content: C) -> Self {
        let subscription = source.subscribe();
        Self {
            source,
            subscription,
            loading,
            content,
        }
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Snapshot of the observed state.
    pub fn state(&self) -> LoadState<S::Output> {
        self.subscription.borrow().clone()
    }

    /// Build the view for the current state.
    pub fn view(&self) -> ContentView<LW, CW> {
        render_state(
            self.state(),
            &self.loading,
            &self.content,
            self.reload_handler(),
        )
    }

    /// Returns `true` once per change of the observed state.
    pub fn poll_changed(&mut self) -> bool {
        match self.subscription.has_changed() {
            Ok(true) => {
                let _ = self.subscription.borrow_and_update();
                true
            }
            _ => false,
        }
    }

    /// A second receiver on the same state, for waking up a render loop.
    pub fn watch(&self) -> watch::Receiver<LoadState<S::Output>> {
        self.subscription.clone()
    }

    /// Activate the Retry control, if the current view shows one.
    pub fn activate_retry(&self) -> bool {
        // The snapshot is taken before calling into the source so no borrow
        // of the channel is held while the source writes to it.
        match self.state() {
            LoadState::Failed(error) => {
                ErrorView::new(error, Some(self.reload_handler())).activate_retry()
            }
            _ => false,
        }
    }

    fn reload_handler(&self) -> RetryHandler {
        let source = Arc::clone(&self.source);
        Arc::new(move || {
            tracing::info!("retry requested");
            source.load();
        })
    }
}
