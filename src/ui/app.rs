use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::demo::{Article, ArticleView};
use crate::source::LoadSource;
use crate::ui::content::{AsyncContentView, ContentView, LoadState, LoadTag, Spinner};

/// Loading-view factory used by the app; reads the shared animation tick.
pub type SpinnerFactory = Box<dyn Fn() -> Spinner + Send>;

/// Success-view builder for the article screen.
pub type ArticleRenderer = fn(Article) -> ArticleView;

pub type ArticleContent<S> = AsyncContentView<S, SpinnerFactory, ArticleRenderer>;

/// Article screen hosting one [`AsyncContentView`].
pub struct App<S>
where
    S: LoadSource<Output = Article>,
{
    should_quit: bool,
    content: ArticleContent<S>,
    animation_tick: Arc<AtomicU8>,
}

impl<S> App<S>
where
    S: LoadSource<Output = Article>,
{
    pub fn new(source: Arc<S>) -> Self {
        let animation_tick = Arc::new(AtomicU8::new(0));
        let tick = Arc::clone(&animation_tick);
        let loading: SpinnerFactory = Box::new(move || Spinner::new(tick.load(Ordering::Relaxed)));
        let content =
            AsyncContentView::with_loading(source, loading, ArticleView::new as ArticleRenderer);
        Self {
            should_quit: false,
            content,
            animation_tick,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Screen became visible: kick off the first load.
    pub fn on_appear(&mut self) {
        tracing::info!("article screen appeared");
        self.content.source().load();
    }

    pub fn on_tick(&mut self) {
        if self.content.state().is_loading() {
            self.animation_tick.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Acknowledge a state change notification. Returns whether the state
    /// actually moved since the last call.
    pub fn on_state_changed(&mut self) -> bool {
        self.content.poll_changed()
    }

    /// Activate the Retry control of the error view, if shown.
    pub fn retry(&mut self) -> bool {
        self.content.activate_retry()
    }

    /// Start a load regardless of the current state.
    pub fn reload(&mut self) {
        self.content.source().load();
    }

    pub fn state_tag(&self) -> LoadTag {
        self.content.state().tag()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick.load(Ordering::Relaxed)
    }

    pub fn view(&self) -> ContentView<Spinner, ArticleView> {
        self.content.view()
    }

    /// Receiver for waking the render loop on state changes.
    pub fn watch(&self) -> watch::Receiver<LoadState<Article>> {
        self.content.watch()
    }
}
