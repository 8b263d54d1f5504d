//! Timer-driven demo source.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::config::DemoConfig;
use crate::error::PageError;
use crate::source::{LoadCell, LoadSource};
use crate::ui::content::{LoadIntent, LoadState};

use super::article::Article;

/// Offsets, measured from the `load()` call, at which the scripted source
/// moves to each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub loading_after: Duration,
    pub success_after: Duration,
    pub failure_after: Duration,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::from(&DemoConfig::default())
    }
}

impl From<&DemoConfig> for Timeline {
    fn from(config: &DemoConfig) -> Self {
        Self {
            loading_after: Duration::from_millis(config.loading_after_ms),
            success_after: Duration::from_millis(config.success_after_ms),
            failure_after: Duration::from_millis(config.failure_after_ms),
        }
    }
}

/// Walks `Loading → Success(sample) → Failed(Generic)` on a fixed timeline.
///
/// Every `load()` restarts the timeline; steps of an older run are dropped.
pub struct ScriptedArticleSource {
    cell: LoadCell<Article>,
    timeline: Timeline,
    runtime: Handle,
}

impl ScriptedArticleSource {
    pub fn new(timeline: Timeline, runtime: Handle) -> Self {
        Self {
            cell: LoadCell::new(),
            timeline,
            runtime,
        }
    }

    pub fn timeline(&self) -> Timeline {
        self.timeline
    }
}

impl LoadSource for ScriptedArticleSource {
    type Output = Article;

    fn state(&self) -> LoadState<Article> {
        self.cell.snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<LoadState<Article>> {
        self.cell.subscribe()
    }

    fn load(&self) {
        let ticket = self.cell.ticket();
        let cell = self.cell.clone();
        let timeline = self.timeline;
        tracing::info!(generation = ticket.generation(), "scripted load started");

        self.runtime.spawn(async move {
            let steps = [
                (timeline.loading_after, LoadIntent::Begin),
                (timeline.success_after, LoadIntent::Succeed(Article::sample())),
                (timeline.failure_after, LoadIntent::Fail(PageError::Generic)),
            ];
            let mut elapsed = Duration::ZERO;
            for (at, intent) in steps {
                tokio::time::sleep(at.saturating_sub(elapsed)).await;
                elapsed = elapsed.max(at);
                if !cell.apply(&ticket, intent) {
                    break;
                }
            }
        });
    }
}
