use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::runtime::Runtime;
use tokio::sync::watch;

use crate::config::Config;
use crate::demo::{Article, RemoteArticleSource, ScriptedArticleSource, Timeline};
use crate::shutdown::ShutdownHandle;
use crate::source::LoadSource;
use crate::ui::app::App;
use crate::ui::content::LoadState;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the article screen until the user quits or a signal arrives.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let shutdown = ShutdownHandle::new();
    shutdown
        .register_signals()
        .context("failed to register signal handlers")?;

    match config.remote.url.clone() {
        Some(url) => {
            let source = RemoteArticleSource::new(url, &config.remote, runtime.handle().clone())
                .context("failed to build HTTP client")?;
            tracing::info!(url = source.url(), "using remote article source");
            run_app(Arc::new(source), &config, &runtime, shutdown)
        }
        None => {
            let source =
                ScriptedArticleSource::new(Timeline::from(&config.demo), runtime.handle().clone());
            tracing::info!(timeline = ?source.timeline(), "using scripted article source");
            run_app(Arc::new(source), &config, &runtime, shutdown)
        }
    }
}

fn run_app<S>(
    source: Arc<S>,
    config: &Config,
    runtime: &Runtime,
    shutdown: ShutdownHandle,
) -> anyhow::Result<()>
where
    S: LoadSource<Output = Article>,
{
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.clone());
    let mut app = App::new(source);
    runtime.spawn(forward_changes(app.watch(), events.sender(), shutdown.clone()));
    app.on_appear();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::StateChanged) => {
                app.on_state_changed();
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}

/// Turn state changes into render-loop wakeups until shutdown.
async fn forward_changes<T>(
    mut changes: watch::Receiver<LoadState<T>>,
    events: mpsc::Sender<AppEvent>,
    shutdown: ShutdownHandle,
) where
    T: Send + Sync,
{
    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() || events.send(AppEvent::StateChanged).is_err() {
                    break;
                }
            }
            _ = shutdown.wait() => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::LoadCell;
    use crate::ui::content::LoadIntent;

    #[tokio::test]
    async fn forwards_each_change_until_shutdown() {
        let cell: LoadCell<u8> = LoadCell::new();
        let (tx, rx) = mpsc::channel();
        let shutdown = ShutdownHandle::new();
        let task = tokio::spawn(forward_changes(cell.subscribe(), tx, shutdown.clone()));

        let ticket = cell.begin();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(matches!(rx.try_recv(), Ok(AppEvent::StateChanged)));

        cell.apply(&ticket, LoadIntent::Succeed(1));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(matches!(rx.try_recv(), Ok(AppEvent::StateChanged)));

        shutdown.signal();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("forwarder should stop on shutdown")
            .expect("forwarder should not panic");
    }
}
