//! Article source backed by an HTTP endpoint.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::config::RemoteConfig;
use crate::error::PageError;
use crate::source::{LoadCell, LoadSource};
use crate::ui::content::{LoadIntent, LoadState};

use super::article::Article;

/// Fetches an [`Article`] as JSON with `GET {url}`.
///
/// Transport errors and non-success statuses become `ApiError`; a body that
/// does not decode becomes `Generic`.
pub struct RemoteArticleSource {
    cell: LoadCell<Article>,
    client: reqwest::Client,
    url: String,
    runtime: Handle,
}

impl RemoteArticleSource {
    pub fn new(
        url: impl Into<String>,
        config: &RemoteConfig,
        runtime: Handle,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            cell: LoadCell::new(),
            client,
            url: url.into(),
            runtime,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LoadSource for RemoteArticleSource {
    type Output = Article;

    fn state(&self) -> LoadState<Article> {
        self.cell.snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<LoadState<Article>> {
        self.cell.subscribe()
    }

    fn load(&self) {
        let ticket = self.cell.begin();
        let cell = self.cell.clone();
        let client = self.client.clone();
        let url = self.url.clone();
        tracing::info!(generation = ticket.generation(), %url, "remote load started");

        self.runtime.spawn(async move {
            let intent = fetch_article(&client, &url).await;
            cell.apply(&ticket, intent);
        });
    }
}

async fn fetch_article(client: &reqwest::Client, url: &str) -> LoadIntent<Article> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => return LoadIntent::Fail(PageError::api(err.to_string())),
    };

    let status = response.status();
    if !status.is_success() {
        return LoadIntent::Fail(PageError::api(format!("HTTP {}", status.as_u16())));
    }

    match response.json::<Article>().await {
        Ok(article) => LoadIntent::Succeed(article),
        Err(err) => {
            tracing::warn!(error = %err, "article response did not decode");
            LoadIntent::Fail(PageError::Generic)
        }
    }
}
