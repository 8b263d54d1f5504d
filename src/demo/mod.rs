//! Article demo: the model, its view and two sources for it.

mod article;
mod remote;
mod scripted;

pub use article::{Article, ArticleView};
pub use remote::RemoteArticleSource;
pub use scripted::{ScriptedArticleSource, Timeline};
