//! Generic async content view for terminal UIs.
//!
//! A [`source::LoadSource`] owns a [`ui::content::LoadState`]; an
//! [`ui::content::AsyncContentView`] observes it and renders a placeholder, a
//! loading view, an error view with Retry, or the loaded content.

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod shutdown;
pub mod source;
pub mod ui;
