use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between UI ticks (spinner animation), in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Timeline of the scripted demo source, measured from the `load()` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// When the source switches to loading (default: 2000).
    #[serde(default = "default_loading_after_ms")]
    pub loading_after_ms: u64,
    /// When the sample article arrives (default: 4000).
    #[serde(default = "default_success_after_ms")]
    pub success_after_ms: u64,
    /// When the source reports a failure (default: 6000).
    #[serde(default = "default_failure_after_ms")]
    pub failure_after_ms: u64,
}

/// Settings for the HTTP article source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Article endpoint. The scripted source is used when unset.
    #[serde(default)]
    pub url: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_loading_after_ms() -> u64 {
    2000
}

fn default_success_after_ms() -> u64 {
    4000
}

fn default_failure_after_ms() -> u64 {
    6000
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            loading_after_ms: default_loading_after_ms(),
            success_after_ms: default_success_after_ms(),
            failure_after_ms: default_failure_after_ms(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
