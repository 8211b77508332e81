use thiserror::Error;

/// Everything that can go wrong inside the instrumentation layer.
///
/// None of these ever reach the host application. Lifecycle entry points log
/// them and carry on with less instrumentation.
#[derive(Debug, Error)]
pub enum InstrumentationError {
    #[error("capability `{0}` is not available in this process")]
    CapabilityUnavailable(&'static str),

    #[error("user interaction breadcrumbs are disabled")]
    BreadcrumbsDisabled,

    #[error("no prior window callback, delegating to no-op")]
    MissingDelegate,

    #[error("window callback was replaced since attach, leaving it untouched")]
    StaleWrapperOnDetach,

    #[error("activity `{0}` has no window")]
    NoWindow(String),

    #[error("activity `{0}` has no resources")]
    NoResources(String),

    #[error("failed to report breadcrumb: {0}")]
    Reporting(#[from] HubError),
}

/// Failures of the monitoring hub when accepting a breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    #[error("breadcrumb queue is full")]
    QueueFull,

    #[error("hub is closed")]
    Closed,

    #[error("hub state lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read options: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse options: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid options: {0}")]
    Invalid(String),
}
