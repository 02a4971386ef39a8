use thiserror::Error;

/// Lifecycle error types
///
/// Malformed request bodies never show up here: the save-user handler
/// converts them into a business-status-500 envelope locally, so the only
/// errors that cross an API boundary are server start/stop failures.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to bind http listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("http server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("server task failed: {0}")]
    Shutdown(#[source] tokio::task::JoinError),
}

/// Result type alias for lifecycle errors
pub type Result<T> = std::result::Result<T, Error>;
