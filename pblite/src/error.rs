use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while launching the main window.
///
/// Only failures that abort a `show()` call surface here. Font and
/// translation problems are logged and tolerated, so they have no variant.
///
/// # Example
///
/// ```
/// use pblite::{Assets, LaunchError, StyleComposer};
///
/// let assets = Assets::new("/definitely/not/here");
/// match StyleComposer::load_style(&assets) {
///     Err(LaunchError::ResourceNotFound(path)) => {
///         assert!(path.ends_with("app.css"));
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A bundled asset that must exist is missing.
    #[error("resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    /// A bundled asset exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The toolkit application instance could not be created.
    #[error("failed to create application: {0}")]
    Application(String),

    /// The event loop exited with a failure status.
    #[error("event loop exited with {0}")]
    EventLoop(String),

    /// Settings values are out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

impl LaunchError {
    /// Maps an I/O error on `path` to `ResourceNotFound` when the file is
    /// absent, and to `Io` otherwise.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            LaunchError::ResourceNotFound(path)
        } else {
            LaunchError::Io { path, source }
        }
    }
}

/// Type alias for results returned by launcher operations.
pub type Result<T> = std::result::Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_found_maps_to_resource_not_found() {
        let err = LaunchError::from_io("/res/app.css", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, LaunchError::ResourceNotFound(p) if p.ends_with("app.css")));
    }

    #[test]
    fn other_io_errors_keep_their_source() {
        let err = LaunchError::from_io(
            "/res/app.css",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        match err {
            LaunchError::Io { path, source } => {
                assert!(path.ends_with("app.css"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn display_names_the_path() {
        let err = LaunchError::ResourceNotFound(PathBuf::from("/res/app.css"));
        assert_eq!(err.to_string(), "resource not found: /res/app.css");
    }
}
