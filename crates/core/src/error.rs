use std::io;
use std::path::PathBuf;

/// Errors that can occur during source-retrieve operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Project configuration error: {0}")]
    ProjectConfigError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No SFDX project found from {0}")]
    NoWorkspace(PathBuf),

    #[error("Process error: {0}")]
    ProcessError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Short identifying name of the error, without its message body.
    pub fn name(&self) -> &'static str {
        match self {
            Error::IoError(_) => "IoError",
            Error::ProjectConfigError(_) => "ProjectConfigError",
            Error::ConfigError(_) => "ConfigError",
            Error::NoWorkspace(_) => "NoWorkspace",
            Error::ProcessError(_) => "ProcessError",
            Error::SerializationError(_) => "SerializationError",
            Error::Other(_) => "Error",
        }
    }
}

/// Why a source path failed the package directory check
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathCheckError {
    /// The project descriptor could not be read or parsed
    #[error("project configuration unreadable ({name}): {detail}")]
    ConfigUnreadable { name: String, detail: String },

    /// The path is not inside any declared package directory
    #[error("{} is not in a package directory", path.display())]
    PathNotInPackage { path: PathBuf },
}

impl PathCheckError {
    pub fn config_unreadable(error: &Error) -> Self {
        PathCheckError::ConfigUnreadable {
            name: error.name().to_string(),
            detail: error.to_string(),
        }
    }
}

/// Result type alias for source-retrieve operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_name_omits_message() {
        let error = Error::ProjectConfigError("unexpected token at line 3".to_string());
        assert_eq!(error.name(), "ProjectConfigError");
        assert!(error.to_string().contains("line 3"));
    }

    #[test]
    fn test_config_unreadable_keeps_name_and_detail() {
        let io = Error::IoError(io::Error::new(io::ErrorKind::NotFound, "missing"));
        match PathCheckError::config_unreadable(&io) {
            PathCheckError::ConfigUnreadable { name, detail } => {
                assert_eq!(name, "IoError");
                assert!(detail.contains("missing"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
