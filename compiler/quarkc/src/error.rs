use quark_eval::ExecError;

/// Failure of a CLI command. `main` prints it to stderr and exits with 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Exec(#[from] ExecError),
    #[error("method {name} not found")]
    UnknownMethod { name: String },
    #[error("invalid value '{value}' for {flag}")]
    InvalidFlag { flag: String, value: String },
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub(crate) fn read(path: &str, err: std::io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => CliError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Io { path, source: err },
        }
    }
}
