use miette::Diagnostic;
use thiserror::Error;

/// Main error type for roomed operations
#[derive(Error, Diagnostic, Debug)]
pub enum MapError {
    #[error("Invalid room dimensions {width}x{height}")]
    #[diagnostic(
        code(roomed::invalid_dimension),
        help("Rooms need 2 to 1024 cells per side")
    )]
    InvalidDimension { width: usize, height: usize },

    #[error("Malformed room: {message}")]
    #[diagnostic(code(roomed::malformed_room))]
    MalformedRoom { message: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(roomed::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(roomed::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(roomed::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, MapError>;
