use miette::Diagnostic;
use thiserror::Error;

/// Main error type for blockies operations
#[derive(Error, Diagnostic, Debug)]
pub enum BlockiesError {
    #[error("Invalid size: {size}")]
    #[diagnostic(
        code(blockies::invalid_size),
        help("Size is the number of cells per side and must be at least 1")
    )]
    InvalidSize { size: i64 },

    #[error("Invalid scale: {scale}")]
    #[diagnostic(
        code(blockies::invalid_scale),
        help("Scale is the number of output pixels per cell and must be at least 1")
    )]
    InvalidScale { scale: i64 },

    #[error("Canvas too large: {size} cells at scale {scale}")]
    #[diagnostic(
        code(blockies::canvas_too_large),
        help("size * scale must be at most 4096 output pixels")
    )]
    CanvasTooLarge { size: i64, scale: i64 },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(blockies::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(blockies::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(blockies::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BlockiesError>;
