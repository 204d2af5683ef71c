use crate::units::Pt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for document creation.
pub type Result<T> = std::result::Result<T, PDFError>;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    /// The output path is occupied and the conflict policy forbids touching it
    #[error("File {} already exists.", path.display())]
    AlreadyExists { path: PathBuf },

    /// An image, logo, table-cell image or schema file could not be read
    #[error("{what} not found: {}", path.display())]
    NotFound { what: &'static str, path: PathBuf },

    /// A table schema (or job file) is malformed or uses unknown vocabulary
    #[error("invalid table schema: {0}")]
    SchemaInvalid(String),

    #[error("username must be of format domain\\username, was: {0}")]
    InvalidCredentialFormat(String),

    /// A content element asked for a layout variant that does not exist
    #[error("unsupported element: {0}")]
    ElementUnsupported(String),

    /// The columns of a table do not fit between the page margins
    #[error("table is {required} wide but only {available} is available between the margins")]
    TableTooWide { required: Pt, available: Pt },

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),

    /// The renderer failed to produce the output document
    #[error("render error: {0}")]
    Render(String),
}

/// The kind of a [`PDFError`], without its details
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    SchemaInvalid,
    InvalidCredentialFormat,
    ElementUnsupported,
    TableTooWide,
    Io,
    Image,
    Render,
}

impl PDFError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PDFError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            PDFError::NotFound { .. } => ErrorKind::NotFound,
            PDFError::SchemaInvalid(_) => ErrorKind::SchemaInvalid,
            PDFError::InvalidCredentialFormat(_) => ErrorKind::InvalidCredentialFormat,
            PDFError::ElementUnsupported(_) => ErrorKind::ElementUnsupported,
            PDFError::TableTooWide { .. } => ErrorKind::TableTooWide,
            PDFError::Io(_) => ErrorKind::Io,
            PDFError::Image(_) => ErrorKind::Image,
            PDFError::Render(_) => ErrorKind::Render,
        }
    }

    pub(crate) fn not_found<P: Into<PathBuf>>(what: &'static str, path: P) -> PDFError {
        PDFError::NotFound {
            what,
            path: path.into(),
        }
    }
}

impl From<serde_json::Error> for PDFError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => "check for trailing commas or missing quotes",
            serde_json::error::Category::Data => "the JSON is valid but doesn't match the schema",
            serde_json::error::Category::Eof => "unexpected end of input",
            serde_json::error::Category::Io => "",
        };
        if hint.is_empty() {
            PDFError::SchemaInvalid(e.to_string())
        } else {
            PDFError::SchemaInvalid(format!("{e} ({hint})"))
        }
    }
}
