//! Error types for the birthtime library.

use std::io;
use thiserror::Error;

/// Result type alias for birthtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading the dataset or reading input.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file or console operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Invalid or malformed data in the spreadsheet.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A required spreadsheet part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// Text that is not a valid `HH:MM` clock time.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// Text that is neither `AM` nor `PM`.
    #[error("Invalid meridiem: {0}")]
    InvalidMeridiem(String),

    /// The input source ended before a valid answer was read.
    #[error("Input closed before a valid answer was given")]
    InputClosed,

    /// Error during rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this error came from reading the spreadsheet file.
    pub fn is_dataset_error(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::ZipArchive(_)
                | Error::XmlParse(_)
                | Error::InvalidData(_)
                | Error::MissingComponent(_)
        )
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}
