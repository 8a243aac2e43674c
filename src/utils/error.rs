use std::error::Error;
use std::fmt;
use std::io;

/// Error types for mdtoc operations
#[derive(Debug)]
pub enum MdtocError {
    /// IO error wrapper
    Io(io::Error),
    /// The document has no heading lines to index
    NoHeadings,
}

impl fmt::Display for MdtocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MdtocError::Io(err) => write!(f, "IO error: {}", err),
            MdtocError::NoHeadings => write!(f, "document contains no heading lines"),
        }
    }
}

impl Error for MdtocError {}

impl From<io::Error> for MdtocError {
    fn from(err: io::Error) -> Self {
        MdtocError::Io(err)
    }
}
