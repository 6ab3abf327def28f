//! Errors that can occur while loading the project catalogue.

use std::fmt;

#[derive(Debug)]
pub enum CatalogueError {
    /// The project file could not be read.
    Io(std::io::Error),
    /// The project file is not a JSON array of records.
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueError::Io(e) => write!(f, "Failed to read project file: {}", e),
            CatalogueError::Parse(e) => write!(f, "Failed to parse project file: {}", e),
        }
    }
}

impl std::error::Error for CatalogueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogueError::Io(e) => Some(e),
            CatalogueError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CatalogueError {
    fn from(e: std::io::Error) -> Self {
        CatalogueError::Io(e)
    }
}

impl From<serde_json::Error> for CatalogueError {
    fn from(e: serde_json::Error) -> Self {
        CatalogueError::Parse(e)
    }
}
