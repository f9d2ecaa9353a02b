//! Errors for query translation.

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    CollectionNotFound(String),
    ColumnNotFoundInCollection(String, String),
}

/// Display errors.
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::CollectionNotFound(collection_name) => {
                write!(f, "Collection '{collection_name}' not found.")
            }
            Error::ColumnNotFoundInCollection(column_name, collection_name) => write!(
                f,
                "Column '{column_name}' not found in collection '{collection_name}'."
            ),
        }
    }
}

impl std::error::Error for Error {}
