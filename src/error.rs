use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The selection answer could not be parsed, or the parsed index was
    /// outside the option range.
    #[error("Invalid selection: answer must be a number between 0 and {max}.")]
    SelectionOutOfRangeError { max: usize },

    /// The caller supplied a default index outside the option range.
    #[error("Default selection {default} is out of bounds for {count} options.")]
    DefaultOutOfBoundsError { default: usize, count: usize },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;
