use thiserror::Error;

pub type Result<T> = std::result::Result<T, GrammarError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    /// A production line without exactly one `->`, or with nothing on its left side.
    #[error("Line {line}: invalid production format: {content:?}")]
    InvalidFormat { line: usize, content: String },

    #[error("no fresh non-terminal left to allocate")]
    ResourceExhausted,
}
