//! Crate errors.

use thiserror::Error;

/// Errors reported when an operation would violate a request invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// A bulk replacement does not match the size of its paired collection.
    #[error("{collection} replacement has {actual} entries, expected {expected}")]
    LengthMismatch {
        collection: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Security levels are offered for fewer clouds than the request has nodes.
    #[error("security levels are offered for {clouds} clouds, but the request has {nodes} nodes")]
    MissingCloudSecurity { nodes: usize, clouds: usize },
}

/// Errors reported when reading a request from the static file format.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The expected section marker was not found.
    #[error("line {line}: expected section marker {expected}")]
    MissingSection { line: usize, expected: &'static str },
    /// A line could not be parsed as a value of the expected kind.
    #[error("line {line}: invalid value {value:?}")]
    InvalidValue { line: usize, value: String },
    /// An edge endpoint does not name any node of the request.
    #[error("line {line}: edge endpoint {name} does not match any node")]
    UnknownEndpoint { line: usize, name: String },
    #[error("unexpected end of file")]
    UnexpectedEof,
}
