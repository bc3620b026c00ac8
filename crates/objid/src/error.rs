/// Errors produced when constructing or parsing object identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectIdError {
    #[error("invalid object id size: expected {expected} bytes, got {actual}")]
    InvalidSize { expected: usize, actual: usize },

    #[error("range out of bounds: offset {offset} + count {count} exceeds buffer length {len}")]
    InvalidRange {
        offset: usize,
        count: usize,
        len: usize,
    },

    #[error("invalid hex character at position {position}: '{character}'")]
    InvalidHex { position: usize, character: char },

    #[error("invalid hex length: expected {expected}, got {actual}")]
    InvalidHexLength { expected: usize, actual: usize },

    #[error("invalid hex length: {actual} is odd")]
    OddHexLength { actual: usize },
}

/// Resolve `offset`/`count` against a buffer of length `len`.
pub(crate) fn checked_range(
    len: usize,
    offset: usize,
    count: usize,
) -> Result<std::ops::Range<usize>, ObjectIdError> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(ObjectIdError::InvalidRange { offset, count, len }),
    }
}
