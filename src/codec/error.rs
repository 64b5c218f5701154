use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A trace code outside the four edit operations.
    UnknownOperation { code: u8 },
    /// The run sequence walks past the end of the query or the target.
    MalformedAlignment {
        query_pos: usize,
        target_pos: usize,
        query_len: usize,
        target_len: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnknownOperation { code } => {
                write!(f, "Unknown alignment operation: {}", code)
            }
            CodecError::MalformedAlignment {
                query_pos,
                target_pos,
                query_len,
                target_len,
            } => write!(
                f,
                "Invalid CIGAR string: queryPos = {}, targetPos = {}, queryLen = {}, targetLen = {}",
                query_pos, target_pos, query_len, target_len
            ),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<CodecError> for String {
    fn from(err: CodecError) -> Self {
        err.to_string()
    }
}
