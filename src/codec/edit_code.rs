use super::CodecError;
use std::fmt;

/// Raw trace codes in the edlib convention.
pub const RAW_MATCH: u8 = 0;
pub const RAW_INSERTION: u8 = 1;
pub const RAW_DELETION: u8 = 2;
pub const RAW_MISMATCH: u8 = 3;

/// Per-base outcome of one aligned position.
///
/// An insertion consumes a query base only, a deletion consumes a target base only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditCode {
    Match,
    Mismatch,
    Insertion,
    Deletion,
}

impl EditCode {
    pub fn from_raw(code: u8) -> Result<Self, CodecError> {
        match code {
            RAW_MATCH => Ok(EditCode::Match),
            RAW_INSERTION => Ok(EditCode::Insertion),
            RAW_DELETION => Ok(EditCode::Deletion),
            RAW_MISMATCH => Ok(EditCode::Mismatch),
            _ => Err(CodecError::UnknownOperation { code }),
        }
    }

    pub fn to_raw(self) -> u8 {
        match self {
            EditCode::Match => RAW_MATCH,
            EditCode::Insertion => RAW_INSERTION,
            EditCode::Deletion => RAW_DELETION,
            EditCode::Mismatch => RAW_MISMATCH,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            EditCode::Match => '=',
            EditCode::Mismatch => 'X',
            EditCode::Insertion => 'I',
            EditCode::Deletion => 'D',
        }
    }

    pub fn from_cigar_char(op_char: char) -> Option<Self> {
        match op_char {
            '=' => Some(EditCode::Match),
            'X' => Some(EditCode::Mismatch),
            'I' => Some(EditCode::Insertion),
            'D' => Some(EditCode::Deletion),
            _ => None,
        }
    }

    pub fn consumes_query(self) -> bool {
        !matches!(self, EditCode::Deletion)
    }

    pub fn consumes_target(self) -> bool {
        !matches!(self, EditCode::Insertion)
    }

    /// True for an insertion next to a deletion, in either order.
    pub fn is_opposite_indel(self, other: EditCode) -> bool {
        matches!(
            (self, other),
            (EditCode::Insertion, EditCode::Deletion) | (EditCode::Deletion, EditCode::Insertion)
        )
    }
}

impl fmt::Display for EditCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_edlib_codes() {
        assert_eq!(EditCode::from_raw(0), Ok(EditCode::Match));
        assert_eq!(EditCode::from_raw(1), Ok(EditCode::Insertion));
        assert_eq!(EditCode::from_raw(2), Ok(EditCode::Deletion));
        assert_eq!(EditCode::from_raw(3), Ok(EditCode::Mismatch));
    }

    #[test]
    fn test_from_raw_unknown_code() {
        assert_eq!(
            EditCode::from_raw(7),
            Err(CodecError::UnknownOperation { code: 7 })
        );
    }

    #[test]
    fn test_raw_code_is_reversible() {
        for code in [RAW_MATCH, RAW_INSERTION, RAW_DELETION, RAW_MISMATCH] {
            assert_eq!(EditCode::from_raw(code).unwrap().to_raw(), code);
        }
    }

    #[test]
    fn test_consumed_sequences() {
        assert!(EditCode::Match.consumes_query() && EditCode::Match.consumes_target());
        assert!(EditCode::Mismatch.consumes_query() && EditCode::Mismatch.consumes_target());
        assert!(EditCode::Insertion.consumes_query() && !EditCode::Insertion.consumes_target());
        assert!(!EditCode::Deletion.consumes_query() && EditCode::Deletion.consumes_target());
    }

    #[test]
    fn test_opposite_indel() {
        assert!(EditCode::Insertion.is_opposite_indel(EditCode::Deletion));
        assert!(EditCode::Deletion.is_opposite_indel(EditCode::Insertion));
        assert!(!EditCode::Insertion.is_opposite_indel(EditCode::Insertion));
        assert!(!EditCode::Match.is_opposite_indel(EditCode::Deletion));
    }

    #[test]
    fn test_cigar_chars() {
        assert_eq!(EditCode::from_cigar_char('X'), Some(EditCode::Mismatch));
        assert_eq!(EditCode::from_cigar_char('M'), None);
        assert_eq!(EditCode::Deletion.to_string(), "D");
    }
}
