use super::{CodecError, EditCode};

/// Position in the emitted trace, the query and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub trace_pos: usize,
    pub query_pos: usize,
    pub target_pos: usize,
}

impl Cursor {
    pub fn new(trace_pos: usize, query_pos: usize, target_pos: usize) -> Self {
        Self {
            trace_pos,
            query_pos,
            target_pos,
        }
    }

    /// Moves past `len` positions of `op`. Positions saturate at `usize::MAX`,
    /// which no bounds check accepts.
    pub fn advance(self, op: EditCode, len: usize) -> Self {
        let step = |consumed: bool| if consumed { len } else { 0 };
        Self {
            trace_pos: self.trace_pos.saturating_add(len),
            query_pos: self.query_pos.saturating_add(step(op.consumes_query())),
            target_pos: self.target_pos.saturating_add(step(op.consumes_target())),
        }
    }

    /// Both positions lie within `0..=len`.
    pub fn ensure_within(self, query_len: usize, target_len: usize) -> Result<Self, CodecError> {
        if self.query_pos > query_len || self.target_pos > target_len {
            return Err(self.malformed(query_len, target_len));
        }
        Ok(self)
    }

    /// Both positions point at a readable base.
    pub fn ensure_readable(self, query_len: usize, target_len: usize) -> Result<Self, CodecError> {
        if self.query_pos >= query_len || self.target_pos >= target_len {
            return Err(self.malformed(query_len, target_len));
        }
        Ok(self)
    }

    fn malformed(self, query_len: usize, target_len: usize) -> CodecError {
        CodecError::MalformedAlignment {
            query_pos: self.query_pos,
            target_pos: self.target_pos,
            query_len,
            target_len,
        }
    }
}
