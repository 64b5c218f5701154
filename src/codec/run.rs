use super::EditCode;
use std::fmt;

/// A single run-length encoded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub op: EditCode,
    pub len: usize,
}

impl Run {
    pub fn new(op: EditCode, len: usize) -> Self {
        Self { op, len }
    }

    pub fn query_len(&self) -> usize {
        if self.op.consumes_query() {
            self.len
        } else {
            0
        }
    }

    pub fn target_len(&self) -> usize {
        if self.op.consumes_target() {
            self.len
        } else {
            0
        }
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len, self.op.as_char())
    }
}

/// Appends `len` copies of `op`, extending the last run when it has the same operation.
/// Zero-length appends are ignored.
pub fn append_run(runs: &mut Vec<Run>, op: EditCode, len: usize) {
    if len == 0 {
        return;
    }
    match runs.last_mut() {
        Some(last) if last.op == op => last.len += len,
        _ => runs.push(Run::new(op, len)),
    }
}

pub fn expand_runs(runs: &[Run]) -> Vec<EditCode> {
    let total: usize = runs.iter().map(|run| run.len).sum();
    let mut ops = Vec::with_capacity(total);
    for run in runs {
        ops.extend(std::iter::repeat(run.op).take(run.len));
    }
    ops
}

/// Query bases covered by `runs`, or `None` if the total overflows.
pub fn query_span(runs: &[Run]) -> Option<usize> {
    runs.iter()
        .try_fold(0usize, |span, run| span.checked_add(run.query_len()))
}

/// Target bases covered by `runs`, or `None` if the total overflows.
pub fn target_span(runs: &[Run]) -> Option<usize> {
    runs.iter()
        .try_fold(0usize, |span, run| span.checked_add(run.target_len()))
}

/// No zero-length runs and no two neighbours with the same operation.
pub fn is_well_formed(runs: &[Run]) -> bool {
    runs.iter().all(|run| run.len > 0) && runs.windows(2).all(|pair| pair[0].op != pair[1].op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use EditCode::*;

    #[test]
    fn test_append_zero_length_is_noop() {
        let mut runs = vec![Run::new(Match, 3), Run::new(Insertion, 1)];
        append_run(&mut runs, Deletion, 0);
        append_run(&mut runs, Match, 0);
        assert_eq!(runs, vec![Run::new(Match, 3), Run::new(Insertion, 1)]);
    }

    #[test]
    fn test_append_same_op_merges() {
        let mut runs = vec![Run::new(Match, 3), Run::new(Insertion, 1)];
        append_run(&mut runs, Insertion, 4);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1], Run::new(Insertion, 5));
    }

    #[test]
    fn test_append_new_op_pushes() {
        let mut runs = Vec::new();
        append_run(&mut runs, Mismatch, 1);
        append_run(&mut runs, Match, 2);
        assert_eq!(runs, vec![Run::new(Mismatch, 1), Run::new(Match, 2)]);
    }

    #[test]
    fn test_spans() {
        let runs = vec![
            Run::new(Match, 10),
            Run::new(Insertion, 5),
            Run::new(Deletion, 3),
            Run::new(Mismatch, 2),
        ];
        assert_eq!(query_span(&runs), Some(17));
        assert_eq!(target_span(&runs), Some(15));
    }

    #[test]
    fn test_spans_overflow() {
        let runs = vec![
            Run::new(Match, usize::MAX),
            Run::new(Insertion, 1),
            Run::new(Match, usize::MAX),
        ];
        assert_eq!(query_span(&runs), None);
        assert_eq!(target_span(&runs), None);
        assert_eq!(target_span(&runs[..2]), Some(usize::MAX));
    }

    #[test]
    fn test_expand_runs() {
        let runs = vec![Run::new(Match, 2), Run::new(Deletion, 1)];
        assert_eq!(expand_runs(&runs), vec![Match, Match, Deletion]);
        assert!(expand_runs(&[]).is_empty());
    }

    #[test]
    fn test_well_formed() {
        assert!(is_well_formed(&[]));
        assert!(is_well_formed(&[Run::new(Match, 1), Run::new(Mismatch, 1)]));
        assert!(!is_well_formed(&[Run::new(Match, 1), Run::new(Match, 1)]));
        assert!(!is_well_formed(&[Run::new(Insertion, 0)]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Run::new(Mismatch, 12).to_string(), "12X");
    }
}
