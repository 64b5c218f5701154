use super::{CodecError, EditCode, Run};

/// Number of trace positions per edit operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffCounts {
    pub num_eq: usize,
    pub num_x: usize,
    pub num_i: usize,
    pub num_d: usize,
}

impl DiffCounts {
    /// Counts a raw trace of edlib codes.
    pub fn from_trace(trace: &[u8]) -> Result<Self, CodecError> {
        let mut counts = Self::default();
        for &code in trace {
            counts.add(EditCode::from_raw(code)?, 1);
        }
        Ok(counts)
    }

    pub fn from_runs(runs: &[Run]) -> Self {
        let mut counts = Self::default();
        for run in runs {
            counts.add(run.op, run.len);
        }
        counts
    }

    fn add(&mut self, op: EditCode, len: usize) {
        match op {
            EditCode::Match => self.num_eq += len,
            EditCode::Mismatch => self.num_x += len,
            EditCode::Insertion => self.num_i += len,
            EditCode::Deletion => self.num_d += len,
        }
    }

    pub fn total(&self) -> usize {
        self.num_eq + self.num_x + self.num_i + self.num_d
    }

    pub fn edit_distance(&self) -> usize {
        self.num_x + self.num_i + self.num_d
    }

    /// Fraction of alignment columns that are matches; 0.0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.num_eq as f64 / total as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_trace;
    use EditCode::*;

    #[test]
    fn test_counts_empty() {
        assert_eq!(DiffCounts::from_trace(&[]), Ok(DiffCounts::default()));
        assert_eq!(DiffCounts::from_runs(&[]), DiffCounts::default());
        assert_eq!(DiffCounts::default().identity(), 0.0);
    }

    #[test]
    fn test_counts_from_trace() {
        let counts = DiffCounts::from_trace(&[0, 0, 3, 1, 2, 2, 0]).unwrap();
        assert_eq!(
            counts,
            DiffCounts {
                num_eq: 3,
                num_x: 1,
                num_i: 1,
                num_d: 2,
            }
        );
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.edit_distance(), 4);
    }

    #[test]
    fn test_counts_from_trace_unknown_code() {
        assert_eq!(
            DiffCounts::from_trace(&[0, 5]),
            Err(CodecError::UnknownOperation { code: 5 })
        );
    }

    #[test]
    fn test_counts_from_runs() {
        let runs = vec![
            Run::new(Match, 10),
            Run::new(Insertion, 2),
            Run::new(Match, 3),
            Run::new(Deletion, 4),
            Run::new(Mismatch, 1),
        ];
        let counts = DiffCounts::from_runs(&runs);
        assert_eq!(counts.num_eq, 13);
        assert_eq!(counts.num_x, 1);
        assert_eq!(counts.num_i, 2);
        assert_eq!(counts.num_d, 4);
        assert_eq!(counts.total(), 20);
        assert!((counts.identity() - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_counts_agree_between_trace_and_runs() {
        let trace = [0, 0, 1, 1, 1, 0, 3, 2, 0, 0, 3, 3];
        let runs = decode_trace(&trace).unwrap();
        assert_eq!(
            DiffCounts::from_trace(&trace).unwrap(),
            DiffCounts::from_runs(&runs)
        );
    }
}
