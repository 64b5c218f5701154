use super::{CodecError, EditCode, Run};

/// Run-length encodes a raw per-base trace (edlib codes).
pub fn decode_trace(trace: &[u8]) -> Result<Vec<Run>, CodecError> {
    let mut runs = Vec::new();
    let mut current: Option<Run> = None;

    for &code in trace {
        let op = EditCode::from_raw(code)?;
        current = match current {
            Some(mut run) if run.op == op => {
                run.len += 1;
                Some(run)
            }
            Some(run) => {
                runs.push(run);
                Some(Run::new(op, 1))
            }
            None => Some(Run::new(op, 1)),
        };
    }
    if let Some(run) = current {
        runs.push(run);
    }

    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{expand_runs, is_well_formed};
    use EditCode::*;

    #[test]
    fn test_decode_empty_trace() {
        assert_eq!(decode_trace(&[]), Ok(Vec::new()));
    }

    #[test]
    fn test_decode_single_op() {
        assert_eq!(decode_trace(&[1]), Ok(vec![Run::new(Insertion, 1)]));
        assert_eq!(decode_trace(&[0, 0, 0, 0]), Ok(vec![Run::new(Match, 4)]));
    }

    #[test]
    fn test_decode_mixed_trace() {
        let trace = [0, 0, 3, 0, 1, 1, 2, 0, 0, 0];
        assert_eq!(
            decode_trace(&trace),
            Ok(vec![
                Run::new(Match, 2),
                Run::new(Mismatch, 1),
                Run::new(Match, 1),
                Run::new(Insertion, 2),
                Run::new(Deletion, 1),
                Run::new(Match, 3),
            ])
        );
    }

    #[test]
    fn test_decode_roundtrip_and_well_formed() {
        let trace = [2, 2, 0, 3, 3, 3, 1, 0, 2, 1, 1, 0];
        let runs = decode_trace(&trace).unwrap();
        assert!(is_well_formed(&runs));
        let total: usize = runs.iter().map(|run| run.len).sum();
        assert_eq!(total, trace.len());
        let expanded: Vec<u8> = expand_runs(&runs).into_iter().map(|op| op.to_raw()).collect();
        assert_eq!(expanded, trace);
    }

    #[test]
    fn test_decode_unknown_code() {
        assert_eq!(
            decode_trace(&[0, 0, 4, 1]),
            Err(CodecError::UnknownOperation { code: 4 })
        );
        assert_eq!(
            decode_trace(&[b'M']),
            Err(CodecError::UnknownOperation { code: b'M' })
        );
    }
}
