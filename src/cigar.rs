use crate::codec::{append_run, EditCode, Run};
use crate::utils::Result;
use itertools::Itertools;

/// Renders runs as an extended CIGAR string (`=`, `X`, `I`, `D`).
pub fn runs_to_cigar_string(runs: &[Run]) -> String {
    if runs.is_empty() {
        return "*".to_string();
    }
    runs.iter().join("")
}

/// Parses an extended CIGAR string. `M` is rejected since it hides match/mismatch state.
pub fn cigar_string_to_runs(cigar: &str) -> Result<Vec<Run>> {
    let mut runs = Vec::new();
    if cigar.is_empty() || cigar == "*" {
        return Ok(runs);
    }

    let mut len_start = 0;
    for (index, op_char) in cigar.char_indices() {
        if op_char.is_ascii_digit() {
            continue;
        }
        let len_str = &cigar[len_start..index];
        if len_str.is_empty() {
            return Err(format!(
                "Missing length before '{}' in CIGAR string: {}",
                op_char, cigar
            ));
        }
        let len: usize = len_str
            .parse()
            .map_err(|e| format!("Invalid length '{}' in CIGAR string {}: {}", len_str, cigar, e))?;
        if len == 0 {
            return Err(format!("Zero-length operation in CIGAR string: {}", cigar));
        }
        let op = EditCode::from_cigar_char(op_char).ok_or_else(|| {
            format!(
                "Unsupported CIGAR operation '{}' (expected one of =XID): {}",
                op_char, cigar
            )
        })?;
        if let Some(last) = runs.last().filter(|last| last.op == op) {
            if last.len.checked_add(len).is_none() {
                return Err(format!(
                    "Operation length overflows in CIGAR string: {}",
                    cigar
                ));
            }
        }
        append_run(&mut runs, op, len);
        len_start = index + op_char.len_utf8();
    }

    if len_start != cigar.len() {
        return Err(format!("CIGAR string ends without an operation: {}", cigar));
    }
    Ok(runs)
}
