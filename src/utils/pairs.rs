use crate::utils::Result;
use std::io::BufRead;

/// One line of a pairs or alignments table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentPair {
    pub query: String,
    pub target: String,
    pub cigar: Option<String>,
}

impl AlignmentPair {
    /// Parses `query<TAB>target` or, with `with_cigar`, `query<TAB>target<TAB>cigar`.
    pub fn from_line(line: &str, with_cigar: bool) -> Result<Self> {
        let expected_field_count = if with_cigar { 3 } else { 2 };
        let fields: Vec<&str> = line.split('\t').map(|field| field.trim()).collect();
        if fields.len() != expected_field_count || fields.iter().any(|field| field.is_empty()) {
            let format = if with_cigar {
                "'query target cigar'"
            } else {
                "'query target'"
            };
            return Err(format!(
                "Expected {} tab-separated fields in the format {}, found: {}",
                expected_field_count, format, line
            ));
        }

        Ok(AlignmentPair {
            query: fields[0].to_string(),
            target: fields[1].to_string(),
            cigar: fields.get(2).map(|cigar| cigar.to_string()),
        })
    }
}

pub fn read_pairs<R: BufRead>(reader: R, with_cigar: bool) -> Result<Vec<AlignmentPair>> {
    let mut pairs = Vec::new();
    for (line_number, result_line) in reader.lines().enumerate() {
        let line =
            result_line.map_err(|e| format!("Error at input line {}: {}", line_number + 1, e))?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let pair = AlignmentPair::from_line(&line, with_cigar)
            .map_err(|e| format!("Error at input line {}: {}", line_number + 1, e))?;
        pairs.push(pair);
    }
    Ok(pairs)
}
