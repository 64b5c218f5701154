use crate::cigar::{cigar_string_to_runs, runs_to_cigar_string};
use crate::codec::{decode_trace, query_span, refine_runs, target_span, DiffCounts, Run};
use crate::seqdb::{CachedSequence, SequenceCache};
use crate::utils::{AlignmentPair, Result};
use crate::wfa_aligner::WFAligner;

/// Normalized alignment of one query/target pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairReport {
    pub query: String,
    pub target: String,
    pub query_len: usize,
    pub target_len: usize,
    pub runs: Vec<Run>,
    pub counts: DiffCounts,
}

impl PairReport {
    fn new(query: &CachedSequence, target: &CachedSequence, runs: Vec<Run>) -> Self {
        let counts = DiffCounts::from_runs(&runs);
        Self {
            query: query.name.to_string(),
            target: target.name.to_string(),
            query_len: query.len(),
            target_len: target.len(),
            runs,
            counts,
        }
    }

    pub fn to_tsv_row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.4}",
            self.query,
            self.target,
            self.query_len,
            self.target_len,
            runs_to_cigar_string(&self.runs),
            self.counts.num_eq,
            self.counts.num_x,
            self.counts.num_i,
            self.counts.num_d,
            self.counts.identity()
        )
    }
}

/// Aligns a pair with `aligner`, run-length encodes the trace and optionally refines it.
pub fn align_pair(
    cache: &SequenceCache,
    pair: &AlignmentPair,
    aligner: &mut WFAligner,
    refine: bool,
) -> Result<PairReport> {
    let query = cache.get_by_name(&pair.query)?;
    let target = cache.get_by_name(&pair.target)?;

    let trace = aligner.align_pair(query.bases, target.bases)?;
    let mut runs = decode_trace(&trace)?;
    if refine {
        runs = refine_runs(query.bases, target.bases, &runs)?;
    }
    let report = PairReport::new(&query, &target, runs);
    log::trace!(
        "Aligned {} to {}: {} (edit distance {})",
        query.name,
        target.name,
        runs_to_cigar_string(&report.runs),
        report.counts.edit_distance()
    );

    Ok(report)
}

/// Refines the CIGAR string carried by the pair against the cached sequences.
pub fn refine_pair(cache: &SequenceCache, pair: &AlignmentPair) -> Result<PairReport> {
    let query = cache.get_by_name(&pair.query)?;
    let target = cache.get_by_name(&pair.target)?;

    let cigar = pair
        .cigar
        .as_deref()
        .ok_or_else(|| format!("Missing CIGAR for pair {} {}", pair.query, pair.target))?;
    let runs = cigar_string_to_runs(cigar)?;
    check_spans(&runs, &query, &target)?;

    let refined = refine_runs(query.bases, target.bases, &runs)?;
    let report = PairReport::new(&query, &target, refined);
    log::trace!(
        "Refined {} against {}: {} (edit distance {} -> {})",
        query.name,
        target.name,
        runs_to_cigar_string(&report.runs),
        DiffCounts::from_runs(&runs).edit_distance(),
        report.counts.edit_distance()
    );
    Ok(report)
}

fn check_spans(runs: &[Run], query: &CachedSequence, target: &CachedSequence) -> Result<()> {
    let (q_span, t_span) = match (query_span(runs), target_span(runs)) {
        (Some(q_span), Some(t_span)) => (q_span, t_span),
        _ => {
            return Err(format!(
                "CIGAR span overflows for {} and {}",
                query.name, target.name
            ))
        }
    };
    if q_span != query.len() || t_span != target.len() {
        return Err(format!(
            "CIGAR spans query {} and target {} bases, but {} has {} and {} has {}",
            q_span,
            t_span,
            query.name,
            query.len(),
            target.name,
            target.len()
        ));
    }
    Ok(())
}
