use crate::seqdb::SequenceCache;
use crate::utils::{open_sequence_reader, open_table_reader, read_pairs, AlignmentPair, Result};
use crate::workflows::PairReport;
use crate::writers::ReportWriter;
use crossbeam_channel::{bounded, Sender};
use rayon::{
    iter::{IntoParallelRefIterator, ParallelIterator},
    ThreadPool,
};
use std::{
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
    thread,
};

const CHANNEL_BUFFER_SIZE: usize = 2048;

/// Per-run tallies reported at the end of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub num_pairs: usize,
    pub num_written: usize,
    pub num_failed: usize,
}

pub fn load_pairs(path: &Path, with_cigar: bool) -> Result<Vec<AlignmentPair>> {
    let reader = open_table_reader(path)?;
    let pairs = read_pairs(reader, with_cigar)?;
    log::info!("Loaded {} pairs from {}", pairs.len(), path.display());
    Ok(pairs)
}

/// Caches every sequence named by `pairs` from the indexed FASTA at `path`.
pub fn load_sequences(path: &Path, pairs: &[AlignmentPair]) -> Result<SequenceCache> {
    let reader = open_sequence_reader(path)?;
    let names: Vec<&str> = pairs
        .iter()
        .flat_map(|pair| [pair.query.as_str(), pair.target.as_str()])
        .collect();
    let cache = SequenceCache::load_from_fasta(&reader, &names)?;
    log::info!("Cached {} sequences from {}", cache.len(), path.display());
    Ok(cache)
}

/// Runs `process` over all pairs on `pool` and streams the reports to `output_path`.
///
/// Rows are written in completion order. A pair that fails is logged and
/// counted without stopping the run.
pub fn process_pairs<F>(
    pool: &ThreadPool,
    pairs: &[AlignmentPair],
    output_path: &str,
    process: F,
) -> Result<RunSummary>
where
    F: Fn(&AlignmentPair) -> Result<PairReport> + Sync,
{
    let mut report_writer = ReportWriter::new(output_path)?;

    let (sender_report, receiver_report) = bounded::<PairReport>(CHANNEL_BUFFER_SIZE);
    let writer_thread = thread::spawn(move || -> Result<usize> {
        let mut num_written = 0;
        for report in &receiver_report {
            report_writer.write(&report)?;
            num_written += 1;
        }
        report_writer.finish()?;
        Ok(num_written)
    });

    let num_failed = AtomicUsize::new(0);
    pool.install(|| {
        pairs
            .par_iter()
            .for_each_with(sender_report.clone(), |s, pair| {
                if !process_pair(pair, &process, s) {
                    num_failed.fetch_add(1, Ordering::Relaxed);
                }
            });
    });

    // Clean-up
    drop(sender_report);
    let num_written = writer_thread
        .join()
        .map_err(|_| "Writer thread panicked".to_string())??;
    log::trace!("Writer thread finished");

    Ok(RunSummary {
        num_pairs: pairs.len(),
        num_written,
        num_failed: num_failed.into_inner(),
    })
}

fn process_pair<F>(pair: &AlignmentPair, process: &F, sender_report: &Sender<PairReport>) -> bool
where
    F: Fn(&AlignmentPair) -> Result<PairReport>,
{
    match process(pair) {
        Ok(report) => {
            if let Err(e) = sender_report.send(report) {
                log::error!("Failed to send report to writer thread: {}", e);
                return false;
            }
            true
        }
        Err(err) => {
            log::error!("Error processing pair {} {}: {}", pair.query, pair.target, err);
            false
        }
    }
}

pub fn log_summary(summary: &RunSummary) {
    log::info!(
        "Processed {} pairs: {} written, {} failed",
        summary.num_pairs,
        summary.num_written,
        summary.num_failed
    );
    if summary.num_failed > 0 {
        log::warn!("{} pairs could not be processed", summary.num_failed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::refine_pair;
    use rayon::ThreadPoolBuilder;
    use std::fs;

    fn pair(query: &str, target: &str, cigar: &str) -> AlignmentPair {
        AlignmentPair {
            query: query.to_string(),
            target: target.to_string(),
            cigar: Some(cigar.to_string()),
        }
    }

    #[test]
    fn test_process_pairs_counts_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        let path_str = path.to_str().unwrap();

        let cache =
            SequenceCache::from_records(vec![("q1", "ACGT"), ("t1", "AGGT")]).unwrap();
        let pairs = vec![
            pair("q1", "t1", "1=1I1D2="),
            pair("q1", "t1", "9="),
            pair("q1", "missing", "4="),
        ];
        let pool = ThreadPoolBuilder::new().num_threads(2).build().unwrap();

        let summary =
            process_pairs(&pool, &pairs, path_str, |pair| refine_pair(&cache, pair)).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                num_pairs: 3,
                num_written: 1,
                num_failed: 2,
            }
        );

        let content = fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = content.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(rows, vec!["q1\tt1\t4\t4\t1=1X2=\t3\t1\t0\t0\t0.7500"]);
    }

    #[test]
    fn test_load_pairs_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.tsv");
        fs::write(&path, "#query\ttarget\nq1\tt1\nq2\tt2\n").unwrap();
        let pairs = load_pairs(&path, false).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].target, "t1");
    }
}
