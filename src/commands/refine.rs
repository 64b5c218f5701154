use crate::cli::RefineArgs;
use crate::commands::pipeline::{load_pairs, load_sequences, log_summary, process_pairs};
use crate::utils::Result;
use crate::workflows;
use rayon::ThreadPoolBuilder;

pub fn refine(args: RefineArgs) -> Result<()> {
    let alignments = load_pairs(&args.alignments_path, true)?;
    let cache = load_sequences(&args.sequences_path, &alignments)?;

    log::debug!(
        "Initializing thread pool with {} threads...",
        args.num_threads
    );
    let pool = ThreadPoolBuilder::new()
        .num_threads(args.num_threads)
        .thread_name(|i| format!("alntrace-refine-{}", i))
        .build()
        .map_err(|e| format!("Failed to initialize thread pool: {}", e))?;

    let summary = process_pairs(&pool, &alignments, &args.output_path, |pair| {
        workflows::refine_pair(&cache, pair)
    })?;
    log_summary(&summary);

    Ok(())
}
