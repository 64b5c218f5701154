use crate::cli::AlignArgs;
use crate::commands::pipeline::{load_pairs, load_sequences, log_summary, process_pairs};
use crate::utils::Result;
use crate::wfa_aligner::{AlignmentScope, MemoryModel, Penalties, WFAligner};
use crate::workflows;
use rayon::ThreadPoolBuilder;
use std::cell::RefCell;

#[derive(Debug, Clone)]
struct ThreadContextParams {
    penalties: Penalties,
}

thread_local! {
    static CTX_PARAMS: RefCell<Option<ThreadContextParams>> = const { RefCell::new(None) };
}

fn create_thread_local_aligner() -> WFAligner {
    CTX_PARAMS.with(|ctx_cell| {
        let penalties = ctx_cell
            .borrow()
            .as_ref()
            .expect("Thread context parameters not initialized for WFA aligner")
            .penalties;
        let aligner = WFAligner::builder(AlignmentScope::Alignment, MemoryModel::MemoryHigh)
            .penalties(penalties)
            .build();
        log::trace!(
            "Created aligner with {:?} penalties on thread {:?}",
            aligner.penalties(),
            std::thread::current().id()
        );
        aligner
    })
}

thread_local! {
    pub static THREAD_ALIGNER: RefCell<WFAligner> = RefCell::new(create_thread_local_aligner());
}

pub fn align(args: AlignArgs) -> Result<()> {
    let pairs = load_pairs(&args.pairs_path, false)?;
    let cache = load_sequences(&args.sequences_path, &pairs)?;

    let penalties = args.distance.penalties(&args.aln_scoring);
    log::debug!("Aligning with {:?} penalties", penalties);
    if args.no_refine {
        log::info!("Indel refinement disabled");
    }

    log::debug!(
        "Initializing thread pool with {} threads...",
        args.num_threads
    );
    let pool = initialize_thread_pool(args.num_threads, ThreadContextParams { penalties })?;

    let refine = !args.no_refine;
    let summary = process_pairs(&pool, &pairs, &args.output_path, |pair| {
        THREAD_ALIGNER.with(|aligner_cell| {
            let mut aligner = aligner_cell.borrow_mut();
            workflows::align_pair(&cache, pair, &mut aligner, refine)
        })
    })?;
    log_summary(&summary);

    Ok(())
}

fn initialize_thread_pool(
    num_threads: usize,
    thread_context: ThreadContextParams,
) -> Result<rayon::ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("alntrace-align-{}", i))
        .start_handler(move |_thread_index| {
            CTX_PARAMS.with(|cell| {
                *cell.borrow_mut() = Some(thread_context.clone());
            });
            log::trace!("Initialized thread {:?}", std::thread::current().id());
        })
        .exit_handler(|_thread_index| {
            CTX_PARAMS.with(|cell| {
                *cell.borrow_mut() = None;
            });
        })
        .build()
        .map_err(|e| format!("Failed to initialize thread pool: {}", e))
}
