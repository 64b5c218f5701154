mod cursor;
mod decoder;
mod diff_counts;
mod edit_code;
mod error;
mod refiner;
mod run;

pub use cursor::Cursor;
pub use decoder::decode_trace;
pub use diff_counts::DiffCounts;
pub use edit_code::{EditCode, RAW_DELETION, RAW_INSERTION, RAW_MATCH, RAW_MISMATCH};
pub use error::CodecError;
pub use refiner::refine_runs;
pub use run::{append_run, expand_runs, is_well_formed, query_span, target_span, Run};
