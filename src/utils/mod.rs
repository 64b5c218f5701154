mod align;
mod io_utils;
mod pairs;
mod readers;
mod util;

pub use align::{AlnScoring, DistanceMetric};
pub use io_utils::{create_output_writer, OutputWriter};
pub use pairs::{read_pairs, AlignmentPair};
pub use readers::{open_sequence_reader, open_table_reader};
pub use util::{handle_error_and_exit, Result};
