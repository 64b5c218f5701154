mod cached_block;

pub use cached_block::{CachedSequence, SequenceCache};
