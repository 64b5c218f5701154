mod pair;

pub use pair::{align_pair, refine_pair, PairReport};
