pub mod align;
mod pipeline;
pub mod refine;
