//! # alntrace
//! Run-length encoding and refinement of pairwise alignment traces.
//!
//! An aligner reports its trace as one edit code per alignment column
//! (`0` match, `1` insertion, `2` deletion, `3` mismatch). [`codec::decode_trace`]
//! compresses it into runs, [`codec::refine_runs`] collapses adjacent
//! insertion/deletion pairs into match and mismatch diagonals by comparing the
//! bases they cover, and [`codec::DiffCounts`] tallies the operations.
//!
//! The `alntrace` binary applies the codec to sequence pairs from an indexed FASTA:
//! ```bash
//!  ./alntrace align --sequences seqs.fasta --pairs pairs.tsv --output out.tsv.gz
//!  ./alntrace refine --sequences seqs.fasta --alignments alns.tsv
//! ```

pub mod cigar;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod seqdb;
pub mod utils;
pub mod wfa_aligner;
pub mod workflows;
pub mod writers;

use wfa2_sys as wfa2;
