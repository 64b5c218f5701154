use crate::codec::{RAW_DELETION, RAW_INSERTION, RAW_MATCH, RAW_MISMATCH};
use crate::utils::Result;
use crate::wfa2;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryModel {
    MemoryHigh,
    MemoryMed,
    MemoryLow,
    MemoryUltraLow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentScope {
    Score,
    Alignment,
}

impl From<u32> for AlignmentScope {
    fn from(value: u32) -> Self {
        match value {
            wfa2::alignment_scope_t_compute_score => AlignmentScope::Score,
            wfa2::alignment_scope_t_compute_alignment => AlignmentScope::Alignment,
            _ => panic!("Unknown alignment scope: {}", value),
        }
    }
}

/// Penalty model used by the aligner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalties {
    Indel, // Conceptually: mismatch=inf, indel=1
    Edit,  // Conceptually: mismatch=1, indel=1
    Affine {
        mismatch: i32,
        gap_opening: i32,
        gap_extension: i32,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum AlignmentStatus {
    // OK Status (>=0)
    StatusAlgCompleted = wfa2::WF_STATUS_ALG_COMPLETED as isize,
    StatusAlgPartial = wfa2::WF_STATUS_ALG_PARTIAL as isize,
    // FAILED Status (<0)
    StatusMaxStepsReached = wfa2::WF_STATUS_MAX_STEPS_REACHED as isize,
    StatusOOM = wfa2::WF_STATUS_OOM as isize,
    StatusUnattainable = wfa2::WF_STATUS_UNATTAINABLE as isize,
}

impl fmt::Display for AlignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentStatus::StatusAlgCompleted => write!(f, "StatusAlgCompleted"),
            AlignmentStatus::StatusAlgPartial => write!(f, "StatusAlgPartial"),
            AlignmentStatus::StatusMaxStepsReached => write!(f, "StatusMaxStepsReached"),
            AlignmentStatus::StatusOOM => write!(f, "StatusOOM"),
            AlignmentStatus::StatusUnattainable => write!(f, "StatusUnattainable"),
        }
    }
}

impl From<i32> for AlignmentStatus {
    fn from(value: i32) -> Self {
        match value {
            x if x == wfa2::WF_STATUS_ALG_COMPLETED as i32 => AlignmentStatus::StatusAlgCompleted,
            x if x == wfa2::WF_STATUS_ALG_PARTIAL as i32 => AlignmentStatus::StatusAlgPartial,
            wfa2::WF_STATUS_MAX_STEPS_REACHED => AlignmentStatus::StatusMaxStepsReached,
            wfa2::WF_STATUS_OOM => AlignmentStatus::StatusOOM,
            wfa2::WF_STATUS_UNATTAINABLE => AlignmentStatus::StatusUnattainable,
            _ => panic!("Unknown alignment status: {}", value),
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct WFAttributes {
    inner: wfa2::wavefront_aligner_attr_t,
}

impl WFAttributes {
    fn default() -> Self {
        Self {
            inner: unsafe { wfa2::wavefront_aligner_attr_default },
        }
    }

    fn memory_model(mut self, memory_model: MemoryModel) -> Self {
        let memory_mode = match memory_model {
            MemoryModel::MemoryHigh => wfa2::wavefront_memory_t_wavefront_memory_high,
            MemoryModel::MemoryMed => wfa2::wavefront_memory_t_wavefront_memory_med,
            MemoryModel::MemoryLow => wfa2::wavefront_memory_t_wavefront_memory_low,
            MemoryModel::MemoryUltraLow => wfa2::wavefront_memory_t_wavefront_memory_ultralow,
        };
        self.inner.memory_mode = memory_mode;
        self
    }

    fn alignment_scope(mut self, alignment_scope: AlignmentScope) -> Self {
        let alignment_scope = match alignment_scope {
            AlignmentScope::Score => wfa2::alignment_scope_t_compute_score,
            AlignmentScope::Alignment => wfa2::alignment_scope_t_compute_alignment,
        };
        self.inner.alignment_scope = alignment_scope;
        self
    }

    fn penalties(mut self, penalties: Penalties) -> Self {
        match penalties {
            Penalties::Indel => {
                self.inner.distance_metric = wfa2::distance_metric_t_indel;
            }
            Penalties::Edit => {
                self.inner.distance_metric = wfa2::distance_metric_t_edit;
            }
            Penalties::Affine {
                mismatch,
                gap_opening,
                gap_extension,
            } => {
                self.inner.distance_metric = wfa2::distance_metric_t_gap_affine;
                self.inner.affine_penalties.match_ = 0;
                self.inner.affine_penalties.mismatch = mismatch; // (Penalty representation usually X > 0)
                self.inner.affine_penalties.gap_opening = gap_opening; // (Penalty representation usually O > 0)
                self.inner.affine_penalties.gap_extension = gap_extension; // (Penalty representation usually E > 0)
            }
        }
        self
    }

    fn no_heuristic(mut self) -> Self {
        self.inner.heuristic.strategy = wfa2::wf_heuristic_strategy_wf_heuristic_none;
        self
    }
}

pub struct WFAlignerBuilder {
    attributes: WFAttributes,
    penalties: Option<Penalties>,
}

impl WFAlignerBuilder {
    pub fn new(alignment_scope: AlignmentScope, memory_model: MemoryModel) -> Self {
        let attributes = WFAttributes::default()
            .memory_model(memory_model)
            .alignment_scope(alignment_scope)
            .no_heuristic();
        Self {
            attributes,
            penalties: None,
        }
    }

    /// Configure for indel penalties (Longest Common Subsequence - LCS)
    pub fn indel(self) -> Self {
        self.penalties(Penalties::Indel)
    }

    /// Configure for edit penalties (Levenshtein)
    pub fn edit(self) -> Self {
        self.penalties(Penalties::Edit)
    }

    /// Configure for gap-affine penalties (Smith-Waterman-Gotoh) with match_ = 0
    pub fn affine(self, mismatch: i32, gap_opening: i32, gap_extension: i32) -> Self {
        self.penalties(Penalties::Affine {
            mismatch,
            gap_opening,
            gap_extension,
        })
    }

    pub fn penalties(mut self, penalties: Penalties) -> Self {
        self.attributes = self.attributes.penalties(penalties);
        self.penalties = Some(penalties);
        self
    }

    pub fn build(self) -> WFAligner {
        let penalties = self
            .penalties
            .expect("Must set a penalty model before building the aligner");

        let mut aligner = WFAligner {
            attributes: self.attributes,
            penalties,
            inner: std::ptr::null_mut(),
        };

        unsafe {
            aligner.inner = wfa2::wavefront_aligner_new(&mut aligner.attributes.inner);
        }

        aligner
    }
}

pub struct WFAligner {
    attributes: WFAttributes,
    penalties: Penalties,
    inner: *mut wfa2::wavefront_aligner_t,
}

impl WFAligner {
    pub fn builder(alignment_scope: AlignmentScope, memory_model: MemoryModel) -> WFAlignerBuilder {
        WFAlignerBuilder::new(alignment_scope, memory_model)
    }

    pub fn penalties(&self) -> Penalties {
        self.penalties
    }
}

impl Drop for WFAligner {
    fn drop(&mut self) {
        unsafe {
            if !self.inner.is_null() {
                wfa2::wavefront_aligner_delete(self.inner);
            }
        }
    }
}

impl WFAligner {
    fn set_alignment_end_to_end(&mut self) {
        unsafe {
            wfa2::wavefront_aligner_set_alignment_end_to_end(self.inner);
        }
    }

    pub fn align_end_to_end(&mut self, pattern: &[u8], text: &[u8]) -> AlignmentStatus {
        let status = unsafe {
            self.set_alignment_end_to_end();
            wfa2::wavefront_align(
                self.inner,
                pattern.as_ptr() as *const i8,
                pattern.len() as i32,
                text.as_ptr() as *const i8,
                text.len() as i32,
            )
        };
        AlignmentStatus::from(status)
    }

    pub fn score(&self) -> i32 {
        unsafe { *(*self.inner).cigar }.score
    }

    /// WFA operation characters (`M`, `X`, `I`, `D`) of the last alignment.
    pub fn cigar_operations(&self) -> Vec<u8> {
        if AlignmentScope::from(self.attributes.inner.alignment_scope) == AlignmentScope::Score {
            return Vec::new();
        }

        let cigar = match unsafe { (*self.inner).cigar.as_ref() } {
            Some(cigar) => cigar,
            None => return Vec::new(),
        };

        if cigar.operations.is_null() || cigar.begin_offset > cigar.end_offset {
            return Vec::new();
        }

        let operations = unsafe {
            let begin_offset = cigar.begin_offset;
            let cigar_operations = cigar.operations.offset(begin_offset as isize) as *const u8;
            let cigar_length = (cigar.end_offset - begin_offset) as usize;
            std::slice::from_raw_parts(cigar_operations, cigar_length)
        };
        operations.to_vec()
    }

    /// Aligns `query` against `target` end-to-end and returns the raw trace in edlib codes.
    ///
    /// The target is the WFA pattern and the query is the text, so a WFA insertion
    /// consumes a query base and maps onto an edlib insertion.
    pub fn align_pair(&mut self, query: &[u8], target: &[u8]) -> Result<Vec<u8>> {
        let status = self.align_end_to_end(target, query);
        if status != AlignmentStatus::StatusAlgCompleted {
            return Err(format!("Alignment did not complete: {}", status));
        }
        self.cigar_operations()
            .into_iter()
            .map(wfa_op_to_raw_code)
            .collect()
    }
}

fn wfa_op_to_raw_code(op: u8) -> Result<u8> {
    match op {
        b'M' => Ok(RAW_MATCH),
        b'I' => Ok(RAW_INSERTION),
        b'D' => Ok(RAW_DELETION),
        b'X' => Ok(RAW_MISMATCH),
        _ => Err(format!("Invalid alignment operation character {}", op)),
    }
}
