use crate::wfa_aligner::Penalties;

/// Gap-affine scoring of the pairwise aligner (non-negative penalties).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlnScoring {
    pub mism_scr: i32,
    pub gapo_scr: i32,
    pub gape_scr: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    Indel,
    Edit,
    Affine,
}

impl DistanceMetric {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "indel" => Some(DistanceMetric::Indel),
            "edit" => Some(DistanceMetric::Edit),
            "affine" => Some(DistanceMetric::Affine),
            _ => None,
        }
    }

    pub fn penalties(&self, scoring: &AlnScoring) -> Penalties {
        match self {
            DistanceMetric::Indel => Penalties::Indel,
            DistanceMetric::Edit => Penalties::Edit,
            DistanceMetric::Affine => Penalties::Affine {
                mismatch: scoring.mism_scr,
                gap_opening: scoring.gapo_scr,
                gap_extension: scoring.gape_scr,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalties_from_metric() {
        let scoring = AlnScoring {
            mism_scr: 4,
            gapo_scr: 6,
            gape_scr: 2,
        };
        assert_eq!(
            DistanceMetric::from_name("affine").unwrap().penalties(&scoring),
            Penalties::Affine {
                mismatch: 4,
                gap_opening: 6,
                gap_extension: 2,
            }
        );
        assert_eq!(DistanceMetric::Indel.penalties(&scoring), Penalties::Indel);
        assert_eq!(DistanceMetric::from_name("lcs"), None);
    }
}
