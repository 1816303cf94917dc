// src/oligo.rs
// PRIMER FACTORY
// Builds the six primers of the tRNA-gRNA style three-fragment assembly.
//
// Structure: [Tail] [Guide 12-mer?] [Binding adapter]
// - Tail: SapI (GCTCTTC) or Esp3I (CGTCTC) site plus spacer bases.
// - Guide 12-mer: last 12 bases of a guide, or of its reverse complement.
// - Binding adapter: constant footprint that anneals to the pMOD template.

use crate::error::{GuideSlot, InputError};
use crate::sequence::{reverse_complement, suffix, validate_guide};

/// Guides shorter than this are rejected before any primer is built.
pub const GUIDE_FOOTPRINT_LEN: usize = 12;

// Template footprints
pub const BIND_PROMOTER: &str = "GGCAGACATACTGTCCCAC";
pub const BIND_CSY4: &str = "CTGCCTATACGGCAGTGAAC";
pub const BIND_SCAFFOLD: &str = "GTTTTAGAGCTAGAAATAGC";

// Enzyme tails
pub const TAIL_SAPI_PROMOTER: &str = "TGCTCTTCGCGCT";
pub const TAIL_SAPI_TERMINATOR: &str = "TGCTCTTCTGAC";
pub const TAIL_ESP3I_C: &str = "TCGTCTCC";
pub const TAIL_ESP3I_A: &str = "TCGTCTCA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primer {
    pub name: &'static str,
    /// Non-annealing 5' part (enzyme tail, plus guide 12-mer where present).
    pub tail: String,
    /// The part expected to anneal to the template.
    pub footprint: &'static str,
}

impl Primer {
    fn new(name: &'static str, tail: String, footprint: &'static str) -> Self {
        Self { name, tail, footprint }
    }

    /// Full synthesized oligo, 5' to 3'.
    pub fn sequence(&self) -> String {
        format!("{}{}", self.tail, self.footprint)
    }
}

/// Forward and reverse primer for one amplicon.
#[derive(Debug, Clone, Copy)]
pub struct PrimerPair<'a> {
    pub forward: &'a Primer,
    pub reverse: &'a Primer,
}

/// The six primers, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimerSet {
    pub primers: [Primer; 6],
}

impl PrimerSet {
    /// Derives all six primers from two guides. Deterministic for identical input.
    pub fn design(guide1: &str, guide2: &str) -> Result<Self, InputError> {
        let g1 = validate_guide(guide1, GuideSlot::First, GUIDE_FOOTPRINT_LEN)?;
        let g2 = validate_guide(guide2, GuideSlot::Second, GUIDE_FOOTPRINT_LEN)?;
        Ok(Self::from_validated(&g1, &g2))
    }

    /// Builds the set from guides that already passed `validate_guide`.
    pub(crate) fn from_validated(g1: &str, g2: &str) -> Self {
        let g1_12 = suffix(g1, GUIDE_FOOTPRINT_LEN);
        let g2_12 = suffix(g2, GUIDE_FOOTPRINT_LEN);
        let g1_rc = reverse_complement(g1);
        let g2_rc = reverse_complement(g2);
        let g1_rc_12 = suffix(&g1_rc, GUIDE_FOOTPRINT_LEN);
        let g2_rc_12 = suffix(&g2_rc, GUIDE_FOOTPRINT_LEN);

        let primers = [
            Primer::new("CmYLCV_Fixed", TAIL_SAPI_PROMOTER.to_string(), BIND_PROMOTER),
            Primer::new("Csy4-gRNA1", format!("{TAIL_ESP3I_C}{g1_rc_12}"), BIND_CSY4),
            Primer::new("Rep-gRNA1", format!("{TAIL_ESP3I_A}{g1_12}"), BIND_SCAFFOLD),
            Primer::new("Csy4-gRNA2", format!("{TAIL_ESP3I_A}{g2_rc_12}"), BIND_CSY4),
            Primer::new("REP-gRNA2", format!("{TAIL_ESP3I_A}{g2_12}"), BIND_SCAFFOLD),
            Primer::new("CSY-term_Fixed", TAIL_SAPI_TERMINATOR.to_string(), BIND_CSY4),
        ];

        Self { primers }
    }

    /// Pairs for fragments 1, 2 and 3.
    pub fn pairs(&self) -> [PrimerPair<'_>; 3] {
        let p = &self.primers;
        [
            PrimerPair { forward: &p[0], reverse: &p[1] },
            PrimerPair { forward: &p[2], reverse: &p[3] },
            PrimerPair { forward: &p[4], reverse: &p[5] },
        ]
    }

    /// Ordered (name, sequence) rows for a report sink.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        self.primers.iter().map(|p| (p.name, p.sequence())).collect()
    }
}
