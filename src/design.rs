// src/design.rs
// PIPELINE ORCHESTRATION
// primers -> 3x PCR -> backbone -> digest + assemble
// One request, one outcome: the first failing stage stops the run.

use log::{debug, info};
use sha2::{Digest, Sha256};

use crate::assembly::{assemble, Assembly};
use crate::backbone::{extract_backbone, Backbone};
use crate::enzyme::SitePolicy;
use crate::error::{DesignError, DesignWarning, GuideSlot, InputError, Stage};
use crate::oligo::{PrimerSet, GUIDE_FOOTPRINT_LEN};
use crate::pcr::amplify_pair;
use crate::sequence::{normalize, validate_guide, validate_template};

/// Everything one design run needs. Built once, passed by reference.
#[derive(Debug, Clone, Default)]
pub struct DesignConfig {
    pub pmod_sequence: String,
    pub pdirect_sequence: String,
    pub guide1: String,
    pub guide2: String,
    pub policy: SitePolicy,
}

impl DesignConfig {
    pub fn new(pmod: &str, pdirect: &str, guide1: &str, guide2: &str) -> Self {
        Self {
            pmod_sequence: normalize(pmod),
            pdirect_sequence: normalize(pdirect),
            guide1: normalize(guide1),
            guide2: normalize(guide2),
            policy: SitePolicy::Strict,
        }
    }

    pub fn with_policy(mut self, policy: SitePolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignReport {
    pub primers: PrimerSet,
    pub amplicons: [String; 3],
    pub backbone: Backbone,
    pub assembly: Assembly,
    /// Free-text FASTA header for the construct.
    pub header: String,
}

impl DesignReport {
    pub fn construct(&self) -> &str {
        &self.assembly.construct
    }

    pub fn warnings(&self) -> &[DesignWarning] {
        &self.assembly.warnings
    }

    /// SHA-256 of the construct, lowercase hex.
    pub fn fingerprint(&self) -> String {
        format!("{:x}", Sha256::digest(self.construct().as_bytes()))
    }
}

/// Header line text (without the leading '>').
pub fn construct_header(guide1: &str, guide2: &str, len: usize) -> String {
    let tag = |g: &str| g.chars().take(5).collect::<String>();
    format!("pDIRECT_21C_Assembled_gRNA1_{}_gRNA2_{} ({} bp)", tag(guide1), tag(guide2), len)
}

/// Runs the whole design. Input is checked before any simulation.
pub fn run_design(config: &DesignConfig) -> Result<DesignReport, DesignError> {
    if config.pmod_sequence.is_empty() {
        return Err(InputError::TemplateMissing { template: "pMOD" }.into());
    }
    if config.pdirect_sequence.is_empty() {
        return Err(InputError::TemplateMissing { template: "pDIRECT" }.into());
    }
    validate_template(&config.pmod_sequence, "pMOD")?;
    validate_template(&config.pdirect_sequence, "pDIRECT")?;

    let guide1 = validate_guide(&config.guide1, GuideSlot::First, GUIDE_FOOTPRINT_LEN)?;
    let guide2 = validate_guide(&config.guide2, GuideSlot::Second, GUIDE_FOOTPRINT_LEN)?;
    let primers = PrimerSet::from_validated(&guide1, &guide2);
    debug!("designed {} primers", primers.primers.len());

    let [pair1, pair2, pair3] = primers.pairs();
    let amplicons = [
        amplify_pair(&config.pmod_sequence, &pair1).map_err(DesignError::at(Stage::Pcr))?,
        amplify_pair(&config.pmod_sequence, &pair2).map_err(DesignError::at(Stage::Pcr))?,
        amplify_pair(&config.pmod_sequence, &pair3).map_err(DesignError::at(Stage::Pcr))?,
    ];
    debug!(
        "amplicons: {} / {} / {} bp",
        amplicons[0].len(),
        amplicons[1].len(),
        amplicons[2].len()
    );

    let backbone = extract_backbone(&config.pdirect_sequence).map_err(DesignError::at(Stage::Backbone))?;
    debug!("backbone {} bp (dropout {} bp)", backbone.seq.len(), backbone.dropout_len);

    let assembly = assemble(
        &backbone,
        [amplicons[0].as_str(), amplicons[1].as_str(), amplicons[2].as_str()],
        config.policy,
    )
    .map_err(DesignError::at(Stage::Assembly))?;

    let header = construct_header(&guide1, &guide2, assembly.construct.len());
    info!("assembled {}", header);

    Ok(DesignReport { primers, amplicons, backbone, assembly, header })
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Synthetic pMOD / pDIRECT pair that supports the full pipeline.

    use crate::oligo::{BIND_CSY4, BIND_PROMOTER, BIND_SCAFFOLD};
    use crate::sequence::reverse_complement;

    pub const GUIDE1: &str = "GGCAGACATACTGTCCCACG";
    pub const GUIDE2: &str = "CTGCCTATACGGCAGTGAAA";

    /// Promoter -> Csy4 site -> scaffold -> Csy4 site. The reverse footprint
    /// is present as its reverse complement, as a reverse primer sees it.
    pub fn pmod() -> String {
        let csy4_rc = reverse_complement(BIND_CSY4);
        format!(
            "ATATATATAT{BIND_PROMOTER}AACCGGTTAACCGGTT{csy4_rc}TTAATTAATT\
             {BIND_SCAFFOLD}CCAATTGGCCAATTGG{csy4_rc}ATATTATATA"
        )
    }

    pub fn pdirect() -> String {
        concat!(
            "ACGATCGATTACGATCGATTACGATCGATT",
            "GCTCTTCACTTTTTTTTTTTTTTTGAAGAGC",
            "TTACCATTACCATTACCATTACCATTACCA",
        )
        .to_string()
    }
}
