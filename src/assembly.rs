// src/assembly.rs
// GOLDEN GATE COMPOSER
// Construct = [Backbone] [Frag1] [Frag2] [Frag3]
//
// Each internal junction carries the same overhang on both neighbours, so one
// copy is removed from the fragment side. The backbone always keeps its own.
// - Frag1: SapI / Esp3I. Drop its 5' overhang (duplicates backbone 3' end).
// - Frag2: Esp3I / Esp3I. Drop its 5' overhang (duplicates Frag1 3' end).
// - Frag3: Esp3I / SapI. Drop its 5' overhang and its 3' overhang
//   (the latter duplicates the backbone 5' end).

use log::{debug, warn};

use crate::backbone::Backbone;
use crate::enzyme::{digest, EnzymeRule, Fragment, SitePolicy, ESP3I, SAPI};
use crate::error::{DesignWarning, FragmentEnd, SimulationError};

/// Cut rules for fragments 1, 2 and 3.
pub const FRAGMENT_RULES: [(EnzymeRule, EnzymeRule); 3] = [
    (SAPI.left(), ESP3I.right()),
    (ESP3I.left(), ESP3I.right()),
    (ESP3I.left(), SAPI.right()),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub construct: String,
    /// Digested fragments before junction trimming.
    pub digested: [Fragment; 3],
    /// Lengths of backbone and the three trimmed fragments, in construct order.
    pub segment_lens: [usize; 4],
    pub warnings: Vec<DesignWarning>,
}

fn trim(
    seq: &str,
    fragment: usize,
    end: FragmentEnd,
    overhang: usize,
    policy: SitePolicy,
    warnings: &mut Vec<DesignWarning>,
) -> Result<String, SimulationError> {
    let len = seq.len();
    if len <= overhang {
        return match policy {
            SitePolicy::Strict => Err(SimulationError::OverhangTooShortToTrim { fragment, end, overhang, len }),
            SitePolicy::Lenient => {
                warn!("fragment {} too short ({} bp) to trim {} overhang", fragment, len, end);
                warnings.push(DesignWarning::TrimSkipped { fragment, end, overhang, len });
                Ok(seq.to_string())
            }
        };
    }

    Ok(match end {
        FragmentEnd::Five => seq[overhang..].to_string(),
        FragmentEnd::Three => seq[..len - overhang].to_string(),
    })
}

/// Digests three amplicons and joins them onto `backbone` without duplicated overhangs.
pub fn assemble(
    backbone: &Backbone,
    raw: [&str; 3],
    policy: SitePolicy,
) -> Result<Assembly, SimulationError> {
    let mut warnings = Vec::new();

    let [r1, r2, r3] = &FRAGMENT_RULES;
    let digested = [
        digest(raw[0], &r1.0, &r1.1, policy)?,
        digest(raw[1], &r2.0, &r2.1, policy)?,
        digest(raw[2], &r3.0, &r3.1, policy)?,
    ];
    for fragment in &digested {
        warnings.extend(fragment.warnings.iter().cloned());
    }

    let t1 = trim(&digested[0].seq, 1, FragmentEnd::Five, digested[0].left_overhang, policy, &mut warnings)?;
    let t2 = trim(&digested[1].seq, 2, FragmentEnd::Five, digested[1].left_overhang, policy, &mut warnings)?;
    let t3 = trim(&digested[2].seq, 3, FragmentEnd::Five, digested[2].left_overhang, policy, &mut warnings)?;
    let t3 = trim(&t3, 3, FragmentEnd::Three, digested[2].right_overhang, policy, &mut warnings)?;

    let segment_lens = [backbone.seq.len(), t1.len(), t2.len(), t3.len()];
    let mut construct = String::with_capacity(segment_lens.iter().sum());
    for part in [backbone.seq.as_str(), t1.as_str(), t2.as_str(), t3.as_str()] {
        construct.push_str(part);
    }

    debug!("construct segments {:?} = {} bp", segment_lens, construct.len());

    Ok(Assembly { construct, digested, segment_lens, warnings })
}
