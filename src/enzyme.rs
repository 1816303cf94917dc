// src/enzyme.rs
// TYPE IIS DIGESTION
// Each cut is described by data (an `EnzymeRule`), so one generic function
// handles every enzyme/side combination.
//
// Left cut:  start = match + offset  (first occurrence of the forward site)
// Right cut: end   = match + offset  (last occurrence of the reverse-complement site)

use log::{debug, warn};

use crate::error::{DesignWarning, FragmentEnd, SimulationError};
use crate::sequence::first_non_ascii;

/// How a site scan walks the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    /// Leftmost occurrence.
    Forward,
    /// Rightmost occurrence.
    Reverse,
}

/// One side of a digestion: what to look for, where, and where the cut falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnzymeRule {
    pub enzyme: &'static str,
    pub pattern: &'static str,
    pub search: SearchDirection,
    /// Cut position relative to the match start.
    pub cut_offset: isize,
    /// Overhang length left on this end.
    pub overhang: usize,
}

impl EnzymeRule {
    /// Start of the first matching site in the search direction.
    pub fn locate(&self, seq: &str) -> Option<usize> {
        match self.search {
            SearchDirection::Forward => seq.find(self.pattern),
            SearchDirection::Reverse => seq.rfind(self.pattern),
        }
    }

    /// Cut position, or None when the site is absent. May be negative.
    pub fn cut_position(&self, seq: &str) -> Option<isize> {
        self.locate(seq).map(|pos| pos as isize + self.cut_offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enzyme {
    pub name: &'static str,
    pub site: &'static str,
    pub site_rc: &'static str,
    /// Offset from the forward site to the first retained base.
    pub left_offset: isize,
    /// Offset from the reverse site to the end of the retained region.
    pub right_offset: isize,
    pub overhang: usize,
}

impl Enzyme {
    pub const fn left(&self) -> EnzymeRule {
        EnzymeRule {
            enzyme: self.name,
            pattern: self.site,
            search: SearchDirection::Forward,
            cut_offset: self.left_offset,
            overhang: self.overhang,
        }
    }

    pub const fn right(&self) -> EnzymeRule {
        EnzymeRule {
            enzyme: self.name,
            pattern: self.site_rc,
            search: SearchDirection::Reverse,
            cut_offset: self.right_offset,
            overhang: self.overhang,
        }
    }
}

pub const SAPI: Enzyme = Enzyme {
    name: "SapI",
    site: "GCTCTTC",
    site_rc: "GAAGAGC",
    left_offset: 8,
    right_offset: -1,
    overhang: 3,
};

pub const ESP3I: Enzyme = Enzyme {
    name: "Esp3I",
    site: "CGTCTC",
    site_rc: "GAGACG",
    left_offset: 7,
    right_offset: -1,
    overhang: 4,
};

/// What to do when a cut site is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SitePolicy {
    /// Missing sites and untrimmable overhangs are errors.
    #[default]
    Strict,
    /// Missing sites leave that side uncut, short fragments skip trimming.
    /// Every fallback is recorded as a warning.
    Lenient,
}

/// A digested fragment and the overhang length implied by the rules that cut it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub seq: String,
    pub left_overhang: usize,
    pub right_overhang: usize,
    pub warnings: Vec<DesignWarning>,
}

fn resolve_cut(
    rule: &EnzymeRule,
    seq: &str,
    end: FragmentEnd,
    uncut: isize,
    policy: SitePolicy,
    warnings: &mut Vec<DesignWarning>,
) -> Result<isize, SimulationError> {
    match rule.cut_position(seq) {
        Some(cut) => Ok(cut),
        None => match policy {
            SitePolicy::Strict => Err(SimulationError::EnzymeSiteNotFound {
                enzyme: rule.enzyme,
                pattern: rule.pattern,
            }),
            SitePolicy::Lenient => {
                warn!("{} site {} not found; {} end left uncut", rule.enzyme, rule.pattern, end);
                warnings.push(DesignWarning::SiteFallback { enzyme: rule.enzyme, pattern: rule.pattern, end });
                Ok(uncut)
            }
        },
    }
}

/// Cuts `fragment` on both sides and returns the retained region.
pub fn digest(
    fragment: &str,
    left: &EnzymeRule,
    right: &EnzymeRule,
    policy: SitePolicy,
) -> Result<Fragment, SimulationError> {
    if let Some((position, base)) = first_non_ascii(fragment) {
        return Err(SimulationError::NonAsciiSequence { position, base });
    }
    let seq = fragment.to_ascii_uppercase();
    let mut warnings = Vec::new();

    let start = resolve_cut(left, &seq, FragmentEnd::Five, 0, policy, &mut warnings)?;
    let end = resolve_cut(right, &seq, FragmentEnd::Three, seq.len() as isize, policy, &mut warnings)?;

    let start = start.max(0) as usize;
    if start as isize >= end {
        return Err(SimulationError::EmptyDigest { start, end });
    }
    let end_idx = (end as usize).min(seq.len());
    if start >= end_idx {
        return Err(SimulationError::EmptyDigest { start, end });
    }

    debug!("{}/{} digest keeps {}..{} of {} bp", left.enzyme, right.enzyme, start, end_idx, seq.len());

    Ok(Fragment {
        seq: seq[start..end_idx].to_string(),
        left_overhang: left.overhang,
        right_overhang: right.overhang,
        warnings,
    })
}
