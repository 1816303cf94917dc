// src/error.rs
// ERROR TAXONOMY
// Input problems are caught before any simulation runs.
// Simulation misses name the biological site that could not be found.
// The pipeline wraps misses with the stage that produced them.

use std::fmt;
use thiserror::Error;

/// Which guide slot an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideSlot {
    First,
    Second,
}

impl fmt::Display for GuideSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideSlot::First => write!(f, "gRNA1"),
            GuideSlot::Second => write!(f, "gRNA2"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{slot} is too short: {len} bases (minimum {min})")]
    GuideTooShort { slot: GuideSlot, len: usize, min: usize },

    #[error("{slot} contains invalid base '{base}' at position {position}")]
    InvalidGuideBase { slot: GuideSlot, position: usize, base: char },

    #[error("{template} template sequence is not loaded")]
    TemplateMissing { template: &'static str },

    #[error("{template} template contains invalid character '{base}' at position {position}")]
    InvalidTemplateBase { template: &'static str, position: usize, base: char },
}

/// Which end of a fragment a trim or cut refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentEnd {
    Five,
    Three,
}

impl fmt::Display for FragmentEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentEnd::Five => write!(f, "5'"),
            FragmentEnd::Three => write!(f, "3'"),
        }
    }
}

/// An expected site or footprint was missing during a simulation step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("forward footprint {footprint} not found in template")]
    FootprintNotFound { footprint: String },

    #[error("reverse footprint {footprint} not found downstream of the forward footprint")]
    ReverseFootprintNotFound { footprint: String },

    #[error("primer footprints are adjacent at position {position}; amplicon has no insert")]
    EmptyInsert { position: usize },

    #[error("{enzyme} site {pattern} not found in fragment")]
    EnzymeSiteNotFound { enzyme: &'static str, pattern: &'static str },

    #[error("digestion leaves nothing: start {start} is not before end {end}")]
    EmptyDigest { start: usize, end: isize },

    #[error("sequence contains non-ASCII character '{base}' at position {position}")]
    NonAsciiSequence { position: usize, base: char },

    #[error("backbone site {pattern} not found in vector")]
    BackboneSiteNotFound { pattern: &'static str },

    #[error("fragment {fragment} is {len} bases, too short to trim its {overhang}-base {end} overhang")]
    OverhangTooShortToTrim { fragment: usize, end: FragmentEnd, overhang: usize, len: usize },
}

/// Pipeline stage, used to tell the user which step to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Pcr,
    Backbone,
    Assembly,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Pcr => write!(f, "PCR simulation failed"),
            Stage::Backbone => write!(f, "backbone extraction failed"),
            Stage::Assembly => write!(f, "assembly logic error"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("{stage}: {source}")]
    Stage { stage: Stage, source: SimulationError },
}

impl DesignError {
    pub fn at(stage: Stage) -> impl FnOnce(SimulationError) -> DesignError {
        move |source| DesignError::Stage { stage, source }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            DesignError::Input(_) => None,
            DesignError::Stage { stage, .. } => Some(*stage),
        }
    }
}

/// A lenient-mode fallback that changed the result. Never produced in strict mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignWarning {
    /// Site missing, so that side of the fragment was left uncut.
    SiteFallback { enzyme: &'static str, pattern: &'static str, end: FragmentEnd },
    /// Fragment too short, so its overhang was kept and the junction is wrong.
    TrimSkipped { fragment: usize, end: FragmentEnd, overhang: usize, len: usize },
}

impl fmt::Display for DesignWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignWarning::SiteFallback { enzyme, pattern, end } => {
                write!(f, "{enzyme} site {pattern} missing; {end} end left uncut")
            }
            DesignWarning::TrimSkipped { fragment, end, overhang, len } => write!(
                f,
                "fragment {fragment} ({len} bp) too short to trim {overhang}-base {end} overhang; junction kept duplicated"
            ),
        }
    }
}
