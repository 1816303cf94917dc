// src/sequence.rs
// SEQUENCE PRIMITIVES
// Canonical form is uppercase with no whitespace.
// Every operation returns a new String; nothing mutates in place.

use crate::error::{GuideSlot, InputError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A, C, G, T, U, N,
}

impl Base {
    pub fn to_char(self) -> char {
        match self {
            Base::A => 'A', Base::C => 'C', Base::G => 'G',
            Base::T => 'T', Base::U => 'U', Base::N => 'N',
        }
    }

    /// Case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Base::A), 'C' => Some(Base::C),
            'G' => Some(Base::G), 'T' => Some(Base::T),
            'U' => Some(Base::U), 'N' => Some(Base::N),
            _ => None,
        }
    }

    /// DNA complement. U pairs with A, so it maps to T's partner.
    pub fn complement(self) -> Base {
        match self {
            Base::A => Base::T, Base::T => Base::A,
            Base::C => Base::G, Base::G => Base::C,
            Base::U => Base::A, Base::N => Base::N,
        }
    }
}

/// Uppercase and drop all whitespace, including newlines.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Reverse complement. Characters outside the alphabet pass through uppercased.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars()
        .rev()
        .map(|c| match Base::from_char(c) {
            Some(b) => b.complement().to_char(),
            None => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Last `n` characters (or the whole string if shorter).
pub fn suffix(seq: &str, n: usize) -> &str {
    &seq[seq.len().saturating_sub(n)..]
}

/// Normalize a guide and check its length and alphabet.
pub fn validate_guide(raw: &str, slot: GuideSlot, min_len: usize) -> Result<String, InputError> {
    let guide = normalize(raw);

    if let Some((position, base)) = guide.chars().enumerate().find(|(_, c)| Base::from_char(*c).is_none()) {
        return Err(InputError::InvalidGuideBase { slot, position, base });
    }

    if guide.len() < min_len {
        return Err(InputError::GuideTooShort { slot, len: guide.len(), min: min_len });
    }

    Ok(guide)
}

/// Position (in characters) and value of the first non-ASCII character.
/// Cut offsets are byte offsets, so anything else must be kept out of the slicers.
pub fn first_non_ascii(seq: &str) -> Option<(usize, char)> {
    seq.chars().enumerate().find(|(_, c)| !c.is_ascii())
}

/// Templates may carry IUPAC codes, so any ASCII letter is accepted.
pub fn validate_template(seq: &str, template: &'static str) -> Result<(), InputError> {
    match seq.chars().enumerate().find(|(_, c)| !c.is_ascii_alphabetic()) {
        Some((position, base)) => Err(InputError::InvalidTemplateBase { template, position, base }),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityReport {
    pub gc_content: f64,
    pub melting_temp: f64,
}

/// GC percentage and a salt-adjusted Tm estimate. Informational only.
pub fn analyze_stability(dna: &str) -> StabilityReport {
    if dna.is_empty() {
        return StabilityReport { gc_content: 0.0, melting_temp: 0.0 };
    }

    let gc_count = dna.bytes().filter(|b| matches!(b, b'G' | b'C')).count() as f64;
    let len = dna.len() as f64;
    let gc_content = (gc_count / len) * 100.0;

    // Tm = 81.5 + 16.6 * log10([Na+]) + 0.41 * (%GC) - 600/length
    let na_conc: f64 = 0.05;
    let salt_adjust = 16.6 * na_conc.log10();
    let melting_temp = 81.5 + salt_adjust + (0.41 * gc_content) - (600.0 / len);

    StabilityReport { gc_content, melting_temp }
}
