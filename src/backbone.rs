// src/backbone.rs
// CIRCULAR BACKBONE EXTRACTION
// Cutting a circular vector at two points gives two arcs.
// The longer arc is the backbone; the shorter is the dropout.
// Both backbone ends keep the 3-base SapI overhang.

use log::debug;

use crate::enzyme::{Enzyme, SAPI};
use crate::error::SimulationError;
use crate::sequence::first_non_ascii;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backbone {
    pub seq: String,
    /// Length of the discarded arc.
    pub dropout_len: usize,
    /// Overhang length on each end.
    pub overhang: usize,
}

/// Extracts the SapI backbone from a circular destination vector.
pub fn extract_backbone(vector_seq: &str) -> Result<Backbone, SimulationError> {
    extract_backbone_with(vector_seq, &SAPI)
}

/// Same as [`extract_backbone`] for any enzyme in the table.
pub fn extract_backbone_with(vector_seq: &str, enzyme: &Enzyme) -> Result<Backbone, SimulationError> {
    if let Some((position, base)) = first_non_ascii(vector_seq) {
        return Err(SimulationError::NonAsciiSequence { position, base });
    }
    let seq = vector_seq.to_ascii_uppercase();

    let left = enzyme.left();
    let right = enzyme.right();

    // Both sites are located independently from the origin.
    let pos1 = seq
        .find(left.pattern)
        .ok_or(SimulationError::BackboneSiteNotFound { pattern: left.pattern })?;
    let pos2 = seq
        .find(right.pattern)
        .ok_or(SimulationError::BackboneSiteNotFound { pattern: right.pattern })?;

    let len = seq.len() as isize;
    let cut1 = (pos1 as isize + left.cut_offset).rem_euclid(len) as usize;
    let cut2 = (pos2 as isize + right.cut_offset).rem_euclid(len) as usize;

    let (arc_a, arc_b) = split_circular(&seq, cut1, cut2);
    debug!("backbone cuts at {} and {}: arcs of {} and {} bp", cut1, cut2, arc_a.len(), arc_b.len());

    let (backbone, dropout) = if arc_a.len() > arc_b.len() { (arc_a, arc_b) } else { (arc_b, arc_a) };

    Ok(Backbone {
        seq: backbone,
        dropout_len: dropout.len(),
        overhang: enzyme.overhang,
    })
}

/// The arc starting at `cut1` and the arc starting at `cut2`, each wrapping through the origin if needed.
pub fn split_circular(seq: &str, cut1: usize, cut2: usize) -> (String, String) {
    if cut1 < cut2 {
        let arc_a = seq[cut1..cut2].to_string();
        let arc_b = format!("{}{}", &seq[cut2..], &seq[..cut1]);
        (arc_a, arc_b)
    } else {
        let arc_a = format!("{}{}", &seq[cut1..], &seq[..cut2]);
        let arc_b = seq[cut2..cut1].to_string();
        (arc_a, arc_b)
    }
}
