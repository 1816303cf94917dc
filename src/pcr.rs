// src/pcr.rs
// IN-SILICO PCR
// Product = [Fwd primer] [Template between footprints] [RC of Rev primer]
// The forward footprint binds at its leftmost occurrence; the reverse footprint
// (as its reverse complement) at the first occurrence after the forward match ends.

use log::debug;

use crate::error::SimulationError;
use crate::oligo::PrimerPair;
use crate::sequence::reverse_complement;

/// Amplifies `template` between two footprints and flanks the insert with the full primers.
pub fn amplify(
    template: &str,
    fwd_primer_full: &str,
    rev_primer_full: &str,
    fwd_footprint: &str,
    rev_footprint: &str,
) -> Result<String, SimulationError> {
    let template = template.to_ascii_uppercase();
    let fwd_footprint = fwd_footprint.to_ascii_uppercase();
    let rev_site = reverse_complement(rev_footprint);

    let fwd_start = template
        .find(&fwd_footprint)
        .ok_or_else(|| SimulationError::FootprintNotFound { footprint: fwd_footprint.clone() })?;
    let insert_start = fwd_start + fwd_footprint.len();

    let rev_start = template[insert_start..]
        .find(&rev_site)
        .map(|offset| insert_start + offset)
        .ok_or_else(|| SimulationError::ReverseFootprintNotFound { footprint: rev_footprint.to_ascii_uppercase() })?;

    if rev_start == insert_start {
        return Err(SimulationError::EmptyInsert { position: insert_start });
    }

    debug!("amplicon insert {}..{} ({} bp)", insert_start, rev_start, rev_start - insert_start);

    let rev_tail = reverse_complement(rev_primer_full);
    let insert = &template[insert_start..rev_start];
    let mut product = String::with_capacity(fwd_primer_full.len() + insert.len() + rev_tail.len());
    product.push_str(fwd_primer_full);
    product.push_str(insert);
    product.push_str(&rev_tail);

    Ok(product)
}

/// Convenience wrapper for a designed primer pair.
pub fn amplify_pair(template: &str, pair: &PrimerPair<'_>) -> Result<String, SimulationError> {
    amplify(
        template,
        &pair.forward.sequence(),
        &pair.reverse.sequence(),
        pair.forward.footprint,
        pair.reverse.footprint,
    )
}
