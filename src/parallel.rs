// src/parallel.rs
// BATCH DESIGN ENGINE
// Runs one independent design per guide pair using Rayon.
// Templates are shared read-only; each pair gets its own config and report,
// so runs cannot interfere and the output order matches the input order.

use std::io::{self, BufRead};

use rayon::prelude::*;

use crate::design::{run_design, DesignConfig, DesignReport};
use crate::enzyme::SitePolicy;
use crate::error::DesignError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidePair {
    pub name: String,
    pub guide1: String,
    pub guide2: String,
}

pub struct BatchOutcome {
    pub pair: GuidePair,
    pub result: Result<DesignReport, DesignError>,
}

/// Parses `name guide1 guide2` lines. Blank lines and `#` comments are skipped.
pub fn parse_guide_pairs<R: BufRead>(reader: R) -> io::Result<Vec<GuidePair>> {
    let mut pairs = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: expected 'name guide1 guide2', found {} fields", line_no + 1, fields.len()),
            ));
        }

        pairs.push(GuidePair {
            name: fields[0].to_string(),
            guide1: fields[1].to_string(),
            guide2: fields[2].to_string(),
        });
    }

    Ok(pairs)
}

pub struct BatchProcessor;

impl BatchProcessor {
    /// Designs every pair against the same pMOD / pDIRECT templates.
    pub fn run(pmod: &str, pdirect: &str, pairs: Vec<GuidePair>, policy: SitePolicy) -> Vec<BatchOutcome> {
        pairs
            .into_par_iter()
            .map(|pair| {
                let config = DesignConfig::new(pmod, pdirect, &pair.guide1, &pair.guide2).with_policy(policy);
                let result = run_design(&config);
                BatchOutcome { pair, result }
            })
            .collect()
    }
}
