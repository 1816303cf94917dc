// src/lib.rs
pub mod sequence;
pub mod oligo;
pub mod pcr;
pub mod enzyme;
pub mod backbone;
pub mod assembly;
pub mod design;
pub mod error;
pub mod fasta;
pub mod parallel;

pub use design::{run_design, DesignConfig, DesignReport};
pub use enzyme::SitePolicy;
pub use error::{DesignError, InputError, SimulationError, Stage};

/// Line width used when `--wrap` is not given (0 = no wrapping).
pub const DEFAULT_WRAP: usize = 0;
