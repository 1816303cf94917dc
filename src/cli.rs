// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ggforge", author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(help_template = "\
{before-help}{name} v{version}
{author-with-newline}{about-with-newline}
{usage-heading}
{usage}

{all-args}{after-help}
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set the number of threads for batch designs.
    ///
    /// - 0: Auto-detect (Use all available cores).
    /// - 1: Sequential (Single-threaded, good for debugging).
    /// - >1: Force specific thread count.
    #[arg(short = 'j', long, global = true, default_value_t = 0, value_name = "THREADS")]
    pub jobs: usize,

    /// Increase log verbosity (-v: info, -vv: debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Design primers, simulate PCR, digestion and ligation, and export the construct.
    #[command(visible_alias = "run")]
    Design {
        /// pMOD template (FASTA)
        #[arg(long, value_name = "FASTA")]
        pmod: PathBuf,

        /// pDIRECT destination vector (FASTA)
        #[arg(long, value_name = "FASTA")]
        pdirect: PathBuf,

        /// First guide spacer, 5'->3' (at least 12 bases)
        #[arg(long, value_name = "SEQ")]
        guide1: String,

        /// Second guide spacer, 5'->3' (at least 12 bases)
        #[arg(long, value_name = "SEQ")]
        guide2: String,

        /// Output FASTA for the assembled construct
        #[arg(short, long, default_value = "construct.fasta", value_name = "OUT_FILE")]
        output: PathBuf,

        /// Also write the six primers as FASTA
        #[arg(long, value_name = "OUT_FILE")]
        primers_out: Option<PathBuf>,

        /// Fall back to uncut ends and untrimmed overhangs instead of failing (warns)
        #[arg(long)]
        lenient: bool,

        /// Wrap sequence lines at this width (0 = single line)
        #[arg(long, default_value_t = ggforge::DEFAULT_WRAP, value_name = "COLS")]
        wrap: usize,
    },

    /// Print the six primers for a guide pair (no templates needed).
    Primers {
        /// First guide spacer, 5'->3'
        #[arg(long, value_name = "SEQ")]
        guide1: String,

        /// Second guide spacer, 5'->3'
        #[arg(long, value_name = "SEQ")]
        guide2: String,
    },

    /// Design many guide pairs in parallel against the same templates.
    Batch {
        /// pMOD template (FASTA)
        #[arg(long, value_name = "FASTA")]
        pmod: PathBuf,

        /// pDIRECT destination vector (FASTA)
        #[arg(long, value_name = "FASTA")]
        pdirect: PathBuf,

        /// Whitespace-separated 'name guide1 guide2' lines
        #[arg(value_name = "PAIRS_FILE")]
        pairs: PathBuf,

        /// Output FASTA with one record per successful construct
        #[arg(short, long, default_value = "constructs.fasta", value_name = "OUT_FILE")]
        output: PathBuf,

        /// Fall back to uncut ends and untrimmed overhangs instead of failing (warns)
        #[arg(long)]
        lenient: bool,

        /// Wrap sequence lines at this width (0 = single line)
        #[arg(long, default_value_t = ggforge::DEFAULT_WRAP, value_name = "COLS")]
        wrap: usize,
    },
}
