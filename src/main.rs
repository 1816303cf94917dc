// src/main.rs
// GGFORGE: In-silico Golden Gate design for two-guide CRISPR constructs.
// Entry point for the Command Line Interface.
// Handles template loading, pipeline orchestration and FASTA export.

mod cli;

use ggforge::design::{run_design, DesignConfig, DesignReport};
use ggforge::enzyme::SitePolicy;
use ggforge::fasta::{self, FastaWriter, ReportSink};
use ggforge::oligo::PrimerSet;
use ggforge::parallel::{parse_guide_pairs, BatchProcessor};
use ggforge::sequence::analyze_stability;
use crate::cli::{Cli, Commands};

use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use anyhow::{Context, Result};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_template(path: &Path, label: &str) -> Result<String> {
    let seq = fasta::load_sequence(Some(path))
        .with_context(|| format!("Failed to read {} template: {}", label, path.display()))?;
    println!("[i] {}: {} ({} bp)", label, path.display(), seq.len());
    Ok(seq)
}

fn policy_for(lenient: bool) -> SitePolicy {
    if lenient { SitePolicy::Lenient } else { SitePolicy::Strict }
}

fn print_primer_table(primers: &PrimerSet) {
    println!("--------------------------------------------------");
    for (name, seq) in primers.rows() {
        let stats = analyze_stability(&seq);
        println!("    {:<15} {:>2} nt  GC {:>5.1}%  Tm {:>5.1}°C  {}", name, seq.len(), stats.gc_content, stats.melting_temp, seq);
    }
    println!("--------------------------------------------------");
}

fn print_summary(report: &DesignReport) {
    let [bb, f1, f2, f3] = report.assembly.segment_lens;
    println!("--------------------------------------------------");
    println!("    Amplicons:       {} / {} / {} bp", report.amplicons[0].len(), report.amplicons[1].len(), report.amplicons[2].len());
    println!("    Backbone:        {} bp (dropout {} bp)", bb, report.backbone.dropout_len);
    println!("    Inserts:         {} + {} + {} bp", f1, f2, f3);
    println!("    Construct:       {} bp", report.construct().len());
    println!("    SHA-256:         {}", report.fingerprint());
    println!("--------------------------------------------------");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // CONCURRENCY CONFIGURATION
    rayon::ThreadPoolBuilder::new()
    .num_threads(cli.jobs)
    .build_global()
    .map_err(|e| anyhow::anyhow!("Failed to configure thread pool: {}", e))?;

    match &cli.command {
        // COMMAND: DESIGN (single guide pair)
        Commands::Design { pmod, pdirect, guide1, guide2, output, primers_out, lenient, wrap } => {
            println!("[*] Loading templates...");
            let pmod_seq = load_template(pmod, "pMOD")?;
            let pdirect_seq = load_template(pdirect, "pDIRECT")?;

            let config = DesignConfig::new(&pmod_seq, &pdirect_seq, guide1, guide2).with_policy(policy_for(*lenient));

            println!("[*] Designing primers and simulating PCR, digestion and ligation...");
            let report = run_design(&config)?;

            print_primer_table(&report.primers);
            for warning in report.warnings() {
                println!("[!] WARNING: {}", warning);
            }

            fasta::write_construct(output, &report.header, report.construct(), *wrap)
                .with_context(|| format!("Failed to write construct: {}", output.display()))?;

            if let Some(path) = primers_out {
                fasta::write_primers(path, &report.primers.rows())
                    .with_context(|| format!("Failed to write primers: {}", path.display()))?;
                println!("[i] Primers written to {}", path.display());
            }

            println!("\n[✔] Assembly Complete: {}", report.header);
            print_summary(&report);
            println!("    Output File:     {}", output.display());
        }

        // COMMAND: PRIMERS (design only)
        Commands::Primers { guide1, guide2 } => {
            let primers = PrimerSet::design(guide1, guide2)?;
            print_primer_table(&primers);

            let stdout = std::io::stdout();
            let mut sink = FastaWriter::new(stdout.lock(), 0);
            sink.primers(&primers.rows())?;
        }

        // COMMAND: BATCH (many guide pairs, parallel)
        Commands::Batch { pmod, pdirect, pairs, output, lenient, wrap } => {
            println!("[*] Loading templates...");
            let pmod_seq = load_template(pmod, "pMOD")?;
            let pdirect_seq = load_template(pdirect, "pDIRECT")?;

            let pairs_file = File::open(pairs).with_context(|| format!("Failed to open pairs file: {}", pairs.display()))?;
            let guide_pairs = parse_guide_pairs(BufReader::new(pairs_file))
                .with_context(|| format!("Failed to parse pairs file: {}", pairs.display()))?;

            let num_threads = rayon::current_num_threads();
            println!("[*] Designing {} guide pairs ({} threads)...", guide_pairs.len(), num_threads);

            let outcomes = BatchProcessor::run(&pmod_seq, &pdirect_seq, guide_pairs, policy_for(*lenient));

            let out_file = File::create(output).with_context(|| format!("Failed to create output: {}", output.display()))?;
            let mut sink = FastaWriter::new(BufWriter::new(out_file), *wrap);
            let mut succeeded = 0;

            for outcome in &outcomes {
                match &outcome.result {
                    Ok(report) => {
                        sink.construct(&format!("{} {}", outcome.pair.name, report.header), report.construct())?;
                        succeeded += 1;
                        println!("    -> {:<16} {} bp  {}", outcome.pair.name, report.construct().len(), &report.fingerprint()[..12]);
                        for warning in report.warnings() {
                            println!("       [!] WARNING: {}", warning);
                        }
                    }
                    Err(e) => println!("    -> {:<16} [✘] {}", outcome.pair.name, e),
                }
            }
            sink.flush()?;

            if succeeded == 0 && !outcomes.is_empty() {
                anyhow::bail!("[✘] BATCH FAILURE: none of {} guide pairs could be assembled.", outcomes.len());
            }

            println!("\n[+] Assembled {} of {} guide pairs to {}.", succeeded, outcomes.len(), output.display());
        }
    }
    Ok(())
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}
