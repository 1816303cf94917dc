use std::fs;

use assert_cmd::Command;
use ggforge::oligo::{BIND_CSY4, BIND_PROMOTER, BIND_SCAFFOLD};
use ggforge::sequence::reverse_complement;
use predicates::prelude::*;

const GUIDE1: &str = "GGCAGACATACTGTCCCACG";
const GUIDE2: &str = "CTGCCTATACGGCAGTGAAA";

fn pmod_fasta() -> String {
    let csy4_rc = reverse_complement(BIND_CSY4);
    format!(
        ">pMOD_B2103 synthetic\nATATATATAT{BIND_PROMOTER}AACCGGTTAACCGGTT\n{csy4_rc}TTAATTAATT\n\
         {BIND_SCAFFOLD}CCAATTGGCCAATTGG\n{csy4_rc}ATATTATATA\n"
    )
}

fn pdirect_fasta() -> &'static str {
    ">pDIRECT_22C synthetic\n\
     ACGATCGATTACGATCGATTACGATCGATT\n\
     GCTCTTCACTTTTTTTTTTTTTTTGAAGAGC\n\
     TTACCATTACCATTACCATTACCATTACCA\n"
}

fn ggforge() -> Command {
    Command::cargo_bin("ggforge").unwrap()
}

#[test]
fn design_writes_construct_fasta() {
    let pmod = temp_file::with_contents(pmod_fasta().as_bytes());
    let pdirect = temp_file::with_contents(pdirect_fasta().as_bytes());
    let out = temp_file::empty();
    let primers_out = temp_file::empty();

    ggforge()
        .args(["design", "--guide1", GUIDE1, "--guide2", GUIDE2])
        .arg("--pmod")
        .arg(pmod.path())
        .arg("--pdirect")
        .arg(pdirect.path())
        .arg("--output")
        .arg(out.path())
        .arg("--primers-out")
        .arg(primers_out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[✔] Assembly Complete"))
        .stdout(predicate::str::contains(
            "341ad08ab976190900b49c9351a11e4d7132a5edbdf61d02e8175b7ff689c0d2",
        ));

    let fasta = fs::read_to_string(out.path()).unwrap();
    let mut lines = fasta.lines();
    assert_eq!(
        lines.next(),
        Some(">pDIRECT_21C_Assembled_gRNA1_GGCAG_gRNA2_CTGCC (284 bp)")
    );
    assert_eq!(lines.next().map(str::len), Some(284));
    assert_eq!(lines.next(), None);

    let primers = fs::read_to_string(primers_out.path()).unwrap();
    assert_eq!(primers.lines().filter(|l| l.starts_with('>')).count(), 6);
    assert!(primers.starts_with(">CmYLCV_Fixed\nTGCTCTTCGCGCTGGCAGACATACTGTCCCAC\n"));
}

#[test]
fn design_wraps_output_lines() {
    let pmod = temp_file::with_contents(pmod_fasta().as_bytes());
    let pdirect = temp_file::with_contents(pdirect_fasta().as_bytes());
    let out = temp_file::empty();

    ggforge()
        .args(["run", "--guide1", GUIDE1, "--guide2", GUIDE2, "--wrap", "60"])
        .arg("--pmod")
        .arg(pmod.path())
        .arg("--pdirect")
        .arg(pdirect.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success();

    let fasta = fs::read_to_string(out.path()).unwrap();
    let seq_lines: Vec<_> = fasta.lines().skip(1).collect();
    assert_eq!(seq_lines.len(), 5);
    assert!(seq_lines[..4].iter().all(|l| l.len() == 60));
    assert_eq!(seq_lines[4].len(), 44);
}

#[test]
fn short_guide_is_rejected() {
    let pmod = temp_file::with_contents(pmod_fasta().as_bytes());
    let pdirect = temp_file::with_contents(pdirect_fasta().as_bytes());

    ggforge()
        .args(["design", "--guide1", "ACGTACGT", "--guide2", GUIDE2])
        .arg("--pmod")
        .arg(pmod.path())
        .arg("--pdirect")
        .arg(pdirect.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("gRNA1 is too short: 8 bases"));
}

#[test]
fn pcr_miss_reports_the_stage() {
    let pmod = temp_file::with_contents(b">empty\nACGTACGTACGTACGTACGTACGT\n");
    let pdirect = temp_file::with_contents(pdirect_fasta().as_bytes());
    let out = temp_file::empty();

    ggforge()
        .args(["design", "--guide1", GUIDE1, "--guide2", GUIDE2])
        .arg("--pmod")
        .arg(pmod.path())
        .arg("--pdirect")
        .arg(pdirect.path())
        .arg("--output")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("PCR simulation failed"));
}

#[test]
fn non_ascii_template_fails_with_line_number() {
    let pmod = temp_file::with_contents(pmod_fasta().as_bytes());
    let pdirect = temp_file::with_contents(">pDIRECT\nAAGCTCTTCÉAAAAAAAAAAAAAAGAAGAGCTTTTTTTTTTTT\n".as_bytes());

    ggforge()
        .args(["design", "--guide1", GUIDE1, "--guide2", GUIDE2])
        .arg("--pmod")
        .arg(pmod.path())
        .arg("--pdirect")
        .arg(pdirect.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read pDIRECT template"))
        .stderr(predicate::str::contains("line 2, column 10"));
}

#[test]
fn missing_template_file_fails_with_context() {
    let pdirect = temp_file::with_contents(pdirect_fasta().as_bytes());

    ggforge()
        .args(["design", "--guide1", GUIDE1, "--guide2", GUIDE2])
        .args(["--pmod", "/nonexistent/ggforge/pmod.fasta"])
        .arg("--pdirect")
        .arg(pdirect.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read pMOD template"));
}

#[test]
fn primers_prints_six_named_rows() {
    ggforge()
        .args(["primers", "--guide1", GUIDE1, "--guide2", GUIDE2])
        .assert()
        .success()
        .stdout(predicate::str::contains(">CmYLCV_Fixed"))
        .stdout(predicate::str::contains(">Csy4-gRNA1\nTCGTCTCCAGTATGTCTGCCCTGCCTATACGGCAGTGAAC"))
        .stdout(predicate::str::contains(">REP-gRNA2\nTCGTCTCAACGGCAGTGAAAGTTTTAGAGCTAGAAATAGC"))
        .stdout(predicate::str::contains(">CSY-term_Fixed\nTGCTCTTCTGACCTGCCTATACGGCAGTGAAC"));
}

#[test]
fn batch_writes_successes_and_reports_failures() {
    let pmod = temp_file::with_contents(pmod_fasta().as_bytes());
    let pdirect = temp_file::with_contents(pdirect_fasta().as_bytes());
    let pairs = format!("# name guide1 guide2\nfirst {GUIDE1} {GUIDE2}\nbroken ACGT {GUIDE2}\nsecond {GUIDE1} {GUIDE2}\n");
    let pairs = temp_file::with_contents(pairs.as_bytes());
    let out = temp_file::empty();

    ggforge()
        .args(["batch", "-j", "2"])
        .arg("--pmod")
        .arg(pmod.path())
        .arg("--pdirect")
        .arg(pdirect.path())
        .arg(pairs.path())
        .arg("--output")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Assembled 2 of 3 guide pairs"))
        .stdout(predicate::str::contains("gRNA1 is too short"));

    let fasta = fs::read_to_string(out.path()).unwrap();
    let headers: Vec<_> = fasta.lines().filter(|l| l.starts_with('>')).collect();
    assert_eq!(
        headers,
        [
            ">first pDIRECT_21C_Assembled_gRNA1_GGCAG_gRNA2_CTGCC (284 bp)",
            ">second pDIRECT_21C_Assembled_gRNA1_GGCAG_gRNA2_CTGCC (284 bp)",
        ]
    );
}

#[test]
fn batch_rejects_malformed_pairs_file() {
    let pmod = temp_file::with_contents(pmod_fasta().as_bytes());
    let pdirect = temp_file::with_contents(pdirect_fasta().as_bytes());
    let pairs = temp_file::with_contents(b"only-two-fields ACGTACGTACGT\n");

    ggforge()
        .arg("batch")
        .arg("--pmod")
        .arg(pmod.path())
        .arg("--pdirect")
        .arg(pdirect.path())
        .arg(pairs.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}
