// src/fasta.rs
// SEQUENCE LOADER & REPORT SINKS
// Loading: every non-header line is concatenated, whitespace dropped, uppercased.
// Writing: one header line, then the sequence (optionally wrapped).

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::sequence::{first_non_ascii, normalize};

/// Reads a sequence file. Headers ('>' or ';') are skipped and all records are joined.
/// Non-ASCII characters in sequence lines are `InvalidData`.
pub fn read_sequence<R: BufRead>(reader: R) -> io::Result<String> {
    let mut sequence = String::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('>') || line.starts_with(';') {
            continue;
        }
        if let Some((column, base)) = first_non_ascii(line) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}, column {}: invalid sequence character '{}'", line_no + 1, column + 1, base),
            ));
        }
        sequence.push_str(&normalize(line));
    }

    Ok(sequence)
}

/// Loads a sequence from disk. No path (or an empty one) yields an empty sequence.
pub fn load_sequence(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(p) if !p.as_os_str().is_empty() => read_sequence(BufReader::new(File::open(p)?)),
        _ => Ok(String::new()),
    }
}

/// Receives the results of a design run.
pub trait ReportSink {
    /// Ordered (name, sequence) primer rows.
    fn primers(&mut self, rows: &[(&'static str, String)]) -> io::Result<()>;

    /// The assembled construct with its free-text header.
    fn construct(&mut self, header: &str, seq: &str) -> io::Result<()>;
}

/// FASTA writer. `wrap == 0` writes each sequence on one line.
pub struct FastaWriter<W> {
    inner: W,
    wrap: usize,
}

impl<W: Write> FastaWriter<W> {
    pub fn new(inner: W, wrap: usize) -> Self {
        Self { inner, wrap }
    }

    pub fn write_record(&mut self, header: &str, seq: &str) -> io::Result<()> {
        writeln!(self.inner, ">{}", header.trim_start_matches('>'))?;
        if self.wrap == 0 || seq.len() <= self.wrap {
            writeln!(self.inner, "{}", seq)?;
        } else {
            for chunk in seq.as_bytes().chunks(self.wrap) {
                self.inner.write_all(chunk)?;
                self.inner.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ReportSink for FastaWriter<W> {
    fn primers(&mut self, rows: &[(&'static str, String)]) -> io::Result<()> {
        for (name, seq) in rows {
            self.write_record(name, seq)?;
        }
        Ok(())
    }

    fn construct(&mut self, header: &str, seq: &str) -> io::Result<()> {
        self.write_record(header, seq)
    }
}

/// Writes the construct to `path` as a single FASTA record.
pub fn write_construct(path: &Path, header: &str, seq: &str, wrap: usize) -> io::Result<()> {
    let mut writer = FastaWriter::new(io::BufWriter::new(File::create(path)?), wrap);
    writer.construct(header, seq)?;
    writer.flush()
}

/// Writes the primer rows to `path` as multi-record FASTA.
pub fn write_primers(path: &Path, rows: &[(&'static str, String)]) -> io::Result<()> {
    let mut writer = FastaWriter::new(io::BufWriter::new(File::create(path)?), 0);
    writer.primers(rows)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_joins_lines_and_skips_headers() {
        let text = ">pMOD_B2103 some description\nacgt ACGT\n\nNNtt\n>second\nGG\n";
        assert_eq!(read_sequence(text.as_bytes()).unwrap(), "ACGTACGTNNTTGG");
    }

    #[test]
    fn loader_accepts_headerless_text() {
        assert_eq!(read_sequence("ggcc\r\naatt\r\n".as_bytes()).unwrap(), "GGCCAATT");
    }

    #[test]
    fn loader_rejects_non_ascii_lines() {
        let text = ">pDIRECT café\nACGTACGT\nAAGCTCTTCÉAAAA\n";
        let err = read_sequence(text.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("line 3, column 10"));
        assert!(err.to_string().contains('É'));
    }

    #[test]
    fn absent_path_is_a_no_op() {
        assert_eq!(load_sequence(None).unwrap(), "");
        assert_eq!(load_sequence(Some(Path::new(""))).unwrap(), "");
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let err = load_sequence(Some(Path::new("/nonexistent/ggforge/pmod.fasta"))).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn writer_emits_header_then_sequence() {
        let mut w = FastaWriter::new(Vec::new(), 0);
        w.construct(">construct (8 bp)", "ACGTACGT").unwrap();
        assert_eq!(String::from_utf8(w.into_inner()).unwrap(), ">construct (8 bp)\nACGTACGT\n");
    }

    #[test]
    fn writer_wraps_long_sequences() {
        let mut w = FastaWriter::new(Vec::new(), 4);
        w.write_record("x", "ACGTACGTAC").unwrap();
        assert_eq!(String::from_utf8(w.into_inner()).unwrap(), ">x\nACGT\nACGT\nAC\n");
    }

    #[test]
    fn primer_rows_become_records_in_order() {
        let rows = vec![("P1", "AAAA".to_string()), ("P2", "CCCC".to_string())];
        let mut w = FastaWriter::new(Vec::new(), 0);
        w.primers(&rows).unwrap();
        assert_eq!(String::from_utf8(w.into_inner()).unwrap(), ">P1\nAAAA\n>P2\nCCCC\n");
    }
}
