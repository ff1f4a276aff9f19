use anyhow::{anyhow, Result};
use std::io::BufRead;

use super::fasta::split_header;

#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

/// 四行格式 FASTQ 读取器，不支持折行序列。
pub struct FastqReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    line_no: usize,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: String::new(), done: false, line_no: 0 }
    }

    /// 读一行到 `buf`，EOF 时返回 false
    fn read_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        self.line_no += 1;
        Ok(n > 0)
    }

    pub fn next_record(&mut self) -> Result<Option<FastqRecord>> {
        if self.done { return Ok(None); }

        // header line starting with '@', blank lines in between records are skipped
        loop {
            if !self.read_line()? {
                self.done = true;
                return Ok(None);
            }
            if !self.buf.trim().is_empty() { break; }
        }
        let Some(header) = self.buf.strip_prefix('@') else {
            return Err(anyhow!("line {}: FASTQ header not starting with '@'", self.line_no));
        };
        let (id, desc) = split_header(header.trim_end());

        if !self.read_line()? {
            return Err(anyhow!("line {}: unexpected EOF after header", self.line_no));
        }
        let seq = self.buf.trim_end().as_bytes().to_ascii_uppercase();

        if !self.read_line()? || !self.buf.starts_with('+') {
            return Err(anyhow!("line {}: missing '+' line", self.line_no));
        }

        if !self.read_line()? {
            return Err(anyhow!("line {}: missing quality line", self.line_no));
        }
        let qual = self.buf.trim_end().as_bytes().to_vec();

        if qual.len() != seq.len() {
            return Err(anyhow!(
                "record '{}': seq/qual length mismatch ({} vs {})",
                id,
                seq.len(),
                qual.len()
            ));
        }

        Ok(Some(FastqRecord { id, desc, seq, qual }))
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_two_records() {
        let data = b"@r1 lane=1\nacgt\n+\nIIII\n\n@r2\nGG\n+r2\n##\n";
        let records: Vec<FastqRecord> = FastqReader::new(Cursor::new(&data[..]))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "r1");
        assert_eq!(records[0].desc.as_deref(), Some("lane=1"));
        assert_eq!(records[0].seq, b"ACGT");
        assert_eq!(records[1].id, "r2");
        assert_eq!(records[1].qual, b"##");
    }

    #[test]
    fn rejects_missing_plus_line() {
        let data = b"@r1\nACGT\nIIII\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        assert!(r.next_record().is_err());
    }

    #[test]
    fn rejects_length_mismatch() {
        let data = b"@r1\nACGT\n+\nIII\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        let err = r.next_record().unwrap_err();
        assert!(err.to_string().contains("length mismatch"));
    }

    #[test]
    fn rejects_bad_header() {
        let data = b">r1\nACGT\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        assert!(r.next_record().is_err());
    }
}
