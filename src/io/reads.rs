use anyhow::{bail, Context, Result};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::fasta::FastaReader;
use super::fastq::FastqReader;
use crate::index::sa::check_reference_len;
use crate::util::dna;

/// 一条 query，已规范化为 ACGTN 字母表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

impl AsRef<[u8]> for QueryRecord {
    fn as_ref(&self) -> &[u8] {
        &self.seq
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let fh = File::open(path).with_context(|| format!("cannot open '{}'", path.display()))?;
    Ok(BufReader::new(fh))
}

/// 读取参考为一条文本，多条记录按文件顺序拼接。
pub fn load_reference(path: &Path) -> Result<Vec<u8>> {
    let mut text = Vec::new();
    let mut n_seqs = 0usize;
    for rec in FastaReader::new(open(path)?) {
        let rec = rec.with_context(|| format!("malformed FASTA '{}'", path.display()))?;
        n_seqs += 1;
        text.extend(dna::normalize_seq(&rec.seq));
    }

    if n_seqs == 0 {
        bail!("FASTA file '{}' contains no sequences", path.display());
    }
    if text.is_empty() {
        bail!("FASTA file '{}' contains only empty sequences", path.display());
    }
    // FM 索引额外追加一个哨兵
    check_reference_len(text.len() + 1).with_context(|| format!("reference '{}' is too long", path.display()))?;
    if n_seqs > 1 {
        warn!("reference '{}' has {} records, concatenating them", path.display(), n_seqs);
    }
    debug!("reference '{}': {} records, {} bp", path.display(), n_seqs, text.len());
    Ok(text)
}

/// 读取 FASTA 或 FASTQ 格式的 query，格式由第一个非空白字节判断。
pub fn load_queries(path: &Path) -> Result<Vec<QueryRecord>> {
    let mut reader = open(path)?;
    let first = reader
        .fill_buf()
        .with_context(|| format!("cannot read '{}'", path.display()))?
        .iter()
        .copied()
        .find(|b| !b.is_ascii_whitespace());

    let queries = match first {
        None => Ok(Vec::new()),
        Some(b'>') => FastaReader::new(reader)
            .map(|r| r.map(|rec| QueryRecord { id: rec.id, seq: dna::normalize_seq(&rec.seq) }))
            .collect::<Result<Vec<_>>>(),
        Some(b'@') => FastqReader::new(reader)
            .map(|r| r.map(|rec| QueryRecord { id: rec.id, seq: dna::normalize_seq(&rec.seq) }))
            .collect::<Result<Vec<_>>>(),
        Some(other) => bail!(
            "'{}' is neither FASTA nor FASTQ (starts with {:?})",
            path.display(),
            other as char
        ),
    }
    .with_context(|| format!("malformed reads file '{}'", path.display()))?;

    debug!("reads '{}': {} records", path.display(), queries.len());
    Ok(queries)
}

/// 按顺序循环复制 query 直到恰好 `count` 条；多于 count 时截断，空集保持为空。
pub fn replicate_queries(queries: &[QueryRecord], count: usize) -> Vec<QueryRecord> {
    if queries.is_empty() {
        return Vec::new();
    }
    queries.iter().cycle().take(count).cloned().collect()
}
