use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::io::QueryRecord;

#[derive(Debug, Serialize)]
struct HitLine<'a> {
    read: &'a str,
    count: usize,
    offsets: &'a [usize],
}

/// 按 query 顺序每条输出一行
pub fn write_hits<W: Write>(
    out: &mut W,
    format: OutputFormat,
    queries: &[QueryRecord],
    results: &[Vec<usize>],
) -> Result<()> {
    for (q, hits) in queries.iter().zip(results) {
        match format {
            OutputFormat::Tsv => {
                let offsets = if hits.is_empty() {
                    "*".to_string()
                } else {
                    hits.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
                };
                writeln!(out, "{}\t{}\t{}", q.id, hits.len(), offsets)?;
            }
            OutputFormat::Json => {
                let line = HitLine { read: &q.id, count: hits.len(), offsets: hits };
                serde_json::to_writer(&mut *out, &line)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
