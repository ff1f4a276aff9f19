use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::config::{Mode, SearchOpt, SeedKind};
use crate::index::fm::FMIndex;
use crate::index::sa::build_suffix_order;
use crate::io::{load_queries, load_reference, replicate_queries};
use crate::report::write_hits;
use crate::search::batch::search_batch;
use crate::search::{FilterEngine, Locator, SeedIndex, SuffixArrayIndex};

/// 索引构建统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub reference_len: usize,
    pub suffix_order_len: usize,
    pub bwt_len: usize,
}

/// 构建后缀排序与 FM 索引并返回统计信息（索引不落盘）。
pub fn run_index(reference_path: &Path, occ_block: usize) -> Result<IndexStats> {
    let reference = load_reference(reference_path)?;

    let t0 = Instant::now();
    let order = build_suffix_order(&reference);
    info!("suffix order built in {:.3?} ({} entries)", t0.elapsed(), order.len());

    let t1 = Instant::now();
    let fm = FMIndex::from_reference(&reference, occ_block.max(1))?;
    info!("FM index built in {:.3?} (bwt length {})", t1.elapsed(), fm.bwt.len());

    Ok(IndexStats {
        reference_len: reference.len(),
        suffix_order_len: order.len(),
        bwt_len: fm.bwt.len(),
    })
}

/// 按参数构建检索策略。参考序列被借用，整个会话内只读。
/// FM 索引要求参考已规范化（见 `load_reference`）。
pub fn build_locator<'r>(reference: &'r [u8], opt: &SearchOpt) -> Result<Locator<'r>> {
    let seed_index = |kind: SeedKind| -> Result<SeedIndex<'r>> {
        Ok(match kind {
            SeedKind::Suffix => SeedIndex::SuffixArray(SuffixArrayIndex::build(reference)),
            SeedKind::Fm => SeedIndex::FmIndex(FMIndex::from_reference(reference, opt.occ_block)?),
        })
    };
    let locator = match opt.mode {
        Mode::Naive => Locator::Naive(reference),
        Mode::Suffix => Locator::SuffixArray(SuffixArrayIndex::build(reference)),
        Mode::Fm => Locator::FmIndex(FMIndex::from_reference(reference, opt.occ_block)?),
        Mode::Filter => Locator::Filtration(
            FilterEngine::new(reference, seed_index(opt.seed)?, opt.errors).with_edge_policy(opt.edge.into()),
        ),
    };
    Ok(locator)
}

/// 读取参考与 reads，检索并输出结果。out 为 None 时写到 stdout。
pub fn run_search(reference_path: &Path, reads_path: &Path, out_path: Option<&Path>, opt: &SearchOpt) -> Result<()> {
    opt.validate()?;

    let reference = load_reference(reference_path)?;
    let mut queries = load_queries(reads_path)?;
    if let Some(n) = opt.query_count {
        queries = replicate_queries(&queries, n);
    }
    info!("reference: {} bp, queries: {}", reference.len(), queries.len());

    let t0 = Instant::now();
    let locator = build_locator(&reference, opt)?;
    info!("{} locator ready in {:.3?}", locator.name(), t0.elapsed());

    let t1 = Instant::now();
    let results = search_batch(&locator, &queries, opt.threads)?;
    let total_hits: usize = results.iter().map(Vec::len).sum();
    let mapped = results.iter().filter(|r| !r.is_empty()).count();
    info!(
        "searched {} queries in {:.3?} with {} thread(s): {} with hits, {} hits total",
        queries.len(),
        t1.elapsed(),
        opt.threads,
        mapped,
        total_hits
    );

    let mut out: Box<dyn Write> = match out_path {
        Some(p) => Box::new(std::io::BufWriter::new(
            std::fs::File::create(p).with_context(|| format!("cannot create '{}'", p.display()))?,
        )),
        None => Box::new(std::io::BufWriter::new(std::io::stdout())),
    };
    write_hits(&mut out, opt.format, &queries, &results)?;
    out.flush()?;
    Ok(())
}
