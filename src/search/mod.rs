//! 检索策略：朴素扫描、后缀数组精确匹配、FM 索引精确匹配与鸽巢过滤近似匹配。
//!
//! 所有策略都通过 [`Locator::locate`] 以统一方式调用，结果为升序、无重复的参考偏移。

pub mod batch;
pub mod exact;
pub mod filter;
pub mod naive;
pub mod partition;

use crate::error::Result;
use crate::index::fm::FMIndex;

pub use self::exact::{exact_search, locate_insertion_point, SuffixArrayIndex};
pub use self::filter::{approximate_search, approximate_search_with, EdgePolicy, FilterEngine};
pub use self::naive::naive_search;
pub use self::partition::{split, Piece};

/// 精确匹配能力：返回 pattern 在参考中的所有出现位置（升序、无重复）。
///
/// 过滤引擎只依赖这一接口，后缀数组与 FM 索引可以互换：两者都按字节精确比较，
/// FM 索引只接受规范化的 ACGTN 参考，对含其他字节的 pattern 返回空集，
/// 因此在同一参考上二者结果一致。
pub trait ExactIndex {
    fn search(&self, pattern: &[u8]) -> Vec<usize>;
}

/// 过滤引擎可用的种子索引
#[derive(Debug, Clone)]
pub enum SeedIndex<'r> {
    SuffixArray(SuffixArrayIndex<'r>),
    FmIndex(FMIndex),
}

impl ExactIndex for SeedIndex<'_> {
    fn search(&self, pattern: &[u8]) -> Vec<usize> {
        match self {
            SeedIndex::SuffixArray(idx) => idx.search(pattern),
            SeedIndex::FmIndex(idx) => idx.search(pattern),
        }
    }
}

/// 检索策略，参考序列在整个会话中只读共享
#[derive(Debug, Clone)]
pub enum Locator<'r> {
    Naive(&'r [u8]),
    SuffixArray(SuffixArrayIndex<'r>),
    FmIndex(FMIndex),
    Filtration(FilterEngine<'r, SeedIndex<'r>>),
}

impl Locator<'_> {
    /// 定位 query 的所有命中。只有过滤模式会因配置不合法而失败。
    pub fn locate(&self, query: &[u8]) -> Result<Vec<usize>> {
        match self {
            Locator::Naive(reference) => Ok(naive_search(query, reference)),
            Locator::SuffixArray(idx) => Ok(idx.search(query)),
            Locator::FmIndex(idx) => Ok(idx.search(query)),
            Locator::Filtration(engine) => engine.locate(query),
        }
    }

    /// 在启动检索前校验 query 是否可被该策略处理
    pub fn check_query(&self, query: &[u8]) -> Result<()> {
        match self {
            Locator::Filtration(engine) => filter::check_budget(query.len(), engine.budget()),
            _ => Ok(()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Locator::Naive(_) => "naive",
            Locator::SuffixArray(_) => "suffix-array",
            Locator::FmIndex(_) => "fm-index",
            Locator::Filtration(_) => "filtration",
        }
    }
}
