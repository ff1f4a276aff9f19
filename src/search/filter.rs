//! 鸽巢种子过滤：有界错配检索。
//!
//! query 被切成 `budget + 1` 段；每段的每个精确命中给出整条 query 的一个候选比对，
//! 再将种子两侧的侧翼与参考逐位比较。只统计替换，不考虑插入与缺失。

use log::trace;

use crate::error::{Result, SearchError};

use super::partition::{split, Piece};
use super::ExactIndex;

/// 比对窗口越过参考边界时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// 只比较侧翼落在参考内的部分，越界位置不计错配
    #[default]
    Truncate,
    /// 整条 query 不能完全落在参考内则丢弃候选
    Reject,
}

/// 由种子命中推得的整条 query 候选比对
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    piece: usize,
    seed_pos: usize,
    start: usize,
}

impl Candidate {
    /// 比对起点落在参考之前时返回 `None`
    fn lift(piece: usize, seed: &Piece<'_>, seed_pos: usize) -> Option<Self> {
        let start = seed_pos.checked_sub(seed.offset)?;
        Some(Self { piece, seed_pos, start })
    }
}

/// 统计同一 query 各候选的侧翼错配数
struct Verifier<'a> {
    query: &'a [u8],
    reference: &'a [u8],
    pieces: &'a [Piece<'a>],
    budget: usize,
    edge: EdgePolicy,
}

impl Verifier<'_> {
    fn mismatches(&self, cand: &Candidate) -> usize {
        let piece = &self.pieces[cand.piece];
        let left_flank = &self.query[..piece.offset];
        let right_flank = &self.query[piece.end()..];

        let n = self.reference.len();
        let seed_end = (cand.seed_pos + piece.len()).min(n);
        let left_window = &self.reference[cand.start..cand.seed_pos];
        let right_window = &self.reference[seed_end..(seed_end + right_flank.len()).min(n)];

        hamming(left_window, left_flank) + hamming(right_window, right_flank)
    }

    fn accepts(&self, cand: &Candidate) -> bool {
        if self.edge == EdgePolicy::Reject && cand.start + self.query.len() > self.reference.len() {
            return false;
        }
        self.mismatches(cand) <= self.budget
    }
}

/// 逐位比较的错配数，按较短一方截断
#[inline]
fn hamming(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// 在检索开始前拒绝无法满足的错误预算
pub fn check_budget(query_len: usize, budget: usize) -> Result<()> {
    if query_len == 0 {
        return Err(SearchError::EmptyQuery);
    }
    if budget >= query_len {
        return Err(SearchError::ErrorBudgetTooLarge { budget, len: query_len });
    }
    Ok(())
}

/// query 以至多 budget 个替换出现的所有偏移（升序、无重复）；种子由 `seeds` 定位。
pub fn approximate_search<I>(query: &[u8], reference: &[u8], seeds: &I, budget: usize) -> Result<Vec<usize>>
where
    I: ExactIndex + ?Sized,
{
    approximate_search_with(query, reference, seeds, budget, EdgePolicy::default())
}

/// 同 [`approximate_search`]，可显式指定边界策略。
pub fn approximate_search_with<I>(
    query: &[u8],
    reference: &[u8],
    seeds: &I,
    budget: usize,
    edge: EdgePolicy,
) -> Result<Vec<usize>>
where
    I: ExactIndex + ?Sized,
{
    check_budget(query.len(), budget)?;
    let pieces = split(query, budget + 1)?;
    let verifier = Verifier { query, reference, pieces: &pieces, budget, edge };

    let mut hits = Vec::new();
    for (idx, piece) in pieces.iter().enumerate() {
        for seed_pos in seeds.search(piece.seq) {
            let Some(cand) = Candidate::lift(idx, piece, seed_pos) else {
                continue;
            };
            if verifier.accepts(&cand) {
                trace!("piece {} seed@{} -> hit@{}", cand.piece, cand.seed_pos, cand.start);
                hits.push(cand.start);
            }
        }
    }

    // the same occurrence is usually found through several seeds
    hits.sort_unstable();
    hits.dedup();
    Ok(hits)
}

/// 近似定位器：参考、种子索引与参数的组合
#[derive(Debug, Clone)]
pub struct FilterEngine<'r, I> {
    reference: &'r [u8],
    seeds: I,
    budget: usize,
    edge: EdgePolicy,
}

impl<'r, I: ExactIndex> FilterEngine<'r, I> {
    pub fn new(reference: &'r [u8], seeds: I, budget: usize) -> Self {
        Self { reference, seeds, budget, edge: EdgePolicy::default() }
    }

    pub fn with_edge_policy(mut self, edge: EdgePolicy) -> Self {
        self.edge = edge;
        self
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge
    }

    pub fn locate(&self, query: &[u8]) -> Result<Vec<usize>> {
        approximate_search_with(query, self.reference, &self.seeds, self.budget, self.edge)
    }
}
