use crate::index::sa::{build_suffix_order, SuffixOrder};

use super::ExactIndex;

/// 返回 `order` 中第一个后缀 `reference[order[i]..]` 不小于 `pattern` 的下标 i。
/// O(|pattern| log n)。
pub fn locate_insertion_point(pattern: &[u8], order: &[u32], reference: &[u8]) -> usize {
    order.partition_point(|&p| &reference[p as usize..] < pattern)
}

/// pattern 的全部精确出现位置（升序）。
///
/// 以 pattern 为前缀的后缀在插入点附近构成连续一段；段内按后缀字典序排列，
/// 返回前按数值重新排序。
pub fn exact_search(pattern: &[u8], order: &SuffixOrder, reference: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > reference.len() {
        return Vec::new();
    }
    let order = order.as_slice();
    let first = locate_insertion_point(pattern, order, reference);
    let shares_prefix = |i: usize| reference[order[i] as usize..].starts_with(pattern);

    let mut left = first;
    while left > 0 && shares_prefix(left - 1) {
        left -= 1;
    }
    let mut right = first;
    while right < order.len() && shares_prefix(right) {
        right += 1;
    }

    let mut hits: Vec<usize> = order[left..right].iter().map(|&p| p as usize).collect();
    hits.sort_unstable();
    hits
}

/// 参考序列及其后缀排序
#[derive(Debug, Clone)]
pub struct SuffixArrayIndex<'r> {
    reference: &'r [u8],
    order: SuffixOrder,
}

impl<'r> SuffixArrayIndex<'r> {
    pub fn build(reference: &'r [u8]) -> Self {
        Self { reference, order: build_suffix_order(reference) }
    }

    /// 包装外部构建的后缀排序；debug 构建下长度不符会 panic。
    pub fn with_order(reference: &'r [u8], order: SuffixOrder) -> Self {
        debug_assert_eq!(order.len(), reference.len());
        Self { reference, order }
    }

    pub fn reference(&self) -> &'r [u8] {
        self.reference
    }
}

impl ExactIndex for SuffixArrayIndex<'_> {
    fn search(&self, pattern: &[u8]) -> Vec<usize> {
        exact_search(pattern, &self.order, self.reference)
    }
}
