use crate::error::{Result, SearchError};

/// 参考序列的后缀排序（后缀数组）。
///
/// `order[i]` 为第 i 小后缀的起始位置；真前缀按字典序小于任何更长的同前缀串。
/// 构建一次后只读，可在任意多个检索线程间共享。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixOrder {
    order: Vec<u32>,
}

impl SuffixOrder {
    /// 采用外部提供的排列（例如其他构建算法的结果）。
    /// 仅检查它确实是 [0, n) 的一个排列；字典序由调用方保证。
    pub fn from_permutation(order: Vec<u32>) -> Result<Self> {
        let n = order.len();
        let mut seen = vec![false; n];
        for &p in &order {
            let i = p as usize;
            if i >= n || seen[i] {
                return Err(SearchError::Config(format!(
                    "suffix order is not a permutation of 0..{}",
                    n
                )));
            }
            seen[i] = true;
        }
        Ok(Self { order })
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// 检查相邻后缀满足字典序不变式。
    pub fn is_sorted_for(&self, reference: &[u8]) -> bool {
        self.order.len() == reference.len()
            && self
                .order
                .windows(2)
                .all(|w| reference[w[0] as usize..] <= reference[w[1] as usize..])
    }
}

/// 后缀排序以 u32 存储位置，参考序列（含 FM 索引的哨兵）不能超过该范围。
pub const MAX_REFERENCE_LEN: usize = u32::MAX as usize;

/// 检查参考长度能否被 u32 位置表示
pub fn check_reference_len(len: usize) -> Result<()> {
    if len > MAX_REFERENCE_LEN {
        return Err(SearchError::Config(format!(
            "reference of {} bp exceeds the supported maximum of {} bp",
            len, MAX_REFERENCE_LEN
        )));
    }
    Ok(())
}

/// 构建后缀排序（倍增法，O(n log² n)）。
/// 直接作用于原始字节，不需要哨兵；越过文本末尾的位置视为最小。
/// 调用方需保证长度不超过 [`MAX_REFERENCE_LEN`]（见 [`check_reference_len`]）。
pub fn build_suffix_order(reference: &[u8]) -> SuffixOrder {
    let n = reference.len();
    if n == 0 {
        return SuffixOrder { order: Vec::new() };
    }
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<i64> = reference.iter().map(|&b| i64::from(b)).collect();
    let mut tmp: Vec<i64> = vec![0; n];

    let mut k = 1usize;
    loop {
        // (rank[i], rank[i + k])，越界取 -1
        let key = |i: usize| (rank[i], if i + k < n { rank[i + k] } else { -1 });
        sa.sort_unstable_by(|&a, &b| key(a).cmp(&key(b)));

        tmp[sa[0]] = 0;
        for w in 1..n {
            let (a, b) = (sa[w - 1], sa[w]);
            tmp[b] = tmp[a] + i64::from(key(a) != key(b));
        }
        rank.copy_from_slice(&tmp);

        // 所有秩互不相同即排序完成
        if rank[sa[n - 1]] as usize == n - 1 || k >= n {
            break;
        }
        k <<= 1;
    }

    SuffixOrder { order: sa.into_iter().map(|x| x as u32).collect() }
}
