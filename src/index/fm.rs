use crate::error::{Result, SearchError};
use crate::search::ExactIndex;
use crate::util::dna;

use super::bwt::build_bwt;
use super::sa::{build_suffix_order, check_reference_len, SuffixOrder};

/// 朴素 FM 索引实现：
/// - 字母以 [0..sigma) 编码，0 预留为 $。
/// - 采用定长分块的 Occ 采样（块内顺扫补偿）。
/// - 保存完整 SA，方便从区间获得位置。
///
/// 只接受规范化后的 DNA5 文本（大写 ACGTN），与后缀数组按原始字节比较的
/// 结果保持一致：参考中出现其他字节时构建失败，pattern 中出现其他字节时
/// 检索结果为空。
///
/// 仅在内存中存在，不做持久化。
#[derive(Debug, Clone)]
pub struct FMIndex {
    pub sigma: u8,
    pub block: u32,
    /// C[i] = 文本中字母 < i 的累计数量
    pub c: Vec<u32>,
    /// BWT 序列（与 SA 同长度）
    pub bwt: Vec<u8>,
    /// Occ 采样（按块存储，行优先展平）：occ_samples[block_id * sigma + c]
    pub occ_samples: Vec<u32>,
    /// 完整 SA
    pub sa: SuffixOrder,
}

impl FMIndex {
    pub fn build(bwt: Vec<u8>, sa: SuffixOrder, sigma: u8, block: usize) -> Self {
        let n = bwt.len();
        let sigma_us = sigma as usize;
        let block = block.max(1);

        let mut freq = vec![0u32; sigma_us];
        for &ch in &bwt {
            if let Some(f) = freq.get_mut(ch as usize) {
                *f += 1;
            }
        }
        let mut c = vec![0u32; sigma_us];
        let mut acc = 0u32;
        for (slot, f) in c.iter_mut().zip(&freq) {
            *slot = acc;
            acc += f;
        }

        let num_blocks = (n + block - 1) / block;
        let mut occ_samples = vec![0u32; num_blocks * sigma_us];
        let mut running = vec![0u32; sigma_us];
        for (bi, chunk) in bwt.chunks(block).enumerate() {
            // 记录到块起始位置的累计
            occ_samples[bi * sigma_us..(bi + 1) * sigma_us].copy_from_slice(&running);
            for &ch in chunk {
                if let Some(r) = running.get_mut(ch as usize) {
                    *r += 1;
                }
            }
        }

        Self { sigma, block: block as u32, c, bwt, occ_samples, sa }
    }

    /// 从规范化的参考序列直接构建：编码、追加哨兵、排序后缀、生成 BWT。
    pub fn from_reference(reference: &[u8], block: usize) -> Result<Self> {
        if let Some(pos) = reference.iter().position(|&b| !dna::is_dna5(b)) {
            return Err(SearchError::Config(format!(
                "FM index needs a normalised ACGTN reference, found {:?} at offset {}",
                reference[pos] as char, pos
            )));
        }
        check_reference_len(reference.len() + 1)?;
        let mut text = dna::encode(reference);
        text.push(0);
        let sa = build_suffix_order(&text);
        let bwt = build_bwt(&text, &sa);
        Ok(Self::build(bwt, sa, dna::SIGMA as u8, block))
    }

    /// 返回 BWT[0..pos) 中 c 的出现次数
    #[inline]
    pub fn occ(&self, c: u8, pos: usize) -> u32 {
        if pos == 0 { return 0; }
        let sigma_us = self.sigma as usize;
        let block = self.block as usize;
        let bi = (pos - 1) / block;
        let base = self.occ_samples[bi * sigma_us + c as usize];
        let start = bi * block;
        let add = self.bwt[start..pos].iter().filter(|&&ch| ch == c).count() as u32;
        base + add
    }

    /// 在区间 [l, r) 上向左扩展字符 c 后的新区间
    #[inline]
    pub fn rank_range(&self, c: u8, l: usize, r: usize) -> (usize, usize) {
        let c0 = self.c[c as usize] as usize;
        let nl = c0 + self.occ(c, l) as usize;
        let nr = c0 + self.occ(c, r) as usize;
        (nl, nr)
    }

    /// 反向搜索精确匹配，pat 已经是编码后的字母表（不应包含 0）
    pub fn backward_search(&self, pat: &[u8]) -> Option<(usize, usize)> {
        if self.bwt.is_empty() { return None; }
        let mut l = 0usize;
        let mut r = self.bwt.len();
        for &a in pat.iter().rev() {
            if a == 0 || a as usize >= self.sigma as usize { return None; }
            let (nl, nr) = self.rank_range(a, l, r);
            if nl >= nr { return None; }
            l = nl;
            r = nr;
        }
        Some((l, r))
    }

    /// 取出 SA 区间对应的文本位置（按后缀字典序，而非数值序）。
    pub fn sa_interval_positions(&self, l: usize, r: usize) -> &[u32] {
        &self.sa.as_slice()[l..r]
    }
}

impl ExactIndex for FMIndex {
    fn search(&self, pattern: &[u8]) -> Vec<usize> {
        // 参考只含 ACGTN，其他字节不可能匹配
        if pattern.is_empty() || !dna::is_normalized(pattern) {
            return Vec::new();
        }
        let encoded = dna::encode(pattern);
        let Some((l, r)) = self.backward_search(&encoded) else {
            return Vec::new();
        };
        let mut hits: Vec<usize> = self.sa_interval_positions(l, r).iter().map(|&p| p as usize).collect();
        hits.sort_unstable();
        hits
    }
}
