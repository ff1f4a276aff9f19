pub const SIGMA: usize = 6; // {0:$, 1:A, 2:C, 3:G, 4:T, 5:N}

/// 朴素扫描覆盖已报告区段所用的占位符，`normalize_seq` 不会产生该字节。
pub const MASK: u8 = b'%';

#[inline]
pub fn to_alphabet(b: u8) -> u8 {
    if b == 0 { return 0; }
    match b.to_ascii_uppercase() {
        b'A' => 1,
        b'C' => 2,
        b'G' => 3,
        b'T' | b'U' => 4,
        _ => 5, // N and everything else
    }
}

/// 编码整条序列到 [1..SIGMA) 数值字母表（不追加哨兵）
pub fn encode(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|&b| to_alphabet(b)).collect()
}

/// 是否属于规范化后的 DNA5 字母表（大写 ACGTN）
#[inline]
pub fn is_dna5(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T' | b'N')
}

/// 序列是否已是 `normalize_seq` 的输出形式
pub fn is_normalized(seq: &[u8]) -> bool {
    seq.iter().all(|&b| is_dna5(b))
}

pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len());
    for &b in seq {
        let up = b.to_ascii_uppercase();
        let nb = match up {
            b'A' | b'C' | b'G' | b'T' | b'N' => up,
            b'U' => b'T',
            _ => b'N',
        };
        out.push(nb);
    }
    out
}
