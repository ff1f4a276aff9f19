use super::sa::SuffixOrder;

/// 根据后缀排序构建 BWT。
/// text 为数值化字母表且以唯一的 0（$）结尾。
pub fn build_bwt(text: &[u8], order: &SuffixOrder) -> Vec<u8> {
    let n = text.len();
    order
        .as_slice()
        .iter()
        .map(|&p| {
            let i = p as usize;
            if i == 0 { text[n - 1] } else { text[i - 1] }
        })
        .collect()
}
