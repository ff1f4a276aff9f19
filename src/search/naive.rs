use memchr::memmem;

use crate::util::dna;

/// 朴素定位：在 text 的私有副本上找最左出现、记录、用占位符覆盖该区段，重复直到找不到。
///
/// 结果天然升序。已报告的区段被覆盖，因此与之重叠的出现不会再被报告。
pub fn naive_search(pattern: &[u8], text: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    if m == 0 || m > text.len() {
        return Vec::new();
    }

    let mask = mask_symbol(pattern);
    let mut work = text.to_vec();
    let finder = memmem::Finder::new(pattern);
    let mut hits = Vec::new();
    // nothing left of the last hit can match any more, so resume there
    let mut from = 0usize;
    while let Some(rel) = finder.find(&work[from..]) {
        let pos = from + rel;
        hits.push(pos);
        work[pos..pos + m].fill(mask);
        from = pos + 1;
        if from + m > work.len() {
            break;
        }
    }
    hits
}

/// 占位符不能出现在 pattern 中
fn mask_symbol(pattern: &[u8]) -> u8 {
    if !pattern.contains(&dna::MASK) {
        return dna::MASK;
    }
    (0..=u8::MAX).find(|b| !pattern.contains(b)).unwrap_or(dna::MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_all_separate_occurrences() {
        assert_eq!(naive_search(b"ACGT", b"ACGTACGTAA"), vec![0, 4]);
        assert!(naive_search(b"GGGG", b"ACGTACGTAA").is_empty());
    }

    #[test]
    fn masked_span_is_not_rediscovered() {
        // "AA" at 0 masks 0..2, so the overlapping hit at 1 is skipped
        assert_eq!(naive_search(b"AA", b"AAAA"), vec![0, 2]);
        assert_eq!(naive_search(b"ATA", b"ATATATA"), vec![0, 4]);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(naive_search(b"", b"ACGT").is_empty());
        assert!(naive_search(b"ACGTA", b"ACGT").is_empty());
        assert_eq!(naive_search(b"ACGT", b"ACGT"), vec![0]);
    }

    #[test]
    fn text_is_left_untouched() {
        let text = b"CCCC".to_vec();
        let _ = naive_search(b"CC", &text);
        assert_eq!(text, b"CCCC");
    }

    #[test]
    fn pattern_containing_default_mask() {
        assert_eq!(naive_search(b"%A", b"%A%A"), vec![0, 2]);
    }
}
