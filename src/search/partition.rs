use crate::error::{Result, SearchError};

/// query 的一个连续片段及其在 query 中的起始偏移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'q> {
    pub offset: usize,
    pub seq: &'q [u8],
}

impl<'q> Piece<'q> {
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// 片段覆盖的最后一个位置之后
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.seq.len()
    }
}

/// 将 query 从左到右切成 num_parts 段，无缝无重叠地覆盖整个 query。
///
/// 前 `len % num_parts` 段各多一个字符。取 `num_parts = k + 1` 时，
/// 至多 k 个替换必然留下一段完全无错配（鸽巢原理）。
pub fn split(query: &[u8], num_parts: usize) -> Result<Vec<Piece<'_>>> {
    let len = query.len();
    if num_parts == 0 || num_parts > len {
        return Err(SearchError::InvalidPartCount { parts: num_parts, len });
    }

    let base = len / num_parts;
    let remainder = len % num_parts;
    let mut pieces = Vec::with_capacity(num_parts);
    let mut start = 0usize;
    for i in 0..num_parts {
        let end = start + base + usize::from(i < remainder);
        pieces.push(Piece { offset: start, seq: &query[start..end] });
        start = end;
    }
    Ok(pieces)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')], 1..=max_len)
    }

    proptest! {
        #[test]
        fn pieces_reassemble_query(
            (query, k) in dna_seq(120).prop_flat_map(|q| {
                let len = q.len();
                (Just(q), 1..=len)
            }),
        ) {
            let pieces = split(&query, k).unwrap();
            prop_assert_eq!(pieces.len(), k);
            let joined: Vec<u8> = pieces.iter().flat_map(|p| p.seq.iter().copied()).collect();
            prop_assert_eq!(&joined, &query);

            let mut expected_offset = 0;
            for p in &pieces {
                prop_assert_eq!(p.offset, expected_offset);
                expected_offset = p.end();
            }

            let min = pieces.iter().map(Piece::len).min().unwrap();
            let max = pieces.iter().map(Piece::len).max().unwrap();
            prop_assert!(max - min <= 1, "piece lengths {}..{}", min, max);
        }
    }
}
