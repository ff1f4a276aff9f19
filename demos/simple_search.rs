//! 演示如何在 library 模式下使用 readlocate 进行精确与近似检索。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_search
//! ```

use readlocate::index::fm::FMIndex;
use readlocate::index::sa::build_suffix_order;
use readlocate::search::{exact_search, naive_search, split, FilterEngine, Locator, SeedIndex, SuffixArrayIndex};

fn main() -> readlocate::Result<()> {
    // 1. 参考序列与后缀排序
    let reference: &[u8] = b"ACGTACGTAGCTGATCGTAGCTAGCTAGCTGATCGTAGCTAGCTAGCTGAT";
    println!("参考序列: {}", String::from_utf8_lossy(reference));
    println!("参考长度: {} bp", reference.len());

    let order = build_suffix_order(reference);

    // 2. 精确匹配：后缀数组 vs 朴素
    let pattern = b"GCTGAT";
    println!("\n精确匹配 '{}':", String::from_utf8_lossy(pattern));
    println!("  后缀数组: {:?}", exact_search(pattern, &order, reference));
    println!("  朴素扫描: {:?}", naive_search(pattern, reference));

    // 3. 鸽巢分段
    let read = b"GCTAGCTAGCAGATCG";
    let pieces = split(read, 3)?;
    println!("\nread '{}' 切成 {} 段:", String::from_utf8_lossy(read), pieces.len());
    for p in &pieces {
        println!("  [{}..{}) {}", p.offset, p.end(), String::from_utf8_lossy(p.seq));
    }

    // 4. 近似检索：后缀数组种子与 FM 索引种子
    for (label, seeds) in [
        ("suffix-array", SeedIndex::SuffixArray(SuffixArrayIndex::with_order(reference, order.clone()))),
        ("fm-index", SeedIndex::FmIndex(FMIndex::from_reference(reference, 16)?)),
    ] {
        let locator = Locator::Filtration(FilterEngine::new(reference, seeds, 2));
        println!("\n最多 2 个错配（{} 种子）: {:?}", label, locator.locate(read)?);
    }

    println!("\n完成！");
    Ok(())
}
