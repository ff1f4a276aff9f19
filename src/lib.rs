//! # readlocate
//!
//! 在固定参考序列中定位短 read 的原型工具：精确匹配或允许有限个替换错配。
//!
//! 本 crate 提供：
//!
//! - **后缀排序检索**：在预先构建的后缀数组上二分查找插入点，再向两侧扩展出完整命中块
//! - **朴素检索**：逐次查找并掩码，作为基准 / 对照
//! - **FM 索引**：反向搜索，可替代后缀数组作为种子索引
//! - **鸽巢过滤**：将 read 切成 `k + 1` 段，逐段精确匹配后校验两侧侧翼的错配数
//!
//! ## 快速示例
//!
//! ```rust
//! use readlocate::search::{approximate_search, exact_search, naive_search, SuffixArrayIndex};
//! use readlocate::index::sa::build_suffix_order;
//!
//! let reference = b"ACGTACGTAA";
//! let order = build_suffix_order(reference);
//! assert_eq!(exact_search(b"ACGT", &order, reference), vec![0, 4]);
//! assert_eq!(naive_search(b"ACGT", reference), vec![0, 4]);
//!
//! let reference = b"AAACAAATAAA";
//! let idx = SuffixArrayIndex::build(reference);
//! let hits = approximate_search(b"AAACAAAGAAA", reference, &idx, 1).unwrap();
//! assert_eq!(hits, vec![0]);
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — FASTA / FASTQ 解析与 reads 装载
//! - [`index`] — 后缀排序、BWT、FM 索引构建
//! - [`search`] — 各检索策略与批量检索
//! - [`config`] / [`pipeline`] / [`report`] — 命令行驱动所需的参数、流程与输出
//! - [`util`] — DNA 归一化 / 编码

pub mod config;
pub mod error;
pub mod index;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod search;
pub mod util;

pub use error::{Result, SearchError};
