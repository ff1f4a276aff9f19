use clap::ValueEnum;

use crate::error::{Result, SearchError};
use crate::search::EdgePolicy;

/// 检索策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// 朴素扫描 + 掩码
    Naive,
    /// 后缀数组二分 + 边界扩展
    Suffix,
    /// FM 索引反向搜索
    Fm,
    /// 鸽巢分段过滤，允许 --errors 个替换错配
    Filter,
}

/// 过滤模式下种子的精确匹配索引
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedKind {
    Suffix,
    Fm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EdgeMode {
    /// 越过参考边界的侧翼只比较边界内部分
    Truncate,
    /// 比对窗口越界即丢弃
    Reject,
}

impl From<EdgeMode> for EdgePolicy {
    fn from(m: EdgeMode) -> Self {
        match m {
            EdgeMode::Truncate => EdgePolicy::Truncate,
            EdgeMode::Reject => EdgePolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// read_id \t count \t offsets
    Tsv,
    /// 每行一个 JSON 对象
    Json,
}

/// 检索参数
#[derive(Debug, Clone)]
pub struct SearchOpt {
    pub mode: Mode,
    pub errors: usize,
    pub seed: SeedKind,
    pub edge: EdgeMode,
    /// 循环复制 / 截断 reads 到指定数量
    pub query_count: Option<usize>,
    pub threads: usize,
    pub format: OutputFormat,
    /// FM 索引 Occ 采样块大小
    pub occ_block: usize,
}

impl Default for SearchOpt {
    fn default() -> Self {
        Self {
            mode: Mode::Suffix,
            errors: 0,
            seed: SeedKind::Suffix,
            edge: EdgeMode::Truncate,
            query_count: None,
            threads: 1,
            format: OutputFormat::Tsv,
            occ_block: 64,
        }
    }
}

impl SearchOpt {
    /// 与具体 reads 无关的参数检查；错误预算与 read 长度的关系在检索前另行检查。
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(SearchError::Config("--threads must be at least 1".to_string()));
        }
        if self.occ_block == 0 {
            return Err(SearchError::Config("--occ-block must be at least 1".to_string()));
        }
        if self.errors > 0 && self.mode != Mode::Filter {
            return Err(SearchError::Config(format!(
                "--errors {} needs --mode filter (mode is {:?})",
                self.errors, self.mode
            )));
        }
        Ok(())
    }
}
