/// 检索过程中可能出现的错误。
///
/// 所有配置类错误都在真正开始检索之前一次性检出；
/// "未找到" 不是错误，检索返回空集合即可。
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("cannot split a query of length {len} into {parts} pieces")]
    InvalidPartCount { parts: usize, len: usize },

    #[error("error budget {budget} is too large for a query of length {len}")]
    ErrorBudgetTooLarge { budget: usize, len: usize },

    #[error("query is empty")]
    EmptyQuery,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, SearchError>;
