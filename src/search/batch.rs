use rayon::prelude::*;

use crate::error::{Result, SearchError};

use super::Locator;

/// 在 `threads` 个工作线程上定位每条 query，结果保持输入顺序。
///
/// 先用定位器校验全部 query，配置不合法时整批在检索开始前失败。
pub fn search_batch<Q>(locator: &Locator<'_>, queries: &[Q], threads: usize) -> Result<Vec<Vec<usize>>>
where
    Q: AsRef<[u8]> + Sync,
{
    if threads == 0 {
        return Err(SearchError::Config("thread count must be at least 1".to_string()));
    }
    for q in queries {
        locator.check_query(q.as_ref())?;
    }

    if threads == 1 {
        return queries.iter().map(|q| locator.locate(q.as_ref())).collect();
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    pool.install(|| queries.par_iter().map(|q| locator.locate(q.as_ref())).collect())
}
