//! Speech Queries

/// history 默认返回条数
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// 历史记录查询
#[derive(Debug, Clone, Default)]
pub struct GetHistory {
    /// 按用户过滤；None 返回全部
    pub user_id: Option<String>,
    /// 最多返回条数；None 时取 [`DEFAULT_HISTORY_LIMIT`]
    pub limit: Option<usize>,
}

/// 统计查询
#[derive(Debug, Clone, Default)]
pub struct GetStatistics {
    pub user_id: Option<String>,
}
