use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 看板卡片（任务）
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// 任务 ID (UUID v4，全板唯一)
    pub id: String,
    /// 任务标题（用户输入原文，不做 trim）
    pub content: String,
    /// 任务描述（可为空）
    pub description: String,
    /// 创建时间（仅用于展示）
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// 创建新任务并生成唯一 ID
    pub fn new(content: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}
