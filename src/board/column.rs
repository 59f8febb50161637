use super::task::Task;

/// 看板列标识
///
/// 固定四列，运行期不增减；枚举顺序即渲染顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Requested,
    ToDo,
    InProgress,
    Done,
}

impl ColumnKey {
    /// 所有列（按渲染顺序）
    pub fn all() -> &'static [ColumnKey] {
        &[
            ColumnKey::Requested,
            ColumnKey::ToDo,
            ColumnKey::InProgress,
            ColumnKey::Done,
        ]
    }

    /// 列在看板中的下标
    pub fn index(&self) -> usize {
        match self {
            ColumnKey::Requested => 0,
            ColumnKey::ToDo => 1,
            ColumnKey::InProgress => 2,
            ColumnKey::Done => 3,
        }
    }

    /// 从下标取列（越界时回到最后一列）
    pub fn from_index(index: usize) -> ColumnKey {
        *ColumnKey::all()
            .get(index)
            .unwrap_or(&ColumnKey::Done)
    }

    /// 列显示名
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKey::Requested => "Requested",
            ColumnKey::ToDo => "To do",
            ColumnKey::InProgress => "In Progress",
            ColumnKey::Done => "Done",
        }
    }

    /// 右侧相邻列（循环）
    pub fn next(&self) -> ColumnKey {
        ColumnKey::from_index((self.index() + 1) % ColumnKey::all().len())
    }

    /// 左侧相邻列（循环）
    pub fn previous(&self) -> ColumnKey {
        let len = ColumnKey::all().len();
        ColumnKey::from_index((self.index() + len - 1) % len)
    }
}

/// 看板列：有序的任务桶
#[derive(Debug, Clone)]
pub struct Column {
    /// 列显示名
    pub name: &'static str,
    /// 任务序列（顺序即展示/拖拽顺序）
    pub items: Vec<Task>,
}

impl Column {
    pub fn new(key: ColumnKey) -> Self {
        Self {
            name: key.label(),
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order_matches_index() {
        for (i, key) in ColumnKey::all().iter().enumerate() {
            assert_eq!(key.index(), i);
            assert_eq!(ColumnKey::from_index(i), *key);
        }
    }

    #[test]
    fn test_next_previous_wrap() {
        assert_eq!(ColumnKey::Done.next(), ColumnKey::Requested);
        assert_eq!(ColumnKey::Requested.previous(), ColumnKey::Done);
        assert_eq!(ColumnKey::ToDo.next(), ColumnKey::InProgress);
        assert_eq!(ColumnKey::InProgress.previous(), ColumnKey::ToDo);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ColumnKey::Requested.label(), "Requested");
        assert_eq!(ColumnKey::ToDo.label(), "To do");
        assert_eq!(ColumnKey::InProgress.label(), "In Progress");
        assert_eq!(ColumnKey::Done.label(), "Done");
    }
}
