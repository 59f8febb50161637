//! BoardStore：看板核心状态
//!
//! 持有四列任务与编辑草稿，对外暴露同步的变更操作。
//! 所有"失败"路径（空标题、不存在的 id、无效落点）均为静默 no-op，
//! 不抛错误，看板保持原样。

use super::column::{Column, ColumnKey};
use super::task::Task;

/// 编辑草稿字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Content,
    Description,
}

/// 进行中的编辑草稿（同一时刻最多一个）
#[derive(Debug, Clone, Default)]
pub struct EditDraft {
    /// 被编辑任务的 id；None 表示当前没有编辑
    pub task_id: Option<String>,
    pub content: String,
    pub description: String,
}

impl EditDraft {
    /// 是否处于编辑模式
    pub fn is_active(&self) -> bool {
        self.task_id.is_some()
    }
}

/// 新任务输入草稿
#[derive(Debug, Clone, Default)]
pub struct NewTaskDraft {
    pub content: String,
    pub description: String,
}

/// 看板状态存储
///
/// 由顶层 App 持有并传引用给渲染/事件代码，不使用全局变量。
#[derive(Debug)]
pub struct BoardStore {
    columns: [Column; 4],
    edit: EditDraft,
    new_task: NewTaskDraft,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    /// 创建空看板（四列均为空）
    pub fn new() -> Self {
        Self {
            columns: [
                Column::new(ColumnKey::Requested),
                Column::new(ColumnKey::ToDo),
                Column::new(ColumnKey::InProgress),
                Column::new(ColumnKey::Done),
            ],
            edit: EditDraft::default(),
            new_task: NewTaskDraft::default(),
        }
    }

    /// 按 key 取列
    pub fn column(&self, key: ColumnKey) -> &Column {
        &self.columns[key.index()]
    }

    fn column_mut(&mut self, key: ColumnKey) -> &mut Column {
        &mut self.columns[key.index()]
    }

    /// 全板任务总数
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(|c| c.items.len()).sum()
    }

    /// 取指定位置的任务
    pub fn task_at(&self, key: ColumnKey, index: usize) -> Option<&Task> {
        self.column(key).items.get(index)
    }

    /// 按 id 在全板查找任务当前所在的列与下标
    pub fn find_task(&self, task_id: &str) -> Option<(ColumnKey, usize)> {
        for key in ColumnKey::all() {
            if let Some(idx) = self.column(*key).items.iter().position(|t| t.id == task_id) {
                return Some((*key, idx));
            }
        }
        None
    }

    // ========== 新建任务 ==========

    /// 新任务草稿（只读）
    pub fn new_task_draft(&self) -> &NewTaskDraft {
        &self.new_task
    }

    /// 新任务草稿输入一个字符
    pub fn new_task_input_char(&mut self, field: EditField, c: char) {
        match field {
            EditField::Content => self.new_task.content.push(c),
            EditField::Description => self.new_task.description.push(c),
        }
    }

    /// 新任务草稿删除一个字符
    pub fn new_task_delete_char(&mut self, field: EditField) {
        match field {
            EditField::Content => {
                self.new_task.content.pop();
            }
            EditField::Description => {
                self.new_task.description.pop();
            }
        }
    }

    /// 清空新任务草稿（取消输入）
    pub fn clear_new_task_draft(&mut self) {
        self.new_task = NewTaskDraft::default();
    }

    /// 新建任务：追加到 Requested 列尾部
    ///
    /// 标题 trim 后为空则整板不变（草稿也保留）。成功后清空新任务草稿，
    /// 返回新任务的 id 供 UI 定位。新任务固定进 Requested 列，
    /// 与当前聚焦的列无关。
    pub fn add_task(&mut self, content: &str, description: &str) -> Option<String> {
        if content.trim().is_empty() {
            return None;
        }

        let task = Task::new(content, description);
        let id = task.id.clone();
        self.column_mut(ColumnKey::Requested).items.push(task);
        self.new_task = NewTaskDraft::default();
        Some(id)
    }

    /// 用草稿内容新建任务（TUI 提交路径）
    pub fn submit_new_task(&mut self) -> Option<String> {
        let draft = self.new_task.clone();
        self.add_task(&draft.content, &draft.description)
    }

    // ========== 删除 / 移动 ==========

    /// 从指定列删除任务，其余任务相对顺序不变
    ///
    /// 该列中不存在此 id 时为 no-op。
    pub fn delete_task(&mut self, key: ColumnKey, task_id: &str) {
        self.column_mut(key).items.retain(|t| t.id != task_id);
    }

    /// 移动任务（同列重排或跨列转移）
    ///
    /// `src_idx` 越界时整板保持原样。先从源列移除再插入目标列，
    /// 任务不会同时出现在两列。`dest_idx` 超出目标列长度时落到列尾
    /// （同列移动按移除后的长度算）。
    pub fn move_task(
        &mut self,
        src: ColumnKey,
        src_idx: usize,
        dest: ColumnKey,
        dest_idx: usize,
    ) {
        if src_idx >= self.column(src).items.len() {
            return;
        }

        let task = self.column_mut(src).items.remove(src_idx);
        let dest_items = &mut self.column_mut(dest).items;
        let at = dest_idx.min(dest_items.len());
        dest_items.insert(at, task);
    }

    // ========== 编辑 ==========

    /// 编辑草稿（只读）
    pub fn edit_draft(&self) -> &EditDraft {
        &self.edit
    }

    /// 开始编辑任务
    ///
    /// 草稿以当前标题/描述初始化。已有未保存的编辑会被直接丢弃
    /// （隐式取消并重开）。
    pub fn start_edit(&mut self, task_id: &str, content: &str, description: &str) {
        self.edit = EditDraft {
            task_id: Some(task_id.to_string()),
            content: content.to_string(),
            description: description.to_string(),
        };
    }

    /// 更新编辑草稿的单个字段，不触碰已存任务
    ///
    /// 没有进行中的编辑时不生效。
    pub fn update_edit_draft(&mut self, field: EditField, value: impl Into<String>) {
        if !self.edit.is_active() {
            return;
        }
        match field {
            EditField::Content => self.edit.content = value.into(),
            EditField::Description => self.edit.description = value.into(),
        }
    }

    /// 编辑草稿输入一个字符
    pub fn edit_input_char(&mut self, field: EditField, c: char) {
        if !self.edit.is_active() {
            return;
        }
        match field {
            EditField::Content => self.edit.content.push(c),
            EditField::Description => self.edit.description.push(c),
        }
    }

    /// 编辑草稿删除一个字符
    pub fn edit_delete_char(&mut self, field: EditField) {
        if !self.edit.is_active() {
            return;
        }
        match field {
            EditField::Content => {
                self.edit.content.pop();
            }
            EditField::Description => {
                self.edit.description.pop();
            }
        }
    }

    /// 保存编辑：在指定列中按草稿的 task_id 查找并覆盖标题/描述
    ///
    /// 找到则写回并退出编辑模式；找不到时任务与草稿都保持不变
    /// （草稿仍然活跃，不报错）。
    pub fn save_edit(&mut self, key: ColumnKey) {
        let Some(id) = self.edit.task_id.clone() else {
            return;
        };
        let content = self.edit.content.clone();
        let description = self.edit.description.clone();

        let Some(task) = self
            .column_mut(key)
            .items
            .iter_mut()
            .find(|t| t.id == id)
        else {
            return;
        };

        task.content = content;
        task.description = description;
        self.edit = EditDraft::default();
    }

    /// 取消编辑，丢弃未保存的修改（幂等）
    pub fn cancel_edit(&mut self) {
        self.edit = EditDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &BoardStore, key: ColumnKey) -> Vec<String> {
        store
            .column(key)
            .items
            .iter()
            .map(|t| t.id.clone())
            .collect()
    }

    #[test]
    fn test_new_board_is_empty() {
        let store = BoardStore::new();
        for key in ColumnKey::all() {
            assert!(store.column(*key).items.is_empty());
        }
        assert_eq!(store.total_tasks(), 0);
        assert!(!store.edit_draft().is_active());
    }

    #[test]
    fn test_add_task_appends_to_requested() {
        let mut store = BoardStore::new();
        store.add_task("first", "");
        let id = store.add_task("second", "details").unwrap();

        let items = &store.column(ColumnKey::Requested).items;
        assert_eq!(items.len(), 2);
        // 新任务总在列尾
        assert_eq!(items[1].id, id);
        assert_eq!(items[1].content, "second");
        assert_eq!(items[1].description, "details");

        // 其他列不受影响
        assert!(store.column(ColumnKey::ToDo).items.is_empty());
        assert!(store.column(ColumnKey::InProgress).items.is_empty());
        assert!(store.column(ColumnKey::Done).items.is_empty());
    }

    #[test]
    fn test_add_task_blank_content_is_noop() {
        let mut store = BoardStore::new();
        assert!(store.add_task("", "desc").is_none());
        assert!(store.add_task("   ", "desc").is_none());
        assert_eq!(store.total_tasks(), 0);
    }

    #[test]
    fn test_add_task_clears_draft() {
        let mut store = BoardStore::new();
        store.new_task_input_char(EditField::Content, 'x');
        store.new_task_input_char(EditField::Description, 'y');

        store.submit_new_task().unwrap();
        assert!(store.new_task_draft().content.is_empty());
        assert!(store.new_task_draft().description.is_empty());
        assert_eq!(store.column(ColumnKey::Requested).items[0].content, "x");
        assert_eq!(store.column(ColumnKey::Requested).items[0].description, "y");
    }

    #[test]
    fn test_submit_blank_draft_keeps_draft() {
        let mut store = BoardStore::new();
        store.new_task_input_char(EditField::Content, ' ');
        store.new_task_input_char(EditField::Description, 'd');

        assert!(store.submit_new_task().is_none());
        // no-op 路径不清草稿
        assert_eq!(store.new_task_draft().description, "d");
    }

    #[test]
    fn test_delete_task_preserves_order() {
        let mut store = BoardStore::new();
        let a = store.add_task("a", "").unwrap();
        let b = store.add_task("b", "").unwrap();
        let c = store.add_task("c", "").unwrap();

        store.delete_task(ColumnKey::Requested, &b);
        assert_eq!(ids(&store, ColumnKey::Requested), vec![a, c]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = BoardStore::new();
        store.add_task("a", "");
        store.delete_task(ColumnKey::Requested, "no-such-id");
        store.delete_task(ColumnKey::Done, "no-such-id");
        assert_eq!(store.total_tasks(), 1);
    }

    #[test]
    fn test_move_within_column_is_permutation() {
        let mut store = BoardStore::new();
        let a = store.add_task("a", "").unwrap();
        let b = store.add_task("b", "").unwrap();
        let c = store.add_task("c", "").unwrap();

        // a b c -> b c a (移到移除后长度处 = 列尾)
        store.move_task(ColumnKey::Requested, 0, ColumnKey::Requested, 2);
        assert_eq!(ids(&store, ColumnKey::Requested), vec![b.clone(), c.clone(), a.clone()]);

        // b c a -> a b c
        store.move_task(ColumnKey::Requested, 2, ColumnKey::Requested, 0);
        assert_eq!(ids(&store, ColumnKey::Requested), vec![a, b, c]);
        assert_eq!(store.total_tasks(), 3);
    }

    #[test]
    fn test_move_across_columns_transfers_ownership() {
        let mut store = BoardStore::new();
        let a = store.add_task("a", "").unwrap();
        let b = store.add_task("b", "").unwrap();

        store.move_task(ColumnKey::Requested, 0, ColumnKey::InProgress, 0);

        assert_eq!(ids(&store, ColumnKey::Requested), vec![b]);
        assert_eq!(ids(&store, ColumnKey::InProgress), vec![a.clone()]);
        assert_eq!(store.total_tasks(), 2);
        // 全板按 id 无重复
        assert_eq!(store.find_task(&a), Some((ColumnKey::InProgress, 0)));
    }

    #[test]
    fn test_move_dest_index_clamped() {
        let mut store = BoardStore::new();
        let a = store.add_task("a", "").unwrap();

        // 目标下标远超目标列长度，落到列尾
        store.move_task(ColumnKey::Requested, 0, ColumnKey::Done, 99);
        assert_eq!(ids(&store, ColumnKey::Done), vec![a]);
    }

    #[test]
    fn test_move_invalid_source_is_noop() {
        let mut store = BoardStore::new();
        store.add_task("a", "");

        store.move_task(ColumnKey::Requested, 5, ColumnKey::Done, 0);
        store.move_task(ColumnKey::Done, 0, ColumnKey::Requested, 0);

        assert_eq!(store.column(ColumnKey::Requested).items.len(), 1);
        assert!(store.column(ColumnKey::Done).items.is_empty());
    }

    #[test]
    fn test_edit_cancel_leaves_task_unchanged() {
        let mut store = BoardStore::new();
        let id = store.add_task("original", "desc").unwrap();

        store.start_edit(&id, "original", "desc");
        store.update_edit_draft(EditField::Content, "changed");
        store.cancel_edit();

        assert_eq!(store.column(ColumnKey::Requested).items[0].content, "original");
        assert!(!store.edit_draft().is_active());
        // 幂等
        store.cancel_edit();
        assert!(!store.edit_draft().is_active());
    }

    #[test]
    fn test_edit_save_updates_task() {
        let mut store = BoardStore::new();
        let id = store.add_task("original", "").unwrap();

        store.start_edit(&id, "original", "");
        store.update_edit_draft(EditField::Content, "X");
        store.save_edit(ColumnKey::Requested);

        assert_eq!(store.column(ColumnKey::Requested).items[0].content, "X");
        // 保存后回到 Idle
        assert!(!store.edit_draft().is_active());
    }

    #[test]
    fn test_save_edit_wrong_column_keeps_draft() {
        let mut store = BoardStore::new();
        let id = store.add_task("a", "").unwrap();

        store.start_edit(&id, "a", "");
        store.update_edit_draft(EditField::Content, "edited");
        store.save_edit(ColumnKey::Done);

        // 任务不变、草稿仍然活跃
        assert_eq!(store.column(ColumnKey::Requested).items[0].content, "a");
        assert!(store.edit_draft().is_active());
        assert_eq!(store.edit_draft().content, "edited");
    }

    #[test]
    fn test_update_draft_without_active_edit_is_noop() {
        let mut store = BoardStore::new();
        store.update_edit_draft(EditField::Content, "ghost");
        store.edit_input_char(EditField::Description, 'x');
        assert!(store.edit_draft().content.is_empty());
        assert!(store.edit_draft().description.is_empty());
    }

    #[test]
    fn test_start_edit_replaces_previous_draft() {
        let mut store = BoardStore::new();
        let a = store.add_task("a", "").unwrap();
        let b = store.add_task("b", "").unwrap();

        store.start_edit(&a, "a", "");
        store.update_edit_draft(EditField::Content, "unsaved");
        // 直接切到另一个任务，未保存的修改被丢弃
        store.start_edit(&b, "b", "");

        assert_eq!(store.edit_draft().task_id.as_deref(), Some(b.as_str()));
        assert_eq!(store.edit_draft().content, "b");
        assert_eq!(store.column(ColumnKey::Requested).items[0].content, "a");
    }

    #[test]
    fn test_edit_char_helpers() {
        let mut store = BoardStore::new();
        let id = store.add_task("ab", "").unwrap();

        store.start_edit(&id, "ab", "");
        store.edit_input_char(EditField::Content, 'c');
        assert_eq!(store.edit_draft().content, "abc");
        store.edit_delete_char(EditField::Content);
        store.edit_delete_char(EditField::Content);
        assert_eq!(store.edit_draft().content, "a");
        store.save_edit(ColumnKey::Requested);
        assert_eq!(store.column(ColumnKey::Requested).items[0].content, "a");
    }

    #[test]
    fn test_end_to_end_scenario() {
        // 对应原始交互流程：新建 -> 拖到 To do -> 编辑描述 -> 保存
        let mut store = BoardStore::new();

        let id = store.add_task("Write spec", "").unwrap();
        assert_eq!(store.column(ColumnKey::Requested).items.len(), 1);
        assert_eq!(store.column(ColumnKey::Requested).items[0].content, "Write spec");
        assert_eq!(store.column(ColumnKey::Requested).items[0].description, "");

        store.move_task(ColumnKey::Requested, 0, ColumnKey::ToDo, 0);
        assert!(store.column(ColumnKey::Requested).items.is_empty());
        assert_eq!(ids(&store, ColumnKey::ToDo), vec![id.clone()]);

        store.start_edit(&id, "Write spec", "");
        store.update_edit_draft(EditField::Description, "done by Friday");
        store.save_edit(ColumnKey::ToDo);

        assert_eq!(
            store.column(ColumnKey::ToDo).items[0].description,
            "done by Friday"
        );
        assert!(!store.edit_draft().is_active());
    }
}
