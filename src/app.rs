//! 全局应用状态
//!
//! `App` 显式持有 BoardStore 并传引用给渲染/事件代码，
//! 不使用任何全局可变状态。

use ratatui::widgets::ListState;

use crate::board::{BoardStore, ColumnKey, EditField, Task};
use crate::dialogs::{ConfirmType, DialogState};
use crate::storage::config::{self, Config};
use crate::theme::Theme;
use crate::ui_state::UiState;

/// 键盘"拖拽"状态：拿起的任务与候选落点
///
/// 拿起后看板不变，只有落下 (`drop_grab`) 才调用 `move_task`；
/// 取消对应"没有有效落点"的手势，看板保持原样。
#[derive(Debug, Clone)]
pub struct MoveState {
    /// 源列
    pub source: ColumnKey,
    /// 拿起时的源下标
    pub source_index: usize,
    /// 被拿起任务的 id（渲染用）
    pub task_id: String,
    /// 候选目标列
    pub dest: ColumnKey,
    /// 候选插入位置
    pub dest_index: usize,
}

/// 看板视图状态（列聚焦 + 各列选中项）
#[derive(Debug)]
pub struct BoardViewState {
    /// 当前聚焦的列
    pub focused: ColumnKey,
    /// 列表选择状态（每列独立维护）
    pub list_states: [ListState; 4],
}

impl BoardViewState {
    pub fn new() -> Self {
        Self {
            focused: ColumnKey::Requested,
            list_states: [
                ListState::default(),
                ListState::default(),
                ListState::default(),
                ListState::default(),
            ],
        }
    }

    /// 聚焦列的选中下标
    pub fn selected(&self) -> Option<usize> {
        self.list_states[self.focused.index()].selected()
    }

    /// 设置聚焦列的选中下标
    pub fn select(&mut self, index: Option<usize>) {
        self.list_states[self.focused.index()].select(index);
    }

    /// 聚焦列的列表状态（渲染用）
    pub fn list_state_mut(&mut self, key: ColumnKey) -> &mut ListState {
        &mut self.list_states[key.index()]
    }

    /// 保证选中项落在 [0, len) 内；空列清空选中
    pub fn ensure_selection(&mut self, len: usize) {
        let state = &mut self.list_states[self.focused.index()];
        if len == 0 {
            state.select(None);
            return;
        }
        match state.selected() {
            None => state.select(Some(0)),
            Some(i) if i >= len => state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    /// 选中下一项（循环）
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let state = &mut self.list_states[self.focused.index()];
        let current = state.selected().unwrap_or(0);
        state.select(Some((current + 1) % len));
    }

    /// 选中上一项（循环）
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let state = &mut self.list_states[self.focused.index()];
        let current = state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        state.select(Some(prev));
    }
}

impl Default for BoardViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 看板数据
    pub board: BoardStore,
    /// 看板视图状态
    pub view: BoardViewState,
    /// 进行中的键盘拖拽
    pub grabbed: Option<MoveState>,
    /// 对话框状态
    pub dialogs: DialogState,
    /// UI 状态（主题、Toast）
    pub ui: UiState,
    /// 应用配置
    pub config: Config,
}

impl App {
    /// 创建应用状态
    ///
    /// 主题取 `--theme` 覆盖值，否则读配置。
    pub fn new(config: Config, theme_override: Option<Theme>) -> Self {
        let theme = theme_override.unwrap_or_else(|| Theme::from_name(&config.theme.name));

        Self {
            should_quit: false,
            board: BoardStore::new(),
            view: BoardViewState::new(),
            grabbed: None,
            dialogs: DialogState::new(),
            ui: UiState::new(theme),
            config,
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.ui.show_toast(message);
    }

    /// 清理过期的 Toast
    pub fn update_toast(&mut self) {
        self.ui.update_toast();
    }

    /// 检查系统主题变化（Auto 模式）
    pub fn check_system_theme(&mut self) {
        self.ui.check_system_theme();
    }

    // ========== 导航 ==========

    /// 聚焦列的任务数
    fn focused_len(&self) -> usize {
        self.board.column(self.view.focused).items.len()
    }

    /// 聚焦列中当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        let index = self.view.selected()?;
        self.board.task_at(self.view.focused, index)
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.focused_len();
        self.view.select_next(len);
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.focused_len();
        self.view.select_previous(len);
    }

    /// 聚焦右侧列
    pub fn focus_next_column(&mut self) {
        self.view.focused = self.view.focused.next();
        let len = self.focused_len();
        self.view.ensure_selection(len);
    }

    /// 聚焦左侧列
    pub fn focus_previous_column(&mut self) {
        self.view.focused = self.view.focused.previous();
        let len = self.focused_len();
        self.view.ensure_selection(len);
    }

    // ========== New Task ==========

    /// 打开 New Task 弹窗
    pub fn open_new_task_dialog(&mut self) {
        self.board.clear_new_task_draft();
        self.dialogs.show_new_task = true;
        self.dialogs.new_task_field = EditField::Content;
    }

    /// 关闭 New Task 弹窗并丢弃输入
    pub fn close_new_task_dialog(&mut self) {
        self.dialogs.show_new_task = false;
        self.dialogs.new_task_field = EditField::Content;
        self.board.clear_new_task_draft();
    }

    /// 提交新任务
    ///
    /// 标题为空时弹窗保持打开（草稿保留），只给 Toast 提示。
    /// 成功后聚焦 Requested 列并选中新任务。
    pub fn submit_new_task(&mut self) {
        let title = self.board.new_task_draft().content.clone();

        match self.board.submit_new_task() {
            Some(_id) => {
                self.dialogs.show_new_task = false;
                self.dialogs.new_task_field = EditField::Content;

                // 新任务固定追加在 Requested 列尾
                self.view.focused = ColumnKey::Requested;
                let len = self.board.column(ColumnKey::Requested).items.len();
                self.view.select(Some(len - 1));

                self.show_toast(format!("Added: {}", title.trim()));
            }
            None => {
                self.show_toast("Task title cannot be empty");
            }
        }
    }

    // ========== Edit ==========

    /// 对选中任务打开编辑弹窗
    pub fn open_edit_dialog(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let (id, content, description) = (
            task.id.clone(),
            task.content.clone(),
            task.description.clone(),
        );

        self.board.start_edit(&id, &content, &description);
        self.dialogs.show_edit = true;
        self.dialogs.edit_field = EditField::Content;
    }

    /// 保存编辑弹窗
    ///
    /// 保存前按 id 解析任务当前所在的列（任务可能在编辑开始后被移动）。
    pub fn save_edit_dialog(&mut self) {
        let Some(id) = self.board.edit_draft().task_id.clone() else {
            self.dialogs.show_edit = false;
            return;
        };

        match self.board.find_task(&id) {
            Some((column, _)) => {
                self.board.save_edit(column);
                if !self.board.edit_draft().is_active() {
                    self.dialogs.show_edit = false;
                    self.show_toast("Saved");
                }
            }
            None => {
                // 任务已不在看板上（编辑期间被删除），放弃这次编辑
                self.board.cancel_edit();
                self.dialogs.show_edit = false;
                self.show_toast("Task no longer exists");
            }
        }
    }

    /// 取消编辑，丢弃未保存的修改
    pub fn cancel_edit_dialog(&mut self) {
        self.board.cancel_edit();
        self.dialogs.show_edit = false;
    }

    // ========== Delete ==========

    /// 请求删除选中任务（按配置决定是否先确认）
    pub fn request_delete_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let (id, content) = (task.id.clone(), task.content.clone());

        if self.config.ui.confirm_delete {
            self.dialogs.confirm = Some(ConfirmType::DeleteTask {
                column: self.view.focused,
                task_id: id,
                content,
            });
        } else {
            self.delete_task_now(self.view.focused, &id, &content);
        }
    }

    /// 确认弹窗里按下了确认
    pub fn confirm_dialog_accepted(&mut self) {
        let Some(confirm) = self.dialogs.confirm.take() else {
            return;
        };
        match confirm {
            ConfirmType::DeleteTask {
                column,
                task_id,
                content,
            } => {
                self.delete_task_now(column, &task_id, &content);
            }
        }
    }

    fn delete_task_now(&mut self, column: ColumnKey, task_id: &str, content: &str) {
        self.board.delete_task(column, task_id);

        if column == self.view.focused {
            let len = self.focused_len();
            self.view.ensure_selection(len);
        }
        self.show_toast(format!("Deleted: {}", content));
    }

    // ========== Move (键盘拖拽) ==========

    /// 拿起选中任务，进入移动模式
    pub fn grab_selected(&mut self) {
        let Some(index) = self.view.selected() else {
            return;
        };
        let Some(task) = self.board.task_at(self.view.focused, index) else {
            return;
        };

        self.grabbed = Some(MoveState {
            source: self.view.focused,
            source_index: index,
            task_id: task.id.clone(),
            dest: self.view.focused,
            dest_index: index,
        });
    }

    /// 候选落点的最大插入下标（同列按移除后长度算）
    fn grab_dest_max(&self, mv: &MoveState) -> usize {
        let len = self.board.column(mv.dest).items.len();
        if mv.dest == mv.source {
            len.saturating_sub(1)
        } else {
            len
        }
    }

    /// 候选落点移到左侧列
    pub fn grab_move_left(&mut self) {
        let Some(mut mv) = self.grabbed.take() else {
            return;
        };
        mv.dest = mv.dest.previous();
        mv.dest_index = mv.dest_index.min(self.grab_dest_max(&mv));
        self.grabbed = Some(mv);
    }

    /// 候选落点移到右侧列
    pub fn grab_move_right(&mut self) {
        let Some(mut mv) = self.grabbed.take() else {
            return;
        };
        mv.dest = mv.dest.next();
        mv.dest_index = mv.dest_index.min(self.grab_dest_max(&mv));
        self.grabbed = Some(mv);
    }

    /// 候选落点上移
    pub fn grab_move_up(&mut self) {
        if let Some(mv) = self.grabbed.as_mut() {
            mv.dest_index = mv.dest_index.saturating_sub(1);
        }
    }

    /// 候选落点下移
    pub fn grab_move_down(&mut self) {
        let Some(mut mv) = self.grabbed.take() else {
            return;
        };
        mv.dest_index = (mv.dest_index + 1).min(self.grab_dest_max(&mv));
        self.grabbed = Some(mv);
    }

    /// 落下：执行移动并跟随焦点
    pub fn drop_grab(&mut self) {
        let Some(mv) = self.grabbed.take() else {
            return;
        };

        self.board
            .move_task(mv.source, mv.source_index, mv.dest, mv.dest_index);

        self.view.focused = mv.dest;
        let len = self.focused_len();
        if len > 0 {
            self.view.select(Some(mv.dest_index.min(len - 1)));
        }
        self.view.ensure_selection(len);
    }

    /// 取消移动（无有效落点），看板保持原样
    pub fn cancel_grab(&mut self) {
        self.grabbed = None;
    }

    // ========== 快捷移动（不经过移动模式） ==========

    /// 选中任务移到左侧列尾部
    pub fn move_selected_left(&mut self) {
        self.move_selected_to_adjacent(self.view.focused.previous());
    }

    /// 选中任务移到右侧列尾部
    pub fn move_selected_right(&mut self) {
        self.move_selected_to_adjacent(self.view.focused.next());
    }

    fn move_selected_to_adjacent(&mut self, dest: ColumnKey) {
        let Some(index) = self.view.selected() else {
            return;
        };
        let src = self.view.focused;
        if self.board.task_at(src, index).is_none() {
            return;
        }

        let dest_index = self.board.column(dest).items.len();
        self.board.move_task(src, index, dest, dest_index);

        self.view.focused = dest;
        self.view.select(Some(dest_index));
    }

    /// 选中任务在列内上移一位
    pub fn move_selected_up(&mut self) {
        let Some(index) = self.view.selected() else {
            return;
        };
        if index == 0 {
            return;
        }
        let src = self.view.focused;
        self.board.move_task(src, index, src, index - 1);
        self.view.select(Some(index - 1));
    }

    /// 选中任务在列内下移一位
    pub fn move_selected_down(&mut self) {
        let Some(index) = self.view.selected() else {
            return;
        };
        let len = self.focused_len();
        if index + 1 >= len {
            return;
        }
        let src = self.view.focused;
        self.board.move_task(src, index, src, index + 1);
        self.view.select(Some(index + 1));
    }

    // ========== Theme ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        self.ui.open_theme_selector();
    }

    /// 主题选择器 - 确认选择并写入配置
    pub fn theme_selector_confirm(&mut self) {
        self.ui.close_theme_selector();
        self.config.theme.name = self.ui.theme.label().to_string();

        match config::save_config(&self.config) {
            Ok(()) => self.show_toast(format!("Theme: {}", self.ui.theme.label())),
            Err(e) => self.show_toast(format!("Failed to save config: {}", e)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default(), Some(Theme::Dark))
    }

    /// 造一个三列有货的看板：Requested[a b], ToDo[c], InProgress[], Done[]
    fn app_with_tasks() -> (App, Vec<String>) {
        let mut app = app();
        let a = app.board.add_task("a", "").unwrap();
        let b = app.board.add_task("b", "").unwrap();
        let c = app.board.add_task("c", "").unwrap();
        app.board.move_task(ColumnKey::Requested, 2, ColumnKey::ToDo, 0);
        app.view.ensure_selection(2);
        (app, vec![a, b, c])
    }

    #[test]
    fn test_selection_wraps_within_column() {
        let (mut app, _) = app_with_tasks();
        assert_eq!(app.view.selected(), Some(0));

        app.select_next();
        assert_eq!(app.view.selected(), Some(1));
        app.select_next();
        assert_eq!(app.view.selected(), Some(0)); // 循环

        app.select_previous();
        assert_eq!(app.view.selected(), Some(1));
    }

    #[test]
    fn test_focus_moves_between_columns() {
        let (mut app, _) = app_with_tasks();
        app.focus_next_column();
        assert_eq!(app.view.focused, ColumnKey::ToDo);
        assert_eq!(app.view.selected(), Some(0));

        // 空列：选中被清空
        app.focus_next_column();
        assert_eq!(app.view.focused, ColumnKey::InProgress);
        assert_eq!(app.view.selected(), None);

        app.focus_previous_column();
        assert_eq!(app.view.focused, ColumnKey::ToDo);
    }

    #[test]
    fn test_submit_new_task_selects_it() {
        let mut app = app();
        app.open_new_task_dialog();
        for c in "hello".chars() {
            app.board.new_task_input_char(EditField::Content, c);
        }
        app.submit_new_task();

        assert!(!app.dialogs.show_new_task);
        assert_eq!(app.view.focused, ColumnKey::Requested);
        assert_eq!(app.view.selected(), Some(0));
        assert_eq!(app.selected_task().unwrap().content, "hello");
    }

    #[test]
    fn test_submit_blank_title_keeps_dialog_open() {
        let mut app = app();
        app.open_new_task_dialog();
        app.board.new_task_input_char(EditField::Content, ' ');

        app.submit_new_task();
        assert!(app.dialogs.show_new_task);
        assert_eq!(app.board.total_tasks(), 0);
        assert!(app.ui.toast.is_some());
    }

    #[test]
    fn test_grab_and_drop_moves_task() {
        let (mut app, ids) = app_with_tasks();
        app.view.select(Some(0)); // 拿起 a

        app.grab_selected();
        assert!(app.grabbed.is_some());

        app.grab_move_right(); // 候选落点 -> ToDo
        app.grab_move_down(); // ToDo 有 1 个任务，插入位置 0 -> 1
        app.drop_grab();

        assert_eq!(app.board.column(ColumnKey::Requested).items.len(), 1);
        let todo: Vec<_> = app
            .board
            .column(ColumnKey::ToDo)
            .items
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(todo, vec![ids[2].clone(), ids[0].clone()]);

        // 焦点跟随落点
        assert_eq!(app.view.focused, ColumnKey::ToDo);
        assert_eq!(app.view.selected(), Some(1));
    }

    #[test]
    fn test_cancel_grab_leaves_board_unchanged() {
        let (mut app, _) = app_with_tasks();
        app.view.select(Some(1));

        let before: Vec<usize> = ColumnKey::all()
            .iter()
            .map(|k| app.board.column(*k).items.len())
            .collect();

        app.grab_selected();
        app.grab_move_right();
        app.grab_move_right();
        app.cancel_grab(); // 无有效落点

        let after: Vec<usize> = ColumnKey::all()
            .iter()
            .map(|k| app.board.column(*k).items.len())
            .collect();
        assert_eq!(before, after);
        assert!(app.grabbed.is_none());
    }

    #[test]
    fn test_grab_dest_index_clamped_in_short_column() {
        let (mut app, _) = app_with_tasks();
        app.view.select(Some(1)); // Requested 的第 2 项

        app.grab_selected();
        app.grab_move_right(); // ToDo 只有 1 项，插入位置最多 1
        assert_eq!(app.grabbed.as_ref().unwrap().dest_index, 1);

        app.grab_move_right(); // InProgress 为空，插入位置只能是 0
        assert_eq!(app.grabbed.as_ref().unwrap().dest_index, 0);
    }

    #[test]
    fn test_quick_move_right_appends() {
        let (mut app, ids) = app_with_tasks();
        app.view.select(Some(0)); // a

        app.move_selected_right();
        let todo: Vec<_> = app
            .board
            .column(ColumnKey::ToDo)
            .items
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(todo, vec![ids[2].clone(), ids[0].clone()]);
        assert_eq!(app.view.focused, ColumnKey::ToDo);
        assert_eq!(app.view.selected(), Some(1));
    }

    #[test]
    fn test_quick_reorder_within_column() {
        let (mut app, ids) = app_with_tasks();
        app.view.select(Some(0));

        app.move_selected_down();
        let requested: Vec<_> = app
            .board
            .column(ColumnKey::Requested)
            .items
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(requested, vec![ids[1].clone(), ids[0].clone()]);
        assert_eq!(app.view.selected(), Some(1));

        // 列尾再下移是 no-op
        app.move_selected_down();
        assert_eq!(app.view.selected(), Some(1));
    }

    #[test]
    fn test_delete_clamps_selection() {
        let (mut app, ids) = app_with_tasks();
        app.config.ui.confirm_delete = false;
        app.view.select(Some(1)); // b（列尾）

        app.request_delete_selected();
        assert_eq!(app.board.column(ColumnKey::Requested).items.len(), 1);
        assert_eq!(app.view.selected(), Some(0));
        assert_eq!(app.selected_task().unwrap().id, ids[0]);
    }

    #[test]
    fn test_delete_with_confirmation_flow() {
        let (mut app, _) = app_with_tasks();
        app.view.select(Some(0));

        app.request_delete_selected();
        // 默认配置先确认，还没删
        assert!(app.dialogs.confirm.is_some());
        assert_eq!(app.board.column(ColumnKey::Requested).items.len(), 2);

        app.confirm_dialog_accepted();
        assert!(app.dialogs.confirm.is_none());
        assert_eq!(app.board.column(ColumnKey::Requested).items.len(), 1);
    }

    #[test]
    fn test_edit_dialog_saves_after_task_moved() {
        let (mut app, ids) = app_with_tasks();
        app.view.select(Some(0));

        app.open_edit_dialog();
        app.board.edit_input_char(EditField::Description, '!');

        // 编辑进行中任务被移到别的列
        app.board.move_task(ColumnKey::Requested, 0, ColumnKey::Done, 0);

        app.save_edit_dialog();
        assert!(!app.dialogs.show_edit);
        assert_eq!(app.board.column(ColumnKey::Done).items[0].description, "!");
        assert_eq!(app.board.column(ColumnKey::Done).items[0].id, ids[0]);
    }

    #[test]
    fn test_edit_dialog_on_deleted_task_gives_up() {
        let (mut app, ids) = app_with_tasks();
        app.view.select(Some(0));

        app.open_edit_dialog();
        app.board.delete_task(ColumnKey::Requested, &ids[0]);

        app.save_edit_dialog();
        assert!(!app.dialogs.show_edit);
        assert!(!app.board.edit_draft().is_active());
    }

    #[test]
    fn test_cancel_edit_dialog_discards_changes() {
        let (mut app, _) = app_with_tasks();
        app.view.select(Some(0));

        app.open_edit_dialog();
        app.board.edit_input_char(EditField::Content, 'z');
        app.cancel_edit_dialog();

        assert!(!app.dialogs.show_edit);
        assert_eq!(app.selected_task().unwrap().content, "a");
    }
}
