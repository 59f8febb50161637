//! 对话框状态管理
//!
//! 管理所有 TUI 对话框的显示状态。输入内容本身存在 BoardStore 的
//! 草稿里（NewTaskDraft / EditDraft），这里只记录"哪个框开着、
//! 光标在哪个字段"。

// 从 ui/components 导入对话框数据类型
pub use crate::ui::components::confirm_dialog::ConfirmType;

use crate::board::EditField;

/// 对话框状态
#[derive(Debug)]
pub struct DialogState {
    // === New Task ===
    /// 是否显示 New Task 弹窗
    pub show_new_task: bool,
    /// New Task 弹窗当前输入字段
    pub new_task_field: EditField,

    // === Edit Task ===
    /// 是否显示编辑弹窗（与 BoardStore 的 EditDraft 同开同关）
    pub show_edit: bool,
    /// 编辑弹窗当前输入字段
    pub edit_field: EditField,

    // === Confirm ===
    /// 确认弹窗
    pub confirm: Option<ConfirmType>,

    // === Help ===
    /// 是否显示帮助面板
    pub show_help: bool,
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogState {
    /// 创建新的对话框状态
    pub fn new() -> Self {
        Self {
            show_new_task: false,
            new_task_field: EditField::Content,
            show_edit: false,
            edit_field: EditField::Content,
            confirm: None,
            show_help: false,
        }
    }

    /// 检查是否有活跃的对话框
    pub fn has_active_dialog(&self) -> bool {
        self.show_new_task || self.show_edit || self.confirm.is_some() || self.show_help
    }

    /// 在 Title / Description 两个输入字段间切换
    pub fn toggle_field(field: EditField) -> EditField {
        match field {
            EditField::Content => EditField::Description,
            EditField::Description => EditField::Content,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
