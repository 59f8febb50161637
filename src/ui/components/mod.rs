pub mod column;
pub mod confirm_dialog;
pub mod edit_task_dialog;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod new_task_dialog;
pub mod theme_selector;
pub mod toast;
