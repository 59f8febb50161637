//! 看板主界面渲染
//!
//! 布局：顶部标题栏 + 四列看板 + 底部快捷键栏，弹窗按层级叠加在最上面。

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;
use crate::board::ColumnKey;
use crate::ui::components::{
    column, confirm_dialog, edit_task_dialog, footer, header, help_panel, new_task_dialog,
    theme_selector, toast,
};

/// 渲染整个界面
pub fn render(frame: &mut Frame, app: &App) {
    let colors = &app.ui.colors;
    let area = frame.area();

    // 填充背景色
    frame.render_widget(Block::default().style(Style::default().bg(colors.bg)), area);

    let [header_area, board_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    header::render(frame, header_area, app.board.total_tasks(), colors);

    // 四列等宽
    let column_areas = Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ])
    .split(board_area);

    for (i, key) in ColumnKey::all().iter().enumerate() {
        let is_focused = app.view.focused == *key;
        let selected = if is_focused { app.view.selected() } else { None };

        column::render(
            frame,
            column_areas[i],
            *key,
            app.board.column(*key),
            selected,
            is_focused,
            app.grabbed.as_ref(),
            colors,
        );
    }

    footer::render(
        frame,
        footer_area,
        app.grabbed.is_some(),
        app.view.selected().is_some(),
        colors,
    );

    // ========== 弹窗层 ==========

    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, colors);
        }
    }

    if app.ui.show_theme_selector {
        theme_selector::render(frame, app.ui.theme_selector_index, app.ui.theme, colors);
    }

    if app.dialogs.show_new_task {
        new_task_dialog::render(
            frame,
            app.board.new_task_draft(),
            app.dialogs.new_task_field,
            colors,
        );
    }

    if app.dialogs.show_edit {
        // 按 id 反查任务的创建时间（任务可能已被移动）
        let created_at = app
            .board
            .edit_draft()
            .task_id
            .as_deref()
            .and_then(|id| app.board.find_task(id))
            .and_then(|(key, index)| app.board.task_at(key, index))
            .map(|task| task.created_at);

        edit_task_dialog::render(
            frame,
            app.board.edit_draft(),
            app.dialogs.edit_field,
            created_at,
            colors,
        );
    }

    if let Some(ref confirm) = app.dialogs.confirm {
        confirm_dialog::render(frame, confirm, colors);
    }

    if app.dialogs.show_help {
        help_panel::render(frame, colors);
    }
}
