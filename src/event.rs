use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;
use crate::dialogs::DialogState;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件
    if app.dialogs.has_active_dialog() {
        if app.dialogs.show_help {
            handle_help_key(app, key);
        } else if app.dialogs.confirm.is_some() {
            handle_confirm_key(app, key);
        } else if app.dialogs.show_edit {
            handle_edit_dialog_key(app, key);
        } else {
            handle_new_task_dialog_key(app, key);
        }
        return;
    }

    // 主题选择器
    if app.ui.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    // 移动模式（任务被拿起）
    if app.grabbed.is_some() {
        handle_move_mode_key(app, key);
        return;
    }

    handle_board_key(app, key);
}

/// 处理看板主界面的键盘事件
fn handle_board_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 列内上下
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 导航 - 左右换列
        KeyCode::Char('h') | KeyCode::Left => app.focus_previous_column(),
        KeyCode::Char('l') | KeyCode::Right => app.focus_next_column(),

        // 新建任务
        KeyCode::Char('n') => app.open_new_task_dialog(),

        // 编辑选中任务
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_dialog(),

        // 删除选中任务
        KeyCode::Char('x') => app.request_delete_selected(),

        // 拿起任务，进入移动模式
        KeyCode::Char(' ') | KeyCode::Char('m') => app.grab_selected(),

        // 快捷移动 - 跨列
        KeyCode::Char('H') => app.move_selected_left(),
        KeyCode::Char('L') => app.move_selected_right(),

        // 快捷移动 - 列内重排
        KeyCode::Char('K') => app.move_selected_up(),
        KeyCode::Char('J') => app.move_selected_down(),

        // 主题选择器
        KeyCode::Char('T') | KeyCode::Char('t') => app.open_theme_selector(),

        // 帮助
        KeyCode::Char('?') => app.dialogs.show_help = true,

        _ => {}
    }
}

/// 处理移动模式的键盘事件
fn handle_move_mode_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 调整候选落点
        KeyCode::Char('h') | KeyCode::Left => app.grab_move_left(),
        KeyCode::Char('l') | KeyCode::Right => app.grab_move_right(),
        KeyCode::Char('k') | KeyCode::Up => app.grab_move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.grab_move_down(),

        // 落下
        KeyCode::Enter | KeyCode::Char(' ') => app.drop_grab(),

        // 取消（无有效落点），看板保持原样
        KeyCode::Esc => app.cancel_grab(),

        _ => {}
    }
}

/// 处理 New Task 弹窗的键盘事件
fn handle_new_task_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_new_task(),
        KeyCode::Esc => app.close_new_task_dialog(),

        // Tab 在 Title / Description 间切换
        KeyCode::Tab | KeyCode::BackTab => {
            app.dialogs.new_task_field = DialogState::toggle_field(app.dialogs.new_task_field);
        }

        KeyCode::Backspace => {
            let field = app.dialogs.new_task_field;
            app.board.new_task_delete_char(field);
        }
        KeyCode::Char(c) => {
            let field = app.dialogs.new_task_field;
            app.board.new_task_input_char(field, c);
        }

        _ => {}
    }
}

/// 处理编辑弹窗的键盘事件
fn handle_edit_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.save_edit_dialog(),
        KeyCode::Esc => app.cancel_edit_dialog(),

        KeyCode::Tab | KeyCode::BackTab => {
            app.dialogs.edit_field = DialogState::toggle_field(app.dialogs.edit_field);
        }

        KeyCode::Backspace => {
            let field = app.dialogs.edit_field;
            app.board.edit_delete_char(field);
        }
        KeyCode::Char(c) => {
            let field = app.dialogs.edit_field;
            app.board.edit_input_char(field, c);
        }

        _ => {}
    }
}

/// 处理确认弹窗的键盘事件
fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_dialog_accepted();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.dialogs.confirm = None;
        }
        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.ui.theme_selector_next(),
        KeyCode::Char('k') | KeyCode::Up => app.ui.theme_selector_previous(),
        KeyCode::Enter => app.theme_selector_confirm(),
        KeyCode::Esc => app.ui.close_theme_selector(),
        _ => {}
    }
}

/// 处理帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
            app.dialogs.show_help = false;
        }
        _ => {}
    }
}
