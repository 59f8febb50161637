//! 顶部标题栏组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 标题栏高度（内容 + 下边框）
pub const HEADER_HEIGHT: u16 = 2;

/// 渲染顶部标题栏
pub fn render(frame: &mut Frame, area: Rect, total_tasks: usize, colors: &ThemeColors) {
    let count_label = match total_tasks {
        1 => "1 task".to_string(),
        n => format!("{} tasks", n),
    };

    let line = Line::from(vec![
        Span::styled(
            " ▦ taskboard",
            Style::default()
                .fg(colors.logo)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ·  {}", count_label),
            Style::default().fg(colors.muted),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
