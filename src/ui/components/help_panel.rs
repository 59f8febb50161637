//! 帮助面板组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j / ↓", "next task"),
            ("k / ↑", "previous task"),
            ("h / ←", "previous column"),
            ("l / →", "next column"),
        ],
    ),
    (
        "Tasks",
        &[
            ("n", "new task"),
            ("e / Enter", "edit task"),
            ("x", "delete task"),
        ],
    ),
    (
        "Move",
        &[
            ("Space / m", "pick up task"),
            ("H / L", "send to adjacent column"),
            ("K / J", "reorder within column"),
        ],
    ),
    (
        "Other",
        &[("t", "theme selector"), ("?", "this help"), ("q", "quit")],
    ),
];

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let area = frame.area();

    let line_count: usize = BINDINGS
        .iter()
        .map(|(_, entries)| entries.len() + 2)
        .sum::<usize>()
        + 1;

    // 计算弹窗尺寸
    let popup_width = 44u16.min(area.width.saturating_sub(4));
    let popup_height = (line_count as u16 + 2).min(area.height.saturating_sub(2));

    // 居中显示
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    // 外框
    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = Vec::new();
    for (group, entries) in BINDINGS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", group),
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, desc) in *entries {
            lines.push(Line::from(vec![
                Span::styled(format!("    {:<12}", key), Style::default().fg(colors.text)),
                Span::styled(*desc, Style::default().fg(colors.muted)),
            ]));
        }
    }
    lines.push(Line::from(""));

    frame.render_widget(Paragraph::new(lines), inner_area);
}
