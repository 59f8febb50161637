//! 主题选择器弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::{Theme, ThemeColors};

/// 渲染主题选择器弹窗
pub fn render(frame: &mut Frame, selected_index: usize, current: Theme, colors: &ThemeColors) {
    let area = frame.area();
    let themes = Theme::all();

    // 计算弹窗尺寸
    let popup_width = 30u16.min(area.width.saturating_sub(4));
    let popup_height = (themes.len() as u16) + 4; // 边框 + 列表 + 提示

    // 居中显示
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    // 外框
    let block = Block::default()
        .title(" Theme ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [list_area, _, hint_area] = Layout::vertical([
        Constraint::Length(themes.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    // 渲染主题列表
    let lines: Vec<Line> = themes
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            let marker = if *theme == current { "● " } else { "  " };
            let label = format!(" {}{}", marker, theme.label());

            if i == selected_index {
                Line::from(Span::styled(
                    format!("{:<width$}", label, width = list_area.width as usize),
                    Style::default()
                        .fg(colors.highlight)
                        .bg(colors.bg_secondary)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(label, Style::default().fg(colors.text)))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), list_area);

    // 渲染底部提示
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("j/k", Style::default().fg(colors.highlight)),
        Span::styled(" preview  ", Style::default().fg(colors.muted)),
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" save  ", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" close", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}
