//! 编辑任务弹窗组件

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::board::{EditDraft, EditField};
use crate::theme::ThemeColors;

/// 渲染编辑任务弹窗
pub fn render(
    frame: &mut Frame,
    draft: &EditDraft,
    active: EditField,
    created_at: Option<DateTime<Utc>>,
    colors: &ThemeColors,
) {
    let area = frame.area();

    // 计算弹窗尺寸
    let popup_width = 60u16.min(area.width.saturating_sub(4));
    let popup_height = 9u16;

    // 居中显示
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    // 外框
    let block = Block::default()
        .title(" Edit Task ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [_, title_area, _, desc_area, _, meta_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1), // Title 输入行
        Constraint::Length(1),
        Constraint::Length(1), // Description 输入行
        Constraint::Length(1),
        Constraint::Length(1), // 创建时间
        Constraint::Length(1), // 提示行
    ])
    .areas(inner_area);

    render_field(
        frame,
        title_area,
        "Title: ",
        &draft.content,
        active == EditField::Content,
        colors,
    );
    render_field(
        frame,
        desc_area,
        "Desc:  ",
        &draft.description,
        active == EditField::Description,
        colors,
    );

    if let Some(created) = created_at {
        let meta = Paragraph::new(Line::from(Span::styled(
            format!("Created {}", created.format("%Y-%m-%d %H:%M")),
            Style::default().fg(colors.muted),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(meta, meta_area);
    }

    // 渲染底部提示
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(colors.highlight)),
        Span::styled(" field  ", Style::default().fg(colors.muted)),
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" save  ", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" cancel", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// 渲染单个输入行，活跃字段带光标
fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    colors: &ThemeColors,
) {
    let label_style = if is_active {
        Style::default().fg(colors.highlight)
    } else {
        Style::default().fg(colors.muted)
    };

    let mut spans = vec![
        Span::styled(format!("  {}", label), label_style),
        Span::styled(value.to_string(), Style::default().fg(colors.text)),
    ];
    if is_active {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight))); // 光标
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
