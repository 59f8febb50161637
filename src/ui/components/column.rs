//! 看板列组件
//!
//! 渲染单列的卡片序列。每张卡片占两行（标题 + 描述/创建时间）加一个
//! 空行；移动模式下在候选落点画插入标记，被拿起的卡片置灰。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::MoveState;
use crate::board::{Column, ColumnKey};
use crate::theme::ThemeColors;

/// 每张卡片占用的行数（标题 + 次行 + 空行）
const CARD_HEIGHT: usize = 3;

/// 渲染单个看板列
#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    area: Rect,
    key: ColumnKey,
    column: &Column,
    selected: Option<usize>,
    is_focused: bool,
    grab: Option<&MoveState>,
    colors: &ThemeColors,
) {
    let items = &column.items;
    let accent = colors.column_accents[key.index()];

    let border_style = if is_focused {
        Style::default().fg(colors.highlight)
    } else {
        Style::default().fg(colors.border)
    };

    let block = Block::default()
        .title(format!(" {} ({}) ", column.name, items.len()))
        .title_alignment(Alignment::Left)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height == 0 {
        return;
    }

    // 本列是否为候选落点 / 拖拽源
    let drop_index = grab.filter(|mv| mv.dest == key).map(|mv| mv.dest_index);
    let source_index = grab
        .filter(|mv| mv.source == key)
        .map(|mv| mv.source_index);

    let text_width = inner.width as usize - 2;
    let mut lines: Vec<Line> = Vec::new();

    if items.is_empty() && drop_index.is_none() {
        lines.push(Line::from(Span::styled(
            "  no tasks",
            Style::default()
                .fg(colors.muted)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    for (i, task) in items.iter().enumerate() {
        if drop_index == Some(i) {
            lines.push(drop_marker(inner.width as usize, colors));
        }

        let is_grab_source = source_index == Some(i);
        let is_selected = is_focused && selected == Some(i) && grab.is_none();

        let title_style = if is_grab_source {
            Style::default()
                .fg(colors.muted)
                .add_modifier(Modifier::ITALIC)
        } else if is_selected {
            Style::default()
                .fg(colors.text)
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };

        lines.push(Line::from(vec![
            Span::styled("▌ ", Style::default().fg(accent)),
            Span::styled(truncate(&task.content, text_width), title_style),
        ]));

        // 次行：描述优先，没有描述就显示创建时间
        let meta = if task.description.is_empty() {
            format!("created {}", task.created_at.format("%H:%M"))
        } else {
            task.description.clone()
        };
        let meta_style = if is_selected {
            Style::default().fg(colors.muted).bg(colors.bg_secondary)
        } else {
            Style::default().fg(colors.muted)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(truncate(&meta, text_width), meta_style),
        ]));

        lines.push(Line::from(""));
    }

    // 落点在列尾（包括空列）
    if let Some(di) = drop_index {
        if di >= items.len() {
            lines.push(drop_marker(inner.width as usize, colors));
        }
    }

    // 滚动：保证选中卡片（移动模式下保证落点标记）可见
    let focus_line = match (drop_index, selected) {
        (Some(di), _) => di.min(items.len()) * CARD_HEIGHT,
        (None, Some(sel)) if is_focused => sel * CARD_HEIGHT,
        _ => 0,
    };
    let offset = (focus_line + CARD_HEIGHT).saturating_sub(inner.height as usize) as u16;

    let paragraph = Paragraph::new(lines).scroll((offset, 0));
    frame.render_widget(paragraph, inner);
}

/// 移动模式的插入位置标记
fn drop_marker(width: usize, colors: &ThemeColors) -> Line<'static> {
    let bar = "─".repeat(width.saturating_sub(4).min(24));
    Line::from(Span::styled(
        format!("▸ {}", bar),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

/// 截断到 max 个字符，超长时以省略号结尾
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}
