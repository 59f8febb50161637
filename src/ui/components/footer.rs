//! 底部快捷键提示栏组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(
    frame: &mut Frame,
    area: Rect,
    moving: bool,
    has_selection: bool,
    colors: &ThemeColors,
) {
    let shortcuts = get_shortcuts(moving, has_selection);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn get_shortcuts(moving: bool, has_selection: bool) -> Vec<(&'static str, &'static str)> {
    if moving {
        return vec![
            ("h/l", "column"),
            ("j/k", "position"),
            ("Enter", "drop"),
            ("Esc", "cancel"),
        ];
    }

    if has_selection {
        vec![
            ("n", "new"),
            ("e", "edit"),
            ("x", "delete"),
            ("Space", "move"),
            ("t", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        vec![
            ("n", "new"),
            ("h/l", "column"),
            ("t", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}
