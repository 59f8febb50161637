mod colors;
mod detect;

use ratatui::style::Color;

pub use colors::*;
pub use detect::detect_system_theme;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
    Dracula,
    Nord,
    Catppuccin,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Auto => "Auto",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Dracula => "Dracula",
            Theme::Nord => "Nord",
            Theme::Catppuccin => "Catppuccin",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Auto,
            Theme::Dark,
            Theme::Light,
            Theme::Dracula,
            Theme::Nord,
            Theme::Catppuccin,
        ]
    }

    /// 从名称创建主题（用于配置加载，大小写不敏感）
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            "light" => Theme::Light,
            "dracula" => Theme::Dracula,
            "nord" => Theme::Nord,
            "catppuccin" => Theme::Catppuccin,
            _ => Theme::Auto, // 未知名称回落 Auto
        }
    }
}

/// 主题颜色方案
///
/// 渲染层只消费这个结构，不关心具体主题；换主题即换一份颜色。
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中卡片等）
    pub bg_secondary: Color,
    /// 标题栏颜色
    pub logo: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（描述、提示）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 成功反馈（新建/保存 toast）
    pub success: Color,
    /// 错误/危险（删除确认）
    pub error: Color,
    /// 四列各自的点缀色（Requested / To do / In Progress / Done）
    pub column_accents: [Color; 4],
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Auto => {
            if detect_system_theme() {
                dark_colors()
            } else {
                light_colors()
            }
        }
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Dracula => dracula_colors(),
        Theme::Nord => nord_colors(),
        Theme::Catppuccin => catppuccin_colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_name(theme.label()), *theme);
        }
    }

    #[test]
    fn test_from_name_unknown_falls_back_to_auto() {
        assert_eq!(Theme::from_name("Solarized"), Theme::Auto);
        assert_eq!(Theme::from_name(""), Theme::Auto);
    }

    #[test]
    fn test_fixed_themes_have_colors() {
        // Auto 依赖系统检测，这里只验证固定主题
        for theme in [
            Theme::Dark,
            Theme::Light,
            Theme::Dracula,
            Theme::Nord,
            Theme::Catppuccin,
        ] {
            let colors = get_theme_colors(theme);
            assert_ne!(colors.text, colors.bg);
        }
    }
}
