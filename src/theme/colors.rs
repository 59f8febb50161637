//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中卡片背景
        logo: Color::Rgb(0, 255, 136),        // 亮绿色
        highlight: Color::Rgb(0, 255, 136),
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        success: Color::Rgb(0, 255, 136),
        error: Color::Rgb(255, 85, 85),
        column_accents: [
            Color::Rgb(120, 175, 225), // Requested - sky
            Color::Rgb(230, 200, 105), // To do - gold
            Color::Rgb(240, 170, 115), // In Progress - peach
            Color::Rgb(130, 205, 145), // Done - mint
        ],
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        logo: Color::Rgb(0, 128, 68), // 深绿色
        highlight: Color::Rgb(0, 128, 68),
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        success: Color::Rgb(0, 150, 80),
        error: Color::Rgb(200, 50, 50),
        column_accents: [
            Color::Rgb(50, 130, 200), // Requested - ocean
            Color::Rgb(200, 170, 40), // To do - olive gold
            Color::Rgb(230, 140, 60), // In Progress - tangerine
            Color::Rgb(60, 170, 90),  // Done - emerald
        ],
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),
        bg_secondary: Color::Rgb(68, 71, 90),
        logo: Color::Rgb(189, 147, 249),      // 紫色
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),
        muted: Color::Rgb(98, 114, 164), // 注释色
        border: Color::Rgb(68, 71, 90),
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        column_accents: [
            Color::Rgb(139, 233, 253), // Requested - cyan
            Color::Rgb(241, 250, 140), // To do - yellow
            Color::Rgb(255, 184, 108), // In Progress - orange
            Color::Rgb(80, 250, 123),  // Done - green
        ],
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // nord0
        bg_secondary: Color::Rgb(59, 66, 82), // nord1
        logo: Color::Rgb(136, 192, 208),      // nord8
        highlight: Color::Rgb(136, 192, 208),
        text: Color::Rgb(216, 222, 233), // nord4
        muted: Color::Rgb(97, 110, 136),
        border: Color::Rgb(67, 76, 94), // nord3
        success: Color::Rgb(163, 190, 140), // nord14
        error: Color::Rgb(191, 97, 106),    // nord11
        column_accents: [
            Color::Rgb(129, 161, 193), // Requested - nord9
            Color::Rgb(235, 203, 139), // To do - nord13
            Color::Rgb(208, 135, 112), // In Progress - nord12
            Color::Rgb(163, 190, 140), // Done - nord14
        ],
    }
}

/// Catppuccin (Mocha) 主题
pub fn catppuccin_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(30, 30, 46),           // base
        bg_secondary: Color::Rgb(49, 50, 68), // surface0
        logo: Color::Rgb(203, 166, 247),      // mauve
        highlight: Color::Rgb(245, 194, 231), // pink
        text: Color::Rgb(205, 214, 244),      // text
        muted: Color::Rgb(127, 132, 156),     // overlay1
        border: Color::Rgb(69, 71, 90),       // surface1
        success: Color::Rgb(166, 227, 161),   // green
        error: Color::Rgb(243, 139, 168),     // red
        column_accents: [
            Color::Rgb(137, 180, 250), // Requested - blue
            Color::Rgb(249, 226, 175), // To do - yellow
            Color::Rgb(250, 179, 135), // In Progress - peach
            Color::Rgb(166, 227, 161), // Done - green
        ],
    }
}
