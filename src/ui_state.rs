//! UI 状态管理
//!
//! 管理所有与 UI 显示相关的状态：主题、颜色、Toast、主题选择器。
//! 看板数据本身见 `board` 模块。

use std::time::{Duration, Instant};

use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

/// Toast 显示时长
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
}

impl UiState {
    /// 创建新的 UI 状态
    pub fn new(theme: Theme) -> Self {
        Self {
            toast: None,
            theme,
            colors: get_theme_colors(theme),
            show_theme_selector: false,
            theme_selector_index: 0,
            last_system_dark: detect_system_theme(),
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, TOAST_DURATION));
    }

    /// 清除过期的 Toast
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 打开主题选择器（定位到当前主题）
    pub fn open_theme_selector(&mut self) {
        self.theme_selector_index = Theme::all()
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 关闭主题选择器
    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个（实时预览）
    pub fn theme_selector_previous(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = if self.theme_selector_index == 0 {
            len - 1
        } else {
            self.theme_selector_index - 1
        };
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个（实时预览）
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % len;
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.theme = *theme;
            self.colors = get_theme_colors(*theme);
        }
    }

    /// 检查系统主题变化（仅 Auto 模式生效）
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
