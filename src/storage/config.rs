//! 应用配置持久化
//!
//! 只持久化展示偏好（主题、UI 行为）。看板内容是纯内存状态，
//! 刻意不落盘。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{load_toml, save_toml, taskboard_dir};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// UI 行为配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// 删除任务前是否弹确认框
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            confirm_delete: default_confirm_delete(),
        }
    }
}

/// 获取配置文件路径
fn config_path() -> PathBuf {
    taskboard_dir().join("config.toml")
}

/// 从指定路径加载配置（不存在或损坏则返回默认值）
pub fn load_config_from(path: &Path) -> Config {
    load_toml(path).unwrap_or_default()
}

/// 加载配置
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

/// 保存配置到指定路径（父目录不存在时自动创建）
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    save_toml(path, config)
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(&config_path(), config)
}
