//! 系统主题检测（Auto 模式）

/// 检测系统是否处于深色模式
///
/// 返回 `true` 表示深色。目前只有 macOS 能可靠探测；
/// 其他平台一律按深色处理（终端用户多为深色背景）。
#[cfg(target_os = "macos")]
pub fn detect_system_theme() -> bool {
    use std::process::Command;

    // AppleInterfaceStyle 存在且为 "Dark" 时是深色模式；
    // 浅色模式下这个 key 不存在，命令会失败
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}

#[cfg(not(target_os = "macos"))]
pub fn detect_system_theme() -> bool {
    true
}
