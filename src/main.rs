mod app;
mod board;
mod cli;
mod dialogs;
mod error;
mod event;
mod storage;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;

use clap::Parser;

use app::App;
use cli::{Cli, Commands};
use theme::Theme;

/// 启动 TUI 界面
fn run_tui(theme_override: Option<Theme>) -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用
    let config = storage::config::load_config();
    let mut app = App::new(config, theme_override);

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::board::render(frame, app))?;
        if !event::handle_events(app)? {
            return Ok(());
        }
    }
}

fn main() -> io::Result<()> {
    // Enable backtraces by default so panics show call stacks
    if std::env::var("RUST_BACKTRACE").is_err() {
        // SAFETY: called at the very start of main, before any other threads
        unsafe {
            std::env::set_var("RUST_BACKTRACE", "1");
        }
    }

    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Themes) => {
            for theme in Theme::all() {
                println!("{}", theme.label());
            }
        }
        None => {
            let theme_override = cli.theme.as_deref().map(Theme::from_name);
            run_tui(theme_override)?;
        }
    }

    Ok(())
}
