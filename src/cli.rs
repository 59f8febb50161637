//! CLI 模块

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Kanban board in the terminal")]
pub struct Cli {
    /// Theme for this session (auto, dark, light, dracula, nord, catppuccin)
    #[arg(short, long)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available themes
    Themes,
}
