//! 终端初始化和清理
//!
//! 进入 raw mode + 备用屏幕；退出或 panic 时都会还原，避免把用户的 shell 留在 raw mode。

use std::io::{self, Stdout, Write};
use std::panic;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端，并安装 panic 时还原终端的 hook
pub fn init_terminal() -> Result<Term> {
    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    reset_modes(terminal.backend_mut())?;
    terminal.show_cursor()?;
    Ok(())
}

/// 离开 raw mode 与备用屏幕。未进入时调用也是安全的。
fn reset_modes<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)
}

fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        // panic 信息要打印在主屏幕上才看得见
        if let Err(e) = reset_modes(&mut io::stdout()) {
            log::error!("Failed to restore terminal after panic: {e}");
        }
        log::error!("Console panicked: {info}");
        previous(info);
    }));
}
