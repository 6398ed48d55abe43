//! 终端初始化和清理
//!
//! 进入 raw mode + 备用屏幕；同时挂上 panic hook，
//! 保证程序 panic 时终端也能恢复原状，panic 信息不会被备用屏幕吞掉。

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端
pub fn init_terminal() -> Result<Term> {
    install_panic_hook();

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

    Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    leave_screen()?;
    terminal.show_cursor()?;
    Ok(())
}

fn leave_screen() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// panic 时先恢复终端，再交给原来的 hook 打印信息
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = leave_screen();
        log::error!("panic: {info}");
        previous(info);
    }));
}
