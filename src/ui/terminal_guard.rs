use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Restores the terminal when dropped, or when the process panics.
///
/// The guard is armed before the first terminal mode change, so a setup
/// step that fails halfway still leaves a usable shell behind.
pub struct TerminalGuard {
    mouse: bool,
    restore: fn(bool),
    restored: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn enter_with(
        mouse: bool,
        restore: fn(bool),
        prepare: impl FnOnce(bool) -> io::Result<()>,
    ) -> io::Result<Self> {
        let guard = Self {
            mouse,
            restore,
            restored: Arc::new(AtomicBool::new(false)),
        };
        prepare(mouse)?;
        Ok(guard)
    }

    fn install_panic_hook(&self) {
        let restored = Arc::clone(&self.restored);
        let (mouse, restore) = (self.mouse, self.restore);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if !restored.swap(true, Ordering::SeqCst) {
                restore(mouse);
            }
            default_hook(info);
        }));
    }

    /// Runs the restore step once; later calls do nothing.
    pub fn restore(&self) {
        if !self.restored.swap(true, Ordering::SeqCst) {
            (self.restore)(self.mouse);
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn prepare_terminal(mouse: bool) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    if mouse {
        stdout.execute(EnableMouseCapture)?;
    }
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;
    Ok(())
}

/// Undoes [`prepare_terminal`]. Every step tolerates a terminal that was
/// only partly set up.
fn restore_terminal(mouse: bool) {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if mouse {
        let _ = stdout.execute(DisableMouseCapture);
    }
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

pub fn setup_terminal(
    mouse: bool,
) -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    let guard = TerminalGuard::enter_with(mouse, restore_terminal, prepare_terminal)?;
    guard.install_panic_hook();
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok((terminal, guard))
}
