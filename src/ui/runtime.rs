use crate::config::UiConfig;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{next_event, AppEvent};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Mounts the screen and runs it until the user quits or a signal arrives.
///
/// Events are polled on this thread; every handled event is followed by a
/// full re-render of the frame.
pub fn run(app: &mut App, ui: &UiConfig, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(ui.mouse)?;
    let poll_interval = Duration::from_millis(ui.poll_interval_ms);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(
        featured = app.catalog().featured.len(),
        catalog = app.catalog().items.len(),
        "Catalog screen mounted"
    );

    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            break;
        }

        match next_event(poll_interval) {
            Ok(Some(AppEvent::Key(key))) => handle_key(app, key),
            Ok(Some(AppEvent::Mouse(mouse))) => handle_mouse(app, mouse),
            Ok(Some(AppEvent::Resize(cols, rows))) => app.on_resize(cols, rows),
            Ok(None) => {}
            Err(err) => {
                tracing::error!(error = %err, "Failed to read terminal event");
                return Err(err);
            }
        }

        if shutdown.is_shutting_down() {
            tracing::info!("Shutdown requested by signal");
            app.request_quit();
        }
    }

    drop(guard);
    tracing::info!("Catalog screen unmounted");
    Ok(())
}
