use crate::ui::app::App;
use crate::ui::card::CardTarget;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up => app.move_focus_vertical(-1),
        KeyCode::Down => app.move_focus_vertical(1),
        KeyCode::Left => app.move_focus_horizontal(-1),
        KeyCode::Right => app.move_focus_horizontal(1),
        KeyCode::Tab => app.move_focus_vertical(1),
        KeyCode::BackTab => app.move_focus_vertical(-1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_focused(CardTarget::Preview);
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.activate_focused(CardTarget::Buy);
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.activate_focused(CardTarget::Favorite);
        }
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let step = i32::from(app.scroll_step());
    let sideways = mouse.modifiers.contains(KeyModifiers::SHIFT);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.on_click(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollDown if sideways => app.scroll_strip_by(step),
        MouseEventKind::ScrollUp if sideways => app.scroll_strip_by(-step),
        MouseEventKind::ScrollDown => app.scroll_by(step),
        MouseEventKind::ScrollUp => app.scroll_by(-step),
        MouseEventKind::ScrollRight => app.scroll_strip_by(step),
        MouseEventKind::ScrollLeft => app.scroll_strip_by(-step),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
