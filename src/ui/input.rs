use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::demo::Article;
use crate::source::LoadSource;
use crate::ui::app::App;

pub fn handle_key<S>(app: &mut App<S>, key: KeyEvent)
where
    S: LoadSource<Output = Article>,
{
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('r') | KeyCode::Enter => {
            app.retry();
        }
        KeyCode::Char('l') => app.reload(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
