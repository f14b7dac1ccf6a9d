//! 按键映射
//!
//! 把终端事件翻译成 [`AppEvent`]，不接触状态。

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::Mode;
use crate::state::AppEvent;

/// 终端事件 → 状态事件
pub fn map_event(event: &Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key),
        Event::Paste(text) => Some(AppEvent::Paste(text.clone())),
        _ => None,
    }
}

/// 按键 → 状态事件
pub fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(AppEvent::Quit),
            KeyCode::Char('s') => Some(AppEvent::Submit),
            KeyCode::Char('l') => Some(AppEvent::Clear),
            KeyCode::Char('y') => Some(AppEvent::CopyRewritten),
            KeyCode::Char('r') => Some(AppEvent::UseRewritten),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Tab => Some(AppEvent::NextMode),
        KeyCode::BackTab => Some(AppEvent::PrevMode),
        KeyCode::F(1) => Some(AppEvent::SelectMode(Mode::Check)),
        KeyCode::F(2) => Some(AppEvent::SelectMode(Mode::Humanize)),
        KeyCode::F(3) => Some(AppEvent::SelectMode(Mode::Both)),
        KeyCode::Enter => Some(AppEvent::Newline),
        KeyCode::Backspace => Some(AppEvent::Backspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(AppEvent::InputChar(c))
        }
        _ => None,
    }
}
