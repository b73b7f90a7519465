//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::KeyBinding;
use crate::message::AppMessage;
use crate::model::{App, Surface};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event<S: Surface>(event: Event, app: &App<S>) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
///
/// 当前视图的绑定优先，其次是全局绑定；都没有则忽略。
fn handle_key_event<S: Surface>(key: KeyEvent, app: &App<S>) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    let binding = KeyBinding::from_event(&key);
    app.surface
        .current_view()
        .and_then(|view| app.surface.keybinding(Some(view), &binding))
        .or_else(|| app.surface.keybinding(None, &binding))
        .unwrap_or(AppMessage::Noop)
}
