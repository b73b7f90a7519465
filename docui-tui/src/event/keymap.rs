//! 快捷键配置
//!
//! 按键绑定登记在视图表面上：每个可循环面板有自己的一组绑定，
//! 弹窗打开时登记、关闭时删除，另外还有少量全局绑定。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::message::{AppMessage, ContentMessage, CursorMessage};
use crate::model::{PanelKind, Surface};

/// 快捷键绑定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 从按键事件构造，字符键忽略 Shift（大小写已体现在字符里）
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
            _ => key.modifiers,
        };
        Self::new(modifiers, key.code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        Self::from_event(key) == *self
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('q'));

    // 面板通用
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const NEXT_PANEL: KeyBinding = KeyBinding::key(KeyCode::Char('l'));
    pub const NEXT_PANEL_TAB: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const PREVIOUS_PANEL: KeyBinding = KeyBinding::key(KeyCode::Char('h'));
    pub const CURSOR_DOWN: KeyBinding = KeyBinding::key(KeyCode::Char('j'));
    pub const CURSOR_DOWN_ARROW: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const CURSOR_UP: KeyBinding = KeyBinding::key(KeyCode::Char('k'));
    pub const CURSOR_UP_ARROW: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const PAGE_DOWN: KeyBinding = KeyBinding::ctrl(KeyCode::Char('f'));
    pub const PAGE_DOWN_KEY: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const PAGE_UP: KeyBinding = KeyBinding::ctrl(KeyCode::Char('b'));
    pub const PAGE_UP_KEY: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const REFRESH: KeyBinding = KeyBinding::ctrl(KeyCode::Char('r'));

    // 列表操作
    pub const INSPECT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const REMOVE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const START: KeyBinding = KeyBinding::key(KeyCode::Char('u'));
    pub const STOP: KeyBinding = KeyBinding::key(KeyCode::Char('s'));

    // 弹窗
    pub const ACKNOWLEDGE: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const CONFIRM_YES: KeyBinding = KeyBinding::key(KeyCode::Char('y'));
    pub const CONFIRM_ENTER: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const CONFIRM_NO: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
}

/// 登记全局绑定
pub fn bind_global_keys<S: Surface>(surface: &mut S) {
    surface.set_keybinding(None, DefaultKeymap::FORCE_QUIT, AppMessage::Quit);
}

/// 登记某个主面板的绑定；导航栏不接收按键
pub fn bind_panel_keys<S: Surface>(surface: &mut S, kind: PanelKind) {
    if !kind.is_cyclable() {
        return;
    }

    let view = Some(kind.name());
    let common = [
        (DefaultKeymap::QUIT, AppMessage::Quit),
        (DefaultKeymap::NEXT_PANEL, AppMessage::NextPanel),
        (DefaultKeymap::NEXT_PANEL_TAB, AppMessage::NextPanel),
        (DefaultKeymap::PREVIOUS_PANEL, AppMessage::PreviousPanel),
        (DefaultKeymap::CURSOR_DOWN, AppMessage::Cursor(CursorMessage::Down)),
        (DefaultKeymap::CURSOR_DOWN_ARROW, AppMessage::Cursor(CursorMessage::Down)),
        (DefaultKeymap::CURSOR_UP, AppMessage::Cursor(CursorMessage::Up)),
        (DefaultKeymap::CURSOR_UP_ARROW, AppMessage::Cursor(CursorMessage::Up)),
        (DefaultKeymap::PAGE_DOWN, AppMessage::Cursor(CursorMessage::PageDown)),
        (DefaultKeymap::PAGE_DOWN_KEY, AppMessage::Cursor(CursorMessage::PageDown)),
        (DefaultKeymap::PAGE_UP, AppMessage::Cursor(CursorMessage::PageUp)),
        (DefaultKeymap::PAGE_UP_KEY, AppMessage::Cursor(CursorMessage::PageUp)),
        (DefaultKeymap::REFRESH, AppMessage::Refresh),
    ];
    for (key, message) in common {
        surface.set_keybinding(view, key, message);
    }

    if kind.resource().is_some() {
        surface.set_keybinding(
            view,
            DefaultKeymap::INSPECT,
            AppMessage::Content(ContentMessage::Inspect),
        );
        surface.set_keybinding(
            view,
            DefaultKeymap::REMOVE,
            AppMessage::Content(ContentMessage::Remove),
        );
    }

    if kind == PanelKind::ContainerList {
        surface.set_keybinding(
            view,
            DefaultKeymap::START,
            AppMessage::Content(ContentMessage::Start),
        );
        surface.set_keybinding(
            view,
            DefaultKeymap::STOP,
            AppMessage::Content(ContentMessage::Stop),
        );
    }
}
