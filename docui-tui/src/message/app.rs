//! 应用主消息枚举

use super::{BackendMessage, ContentMessage, CursorMessage, OverlayMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到循环序列的下一个面板
    NextPanel,

    /// 焦点移到循环序列的上一个面板
    PreviousPanel,

    /// 刷新全部面板
    Refresh,

    /// 光标移动
    Cursor(CursorMessage),

    /// 弹窗按键
    Overlay(OverlayMessage),

    /// 列表面板上的操作
    Content(ContentMessage),

    /// 后台任务结果
    Backend(BackendMessage),

    /// 终端尺寸变化
    Resize(u16, u16),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
