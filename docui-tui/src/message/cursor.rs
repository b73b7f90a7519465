//! 光标移动消息

/// 作用于当前视图的光标移动
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMessage {
    Down,
    Up,
    /// 下翻半屏
    PageDown,
    /// 上翻半屏
    PageUp,
}
