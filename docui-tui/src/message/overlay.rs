//! 弹窗消息

/// 弹窗按键对应的消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMessage {
    /// 关闭错误弹窗
    Acknowledge,
    /// 确认弹窗选择“是”
    Accept,
    /// 确认弹窗选择“否”
    Cancel,
}
