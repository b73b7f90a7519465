//! 列表面板消息
//!
//! 作用于当前列表中光标所在的资源

/// 列表面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// 在详情面板中查看
    Inspect,
    /// 删除（先弹出确认）
    Remove,
    /// 启动容器
    Start,
    /// 停止容器
    Stop,
}
