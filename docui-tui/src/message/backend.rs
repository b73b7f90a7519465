//! 后台结果消息
//!
//! 由 `backend::Worker` 在任务完成后发回主循环。

use docui_core::{CoreResult, Listing, ResourceKind};

use crate::backend::Operation;
use crate::model::PanelKind;

/// 后台任务结果
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 列表数据
    Listed {
        kind: ResourceKind,
        result: CoreResult<Listing>,
    },

    /// inspect 结果，失败时错误弹窗返回 `origin`
    Inspected {
        kind: ResourceKind,
        id: String,
        origin: PanelKind,
        result: CoreResult<serde_json::Value>,
    },

    /// 删除/启动/停止的结果
    Finished {
        operation: Operation,
        origin: PanelKind,
        result: CoreResult<()>,
    },
}
