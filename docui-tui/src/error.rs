//! UI 层错误类型
//!
//! 后台失败（`CoreError`）不会出现在这里：它们被转成错误弹窗展示给用户。
//! 这里只有生命周期契约被破坏的情况，例如删除一个从未创建的视图，
//! 这类错误会终止主循环。

use thiserror::Error;

use crate::model::SurfaceError;

/// UI 层错误
#[derive(Debug, Error)]
pub enum GuiError {
    /// 注册表中不存在该面板
    #[error("panel `{0}` not found")]
    PanelNotFound(String),

    /// 可循环面板序列为空（初始化之前调用了焦点切换）
    #[error("no cyclable panel registered")]
    EmptyCycle,

    /// 视图表面错误
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// UI 层 Result 类型别名
pub type GuiResult<T> = std::result::Result<T, GuiError>;
