//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 按键不直接对应代码，而是登记在视图表面上的 `AppMessage`；
//! 后台任务的结果也以 `AppMessage::Backend` 的形式回到主循环。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod backend;        // 后台任务结果
//!         mod content;        // 列表面板操作
//!         mod cursor;         // 光标移动
//!         mod overlay;        // 弹窗按键
//!
//!
//! ```text
//!     主消息枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                           // 退出应用
//!             NextPanel, PreviousPanel,       // 焦点循环
//!             Refresh,                        // 刷新全部面板
//!             Cursor(CursorMessage),          // 光标子消息
//!             Overlay(OverlayMessage),        // 弹窗子消息
//!             Content(ContentMessage),        // 列表操作子消息
//!             Backend(BackendMessage),        // 后台结果
//!             Resize(u16, u16),               // 终端尺寸变化
//!             Noop,                           // 未绑定的按键
//!         }
//! ```
//!

mod app;
mod backend;
mod content;
mod cursor;
mod overlay;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use cursor::CursorMessage;
pub use overlay::OverlayMessage;
