//! docui TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 面板、焦点、弹窗与视图表面 (`model/`)
//! - **Message**: 按键绑定与后台结果的消息 (`message/`)
//! - **Update**: 唯一修改 Model 的地方 (`update/`)
//! - **View**: 把视图表面画到终端上 (`view/`)
//! - **Event**: 按键 → 消息的路由 (`event/`)
//! - **Backend**: 后台 worker 与配置 (`backend/`)
//!
//! 数据流：
//!
//! ```text
//!   按键 ──▶ event::handle_event ──▶ AppMessage ──▶ update::update ──▶ Model
//!                                       ▲                               │
//!                                       │ BackendMessage                │ Job
//!                                       │                               ▼
//!                                  backend::Worker ◀──────────── App::take_jobs
//! ```
//!
//! 所有屏幕/视图/按键绑定操作都经由 `model::Surface` trait，
//! 因此状态机可以在没有真实终端的情况下测试。

pub mod app;
pub mod backend;
pub mod error;
pub mod event;
pub mod message;
pub mod model;
pub mod update;
pub mod util;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use error::{GuiError, GuiResult};
