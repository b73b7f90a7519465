//!
//! src/event/mod.rs
//! Event 层：终端事件 → 消息
//!
//! ```text
//!     poll_event      轮询 crossterm 事件（带超时，不阻塞后台结果的处理）
//!     handle_event    按当前视图查找按键绑定，翻译成 AppMessage
//!     keymap          默认快捷键与各面板的绑定登记
//! ```
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::{bind_global_keys, bind_panel_keys, DefaultKeymap, KeyBinding};
