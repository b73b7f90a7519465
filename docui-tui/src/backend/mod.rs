//!
//! src/backend/mod.rs
//! Backend 层：后台任务与配置
//!
//! Backend 层与 UI 解耦。Update 层只描述要做什么（`Job`），
//! 由主循环交给 `Worker` 在 tokio 运行时上执行，
//! 结果以 `AppMessage::Backend` 的形式回到主循环。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件）
//!         mod job;                // 任务与修改操作的描述
//!         mod worker;             // 任务执行（带超时）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     用户在确认弹窗中按 y
//!         ↓
//!     Update 层打开状态弹窗，排队 Job::Run
//!         ↓
//!     主循环 take_jobs() → Worker::dispatch()
//!         ↓
//!     ContainerBackend 执行（超时后返回 CoreError::Timeout）
//!         ↓
//!     BackendMessage::Finished 经通道回到主循环
//!         ↓
//!     Update 层关闭状态弹窗，成功则刷新全部面板，失败则打开错误弹窗
//! ```
//!

mod config_service;
mod job;
mod worker;

pub use config_service::{AppConfig, ConfigService, JsonConfigService};
pub use job::{Job, Operation};
pub use worker::{execute, Worker};
