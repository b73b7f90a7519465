//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志文件与过滤
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//! ```text
//!     终端：
//!         init_terminal() 启用原始模式并进入备用屏幕，同时安装 panic hook；
//!         restore_terminal() 必须在主循环结束后调用，无论成功失败：
//!
//!             let mut terminal = init_terminal()?;
//!             let result = app::run(&mut terminal, &mut app, &worker, &mut receiver);
//!             restore_terminal(&mut terminal)?;
//!             result
//!
//!
//!     日志：
//!         终端被 TUI 占用，日志只能写文件。过滤规则先读 DOCUI_LOG，
//!         没有则用配置文件里的 logLevel：
//!
//!             DOCUI_LOG=docui_tui=debug,docui_core=info docui
//! ```
//!

mod logging;
mod terminal;

pub use logging::{init_logging, log_file_path, LOG_ENV};
pub use terminal::{init_terminal, restore_terminal, Term};
