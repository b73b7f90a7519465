//!
//! main.rs
//! docui：镜像、容器、卷的终端面板
//!
//! 其执行：
//! fn `main()` {
//!
//!     JsonConfigService::load_or_init()   // 读取配置（不存在则写入默认值）
//!     init_logging()                      // 日志写文件，终端留给 TUI
//!     Runtime::new()                      // 后台任务运行在 tokio 运行时上
//!     init_terminal()                     // 原始模式 + 备用屏幕
//!     app::run()                          // 主循环
//!     restore_terminal()                  // 无论成功与否，都恢复终端
//!
//! }
//!
//! 内存后台带有一组示例数据，调用延迟由配置中的 sampleLatencyMs 决定，
//! 方便观察状态弹窗。

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use docui_core::{ContainerBackend, InMemoryBackend};

use docui_tui::app;
use docui_tui::backend::{JsonConfigService, Worker};
use docui_tui::model::{App, ViewSurface};
use docui_tui::util::{init_logging, init_terminal, restore_terminal};
use docui_tui::view::theme::set_theme;

fn main() -> Result<()> {
    // 1. 配置与日志
    let config_service = JsonConfigService::new();
    let config = config_service.load_or_init()?;
    let log_path = init_logging(&config.log_level)?;
    log::info!(
        "docui {} starting, config {}, log {}",
        env!("CARGO_PKG_VERSION"),
        config_service.path().display(),
        log_path.display()
    );
    set_theme(config.theme);

    // 2. 后台
    let runtime = tokio::runtime::Runtime::new()?;
    let backend: Arc<dyn ContainerBackend> = Arc::new(
        InMemoryBackend::with_sample_data()
            .with_latency(Duration::from_millis(config.sample_latency_ms)),
    );
    let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
    let worker = Worker::new(
        backend,
        sender,
        runtime.handle().clone(),
        Duration::from_secs(config.backend_timeout_secs),
    );

    // 3. 初始化终端
    let mut terminal = init_terminal()?;
    let size = terminal.size()?;

    // 4. 运行主循环
    let mut app = App::new(ViewSurface::new(size.width, size.height));
    let result = app::run(&mut terminal, &mut app, &worker, &mut receiver);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref err) = result {
        log::error!("docui stopped: {err:#}");
    }
    result
}
