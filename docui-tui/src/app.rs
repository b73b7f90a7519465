//!
//! app.rs
//! 应用主循环
//!
//!
//! 启动时注册五个主面板（三个资源列表、详情、导航栏），
//! 聚焦镜像列表，并为三个列表各排队一个加载任务。
//!
//! 主循环约每 50 ms 执行一次（取决于有无事件）：
//! loop {
//!
//! ```text
//!     dispatch(app.take_jobs())                       // 把排队的任务交给后台 worker
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 50ms
//!         let msg = handle_event(event, &app);            // 按键 → 消息
//!         update::update(&mut app, msg)?                  // 更新状态
//!     }
//!     while let Ok(msg) = receiver.try_recv() {       // 取出后台结果
//!         update::update(&mut app, msg)?
//!     }
//! ```
//! }
//!
//! update 返回的错误表示生命周期契约被破坏，直接结束主循环。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Worker;
use crate::event;
use crate::message::AppMessage;
use crate::model::{App, Surface};
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const TICK: Duration = Duration::from_millis(50);

/// 运行应用主循环
pub fn run<S: Surface>(
    terminal: &mut Term,
    app: &mut App<S>,
    worker: &Worker,
    receiver: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    update::init(app)?;

    loop {
        // 1. 派发后台任务
        for job in app.take_jobs() {
            worker.dispatch(job);
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件，处理按键
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg)?;
        }

        // 5. 处理后台结果
        while let Ok(msg) = receiver.try_recv() {
            update::update(app, msg)?;
        }
    }

    log::info!("main loop finished");
    Ok(())
}
