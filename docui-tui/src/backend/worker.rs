//! 后台任务执行
//!
//! 主循环是同步的：任务交给 tokio 运行时执行，结果通过无界通道发回，
//! 主循环每帧用 `try_recv` 取出并交给 Update 层。

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use docui_core::{ContainerBackend, CoreError, CoreResult};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, BackendMessage};

use super::{Job, Operation};

/// 后台任务派发器
pub struct Worker {
    backend: Arc<dyn ContainerBackend>,
    sender: UnboundedSender<AppMessage>,
    handle: Handle,
    timeout: Duration,
}

impl Worker {
    pub fn new(
        backend: Arc<dyn ContainerBackend>,
        sender: UnboundedSender<AppMessage>,
        handle: Handle,
        timeout: Duration,
    ) -> Self {
        Self {
            backend,
            sender,
            handle,
            timeout,
        }
    }

    /// 在运行时上执行任务，不等待结果
    pub fn dispatch(&self, job: Job) {
        let backend = Arc::clone(&self.backend);
        let sender = self.sender.clone();
        let timeout = self.timeout;

        self.handle.spawn(async move {
            let message = execute(backend.as_ref(), job, timeout).await;
            if sender.send(message).is_err() {
                log::debug!("main loop is gone, dropping backend result");
            }
        });
    }
}

/// 执行任务并把结果包装成消息
pub async fn execute(backend: &dyn ContainerBackend, job: Job, timeout: Duration) -> AppMessage {
    let message = match job {
        Job::List(kind) => BackendMessage::Listed {
            kind,
            result: with_timeout(timeout, backend.list(kind)).await,
        },
        Job::Inspect { kind, id, origin } => {
            let result = with_timeout(timeout, backend.inspect(kind, &id)).await;
            BackendMessage::Inspected {
                kind,
                id,
                origin,
                result,
            }
        }
        Job::Run { operation, origin } => {
            log::info!("{operation}");
            let result = with_timeout(timeout, run(backend, &operation)).await;
            BackendMessage::Finished {
                operation,
                origin,
                result,
            }
        }
    };
    AppMessage::Backend(message)
}

async fn run(backend: &dyn ContainerBackend, operation: &Operation) -> CoreResult<()> {
    match operation {
        Operation::Remove { kind, id, .. } => backend.remove(*kind, id).await,
        Operation::Start { id, .. } => backend.start_container(id).await,
        Operation::Stop { id, .. } => backend.stop_container(id).await,
    }
}

/// 超时后返回 `CoreError::Timeout`，避免状态弹窗永远不关闭
async fn with_timeout<T>(
    limit: Duration,
    future: impl Future<Output = CoreResult<T>>,
) -> CoreResult<T> {
    tokio::time::timeout(limit, future)
        .await
        .unwrap_or_else(|_| Err(CoreError::Timeout(limit.as_secs())))
}
