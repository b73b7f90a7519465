//! 测试工具
//!
//! 提供一个挂在内存视图表面上的 App，以及同步执行后台任务的辅助函数。

use std::time::Duration;

use docui_core::InMemoryBackend;

use crate::backend::execute;
use crate::model::{App, PanelKind, Surface, ViewSurface};
use crate::update;

/// 已初始化、但列表还没有数据的 App（首次加载任务已丢弃）
pub fn test_app() -> App<ViewSurface> {
    let mut app = App::new(ViewSurface::new(100, 30));
    update::init(&mut app).unwrap();
    app.take_jobs();
    app
}

/// 已加载示例数据的 App
pub fn loaded_app() -> (App<ViewSurface>, InMemoryBackend) {
    let backend = InMemoryBackend::with_sample_data();
    let mut app = App::new(ViewSurface::new(100, 30));
    update::init(&mut app).unwrap();
    run_jobs(&mut app, &backend);
    (app, backend)
}

/// 同步执行所有排队的任务，直到队列为空
pub fn run_jobs(app: &mut App<ViewSurface>, backend: &InMemoryBackend) {
    loop {
        let jobs = app.take_jobs();
        if jobs.is_empty() {
            break;
        }
        for job in jobs {
            let message = tokio_test::block_on(execute(backend, job, Duration::from_secs(5)));
            update::update(app, message).unwrap();
        }
    }
}

/// 把某个列表面板的光标放到第 `row` 行（绝对行号）
pub fn select_row(app: &mut App<ViewSurface>, kind: PanelKind, row: usize) {
    let view = app.surface.view_mut(kind.name()).unwrap();
    view.set_origin(0, 0);
    view.set_cursor(0, row).unwrap();
}

/// 导航栏的文字
pub fn navigate_line(app: &App<ViewSurface>) -> String {
    app.surface
        .view(PanelKind::Navigate.name())
        .and_then(|view| view.lines().first().cloned())
        .unwrap_or_default()
}

/// `line 0` .. `line n-1`
pub fn lines(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("line {i}")).collect()
}
